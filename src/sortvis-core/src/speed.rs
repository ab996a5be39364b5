//! Animation speed presets and delay validation.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SortError};

/// Named animation speeds.
///
/// Names parse loosely; an unknown name means [`Speed::Fast`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Speed {
    /// Half a second per step
    Slow,
    /// 200 ms per step
    #[default]
    Medium,
    /// 10 ms per step
    Fast,
    /// No pause at all
    Realtime,
}

impl Speed {
    /// Every speed, in menu order.
    pub const ALL: [Speed; 4] = [Speed::Slow, Speed::Medium, Speed::Fast, Speed::Realtime];

    /// Pause applied after each frame.
    pub fn delay(self) -> Duration {
        match self {
            Speed::Slow => Duration::from_millis(500),
            Speed::Medium => Duration::from_millis(200),
            Speed::Fast => Duration::from_millis(10),
            Speed::Realtime => Duration::ZERO,
        }
    }

    /// Menu label.
    pub fn name(self) -> &'static str {
        match self {
            Speed::Slow => "slow",
            Speed::Medium => "medium",
            Speed::Fast => "fast",
            Speed::Realtime => "realtime",
        }
    }

    /// Next speed in menu order, wrapping around.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Parse from string (case-insensitive). Anything unrecognised is
    /// [`Speed::Fast`].
    pub fn from_str_loose(s: &str) -> Speed {
        match s.trim().to_lowercase().as_str() {
            "slow" => Speed::Slow,
            "medium" => Speed::Medium,
            "realtime" | "real-time" | "instant" => Speed::Realtime,
            _ => Speed::Fast,
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Speed {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_str_loose(s))
    }
}

impl From<String> for Speed {
    fn from(s: String) -> Self {
        Self::from_str_loose(&s)
    }
}

impl From<Speed> for &'static str {
    fn from(speed: Speed) -> Self {
        speed.name()
    }
}

/// Converts a delay in seconds into a [`Duration`].
///
/// Negative, NaN and infinite values are rejected.
pub fn delay_from_secs(secs: f64) -> Result<Duration> {
    if !secs.is_finite() || secs < 0.0 {
        return Err(SortError::InvalidDelay(secs));
    }
    Duration::try_from_secs_f64(secs).map_err(|_| SortError::InvalidDelay(secs))
}
