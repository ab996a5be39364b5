//! The interactive session: generate, pick an engine and speed, sort.

use std::time::Duration;

use crossterm::event::Event;
use sortvis_core::{
    Algorithm, CancellationToken, ColorTag, DataGenerator, DataSpec, RunReport, Speed, StepContext,
};
use tracing::{debug, info};

use crate::backend::TerminalBackend;
use crate::canvas;
use crate::error::Result;
use crate::input::{Command, command_for_event};
use crate::palette::Palette;
use crate::renderer::Renderer;
use crate::sink::TerminalSink;

/// How long the idle loop waits for input before polling again.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Starting state of a session.
#[derive(Clone, Debug, Default)]
pub struct SessionSettings {
    pub algorithm: Algorithm,
    pub speed: Speed,
    /// Fixed per-frame delay. Overrides `speed` until the speed is changed
    /// from the keyboard.
    pub delay: Option<Duration>,
    pub data: DataSpec,
    /// Seed for reproducible data.
    pub seed: Option<u64>,
}

enum Flow {
    Continue,
    Exit,
}

/// Owns the terminal for the lifetime of the interactive front end.
pub struct Session<B: TerminalBackend> {
    renderer: Renderer<B>,
    palette: Palette,
    algorithm: Algorithm,
    speed: Speed,
    delay: Option<Duration>,
    generator: DataGenerator,
    data: Vec<u32>,
    fresh: bool,
    last_run: Option<(Algorithm, RunReport)>,
}

impl<B: TerminalBackend> Session<B> {
    /// Creates a session and generates its first data set.
    pub fn new(backend: B, palette: Palette, settings: SessionSettings) -> Result<Self> {
        let mut generator = DataGenerator::new(settings.data, settings.seed);
        let data = generator.next_sequence();
        Ok(Self {
            renderer: Renderer::new(backend)?,
            palette,
            algorithm: settings.algorithm,
            speed: settings.speed,
            delay: settings.delay,
            generator,
            data,
            fresh: true,
            last_run: None,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// The current sequence.
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Engine and report of the most recent sort.
    pub fn last_run(&self) -> Option<(Algorithm, RunReport)> {
        self.last_run
    }

    pub fn renderer(&self) -> &Renderer<B> {
        &self.renderer
    }

    /// The delay a sort would use right now.
    pub fn step_delay(&self) -> Duration {
        self.delay.unwrap_or_else(|| self.speed.delay())
    }

    /// Takes over the terminal and handles keys until the user quits.
    ///
    /// The terminal is restored before returning, also on error.
    pub fn run(&mut self) -> Result<()> {
        self.renderer.setup()?;
        info!(
            algorithm = %self.algorithm,
            speed = %self.speed,
            len = self.data.len(),
            "session started"
        );

        let result = self.event_loop();
        let restored = self.renderer.teardown();

        info!(ok = result.is_ok(), "session ended");
        result.and(restored)
    }

    fn event_loop(&mut self) -> Result<()> {
        self.draw_idle()?;
        loop {
            let Some(event) = self.renderer.backend_mut().poll_event(IDLE_POLL)? else {
                continue;
            };
            if let Event::Resize(width, height) = event {
                self.renderer.resize_to(width, height);
                self.draw_idle()?;
                continue;
            }
            let Some(command) = command_for_event(&event) else {
                continue;
            };
            if let Flow::Exit = self.apply(command)? {
                return Ok(());
            }
        }
    }

    fn apply(&mut self, command: Command) -> Result<Flow> {
        debug!(?command, "command");
        match command {
            Command::Generate => {
                self.data = self.generator.next_sequence();
                self.fresh = true;
            }
            Command::Sort => {
                if self.sort()?.is_cancelled() {
                    return Ok(Flow::Exit);
                }
            }
            Command::NextAlgorithm => self.algorithm = self.algorithm.next(),
            Command::PreviousAlgorithm => self.algorithm = self.algorithm.previous(),
            Command::NextSpeed => {
                self.speed = self.speed.next();
                self.delay = None;
            }
            Command::Quit => return Ok(Flow::Exit),
        }
        self.draw_idle()?;
        Ok(Flow::Continue)
    }

    fn sort(&mut self) -> Result<RunReport> {
        let delay = self.step_delay();
        let token = CancellationToken::new();
        let status = [
            self.settings_line(),
            format!(" sorting with {}... q to stop", self.algorithm.display_name()),
        ];

        let report = {
            let mut sink =
                TerminalSink::new(&mut self.renderer, &self.palette, token.clone(), status);
            let mut ctx = StepContext::with_cancellation(&mut sink, delay, token);
            self.algorithm.run(&mut self.data, &mut ctx)?
        };

        self.fresh = false;
        info!(
            algorithm = %self.algorithm,
            outcome = ?report.outcome,
            stats = %report.stats,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "sort finished"
        );
        self.last_run = Some((self.algorithm, report));
        Ok(report)
    }

    fn settings_line(&self) -> String {
        let pace = match self.delay {
            Some(delay) => format!("delay {} ms", delay.as_millis()),
            None => format!("speed {}", self.speed),
        };
        format!(
            " {} | {} | n = {} | max = {}",
            self.algorithm.display_name(),
            pace,
            self.data.len(),
            self.generator.spec().max_value
        )
    }

    fn hint_line(&self) -> String {
        match &self.last_run {
            Some((algorithm, report)) => format!(
                " {}: {} in {:.2?}",
                algorithm.display_name(),
                report.stats,
                report.elapsed
            ),
            None => " g generate  s sort  a/A algorithm  v speed  q quit".to_string(),
        }
    }

    fn draw_idle(&mut self) -> Result<()> {
        let color = if self.fresh {
            self.palette.fresh()
        } else {
            self.palette.color(ColorTag::Normal)
        };
        let status = [self.settings_line(), self.hint_line()];
        canvas::compose(
            self.renderer.buffer(),
            [status[0].as_str(), status[1].as_str()],
            self.palette.text,
            &self.data,
            |_| color,
        );
        self.renderer.render()
    }
}
