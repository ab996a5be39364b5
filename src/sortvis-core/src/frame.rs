//! Frames: one observable moment of a sort.

use crate::error::{Result, SortError};
use crate::tag::{ColorTag, tag_string};

/// A borrowed view of the sequence plus one tag per index.
///
/// Frames are handed to a sink and dropped; nothing in the engines keeps
/// them around.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame<'a> {
    values: &'a [u32],
    tags: &'a [ColorTag],
}

impl<'a> Frame<'a> {
    /// Creates a frame, rejecting a tag slice whose length differs from the
    /// value slice.
    pub fn new(values: &'a [u32], tags: &'a [ColorTag]) -> Result<Self> {
        if values.len() != tags.len() {
            return Err(SortError::FrameLengthMismatch {
                values: values.len(),
                tags: tags.len(),
            });
        }
        Ok(Self { values, tags })
    }

    /// The sequence as of this frame.
    #[inline]
    pub fn values(&self) -> &'a [u32] {
        self.values
    }

    /// The role of each index.
    #[inline]
    pub fn tags(&self) -> &'a [ColorTag] {
        self.tags
    }

    /// Number of bars in the frame.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the frame has no bars.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates `(index, value, tag)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32, ColorTag)> + 'a {
        let tags = self.tags;
        self.values
            .iter()
            .zip(tags.iter())
            .enumerate()
            .map(|(i, (&v, &t))| (i, v, t))
    }

    /// Indices carrying a tag other than [`ColorTag::Normal`].
    pub fn highlighted(&self) -> Vec<(usize, ColorTag)> {
        self.iter()
            .filter(|(_, _, t)| *t != ColorTag::Normal)
            .map(|(i, _, t)| (i, t))
            .collect()
    }

    /// Copies the frame so it can outlive the engine's borrow.
    pub fn to_owned_frame(&self) -> OwnedFrame {
        OwnedFrame {
            values: self.values.to_vec(),
            tags: self.tags.to_vec(),
        }
    }
}

/// An owned copy of a [`Frame`], for sinks that keep history.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OwnedFrame {
    /// The sequence as of this frame.
    pub values: Vec<u32>,
    /// The role of each index.
    pub tags: Vec<ColorTag>,
}

impl OwnedFrame {
    /// Borrows this frame back as a [`Frame`].
    pub fn as_frame(&self) -> Frame<'_> {
        Frame {
            values: &self.values,
            tags: &self.tags,
        }
    }

    /// Compact tag string, see [`tag_string`].
    pub fn tag_string(&self) -> String {
        tag_string(&self.tags)
    }
}
