use std::ops::{Index, IndexMut};

use tracing::debug;

use crate::color::Color;
use crate::constants::CANVAS_SIZE;

/// One frame of the lighting display: a fixed-size, index-addressable
/// sequence of colors, one slot per physical light-element. Built by the
/// caller and handed to external submission code; this type does no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    pub data: [Color; CANVAS_SIZE],
}

impl Canvas {
    pub const SIZE: usize = CANVAS_SIZE;

    /// Creates a canvas with every slot fully transparent.
    pub const fn new() -> Self {
        Self {
            data: [Color::TRANSPARENT; CANVAS_SIZE],
        }
    }

    /// Paints every slot with the given color. `Color` is `Copy`, so each
    /// slot holds its own copy and slots stay independent afterwards.
    pub fn fill_all(&mut self, color: Color) {
        self.data.fill(color);
        debug!("Filled all {} canvas slots with {:?}", Self::SIZE, color);
    }

    pub const fn size(&self) -> usize {
        Self::SIZE
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [Color] {
        &mut self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.data.iter()
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Canvas {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.data[index]
    }
}

impl IndexMut<usize> for Canvas {
    fn index_mut(&mut self, index: usize) -> &mut Color {
        &mut self.data[index]
    }
}
