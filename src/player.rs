use std::fmt;

use crate::constants::{BLUE_GLYPH, RED_GLYPH};

/// A player's marker. A cell holds `Some(Disk)` or `None` when empty.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Disk {
    Red,
    Blue,
}

impl Disk {
    /// The opposing disk.
    pub fn other(self) -> Disk {
        match self {
            Disk::Red => Disk::Blue,
            Disk::Blue => Disk::Red,
        }
    }

    /// Coloured glyph used when drawing the board.
    pub fn glyph(self) -> &'static str {
        match self {
            Disk::Red => RED_GLYPH,
            Disk::Blue => BLUE_GLYPH,
        }
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    disk: Disk,
}

impl Player {
    pub fn new(name: impl Into<String>, disk: Disk) -> Self {
        Self {
            name: name.into(),
            disk,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn disk(&self) -> Disk {
        self.disk
    }
}
