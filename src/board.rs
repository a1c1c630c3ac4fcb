use std::fmt;

use crate::constants::EMPTY_GLYPH;
use crate::error::GameError;
use crate::player::Disk;

/// A grid of columns, each holding `height` cells.
///
/// Cells are stored column-major. Within a column, row 0 is the top cell and
/// row `height - 1` the bottom one, so a dropped disk lands on the highest
/// empty index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Vec<Option<Disk>>>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![vec![None; height]; width],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The full cell matrix, indexed `[column][row]`.
    pub fn cells(&self) -> &[Vec<Option<Disk>>] {
        &self.cells
    }

    pub fn get(&self, column: usize, row: usize) -> Option<Disk> {
        self.cells.get(column)?.get(row).copied().flatten()
    }

    /// Drop `disk` into `column` and return the row it landed on.
    ///
    /// On error the board is left unchanged.
    pub fn place(&mut self, disk: Disk, column: usize) -> Result<usize, GameError> {
        let width = self.width;
        let cells = self
            .cells
            .get_mut(column)
            .ok_or(GameError::OutOfRange { column, width })?;
        let row = cells
            .iter()
            .rposition(Option::is_none)
            .ok_or(GameError::ColumnFull { column })?;
        cells[row] = Some(disk);
        Ok(row)
    }

    /// True iff no cell in `column` is empty. Out-of-range columns are never
    /// full, so speculative indices can be probed safely.
    pub fn is_column_full(&self, column: usize) -> bool {
        self.cells
            .get(column)
            .is_some_and(|cells| cells.iter().all(Option::is_some))
    }

    /// True iff every column is full.
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|c| self.is_column_full(c))
    }

    /// Number of occupied cells in `column` (0 when out of range).
    pub fn column_count(&self, column: usize) -> usize {
        self.cells
            .get(column)
            .map_or(0, |cells| cells.iter().filter(|c| c.is_some()).count())
    }

    /// Indices of all columns that can still take a disk.
    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&c| !self.is_column_full(c))
            .collect()
    }

    /// Empty every cell. Dimensions and storage are kept.
    pub fn reset(&mut self) {
        for column in &mut self.cells {
            column.fill(None);
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;

        // Top border
        for _ in 0..self.width {
            write!(f, "║───")?;
        }
        writeln!(f, "║")?;

        // Rows, top to bottom
        let separator = vec!["═══"; self.width].join("╬");
        for row in 0..self.height {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "╠{separator}╣")?;
            }
            let glyphs: Vec<&str> = (0..self.width)
                .map(|c| self.get(c, row).map_or(EMPTY_GLYPH, Disk::glyph))
                .collect();
            write!(f, "║ {} ║", glyphs.join(" ║ "))?;
        }
        writeln!(f)?;

        // Bottom border and column legend
        let bottom = vec!["═══"; self.width].join("╩");
        writeln!(f, "╚{bottom}╝")?;
        let legend: Vec<String> = (0..self.width).map(|c| c.to_string()).collect();
        writeln!(f, "  {}", legend.join("   "))
    }
}
