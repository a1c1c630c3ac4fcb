//! Default board geometry and game parameters.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default number of columns.
pub const DEFAULT_WIDTH: usize = 7;

/// Default number of cells in each column.
pub const DEFAULT_HEIGHT: usize = 6;

/// Number of equal, contiguous disks needed to win. Not configurable.
pub const WIN_LENGTH: usize = 4;

// =============================================================================
// Players
// =============================================================================

pub const DEFAULT_PLAYER1: &str = "Player1";
pub const DEFAULT_PLAYER2: &str = "Player2";

// =============================================================================
// Rendering
// =============================================================================

/// Glyph drawn for an empty cell.
pub const EMPTY_GLYPH: &str = "◯";

/// Glyph drawn for a red disk (ANSI red foreground).
pub const RED_GLYPH: &str = "\x1b[0;31;49m●\x1b[0m";

/// Glyph drawn for a blue disk (ANSI blue foreground).
pub const BLUE_GLYPH: &str = "\x1b[0;34;49m●\x1b[0m";
