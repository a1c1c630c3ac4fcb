//! A two-player Connect Four game for the text console.
//!
//! ## Modules
//!
//! - [`constants`] - Default board size, win length and glyphs
//! - [`error`] - Placement and session errors
//! - [`player`] - Disks and players
//! - [`board`] - The grid, gravity placement and text rendering
//! - [`win`] - Four-in-a-row detection over any grid shape
//! - [`config`] - Session settings
//! - [`game`] - Turn state machine
//! - [`console`] - Line-oriented input/output and the session loop
//!
//! ## Example
//!
//! ```
//! use connect_four::config::GameConfig;
//! use connect_four::game::{GameEngine, GameState};
//! use connect_four::player::Disk;
//!
//! let mut game = GameEngine::with_first(GameConfig::default(), Disk::Red).unwrap();
//! for _ in 0..3 {
//!     game.play(0).unwrap(); // Red
//!     game.play(1).unwrap(); // Blue
//! }
//! assert_eq!(game.play(0).unwrap(), GameState::Won(Disk::Red));
//! println!("{}", game.board());
//! ```

pub mod board;
pub mod config;
pub mod console;
pub mod constants;
pub mod error;
pub mod game;
pub mod player;
pub mod win;
