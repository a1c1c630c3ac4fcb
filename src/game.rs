//! Turn state machine for a two-player session.
//!
//! ```text
//! InProgress --play--> InProgress   (turn passes to the other player)
//! InProgress --play--> Won(disk)    (mover completed a line)
//! InProgress --play--> Draw         (board full, no line)
//! Won / Draw --replay(true)--> InProgress
//! Won / Draw --replay(false)--> Terminated
//! ```

use log::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::player::{Disk, Player};
use crate::win::winning_line;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    /// Won by the player holding this disk.
    Won(Disk),
    Draw,
    Terminated,
}

impl GameState {
    /// True for `Won` and `Draw`, the states that wait for a replay decision.
    pub fn is_finished(self) -> bool {
        matches!(self, GameState::Won(_) | GameState::Draw)
    }
}

pub struct GameEngine {
    players: [Player; 2],
    current: Disk,
    board: Board,
    state: GameState,
    rng: fastrand::Rng,
}

impl GameEngine {
    /// Start a session with a randomly chosen first player.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(config, fastrand::Rng::new())
    }

    /// Start a session drawing the first player from `rng`.
    pub fn with_rng(config: GameConfig, mut rng: fastrand::Rng) -> Result<Self, GameError> {
        let first = random_disk(&mut rng);
        Self::build(config, first, rng)
    }

    /// Start a session where `first` moves first.
    pub fn with_first(config: GameConfig, first: Disk) -> Result<Self, GameError> {
        Self::build(config, first, fastrand::Rng::new())
    }

    fn build(config: GameConfig, first: Disk, rng: fastrand::Rng) -> Result<Self, GameError> {
        config.validate()?;
        let board = Board::new(config.width, config.height)?;
        let players = [
            Player::new(config.player1, Disk::Red),
            Player::new(config.player2, Disk::Blue),
        ];
        let engine = Self {
            players,
            current: first,
            board,
            state: GameState::InProgress,
            rng,
        };
        debug!(
            "New {}x{} game, {} starts",
            engine.board.width(),
            engine.board.height(),
            engine.current_player().name()
        );
        Ok(engine)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// The player holding `disk`.
    pub fn player(&self, disk: Disk) -> &Player {
        match disk {
            Disk::Red => &self.players[0],
            Disk::Blue => &self.players[1],
        }
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.state {
            GameState::Won(disk) => Some(self.player(disk)),
            _ => None,
        }
    }

    /// Drop the current player's disk into `column`.
    ///
    /// The turn passes to the other player unless the move ends the game.
    /// On error nothing changes, including whose turn it is.
    pub fn play(&mut self, column: usize) -> Result<GameState, GameError> {
        if self.state != GameState::InProgress {
            return Err(GameError::GameOver);
        }

        let disk = self.current;
        let row = self.board.place(disk, column)?;
        debug!(
            "{} placed at column {column}, row {row}",
            self.current_player().name()
        );

        if let Some(orientation) = winning_line(self.board.cells(), disk) {
            info!(
                "{} wins with a {orientation:?} line",
                self.current_player().name()
            );
            self.state = GameState::Won(disk);
        } else if self.board.is_full() {
            info!("Board full, game drawn");
            self.state = GameState::Draw;
        } else {
            self.current = disk.other();
        }
        Ok(self.state)
    }

    /// Answer the replay question after a finished game.
    ///
    /// `true` clears the board and draws a new first player; `false` ends the
    /// session.
    pub fn replay(&mut self, again: bool) -> Result<GameState, GameError> {
        match self.state {
            GameState::InProgress => return Err(GameError::NotFinished),
            GameState::Terminated => return Err(GameError::GameOver),
            GameState::Won(_) | GameState::Draw => {}
        }

        if again {
            self.board.reset();
            self.current = random_disk(&mut self.rng);
            self.state = GameState::InProgress;
            info!("New round, {} starts", self.current_player().name());
        } else {
            self.state = GameState::Terminated;
            info!("Session terminated");
        }
        Ok(self.state)
    }
}

fn random_disk(rng: &mut fastrand::Rng) -> Disk {
    if rng.bool() { Disk::Red } else { Disk::Blue }
}
