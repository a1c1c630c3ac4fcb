use crate::constants::{DEFAULT_HEIGHT, DEFAULT_PLAYER1, DEFAULT_PLAYER2, DEFAULT_WIDTH};
use crate::error::GameError;

/// Settings fixed at the start of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub player1: String,
    pub player2: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            player1: DEFAULT_PLAYER1.to_string(),
            player2: DEFAULT_PLAYER2.to_string(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.width == 0 || self.height == 0 {
            return Err(GameError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.width, 7);
        assert_eq!(config.height, 6);
        assert_eq!(config.player1, "Player1");
        assert_eq!(config.player2, "Player2");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_width_rejected() {
        let config = GameConfig {
            width: 0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(GameError::InvalidDimensions {
                width: 0,
                height: 6
            })
        );
    }
}
