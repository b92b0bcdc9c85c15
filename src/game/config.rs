use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: i32,
    /// Height of the game grid in cells
    pub grid_height: i32,
    /// Cells between the screen edge and the playable interior
    pub wall_margin: i32,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Milliseconds per simulation tick
    pub tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 33,
            grid_height: 26,
            wall_margin: 2,
            initial_snake_length: 3,
            tick_ms: 125,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Inclusive playable range on the x axis
    pub fn playable_x(&self) -> (i32, i32) {
        (self.wall_margin, self.grid_width - 1 - self.wall_margin)
    }

    /// Inclusive playable range on the y axis
    pub fn playable_y(&self) -> (i32, i32) {
        (self.wall_margin, self.grid_height - 1 - self.wall_margin)
    }

    /// Check that the interior can hold the starting snake with room to move
    pub fn validate(&self) -> Result<(), String> {
        let interior_w = self.grid_width - 2 * self.wall_margin;
        let interior_h = self.grid_height - 2 * self.wall_margin;
        let needed = self.initial_snake_length as i32 + 2;

        if interior_w < needed || interior_h < needed {
            return Err(format!(
                "grid {}x{} with margin {} leaves no room to play (need a {}x{} interior)",
                self.grid_width, self.grid_height, self.wall_margin, needed, needed
            ));
        }
        if self.tick_ms == 0 {
            return Err("tick interval must be at least 1ms".to_string());
        }
        Ok(())
    }

    /// Small grid used by tests
    #[cfg(test)]
    pub fn small() -> Self {
        Self::new(14, 14)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 33);
        assert_eq!(config.grid_height, 26);
        assert_eq!(config.wall_margin, 2);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.tick_ms, 125);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_playable_bounds() {
        let config = GameConfig::default();
        assert_eq!(config.playable_x(), (2, 30));
        assert_eq!(config.playable_y(), (2, 23));
    }

    #[test]
    fn test_too_small_grid_rejected() {
        let config = GameConfig::new(6, 6);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_tick_rejected() {
        let config = GameConfig {
            tick_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
