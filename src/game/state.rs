use super::config::GameConfig;
use super::direction::Direction;
use super::food::Food;
use super::snake::Snake;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one cell in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Which state-machine state the session is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// What the snake crashed into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Head left the playable interior
    Wall,
    /// Head landed on a trailing body cell
    SelfCollision,
}

/// Complete game state for one session
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub phase: Phase,
    pub grid_width: i32,
    pub grid_height: i32,
    pub wall_margin: i32,
}

impl GameState {
    pub fn new(snake: Snake, food: Food, config: &GameConfig) -> Self {
        Self {
            snake,
            food,
            score: 0,
            phase: Phase::Playing,
            grid_width: config.grid_width,
            grid_height: config.grid_height,
            wall_margin: config.wall_margin,
        }
    }

    /// Check if a position lies inside the playable interior (walls excluded)
    pub fn is_in_playable_area(&self, pos: Position) -> bool {
        pos.x >= self.wall_margin
            && pos.x < self.grid_width - self.wall_margin
            && pos.y >= self.wall_margin
            && pos.y < self.grid_height - self.wall_margin
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.cells().contains(&pos)
    }
}
