use super::config::GameConfig;
use super::direction::Direction;
use super::food::Food;
use super::snake::Snake;
use super::state::{CollisionKind, GameState, Phase, Position};

/// What happened during one simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// The snake landed on the food cell
    pub ate: bool,
    /// The step ended the game; set only on the Playing -> GameOver transition
    pub crash: Option<CollisionKind>,
}

/// Drives the simulation: owns the config and the RNG used for food placement
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh session: snake at grid center heading right, food at a
    /// random unoccupied interior cell, score zero, phase Playing.
    pub fn reset(&mut self) -> GameState {
        let center = Position::new(self.config.grid_width / 2, self.config.grid_height / 2);
        let snake = Snake::new(center, Direction::Right, self.config.initial_snake_length);

        let mut food = Food::at(center);
        food.respawn(&mut self.rng, &self.config, snake.cells());

        GameState::new(snake, food, &self.config)
    }

    /// Advance the simulation one tick.
    ///
    /// Steering has already happened at input time; this moves the snake,
    /// settles food consumption, then resolves wall and self collisions on
    /// the post-move state. Once the phase is GameOver the step is a no-op,
    /// so a crash is reported exactly once.
    pub fn step(&mut self, state: &mut GameState) -> StepOutcome {
        if state.phase == Phase::GameOver {
            return StepOutcome::default();
        }

        // Arm growth before moving so the eating move itself extends the body
        let ahead = state
            .snake
            .head()
            .moved_in_direction(state.snake.direction());
        let ate = ahead == state.food.cell();
        if ate {
            state.snake.grow();
        }

        state.snake.advance();

        if ate {
            state.score += 1;
            state
                .food
                .respawn(&mut self.rng, &self.config, state.snake.cells());
        }

        let crash = self.check_collision(state);
        if crash.is_some() {
            state.phase = Phase::GameOver;
        }

        StepOutcome { ate, crash }
    }

    fn check_collision(&self, state: &GameState) -> Option<CollisionKind> {
        if !state.is_in_playable_area(state.snake.head()) {
            return Some(CollisionKind::Wall);
        }
        if state.snake.self_collision() {
            return Some(CollisionKind::SelfCollision);
        }
        None
    }
}
