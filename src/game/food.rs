use rand::Rng;

use super::config::GameConfig;
use super::state::Position;

/// The food pellet: a single cell inside the playable interior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    cell: Position,
}

impl Food {
    /// Place food at a uniformly random cell inside the walls
    pub fn spawn<R: Rng>(rng: &mut R, config: &GameConfig) -> Self {
        Self {
            cell: random_interior_cell(rng, config),
        }
    }

    /// Place food at an exact cell
    pub fn at(cell: Position) -> Self {
        Self { cell }
    }

    pub fn cell(&self) -> Position {
        self.cell
    }

    /// Relocate to a random interior cell not covered by `occupied`.
    ///
    /// Rejection sampling with no iteration cap: if the snake ever filled the
    /// whole interior this would spin forever. The interior is large relative
    /// to any reachable snake length and the game defines no win condition,
    /// so the cap is deliberately left out.
    pub fn respawn<R: Rng>(&mut self, rng: &mut R, config: &GameConfig, occupied: &[Position]) {
        loop {
            let cell = random_interior_cell(rng, config);
            if !occupied.contains(&cell) {
                self.cell = cell;
                break;
            }
        }
    }
}

fn random_interior_cell<R: Rng>(rng: &mut R, config: &GameConfig) -> Position {
    let (x_min, x_max) = config.playable_x();
    let (y_min, y_max) = config.playable_y();
    Position::new(rng.gen_range(x_min..=x_max), rng.gen_range(y_min..=y_max))
}
