use super::direction::Direction;
use super::state::Position;

/// How a body segment's corners are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentShape {
    Square,
    Rounded,
}

/// Corner style for an interior body segment.
///
/// A segment is a turn when the step into it and the step out of it lie on
/// different axes; turns get rounded corners, straight runs stay square.
/// Purely cosmetic, kept free of draw calls so it can be tested directly.
pub fn segment_shape(prev: Position, current: Position, next: Position) -> SegmentShape {
    let step_in_horizontal = current.y == prev.y;
    let step_out_horizontal = next.y == current.y;

    if step_in_horizontal != step_out_horizontal {
        SegmentShape::Rounded
    } else {
        SegmentShape::Square
    }
}

/// The snake: ordered body cells (head first), heading, and growth flag
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, head at index 0
    body: Vec<Position>,
    /// Heading that will be applied on the next advance
    direction: Direction,
    /// Heading actually applied by the most recent advance
    last_direction: Direction,
    /// One-shot flag consumed by the next advance
    growing: bool,
}

impl Snake {
    /// Create a snake with its body laid out behind the head, opposite the heading
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        let (dx, dy) = direction.delta();
        for i in 1..length.max(1) {
            let prev = body[i - 1];
            body.push(prev.moved_by(-dx, -dy));
        }

        Self {
            body,
            direction,
            last_direction: direction,
            growing: false,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// All occupied cells, head first
    pub fn cells(&self) -> &[Position] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Heading applied by the last completed advance
    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

    /// Request a new heading.
    ///
    /// Rejected silently if it would reverse the heading applied by the last
    /// completed advance. Checking against `last_direction` rather than
    /// `direction` means several key presses within one tick cannot be
    /// chained into a 180-degree reversal.
    pub fn steer(&mut self, requested: Direction) {
        if !self.last_direction.is_opposite(requested) {
            self.direction = requested;
        }
    }

    /// Flag the snake to keep its tail on the next advance
    pub fn grow(&mut self) {
        self.growing = true;
    }

    pub fn growth_pending(&self) -> bool {
        self.growing
    }

    /// Move one cell in the current heading.
    ///
    /// Prepends the new head; drops the tail unless growth is pending, in
    /// which case the flag is consumed and net length goes up by one.
    pub fn advance(&mut self) {
        let new_head = self.head().moved_in_direction(self.direction);
        self.body.insert(0, new_head);

        if self.growing {
            self.growing = false;
        } else {
            self.body.pop();
        }

        self.last_direction = self.direction;
    }

    /// True iff the head sits on the given food cell
    pub fn eats(&self, food_cell: Position) -> bool {
        self.head() == food_cell
    }

    /// True iff the head sits on any trailing body cell
    pub fn self_collision(&self) -> bool {
        self.body[1..].contains(&self.head())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.cells()[1], Position::new(4, 5));
        assert_eq!(snake.cells()[2], Position::new(3, 5));
        assert!(!snake.growth_pending());
    }

    #[test]
    fn test_advance_keeps_length() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        for _ in 0..4 {
            snake.advance();
            assert_eq!(snake.len(), 3);
        }
        assert_eq!(snake.head(), Position::new(9, 5));
    }

    #[test]
    fn test_growth_flag_is_one_shot() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        snake.grow();
        assert!(snake.growth_pending());

        snake.advance();
        assert_eq!(snake.len(), 4);
        assert!(!snake.growth_pending());

        // Next advance is back to constant length
        snake.advance();
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_reversal_rejected() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        snake.steer(Direction::Left);
        assert_eq!(snake.direction(), Direction::Right);

        snake.steer(Direction::Up);
        assert_eq!(snake.direction(), Direction::Up);

        snake.steer(Direction::Right);
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn test_reversal_cannot_be_chained_within_one_tick() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        // Up then Left both arrive before the next advance; Left is legal
        // relative to Up, but the last *applied* heading is still Right.
        snake.steer(Direction::Up);
        snake.steer(Direction::Left);
        assert_eq!(snake.direction(), Direction::Up);

        // After the advance the applied heading is Up, so Left is fine
        snake.advance();
        snake.steer(Direction::Left);
        assert_eq!(snake.direction(), Direction::Left);
    }

    #[test]
    fn test_eats() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert!(snake.eats(Position::new(5, 5)));
        assert!(!snake.eats(Position::new(6, 5)));
    }

    #[test]
    fn test_self_collision() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 5);
        assert!(!snake.self_collision());

        // Tight clockwise loop: down, left, up lands the head on the body
        snake.steer(Direction::Down);
        snake.advance();
        snake.steer(Direction::Left);
        snake.advance();
        snake.steer(Direction::Up);
        snake.advance();
        assert!(snake.self_collision());
    }

    #[test]
    fn test_segment_shape_straight_runs_are_square() {
        // Horizontal run
        assert_eq!(
            segment_shape(
                Position::new(4, 5),
                Position::new(5, 5),
                Position::new(6, 5)
            ),
            SegmentShape::Square
        );
        // Vertical run
        assert_eq!(
            segment_shape(
                Position::new(5, 4),
                Position::new(5, 5),
                Position::new(5, 6)
            ),
            SegmentShape::Square
        );
    }

    #[test]
    fn test_segment_shape_turns_are_rounded() {
        // Came in from the left, leaves downward
        assert_eq!(
            segment_shape(
                Position::new(4, 5),
                Position::new(5, 5),
                Position::new(5, 6)
            ),
            SegmentShape::Rounded
        );
        // Came in from above, leaves to the right
        assert_eq!(
            segment_shape(
                Position::new(5, 4),
                Position::new(5, 5),
                Position::new(6, 5)
            ),
            SegmentShape::Rounded
        );
    }
}
