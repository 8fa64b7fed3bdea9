//! Pure collision classification for the post-move board state.

use crate::food::Food;
use crate::grid::Grid;
use crate::snake::Snake;

/// Segments behind the head that never count as a self-collision.
///
/// While the body is still unfolding from its stacked start, the first
/// followers can share the head's cell for a tick.
pub const SELF_COLLISION_EXEMPT_SEGMENTS: usize = 3;

/// Single-label classification of a board state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    None,
    AteFood,
    HitWall,
    HitSelf,
}

/// Why a round ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

impl From<DeathReason> for Collision {
    fn from(reason: DeathReason) -> Self {
        match reason {
            DeathReason::WallCollision => Self::HitWall,
            DeathReason::SelfCollision => Self::HitSelf,
        }
    }
}

/// Every collision present in one board state.
///
/// Eating and dying can coincide, so both are reported.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Collisions {
    pub ate_food: bool,
    pub death: Option<DeathReason>,
}

impl Collisions {
    /// Reduces to one label, checking food first, then wall, then self.
    #[must_use]
    pub fn primary(self) -> Collision {
        if self.ate_food {
            return Collision::AteFood;
        }

        self.death.map_or(Collision::None, Collision::from)
    }
}

/// Detects all collisions for the current head position.
#[must_use]
pub fn detect(snake: &Snake, food: &Food, grid: &Grid) -> Collisions {
    let death = if hit_wall(snake, grid) {
        Some(DeathReason::WallCollision)
    } else if hit_self(snake) {
        Some(DeathReason::SelfCollision)
    } else {
        None
    };

    Collisions {
        ate_food: ate_food(snake, food),
        death,
    }
}

#[must_use]
pub fn ate_food(snake: &Snake, food: &Food) -> bool {
    snake.head() == food.position
}

#[must_use]
pub fn hit_wall(snake: &Snake, grid: &Grid) -> bool {
    !grid.contains(snake.head())
}

/// Returns true when the head shares a cell with segment 3 or later.
#[must_use]
pub fn hit_self(snake: &Snake) -> bool {
    let head = snake.head();
    snake
        .segments()
        .skip(SELF_COLLISION_EXEMPT_SEGMENTS)
        .any(|segment| *segment == head)
}

#[cfg(test)]
mod tests {
    use crate::food::Food;
    use crate::grid::{Grid, Position};
    use crate::input::Direction;
    use crate::snake::Snake;

    use super::{Collision, DeathReason, detect, hit_self};

    fn classify(snake: &Snake, food: &Food, grid: &Grid) -> Collision {
        detect(snake, food, grid).primary()
    }

    fn grid() -> Grid {
        Grid::from_pixels(1000, 800, 40)
    }

    fn snake_at(head: Position) -> Snake {
        Snake::new(head, 1, Direction::Right)
    }

    fn far_food() -> Food {
        Food::new(Position::new(480, 400))
    }

    #[test]
    fn head_on_food_is_ate_food() {
        let snake = snake_at(Position::new(120, 120));
        let food = Food::new(Position::new(120, 120));

        assert_eq!(classify(&snake, &food, &grid()), Collision::AteFood);
    }

    #[test]
    fn food_match_requires_both_axes() {
        let snake = snake_at(Position::new(120, 160));
        let food = Food::new(Position::new(120, 120));

        assert_eq!(classify(&snake, &food, &grid()), Collision::None);
    }

    #[test]
    fn last_valid_column_is_not_a_wall() {
        let snake = snake_at(Position::new(960, 400));

        assert_eq!(classify(&snake, &far_food(), &grid()), Collision::None);
    }

    #[test]
    fn one_past_last_column_is_a_wall() {
        let snake = snake_at(Position::new(1000, 400));

        assert_eq!(classify(&snake, &far_food(), &grid()), Collision::HitWall);
    }

    #[test]
    fn every_edge_is_a_wall() {
        for head in [
            Position::new(-40, 400),
            Position::new(400, -40),
            Position::new(400, 800),
            Position::new(1000, 0),
        ] {
            assert_eq!(
                classify(&snake_at(head), &far_food(), &grid()),
                Collision::HitWall,
                "head at {head:?}"
            );
        }
    }

    #[test]
    fn overlap_with_first_three_followers_is_exempt() {
        let head = Position::new(200, 200);
        for index in 1..3 {
            let mut segments = vec![
                head,
                Position::new(160, 200),
                Position::new(120, 200),
                Position::new(80, 200),
            ];
            segments[index] = head;
            let snake = Snake::from_segments(segments, Direction::Right);

            assert!(!hit_self(&snake), "segment {index} must be exempt");
        }
    }

    #[test]
    fn overlap_with_fourth_segment_is_self_collision() {
        let head = Position::new(200, 200);
        let snake = Snake::from_segments(
            vec![
                head,
                Position::new(200, 240),
                Position::new(240, 240),
                head,
            ],
            Direction::Left,
        );

        assert_eq!(classify(&snake, &far_food(), &grid()), Collision::HitSelf);
    }

    #[test]
    fn eating_and_self_collision_are_both_reported() {
        let head = Position::new(200, 200);
        let snake = Snake::from_segments(
            vec![
                head,
                Position::new(200, 240),
                Position::new(240, 240),
                Position::new(240, 200),
                head,
            ],
            Direction::Left,
        );
        let food = Food::new(head);

        let collisions = detect(&snake, &food, &grid());

        assert!(collisions.ate_food);
        assert_eq!(collisions.death, Some(DeathReason::SelfCollision));
        assert_eq!(collisions.primary(), Collision::AteFood);
    }
}
