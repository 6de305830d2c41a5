use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GridSize;
use crate::food::Food;
use crate::input::{Direction, GameCommand};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

/// What ended the game, shown on the game-over screen.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Complete mutable state for one game session.
///
/// Owns snake, food, score and direction outright; input handlers only ever
/// touch the pending-turn slot and the pause toggle, so a tick never races
/// a half-applied command.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub status: GameStatus,
    pub direction: Direction,
    pub death_reason: Option<DeathReason>,
    pub tick_count: u64,
    bounds: GridSize,
    pending_turn: Option<Direction>,
    rng: StdRng,
}

impl GameSession {
    /// Creates a session with an entropy-seeded RNG.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::new_with_seed(bounds, rand::random())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let snake = seed_snake(bounds);
        let food =
            Food::place(&mut rng, bounds, &snake).expect("seed snake cannot fill the grid");

        Self {
            snake,
            food,
            score: 0,
            status: GameStatus::Running,
            direction: Direction::Right,
            death_reason: None,
            tick_count: 0,
            bounds,
            pending_turn: None,
            rng,
        }
    }

    /// Returns the grid bounds for this session.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Reinitializes every piece of session state, keeping the RNG stream.
    pub fn restart(&mut self) {
        self.snake = seed_snake(self.bounds);
        self.food = Food::place(&mut self.rng, self.bounds, &self.snake)
            .expect("seed snake cannot fill the grid");
        self.score = 0;
        self.status = GameStatus::Running;
        self.direction = Direction::Right;
        self.death_reason = None;
        self.tick_count = 0;
        self.pending_turn = None;
    }

    /// Advances the simulation by one fixed tick.
    ///
    /// The candidate head is validated against the full current body,
    /// tail included, before anything is mutated: an invalid candidate
    /// flips the status to game over and leaves snake, food and score
    /// exactly as they were.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        self.tick_count += 1;
        if let Some(turn) = self.pending_turn.take() {
            self.direction = turn;
        }

        let candidate = self.snake.head().step(self.direction);

        if !candidate.is_within_bounds(self.bounds) {
            self.status = GameStatus::GameOver;
            self.death_reason = Some(DeathReason::WallCollision);
            return;
        }

        if self.snake.occupies(candidate) {
            self.status = GameStatus::GameOver;
            self.death_reason = Some(DeathReason::SelfCollision);
            return;
        }

        self.snake.advance(candidate);

        if candidate == self.food.position {
            self.score += 1;
            match Food::place(&mut self.rng, self.bounds, &self.snake) {
                Ok(food) => self.food = food,
                // Board completely covered; nothing left to play for.
                Err(_) => self.status = GameStatus::GameOver,
            }
        } else {
            self.snake.shrink_tail();
        }
    }

    /// Applies one external command between ticks.
    ///
    /// Turns land in a single pending slot with last-write-wins semantics;
    /// a turn that exactly reverses the current direction is dropped
    /// silently. Restart is only honoured once the game is over.
    pub fn apply_command(&mut self, command: GameCommand) {
        match command {
            GameCommand::Turn(direction) => {
                if self.status == GameStatus::GameOver {
                    return;
                }
                if direction == self.direction.opposite() {
                    return;
                }
                self.pending_turn = Some(direction);
            }
            GameCommand::TogglePause => {
                self.status = match self.status {
                    GameStatus::Running => GameStatus::Paused,
                    GameStatus::Paused => GameStatus::Running,
                    other => other,
                };
            }
            GameCommand::Restart => {
                if self.status == GameStatus::GameOver {
                    self.restart();
                }
            }
            GameCommand::Quit => {}
        }
    }

    /// Returns the status text for the score display.
    #[must_use]
    pub fn status_line(&self) -> String {
        match self.status {
            GameStatus::GameOver => format!("Game Over! Final Score: {}", self.score),
            _ => format!("Score: {}", self.score),
        }
    }
}

fn seed_snake(bounds: GridSize) -> Snake {
    let head = Position {
        x: i32::from(bounds.width / 2),
        y: i32::from(bounds.height / 2),
    };
    Snake::seed(head, Direction::Right)
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::food::Food;
    use crate::input::{Direction, GameCommand};
    use crate::snake::{Position, Snake};

    use super::{DeathReason, GameSession, GameStatus};

    const GRID: GridSize = GridSize {
        width: 20,
        height: 15,
    };

    fn session() -> GameSession {
        GameSession::new_with_seed(GRID, 1)
    }

    #[test]
    fn new_session_matches_lifecycle() {
        let session = session();

        assert_eq!(session.snake.len(), 2);
        assert_eq!(session.direction, Direction::Right);
        assert_eq!(session.score, 0);
        assert_eq!(session.status, GameStatus::Running);
        assert!(!session.snake.occupies(session.food.position));
    }

    #[test]
    fn plain_move_keeps_length_constant() {
        let mut session = session();
        session.snake = Snake::from_segments(vec![
            Position { x: 8, y: 10 },
            Position { x: 7, y: 10 },
        ]);
        session.food = Food::at(Position { x: 0, y: 0 });

        session.tick();

        assert_eq!(session.snake.len(), 2);
        assert_eq!(session.snake.head(), Position { x: 9, y: 10 });
        assert_eq!(session.score, 0);
    }

    #[test]
    fn eating_food_grows_scores_and_replaces_food() {
        let mut session = session();
        session.snake = Snake::from_segments(vec![
            Position { x: 8, y: 10 },
            Position { x: 7, y: 10 },
        ]);
        session.food = Food::at(Position { x: 9, y: 10 });

        session.tick();

        assert_eq!(session.snake.head(), Position { x: 9, y: 10 });
        assert_eq!(session.score, 1);
        assert_eq!(session.snake.len(), 3);
        assert_ne!(session.food.position, Position { x: 9, y: 10 });
        assert!(!session.snake.occupies(session.food.position));
    }

    #[test]
    fn wall_hit_ends_game_without_mutating_anything_else() {
        let mut session = session();
        session.snake = Snake::from_segments(vec![
            Position { x: 0, y: 10 },
            Position { x: 1, y: 10 },
        ]);
        session.direction = Direction::Left;
        let food_before = session.food;

        session.tick();

        assert_eq!(session.status, GameStatus::GameOver);
        assert_eq!(session.death_reason, Some(DeathReason::WallCollision));
        assert_eq!(session.score, 0);
        assert_eq!(session.snake.head(), Position { x: 0, y: 10 });
        assert_eq!(session.snake.len(), 2);
        assert_eq!(session.food, food_before);
    }

    #[test]
    fn stepping_onto_own_tail_is_fatal() {
        // Head at (1,1) moving down lands on (1,2) — the current tail.
        // The tail has not been removed at check time, so this dies.
        let mut session = session();
        session.snake = Snake::from_segments(vec![
            Position { x: 1, y: 1 },
            Position { x: 2, y: 1 },
            Position { x: 2, y: 2 },
            Position { x: 1, y: 2 },
        ]);
        session.direction = Direction::Down;

        session.tick();

        assert_eq!(session.status, GameStatus::GameOver);
        assert_eq!(session.death_reason, Some(DeathReason::SelfCollision));
    }

    #[test]
    fn reversal_turn_is_silently_dropped() {
        let mut session = session();
        session.snake = Snake::from_segments(vec![
            Position { x: 8, y: 10 },
            Position { x: 7, y: 10 },
        ]);
        session.food = Food::at(Position { x: 0, y: 0 });

        session.apply_command(GameCommand::Turn(Direction::Left));
        session.tick();

        assert_eq!(session.direction, Direction::Right);
        assert_eq!(session.snake.head(), Position { x: 9, y: 10 });
    }

    #[test]
    fn last_turn_before_tick_wins() {
        let mut session = session();
        session.snake = Snake::from_segments(vec![
            Position { x: 8, y: 10 },
            Position { x: 7, y: 10 },
        ]);
        session.food = Food::at(Position { x: 0, y: 0 });

        session.apply_command(GameCommand::Turn(Direction::Up));
        session.apply_command(GameCommand::Turn(Direction::Down));
        session.tick();

        assert_eq!(session.direction, Direction::Down);
        assert_eq!(session.snake.head(), Position { x: 8, y: 11 });
    }

    #[test]
    fn pause_freezes_the_simulation() {
        let mut session = session();
        let snapshot = (session.snake.head(), session.food, session.score);

        session.apply_command(GameCommand::TogglePause);
        assert_eq!(session.status, GameStatus::Paused);

        for _ in 0..10 {
            session.tick();
        }
        assert_eq!(session.snake.head(), snapshot.0);
        assert_eq!(session.food, snapshot.1);
        assert_eq!(session.score, snapshot.2);

        session.apply_command(GameCommand::TogglePause);
        assert_eq!(session.status, GameStatus::Running);

        session.tick();
        assert_ne!(session.snake.head(), snapshot.0);
    }

    #[test]
    fn game_over_ticks_are_no_ops_until_restart() {
        let mut session = session();
        session.snake = Snake::from_segments(vec![
            Position { x: 19, y: 7 },
            Position { x: 18, y: 7 },
        ]);
        session.tick();
        assert_eq!(session.status, GameStatus::GameOver);

        let ticks_before = session.tick_count;
        for _ in 0..5 {
            session.tick();
        }
        assert_eq!(session.tick_count, ticks_before);

        // Pause and turn commands are ignored while game over.
        session.apply_command(GameCommand::TogglePause);
        assert_eq!(session.status, GameStatus::GameOver);
        session.apply_command(GameCommand::Turn(Direction::Up));
        session.tick();
        assert_eq!(session.tick_count, ticks_before);

        session.apply_command(GameCommand::Restart);
        assert_eq!(session.status, GameStatus::Running);
        assert_eq!(session.score, 0);
        assert_eq!(session.snake.len(), 2);
        assert_eq!(session.direction, Direction::Right);
        assert!(session.death_reason.is_none());

        session.tick();
        assert_eq!(session.tick_count, 1);
    }

    #[test]
    fn restart_is_ignored_while_playing() {
        let mut session = session();
        session.tick();
        let head = session.snake.head();

        session.apply_command(GameCommand::Restart);

        assert_eq!(session.status, GameStatus::Running);
        assert_eq!(session.snake.head(), head);
        assert_eq!(session.tick_count, 1);
    }

    #[test]
    fn status_line_matches_display_contract() {
        let mut session = session();
        assert_eq!(session.status_line(), "Score: 0");

        session.score = 7;
        assert_eq!(session.status_line(), "Score: 7");

        session.status = GameStatus::GameOver;
        assert_eq!(session.status_line(), "Game Over! Final Score: 7");
    }
}
