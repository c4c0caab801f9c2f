use super::direction::Direction;
use super::snake::{Snake, TickOutcome};

/// Which player an input belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// The simulation state the game loop carries from step to step.
pub enum Players {
    Single(Snake),
    Duo([Snake; 2]),
}

impl Players {
    pub fn snakes(&self) -> &[Snake] {
        match self {
            Players::Single(snake) => std::slice::from_ref(snake),
            Players::Duo(snakes) => snakes,
        }
    }

    pub fn snakes_mut(&mut self) -> &mut [Snake] {
        match self {
            Players::Single(snake) => std::slice::from_mut(snake),
            Players::Duo(snakes) => snakes,
        }
    }

    /// Steer a player's snake. In a single-player game every player steers
    /// the one snake.
    pub fn steer(&mut self, player: Player, direction: Direction) {
        let snakes = self.snakes_mut();
        let index = player.index().min(snakes.len() - 1);
        snakes[index].set_direction(direction);
    }

    /// Advance every snake by one step.
    ///
    /// Snakes do not interact: each only collides with the walls and its own
    /// body.
    pub fn tick(&mut self, t: f64, delta: f64) -> Vec<TickOutcome> {
        self.snakes_mut()
            .iter_mut()
            .map(|snake| snake.tick(t, delta))
            .collect()
    }

    pub fn reset(&mut self) {
        for snake in self.snakes_mut() {
            snake.reset();
        }
    }

    pub fn stop(&mut self) {
        for snake in self.snakes_mut() {
            snake.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::SnakeConfig;
    use crate::game::geometry::{Edges, Position};
    use crate::game::snake::SnakeId;

    fn snake(id: u8, x: f64) -> Snake {
        Snake::new(
            SnakeId(id),
            SnakeConfig {
                edges: Edges::sized(10.0, 10.0),
                starting_position: Some(Position::new(x, 5.0)),
                speed: 1.0,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_single_takes_any_player() {
        let mut players = Players::Single(snake(0, 5.0));
        players.steer(Player::Two, Direction::Up);
        assert_eq!(players.snakes()[0].next_direction(), Some(Direction::Up));
    }

    #[test]
    fn test_duo_steers_each_snake() {
        let mut players = Players::Duo([snake(0, 2.0), snake(1, 7.0)]);
        players.steer(Player::One, Direction::Up);
        players.steer(Player::Two, Direction::Down);

        let outcomes = players.tick(0.0, 1.0);
        assert_eq!(outcomes.len(), 2);
        assert_eq!(players.snakes()[0].current_direction(), Some(Direction::Up));
        assert_eq!(players.snakes()[1].current_direction(), Some(Direction::Down));
    }

    #[test]
    fn test_reset_and_stop_reach_every_snake() {
        let mut players = Players::Duo([snake(0, 2.0), snake(1, 7.0)]);
        players.steer(Player::One, Direction::Up);
        players.steer(Player::Two, Direction::Up);
        players.tick(0.0, 1.0);
        players.tick(0.0, 1.0);

        players.reset();
        assert!(players.snakes().iter().all(|s| s.len() == 1));

        players.stop();
        assert!(players.snakes().iter().all(Snake::is_stopped));
    }
}
