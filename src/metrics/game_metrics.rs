use std::time::{Duration, Instant};

use crate::game::CollisionType;

/// Session statistics shown alongside the board
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub lives_lost: u32,
    pub wall_hits: u32,
    pub self_hits: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            lives_lost: 0,
            wall_hits: 0,
            self_hits: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    /// Restart the clock for a new round
    pub fn on_restart(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    /// Keep the best score seen so far, including lives still in play
    pub fn observe_score(&mut self, score: u32) {
        self.high_score = self.high_score.max(score);
    }

    pub fn on_death(&mut self, final_score: u32, cause: CollisionType) {
        self.lives_lost += 1;
        match cause {
            CollisionType::Wall => self.wall_hits += 1,
            CollisionType::SelfCollision => self.self_hits += 1,
        }
        self.observe_score(final_score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
