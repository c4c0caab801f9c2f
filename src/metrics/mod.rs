pub mod game_metrics;
pub mod rate_counter;

pub use game_metrics::GameMetrics;
pub use rate_counter::RateCounter;
