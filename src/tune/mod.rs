pub mod deep;
pub mod loop_fn;
pub mod sample;
pub mod shallow;
pub mod tune_config;
pub mod tune_stats;

pub use deep::{collect_link_summary, collect_tuning_summary, tune_deep, tune_deep_link};
pub use loop_fn::tune_loop;
pub use sample::{TuneOutcome, TuningSample};
pub use shallow::tune_shallow;
pub use tune_config::{Strategy, TuneConfig};
pub use tune_stats::TuneStats;
