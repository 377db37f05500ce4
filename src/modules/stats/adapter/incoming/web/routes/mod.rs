pub mod get_stats;

pub use get_stats::get_stats_handler;
