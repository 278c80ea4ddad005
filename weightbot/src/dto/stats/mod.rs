pub mod stats_request;
pub mod weight_stats;
