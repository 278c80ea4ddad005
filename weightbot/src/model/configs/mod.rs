pub mod goal_config;
pub mod stats_config;
pub mod storage_config;
pub mod telegram_config;
pub mod total_config;
