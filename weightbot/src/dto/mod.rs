pub mod stats;
pub mod telegram;
