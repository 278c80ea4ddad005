pub mod bot_command;
pub mod stats_window;
