use crate::common::*;

use crate::enums::stats_window::*;

#[derive(Debug, Clone, Copy, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct StatsRequest {
    pub window: StatsWindow,
    pub show_goal: bool,
}
