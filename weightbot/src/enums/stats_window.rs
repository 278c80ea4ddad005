use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsWindow {
    Full,
    LastDays(i64),
}

#[doc = "Length of the window in days, `None` for the whole history."]
pub fn get_window_days(window: StatsWindow) -> Option<i64> {
    match window {
        StatsWindow::Full => None,
        StatsWindow::LastDays(days) => Some(days),
    }
}

impl Display for StatsWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsWindow::Full => write!(f, "full history"),
            StatsWindow::LastDays(days) => write!(f, "last {} days", days),
        }
    }
}
