use crate::common::*;

fn default_timezone() -> Tz {
    chrono_tz::Europe::Brussels
}

fn default_recent_window_days() -> i64 {
    100
}

fn default_weekly_mean_days() -> i64 {
    7
}

fn default_min_weight() -> f64 {
    50.0
}

fn default_max_weight() -> f64 {
    150.0
}

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct StatsConfig {
    #[serde(default = "default_timezone")]
    pub timezone: Tz,
    #[serde(default = "default_recent_window_days")]
    pub recent_window_days: i64,
    #[serde(default = "default_weekly_mean_days")]
    pub weekly_mean_days: i64,
    #[serde(default = "default_min_weight")]
    pub min_weight: f64,
    #[serde(default = "default_max_weight")]
    pub max_weight: f64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            recent_window_days: default_recent_window_days(),
            weekly_mean_days: default_weekly_mean_days(),
            min_weight: default_min_weight(),
            max_weight: default_max_weight(),
        }
    }
}
