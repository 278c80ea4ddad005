use crate::common::*;

use crate::model::configs::{
    goal_config::*, stats_config::*, storage_config::*, telegram_config::*,
};

use crate::utils_modules::io_utils::*;

#[doc = "Upper bound for configured window lengths (100 years)."]
pub const MAX_WINDOW_DAYS: i64 = 36_500;

#[doc = r#"
    Complete server configuration read from the TOML file at startup.

    Built exactly once in `main` and shared with every component through an `Arc`.
    `[telegram]`, `[storage]` and `[goal]` are required; `[stats]` falls back to
    its defaults.
"#]
#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    pub telegram: TelegramConfig,
    pub storage: StorageConfig,
    pub goal: GoalConfig,
    #[serde(default)]
    pub stats: StatsConfig,
}

impl TotalConfig {
    #[doc = "Loads and validates the configuration file."]
    pub fn load(file_path: &str) -> anyhow::Result<Self> {
        info!("[TotalConfig->load] reading configuration from '{}'", file_path);

        let config: TotalConfig = read_toml_from_file::<TotalConfig>(file_path).with_context(|| {
            format!(
                "[TotalConfig->load] Failed to convert the data from '{}' into the TotalConfig structure",
                file_path
            )
        })?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.telegram.bot_token.trim().is_empty() {
            return Err(anyhow!("[TotalConfig->validate] telegram.bot_token must not be empty"));
        }

        if self.stats.min_weight >= self.stats.max_weight {
            return Err(anyhow!(
                "[TotalConfig->validate] stats.min_weight ({}) must be below stats.max_weight ({})",
                self.stats.min_weight,
                self.stats.max_weight
            ));
        }

        for (name, days) in [
            ("recent_window_days", self.stats.recent_window_days),
            ("weekly_mean_days", self.stats.weekly_mean_days),
        ] {
            if !(1..=MAX_WINDOW_DAYS).contains(&days) {
                return Err(anyhow!(
                    "[TotalConfig->validate] stats.{} must be between 1 and {} (got {})",
                    name,
                    MAX_WINDOW_DAYS,
                    days
                ));
            }
        }

        if !self.goal.monthly_rate_kg.is_finite() {
            return Err(anyhow!("[TotalConfig->validate] goal.monthly_rate_kg must be finite"));
        }

        Ok(())
    }
}
