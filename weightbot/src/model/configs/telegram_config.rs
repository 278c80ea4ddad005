use crate::common::*;

fn default_api_url() -> String {
    "https://api.telegram.org".to_string()
}

fn default_poll_timeout_sec() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct TelegramConfig {
    pub bot_token: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_poll_timeout_sec")]
    pub poll_timeout_sec: u64,
    /* Empty means every chat is served */
    #[serde(default)]
    pub allowed_chat_ids: Vec<i64>,
}

impl TelegramConfig {
    #[doc = "Whether updates coming from `chat_id` should be handled."]
    pub fn is_chat_allowed(&self, chat_id: i64) -> bool {
        self.allowed_chat_ids.is_empty() || self.allowed_chat_ids.contains(&chat_id)
    }
}
