use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct TelegramUpdate {
    pub update_id: i64,
    pub message: Option<TelegramMessage>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct TelegramMessage {
    pub message_id: i64,
    pub chat: TelegramChat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct TelegramChat {
    pub id: i64,
}

impl TelegramUpdate {
    #[doc = "Chat id and text of a plain text message, `None` for any other update."]
    pub fn text_message(&self) -> Option<(i64, &str)> {
        let message: &TelegramMessage = self.message.as_ref()?;
        let text: &str = message.text.as_deref()?;
        Some((message.chat.id, text))
    }
}
