use crate::common::*;

use crate::dto::telegram::telegram_update::*;

#[async_trait]
pub trait TelegramRepository: Send + Sync {
    #[doc = "Long-polls for updates with `update_id >= offset`."]
    async fn get_updates(&self, offset: i64) -> anyhow::Result<Vec<TelegramUpdate>>;
    async fn send_message(&self, chat_id: i64, text: &str) -> anyhow::Result<()>;
    #[doc = "Shows the \"typing...\" presence indicator in the chat."]
    async fn send_typing(&self, chat_id: i64) -> anyhow::Result<()>;
    async fn send_photo(&self, chat_id: i64, photo_path: &Path) -> anyhow::Result<()>;
}
