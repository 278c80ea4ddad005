use crate::common::*;

use crate::dto::telegram::{telegram_response::*, telegram_update::*};

use crate::model::configs::telegram_config::*;

use crate::traits::repository_traits::telegram_repository::*;

#[doc = r#"
    Telegram Bot API client over HTTPS.

    The bot token is part of every request URL, so transport errors are logged
    with their URL stripped.
"#]
#[derive(Debug, Clone)]
pub struct TelegramRepositoryImpl {
    client: Client,
    bot_url: String,
    poll_timeout_sec: u64,
}

impl TelegramRepositoryImpl {
    pub fn new(telegram_config: &TelegramConfig) -> anyhow::Result<Self> {
        let poll_timeout_sec: u64 = *telegram_config.poll_timeout_sec();

        /* the HTTP timeout must outlast the long poll */
        let client: Client = Client::builder()
            .timeout(Duration::from_secs(poll_timeout_sec + 15))
            .build()
            .map_err(|e| anyhow!("[TelegramRepositoryImpl->new] {}", e.without_url()))?;

        let bot_url: String = format!(
            "{}/bot{}",
            telegram_config.api_url().trim_end_matches('/'),
            telegram_config.bot_token()
        );

        Ok(TelegramRepositoryImpl {
            client,
            bot_url,
            poll_timeout_sec,
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{}", self.bot_url, method)
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        method: &str,
        response: reqwest::Response,
    ) -> anyhow::Result<T> {
        let envelope: TelegramResponse<T> = response.json().await.map_err(|e| {
            anyhow!(
                "[TelegramRepositoryImpl->decode] {} returned an unreadable body: {}",
                method,
                e.without_url()
            )
        })?;

        envelope.into_result(method)
    }

    async fn call_json<T: DeserializeOwned>(&self, method: &str, body: &Value) -> anyhow::Result<T> {
        let response: reqwest::Response = self
            .client
            .post(self.method_url(method))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                anyhow!(
                    "[TelegramRepositoryImpl->call_json] {} request failed: {}",
                    method,
                    e.without_url()
                )
            })?;

        self.decode(method, response).await
    }
}

#[async_trait]
impl TelegramRepository for TelegramRepositoryImpl {
    async fn get_updates(&self, offset: i64) -> anyhow::Result<Vec<TelegramUpdate>> {
        self.call_json(
            "getUpdates",
            &json!({
                "offset": offset,
                "timeout": self.poll_timeout_sec,
                "allowed_updates": ["message"],
            }),
        )
        .await
    }

    async fn send_message(&self, chat_id: i64, text: &str) -> anyhow::Result<()> {
        let _sent: Value = self
            .call_json("sendMessage", &json!({ "chat_id": chat_id, "text": text }))
            .await?;

        Ok(())
    }

    async fn send_typing(&self, chat_id: i64) -> anyhow::Result<()> {
        let _done: bool = self
            .call_json(
                "sendChatAction",
                &json!({ "chat_id": chat_id, "action": "typing" }),
            )
            .await?;

        Ok(())
    }

    async fn send_photo(&self, chat_id: i64, photo_path: &Path) -> anyhow::Result<()> {
        let photo: Vec<u8> = tokio::fs::read(photo_path).await.with_context(|| {
            format!(
                "[TelegramRepositoryImpl->send_photo] Failed to read {:?}",
                photo_path
            )
        })?;

        let part: multipart::Part = multipart::Part::bytes(photo)
            .file_name("weight.png")
            .mime_str("image/png")
            .map_err(|e| anyhow!("[TelegramRepositoryImpl->send_photo] {}", e.without_url()))?;

        let form: multipart::Form = multipart::Form::new()
            .text("chat_id", chat_id.to_string())
            .part("photo", part);

        let response: reqwest::Response = self
            .client
            .post(self.method_url("sendPhoto"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                anyhow!(
                    "[TelegramRepositoryImpl->send_photo] sendPhoto request failed: {}",
                    e.without_url()
                )
            })?;

        let _sent: Value = self.decode("sendPhoto", response).await?;

        Ok(())
    }
}
