use crate::common::*;

#[doc = "Envelope every Bot API method answers with."]
#[derive(Debug, Deserialize)]
pub struct TelegramResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
    pub error_code: Option<i64>,
}

impl<T> TelegramResponse<T> {
    #[doc = "Turns an `ok: false` envelope into an error naming the failed method."]
    pub fn into_result(self, method: &str) -> anyhow::Result<T> {
        if !self.ok {
            return Err(anyhow!(
                "[TelegramResponse] {} failed ({}): {}",
                method,
                self.error_code.unwrap_or_default(),
                self.description.unwrap_or_else(|| "no description".to_string())
            ));
        }

        self.result
            .ok_or_else(|| anyhow!("[TelegramResponse] {} returned no result", method))
    }
}
