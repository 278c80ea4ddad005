pub mod telegram_response;
pub mod telegram_update;
