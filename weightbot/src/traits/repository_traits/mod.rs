pub mod telegram_repository;
pub mod weight_repository;
