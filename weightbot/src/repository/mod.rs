pub mod csv_weight_repository_impl;
pub mod telegram_repository_impl;
