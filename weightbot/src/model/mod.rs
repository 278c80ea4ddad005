pub mod configs;
pub mod reading;
