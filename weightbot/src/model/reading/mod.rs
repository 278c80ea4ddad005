pub mod weight_band;
pub mod weight_reading;
