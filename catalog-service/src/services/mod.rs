pub mod store;
pub mod uploads;
