pub mod models;
pub mod monitor_client;
