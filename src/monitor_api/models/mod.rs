pub mod response;

pub mod channel;
pub mod monitor_status;
pub mod wifi_context;
