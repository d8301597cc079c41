pub mod ack_response;
pub mod status_response;
