pub mod admin_gate;
pub mod logging;
pub mod request_id;
