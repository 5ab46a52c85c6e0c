pub mod event_listener;
pub mod log_listener;
