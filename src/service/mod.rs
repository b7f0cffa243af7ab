pub mod app_state;
pub mod event_fetch;
pub mod gemini_service;
