pub mod event;
pub mod fetch_state;
pub mod selection;
