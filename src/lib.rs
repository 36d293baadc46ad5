pub mod api;
pub mod cli;
pub mod core;
pub mod messaging;
pub mod notify;
pub mod relay;
