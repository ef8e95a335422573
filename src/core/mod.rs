pub mod config;
pub mod layout;
pub mod log;
pub mod logic;
