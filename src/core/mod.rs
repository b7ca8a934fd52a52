pub mod config;
pub mod constants;
pub mod credentials;
pub mod message;
pub mod session;
