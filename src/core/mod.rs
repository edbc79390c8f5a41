pub mod auth;
pub mod config;
pub mod garden;
pub mod log;
pub mod notify;
pub mod report;
pub mod sample;
pub mod stats;
pub mod submit;
