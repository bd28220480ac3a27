pub mod config;
pub mod models;
pub mod service;
pub mod structs;

pub use service::GeminiProvider;
