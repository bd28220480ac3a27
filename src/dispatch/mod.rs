pub mod enums;
pub mod errors;
pub mod models;
pub mod instructions;
pub mod service;

pub use service::Dispatcher;
