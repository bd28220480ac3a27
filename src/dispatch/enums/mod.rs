pub mod quality;
pub mod request_kind;
