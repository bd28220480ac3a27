pub mod models;
pub mod pool;

pub use models::credential::Credential;
pub use pool::CredentialPool;
