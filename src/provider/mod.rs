pub mod gemini;
pub mod models;

use async_trait::async_trait;

use crate::{credentials::Credential, dispatch::errors::DispatchError};

use self::models::{provider_call::ProviderCall, provider_reply::ProviderReply};

/// The external generative model service. One call per dispatch.
#[async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> &str;

    async fn generate(
        &self,
        credential: &Credential,
        call: &ProviderCall,
    ) -> Result<ProviderReply, DispatchError>;
}
