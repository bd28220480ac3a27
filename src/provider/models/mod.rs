pub mod provider_call;
pub mod provider_reply;
