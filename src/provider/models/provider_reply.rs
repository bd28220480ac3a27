#[derive(Debug, Clone, PartialEq)]
pub struct ReplyMedia {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProviderReply {
    pub media: Option<ReplyMedia>,
    pub text: Option<String>,
}
