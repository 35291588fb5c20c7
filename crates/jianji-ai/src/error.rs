use thiserror::Error;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("AI 功能未配置：缺少 API Key")]
    MissingConfig,

    #[error("http error: {0}")]
    Http(#[from] ureq::Error),

    #[error("generation service returned status {0}")]
    Status(u16),

    #[error("generation service returned no text")]
    EmptyResponse,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
