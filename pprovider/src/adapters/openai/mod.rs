mod client;
mod serde_api;
mod transport;
mod types;

pub use client::OpenAiClient;
pub use transport::{OpenAiHttpTransport, OpenAiTransport};
pub use types::{
    OpenAiAssistantMessage, OpenAiAuth, OpenAiFinishReason, OpenAiRequest, OpenAiResponse,
    OpenAiUsage,
};
