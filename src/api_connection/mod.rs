pub mod connection;
pub mod endpoints;

pub use connection::{ApiConnectionError, Provider};
pub use endpoints::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, GROQ_MODEL};
