//! Text-generation provider integration (OpenAI Chat Completions).

pub mod client;
pub mod error;
pub mod types;

pub use client::{OpenAIClient, TextGenerator};
pub use error::OpenAIError;
