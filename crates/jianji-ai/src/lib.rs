//! jianji-ai
//!
//! The AI collaborator: builds the clinical-formulation prompt from the
//! assessment record and calls an opaque text-generation service
//! (Gemini-style `generateContent` endpoint). One prompt in, free text
//! out; every failure mode maps to a user notice, never a state change.

pub mod client;
pub mod error;
pub mod prompt;

pub use client::GenAiClient;
pub use error::AiError;
pub use prompt::build_formulation_prompt;
