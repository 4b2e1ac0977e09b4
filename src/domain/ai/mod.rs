pub mod client;
pub mod dto;
pub mod gemini;
pub mod handler;
pub mod model;
pub mod prompt;
pub mod service;

pub use client::{AiClient, GeminiClient, GeminiClientTrait};
pub use model::{GeneratedImage, ImageGenerationError, ImageRequest, Persona};
pub use service::AiService;
