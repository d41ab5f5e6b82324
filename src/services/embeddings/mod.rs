mod service;
mod types;
mod validation;


pub use service::{EmbeddingsService, EmbeddingsServiceImpl};
pub use types::{
    EmbeddingInput, EmbeddingsData, EmbeddingsRequest, EmbeddingsResponse, EmbeddingsUsage,
};
pub use validation::EmbeddingsRequestValidator;
