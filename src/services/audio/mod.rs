mod service;
mod types;
mod validation;


pub use service::{AudioService, AudioServiceImpl};
pub use types::{
    AudioResponseFormat, AudioTranscriptionRequest, AudioTranscriptionResponse,
    AudioTranslationRequest, AudioTranslationResponse,
};
pub use validation::AudioRequestValidator;
