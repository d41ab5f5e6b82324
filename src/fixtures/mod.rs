//! Sample API responses, error envelopes and builders shared by the unit tests.

mod audio_fixtures;
mod auth_fixtures;
mod chat_fixtures;
mod error_fixtures;
mod file_fixtures;
mod fine_tune_fixtures;
mod image_fixtures;
mod stream_fixtures;

pub use audio_fixtures::*;
pub use auth_fixtures::*;
pub use chat_fixtures::*;
pub use completion_fixtures::*;
pub use embeddings_fixtures::*;
pub use error_fixtures::*;
pub use file_fixtures::*;
pub use fine_tune_fixtures::*;
pub use image_fixtures::*;
pub use model_fixtures::*;
pub use moderation_fixtures::*;
pub use stream_fixtures::*;
