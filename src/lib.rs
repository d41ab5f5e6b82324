//! Typed OpenAI API client core.
//!
//! Three layers:
//! - schema types for every endpoint family under [`services`], decoding leniently so that
//!   missing or `null` fields fall back to defaults;
//! - an [`transport::HttpTransport`] that makes exactly one HTTP request per call;
//! - [`call::AsyncCall`], which runs a single request on the tokio runtime and resolves it
//!   exactly once, cancelling the in-flight request when abandoned.
//!
//! ```no_run
//! use openai_client_core::prelude::*;
//!
//! # async fn run() -> OpenAIResult<()> {
//! let client = OpenAIClientBuilder::new().build()?;
//! let auth = Auth::from_env()?;
//!
//! let request = ChatCompletionRequest::new("gpt-3.5-turbo", vec![Message::user("Hello!")]);
//! let response = client
//!     .chat()
//!     .create(request, &auth, &RequestOptions::default())
//!     .await?;
//! println!("{}", response.content().unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod call;
pub mod client;
pub mod errors;
pub mod observability;
pub mod services;
pub mod transport;
pub mod types;

#[cfg(test)]
pub mod mocks;
#[cfg(test)]
pub mod fixtures;

pub use auth::Auth;
pub use call::{AsyncCall, CallGuard, CallHandle, CallState};
pub use client::{OpenAIClient, OpenAIClientBuilder, OpenAIClientImpl, OpenAIConfig};
pub use errors::{ErrorResult, OpenAIError, OpenAIResult, ResponseErrorKind};
pub use types::{FinishReason, RequestOptions, Usage};

pub use services::{
    audio::{
        AudioResponseFormat, AudioService, AudioTranscriptionRequest, AudioTranscriptionResponse,
        AudioTranslationRequest, AudioTranslationResponse,
    },
    chat::{
        ChatCompletionRequest, ChatCompletionResponse, ChatCompletionStreamResponse, ChatService,
        Message, Role,
    },
    completions::{
        CompletionRequest, CompletionResponse, CompletionService, CompletionStreamResponse,
    },
    edits::{EditRequest, EditResponse, EditService},
    embeddings::{EmbeddingsRequest, EmbeddingsResponse, EmbeddingsService},
    files::{FilePurpose, FileService, OpenAIFile, UploadFileRequest},
    fine_tunes::{FineTuneRequest, FineTuneResponse, FineTuneService},
    fine_tuning::{
        FineTuningJobObject, FineTuningJobRequest, FineTuningQueryParameters, FineTuningService,
    },
    images::{
        ImageEditRequest, ImageRequest, ImageResponse, ImageService, ImageSize,
        ImageVariationRequest,
    },
    models::{ListModelsResponse, ModelService, OpenAIModel},
    moderations::{ModerationService, ModerationsRequest, ModerationsResponse},
};

pub mod prelude {
    pub use crate::auth::Auth;
    pub use crate::call::{AsyncCall, CallState};
    pub use crate::client::{OpenAIClient, OpenAIClientBuilder, OpenAIConfig};
    pub use crate::errors::{ErrorResult, OpenAIError, OpenAIResult, ResponseErrorKind};
    pub use crate::services::chat::{ChatCompletionRequest, ChatService, Message};
    pub use crate::services::completions::{CompletionRequest, CompletionService};
    pub use crate::services::embeddings::{EmbeddingsRequest, EmbeddingsService};
    pub use crate::services::models::ModelService;
    pub use crate::types::RequestOptions;
}
