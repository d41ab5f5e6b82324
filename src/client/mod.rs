mod client_impl;
mod config;
mod factory;

pub use client_impl::OpenAIClientImpl;
pub use config::{OpenAIConfig, DEFAULT_BASE_URL};
pub use factory::OpenAIClientBuilder;

use crate::auth::Auth;
use crate::errors::OpenAIResult;
use crate::services::{
    audio::AudioService, chat::ChatService, completions::CompletionService, edits::EditService,
    embeddings::EmbeddingsService, files::FileService, fine_tunes::FineTuneService,
    fine_tuning::FineTuningService, images::ImageService, models::ModelService,
    moderations::ModerationService,
};
use async_trait::async_trait;

/// Entry point to every endpoint family. Services share one transport and hold no credentials;
/// each call takes the `Auth` to use.
#[async_trait]
pub trait OpenAIClient: Send + Sync {
    fn config(&self) -> &OpenAIConfig;

    fn models(&self) -> &dyn ModelService;
    fn completions(&self) -> &dyn CompletionService;
    fn chat(&self) -> &dyn ChatService;
    fn edits(&self) -> &dyn EditService;
    fn images(&self) -> &dyn ImageService;
    fn embeddings(&self) -> &dyn EmbeddingsService;
    fn audio(&self) -> &dyn AudioService;
    fn files(&self) -> &dyn FileService;
    fn fine_tunes(&self) -> &dyn FineTuneService;
    fn fine_tuning(&self) -> &dyn FineTuningService;
    fn moderations(&self) -> &dyn ModerationService;

    /// Lists models as a cheap connectivity and credential check.
    async fn health_check(&self, auth: &Auth) -> OpenAIResult<bool>;
}
