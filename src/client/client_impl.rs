use crate::auth::Auth;
use crate::client::{OpenAIClient, OpenAIConfig};
use crate::errors::OpenAIResult;
use crate::services::{
    audio::{AudioService, AudioServiceImpl},
    chat::{ChatService, ChatServiceImpl},
    completions::{CompletionService, CompletionServiceImpl},
    edits::{EditService, EditServiceImpl},
    embeddings::{EmbeddingsService, EmbeddingsServiceImpl},
    files::{FileService, FileServiceImpl},
    fine_tunes::{FineTuneService, FineTuneServiceImpl},
    fine_tuning::{FineTuningService, FineTuningServiceImpl},
    images::{ImageService, ImageServiceImpl},
    models::{ModelService, ModelServiceImpl},
    moderations::{ModerationService, ModerationServiceImpl},
};
use crate::transport::HttpTransport;
use crate::types::RequestOptions;
use async_trait::async_trait;
use std::sync::Arc;

pub struct OpenAIClientImpl {
    config: OpenAIConfig,
    transport: Arc<dyn HttpTransport>,

    models_service: ModelServiceImpl,
    completions_service: CompletionServiceImpl,
    chat_service: ChatServiceImpl,
    edits_service: EditServiceImpl,
    images_service: ImageServiceImpl,
    embeddings_service: EmbeddingsServiceImpl,
    audio_service: AudioServiceImpl,
    files_service: FileServiceImpl,
    fine_tunes_service: FineTuneServiceImpl,
    fine_tuning_service: FineTuningServiceImpl,
    moderations_service: ModerationServiceImpl,
}

impl OpenAIClientImpl {
    pub fn new(config: OpenAIConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            models_service: ModelServiceImpl::new(transport.clone()),
            completions_service: CompletionServiceImpl::new(transport.clone()),
            chat_service: ChatServiceImpl::new(transport.clone()),
            edits_service: EditServiceImpl::new(transport.clone()),
            images_service: ImageServiceImpl::new(transport.clone()),
            embeddings_service: EmbeddingsServiceImpl::new(transport.clone()),
            audio_service: AudioServiceImpl::new(transport.clone()),
            files_service: FileServiceImpl::new(transport.clone()),
            fine_tunes_service: FineTuneServiceImpl::new(transport.clone()),
            fine_tuning_service: FineTuningServiceImpl::new(transport.clone()),
            moderations_service: ModerationServiceImpl::new(transport.clone()),
            config,
            transport,
        }
    }

    pub fn transport(&self) -> Arc<dyn HttpTransport> {
        self.transport.clone()
    }
}

#[async_trait]
impl OpenAIClient for OpenAIClientImpl {
    fn config(&self) -> &OpenAIConfig {
        &self.config
    }

    fn models(&self) -> &dyn ModelService {
        &self.models_service
    }

    fn completions(&self) -> &dyn CompletionService {
        &self.completions_service
    }

    fn chat(&self) -> &dyn ChatService {
        &self.chat_service
    }

    fn edits(&self) -> &dyn EditService {
        &self.edits_service
    }

    fn images(&self) -> &dyn ImageService {
        &self.images_service
    }

    fn embeddings(&self) -> &dyn EmbeddingsService {
        &self.embeddings_service
    }

    fn audio(&self) -> &dyn AudioService {
        &self.audio_service
    }

    fn files(&self) -> &dyn FileService {
        &self.files_service
    }

    fn fine_tunes(&self) -> &dyn FineTuneService {
        &self.fine_tunes_service
    }

    fn fine_tuning(&self) -> &dyn FineTuningService {
        &self.fine_tuning_service
    }

    fn moderations(&self) -> &dyn ModerationService {
        &self.moderations_service
    }

    async fn health_check(&self, auth: &Auth) -> OpenAIResult<bool> {
        self.models_service
            .list(auth, &RequestOptions::default())
            .await
            .map(|_| true)
    }
}
