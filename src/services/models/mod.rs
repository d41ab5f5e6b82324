mod service;
mod types;


pub use service::{ModelService, ModelServiceImpl};
pub use types::{ListModelsResponse, OpenAIModel, Permission, RetrieveModelResponse};
