mod service;
mod types;
mod validation;


pub use service::{FineTuneService, FineTuneServiceImpl};
pub use types::{
    BaseFineTuneResponse, DeleteFineTuneResponse, FineTuneEventsResponse, FineTuneRequest,
    FineTuneResponse, Hyperparams, ListFineTuneResponse, OpenAIEvent,
};
pub use validation::FineTuneRequestValidator;
