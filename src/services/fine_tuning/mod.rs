mod service;
mod types;
mod validation;


pub use service::{FineTuningService, FineTuningServiceImpl};
pub use types::{
    FineTuningJobError, FineTuningJobEvent, FineTuningJobEventsResponse, FineTuningJobObject,
    FineTuningJobRequest, FineTuningJobStatus, FineTuningQueryParameters, HyperparameterValue,
    Hyperparameters, ListFineTuningJobsResponse, DEFAULT_PAGE_LIMIT,
};
pub use validation::FineTuningRequestValidator;
