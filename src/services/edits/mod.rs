mod service;
mod types;
mod validation;


pub use service::{EditService, EditServiceImpl};
pub use types::{EditRequest, EditResponse};
pub use validation::EditRequestValidator;
