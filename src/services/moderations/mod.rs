mod service;
mod types;
mod validation;


pub use service::{ModerationService, ModerationServiceImpl};
pub use types::{
    ModerationCategories, ModerationInput, ModerationResults, ModerationScores,
    ModerationsRequest, ModerationsResponse,
};
pub use validation::ModerationRequestValidator;
