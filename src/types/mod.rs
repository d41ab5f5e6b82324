mod common;
mod serde_helpers;

pub use common::{DeletionStatus, FinishReason, RequestOptions, Usage};
pub use serde_helpers::*;

pub use crate::client::OpenAIConfig;
