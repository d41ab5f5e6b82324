mod service;
mod types;
mod validation;


pub use service::{ChatService, ChatServiceImpl};
pub use types::{
    ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatCompletionResponseBase,
    ChatCompletionStreamResponse, ChatStreamChoice, Delta, FunctionCall, FunctionDefinition,
    Message, Role,
};
pub use validation::ChatRequestValidator;
