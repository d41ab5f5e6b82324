mod service;
mod types;
mod validation;


pub use service::{FileService, FileServiceImpl};
pub use types::{
    DeleteFileResponse, FilePurpose, ListFilesResponse, OpenAIFile, RetrieveFileContentResponse,
    RetrieveFileResponse, UploadFileRequest, UploadFileResponse,
};
pub use validation::FileRequestValidator;
