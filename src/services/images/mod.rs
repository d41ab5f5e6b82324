mod service;
mod types;
mod validation;


pub use service::{ImageService, ImageServiceImpl};
pub use types::{
    ImageData, ImageEditRequest, ImageEditResponse, ImageQuality, ImageRequest, ImageResponse,
    ImageResponseFormat, ImageSize, ImageStyle, ImageVariationRequest, ImageVariationResponse,
};
pub use validation::ImageRequestValidator;
