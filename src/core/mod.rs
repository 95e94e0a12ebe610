pub mod generator;
pub mod headless;

pub use crate::domain::model::{
    GeneratedImage, GenerationRequest, ImageDimension, ImageFormat, ImageSource,
};
pub use crate::domain::ports::{ImageProvider, Storage};
pub use crate::utils::error::Result;
