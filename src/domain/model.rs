use crate::utils::error::{DesignerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output sizes accepted by the image model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageDimension {
    #[serde(rename = "1024x1024")]
    Square,
    #[serde(rename = "1024x1792")]
    Portrait,
    #[serde(rename = "1792x1024")]
    Landscape,
}

impl ImageDimension {
    pub const ALLOWED: [&'static str; 3] = ["1024x1024", "1024x1792", "1792x1024"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageDimension::Square => "1024x1024",
            ImageDimension::Portrait => "1024x1792",
            ImageDimension::Landscape => "1792x1024",
        }
    }
}

impl FromStr for ImageDimension {
    type Err = DesignerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "1024x1024" => Ok(ImageDimension::Square),
            "1024x1792" => Ok(ImageDimension::Portrait),
            "1792x1024" => Ok(ImageDimension::Landscape),
            _ => Err(DesignerError::ValidationError {
                message: "Dimension must be '1024x1024', '1024x1792' or '1792x1024'".to_string(),
            }),
        }
    }
}

impl fmt::Display for ImageDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of an image generation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    pub size: ImageDimension,
    pub quality: String,
    pub n: u32,
}

/// Where a generated image can be obtained from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Url(String),
    Inline(Vec<u8>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Webp,
    Gif,
}

impl ImageFormat {
    /// Identifies the format from the leading magic bytes.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            Some(ImageFormat::Png)
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(ImageFormat::Jpeg)
        } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            Some(ImageFormat::Webp)
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(ImageFormat::Gif)
        } else {
            None
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Webp => "image/webp",
            ImageFormat::Gif => "image/gif",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Webp => "webp",
            ImageFormat::Gif => "gif",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
    pub format: ImageFormat,
}

impl GeneratedImage {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let format = ImageFormat::sniff(&bytes).ok_or_else(|| DesignerError::GenerationError {
            message: format!("downloaded content ({} bytes) is not a supported image", bytes.len()),
        })?;
        Ok(Self { bytes, format })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_dimension_parsing() {
        assert_eq!("1024x1024".parse::<ImageDimension>().unwrap(), ImageDimension::Square);
        assert_eq!("1792x1024".parse::<ImageDimension>().unwrap(), ImageDimension::Landscape);

        let err = "800x600".parse::<ImageDimension>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Dimension must be '1024x1024', '1024x1792' or '1792x1024'"
        );
    }

    #[test]
    fn test_request_serializes_size_as_string() {
        let request = GenerationRequest {
            model: "dall-e-3".to_string(),
            prompt: "a logo".to_string(),
            size: ImageDimension::Portrait,
            quality: "hd".to_string(),
            n: 1,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["size"], "1024x1792");
        assert_eq!(json["n"], 1);
    }

    #[test]
    fn test_sniff_formats() {
        let mut png = PNG_HEADER.to_vec();
        png.extend_from_slice(b"rest");
        assert_eq!(ImageFormat::sniff(&png), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::sniff(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::sniff(b"RIFF\0\0\0\0WEBPVP8 "), Some(ImageFormat::Webp));
        assert_eq!(ImageFormat::sniff(b"fake_image_data"), None);
    }

    #[test]
    fn test_generated_image_rejects_non_image() {
        let err = GeneratedImage::from_bytes(b"<html>denied</html>".to_vec()).unwrap_err();
        assert!(matches!(err, DesignerError::GenerationError { .. }));

        let image = GeneratedImage::from_bytes(PNG_HEADER.to_vec()).unwrap();
        assert_eq!(image.format.mime_type(), "image/png");
    }
}
