use crate::domain::model::ImageDimension;
use crate::utils::error::{DesignerError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "configs/params.yml";

/// Upper bound on images per request accepted by the hosted API.
pub const MAX_IMAGES_PER_REQUEST: u32 = 10;

/// Generation parameters read from the YAML parameter file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Params {
    pub n_image: u32,
    pub image_dim: String,
    pub image_model: String,
    pub image_quality: String,
}

/// Reads and parses the parameter file at `config_path`.
///
/// Unknown keys are ignored so the same file can carry settings for other tools.
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<Params> {
    let path = config_path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DesignerError::ConfigNotFound {
            path: path.display().to_string(),
        },
        _ => DesignerError::IoError(e),
    })?;

    tracing::debug!("Loaded parameter file {} ({} bytes)", path.display(), content.len());
    Params::from_yaml_str(&content)
}

impl Params {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        serde_yaml::from_str(&processed_content).map_err(|e| DesignerError::ConfigParseError {
            message: format!("YAML parsing error: {}", e),
        })
    }

    pub fn dimension(&self) -> Result<ImageDimension> {
        self.image_dim.parse()
    }
}

/// Replaces `${VAR}` with the value of the environment variable; unknown variables stay as written.
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DesignerError::ConfigParseError {
        message: format!("invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.into_owned())
}

impl Validate for Params {
    fn validate(&self) -> Result<()> {
        validate_range("n_image", self.n_image, 1, MAX_IMAGES_PER_REQUEST)?;
        self.dimension()
            .map_err(|e| DesignerError::InvalidConfigValueError {
                field: "image_dim".to_string(),
                value: self.image_dim.clone(),
                reason: e.to_string(),
            })?;
        validate_non_empty_string("image_model", &self.image_model)?;
        validate_non_empty_string("image_quality", &self.image_quality)?;
        Ok(())
    }
}
