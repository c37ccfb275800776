use std::path::Path;

/// Image formats a texture source may point at.
pub const SUPPORTED_TEXTURE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "bmp", "ktx2"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextureError {
    EmptyPath,
    UnsupportedFormat {
        path: String,
        extension: Option<String>,
    },
}

impl std::fmt::Display for TextureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextureError::EmptyPath => write!(f, "texture path is empty"),
            TextureError::UnsupportedFormat {
                path,
                extension: Some(ext),
            } => write!(
                f,
                "unsupported texture format '.{ext}' for {path} (expected one of {})",
                SUPPORTED_TEXTURE_EXTENSIONS.join(", ")
            ),
            TextureError::UnsupportedFormat {
                path,
                extension: None,
            } => write!(f, "texture path {path} has no image file extension"),
        }
    }
}

impl std::error::Error for TextureError {}

/// A validated reference to an equirectangular texture image (file path or URL).
///
/// Validation only checks the shape of the reference; fetching and decoding
/// are the render backend's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureSource {
    path: String,
}

impl TextureSource {
    pub fn parse(path: impl Into<String>) -> Result<Self, TextureError> {
        let path = path.into();
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Err(TextureError::EmptyPath);
        }

        // Query strings and fragments never carry the file extension.
        let resource = trimmed.split(['?', '#']).next().unwrap_or(trimmed);
        let extension = Path::new(resource)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension {
            Some(ext) if SUPPORTED_TEXTURE_EXTENSIONS.contains(&ext.as_str()) => Ok(Self {
                path: trimmed.to_string(),
            }),
            extension => Err(TextureError::UnsupportedFormat {
                path: trimmed.to_string(),
                extension,
            }),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}
