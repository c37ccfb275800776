use gpu::TextureError;

#[derive(Debug)]
pub enum GlobeError {
    InvalidConfig {
        field: &'static str,
        reason: String,
    },
    Texture(TextureError),
    CoordinateOutOfRange {
        latitude_deg: f64,
        longitude_deg: f64,
    },
    NotBuilt,
    AlreadyBuilt,
    Config(serde_json::Error),
}

impl std::fmt::Display for GlobeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GlobeError::InvalidConfig { field, reason } => {
                write!(f, "invalid globe config: {field} {reason}")
            }
            GlobeError::Texture(err) => write!(f, "invalid globe texture: {err}"),
            GlobeError::CoordinateOutOfRange {
                latitude_deg,
                longitude_deg,
            } => write!(
                f,
                "coordinate out of range: lat={latitude_deg} lon={longitude_deg} \
                 (expected lat in [-90, 90], lon in [-180, 180])"
            ),
            GlobeError::NotBuilt => write!(f, "globe has not been built yet"),
            GlobeError::AlreadyBuilt => write!(f, "globe has already been built"),
            GlobeError::Config(err) => write!(f, "failed to parse globe config: {err}"),
        }
    }
}

impl std::error::Error for GlobeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GlobeError::Texture(err) => Some(err),
            GlobeError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TextureError> for GlobeError {
    fn from(err: TextureError) -> Self {
        GlobeError::Texture(err)
    }
}

impl From<serde_json::Error> for GlobeError {
    fn from(err: serde_json::Error) -> Self {
        GlobeError::Config(err)
    }
}
