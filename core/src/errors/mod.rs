pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(thiserror::Error, Debug)]
pub enum RegistryError {
    #[error(transparent)]
    Transport(#[from] anyhow::Error),

    #[error("{body}")]
    Rejected { status: u16, body: String },

    #[error(transparent)]
    MalformedBody {
        #[from]
        source: serde_json::Error,
    },
}

impl RegistryError {
    /// Caller-facing error text.
    ///
    /// A rejection yields the response body verbatim, even when it is empty.
    pub fn message(&self) -> String {
        match self {
            RegistryError::Rejected { body, .. } => body.clone(),
            other => {
                let msg = other.to_string();
                if msg.is_empty() {
                    String::from(UNKNOWN_ERROR)
                } else {
                    msg
                }
            }
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            RegistryError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
