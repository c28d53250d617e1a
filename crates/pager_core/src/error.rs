use std::error::Error as StdError;
use std::sync::Arc;

type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// Failure reported by a data source while fetching a page.
///
/// The core does not classify failures; sources encode whatever detail they
/// need in the message and the optional cause.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct FetchError {
    message: String,
    #[source]
    cause: Option<Cause>,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            cause: Some(Arc::new(cause)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

// Causes are opaque trait objects; compare them by their rendered text.
impl PartialEq for FetchError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
            && self.cause.as_ref().map(ToString::to_string)
                == other.cause.as_ref().map(ToString::to_string)
    }
}

impl Eq for FetchError {}
