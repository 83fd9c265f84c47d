#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Invalid encoding for field {field}: {reason}")]
    InvalidEncoding { field: String, reason: String },

    #[error("Invalid record type: {0}")]
    InvalidRecordType(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for an unknown collection name.
    pub fn collection_not_found(name: &str) -> Self {
        Self::NotFound {
            entity: "Collection",
            key: name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_not_found() {
        let err = CoreError::collection_not_found("widgets");
        assert_eq!(err.to_string(), "Collection not found: widgets");
    }

    #[test]
    fn display_invalid_encoding() {
        let err = CoreError::InvalidEncoding {
            field: "ID".to_string(),
            reason: "bad length".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid encoding for field ID: bad length");
    }
}
