pub type GifreelResult<T> = Result<T, GifreelError>;

#[derive(thiserror::Error, Debug)]
pub enum GifreelError {
    /// A request could not complete: timeout, connection failure, DNS
    /// failure, or a non-2xx status. Always terminal for the sequence,
    /// never retried.
    #[error("network error: {0}")]
    Network(String),

    /// Fetched bytes could not be interpreted as an image.
    #[error("decode error: {0}")]
    Decode(String),

    /// Zero frames survived the fetch loop; no output is written.
    #[error("no frames could be loaded")]
    NoFramesLoaded,

    /// The GIF container writer failed.
    #[error("encode error: {0}")]
    Encode(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GifreelError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            GifreelError::network("x")
                .to_string()
                .contains("network error:")
        );
        assert!(GifreelError::decode("x").to_string().contains("decode error:"));
        assert!(GifreelError::encode("x").to_string().contains("encode error:"));
        assert!(
            GifreelError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            GifreelError::NoFramesLoaded
                .to_string()
                .contains("no frames")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = GifreelError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
