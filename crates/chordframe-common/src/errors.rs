use std::path::PathBuf;

use crate::types::FrameId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures reported by the page host (DOM, storage, messaging channel).
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("element not found: #{0}")]
    ElementMissing(String),

    #[error("post to {frame} failed: {reason}")]
    PostFailed { frame: FrameId, reason: String },

    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("storage write failed: {0}")]
    StorageWrite(String),

    #[error("host unavailable: {0}")]
    Unavailable(String),

    #[error("cannot repack message: {0}")]
    Repack(String),
}

/// Reasons an inbound cross-frame message could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("message is not an object")]
    NotAnObject,

    #[error("message has no string `type` field")]
    MissingKind,

    #[error("malformed {kind} message: {reason}")]
    BadPayload { kind: String, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ChordframeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Host(#[from] HostError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("router.narrow_max_width = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: router.narrow_max_width = 0"
        );
    }

    #[test]
    fn host_error_display() {
        let err = HostError::ElementMissing("resize-divider".into());
        assert_eq!(err.to_string(), "element not found: #resize-divider");

        let err = HostError::PostFailed {
            frame: FrameId::R2b,
            reason: "DataCloneError".into(),
        };
        assert_eq!(err.to_string(), "post to R2B failed: DataCloneError");

        let err = HostError::StorageWrite("QuotaExceededError".into());
        assert_eq!(err.to_string(), "storage write failed: QuotaExceededError");

        let err = HostError::Repack("`chords` is not readable".into());
        assert_eq!(err.to_string(), "cannot repack message: `chords` is not readable");
    }

    #[test]
    fn message_error_display() {
        assert_eq!(
            MessageError::NotAnObject.to_string(),
            "message is not an object"
        );
        let err = MessageError::BadPayload {
            kind: "R2A_LOAD_TO_R3".into(),
            reason: "missing field `chords`".into(),
        };
        assert_eq!(
            err.to_string(),
            "malformed R2A_LOAD_TO_R3 message: missing field `chords`"
        );
    }

    #[test]
    fn chordframe_error_from_config() {
        let err: ChordframeError = ConfigError::ParseError("bad toml".into()).into();
        assert!(matches!(err, ChordframeError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn chordframe_error_from_host() {
        let err: ChordframeError = HostError::Unavailable("no window".into()).into();
        assert!(matches!(err, ChordframeError::Host(_)));
        assert_eq!(err.to_string(), "host unavailable: no window");
    }
}
