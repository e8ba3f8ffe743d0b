use thiserror::Error;

use crate::core::entry::EntryKind;

/// Dispatch-level error taxonomy. Every variant renders to a human-readable
/// message that travels inside the normal response envelope; nothing here is
/// ever thrown through the transport layer.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No entry is registered under the requested `(kind, name)`.
    #[error("unknown {kind} entry: {name}")]
    NotFound { kind: EntryKind, name: String },

    /// The argument payload failed the entry's schema check. The message
    /// lists every offending field.
    #[error("invalid arguments: {0}")]
    InvalidArgument(String),

    /// The remote call did not succeed (non-2xx status or transport failure).
    #[error("upstream error: {0}")]
    Upstream(String),

    /// A local resource could not be read.
    #[error("io error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_displays_not_found_with_kind_and_name() {
        let e = DispatchError::NotFound {
            kind: EntryKind::Tool,
            name: "nope".into(),
        };
        assert_eq!(e.to_string(), "unknown tool entry: nope");
    }

    #[test]
    fn it_displays_invalid_argument_fields() {
        let e = DispatchError::InvalidArgument("a: missing, b: expected number".into());
        assert_eq!(
            e.to_string(),
            "invalid arguments: a: missing, b: expected number"
        );
    }

    #[test]
    fn it_displays_upstream_and_io() {
        assert_eq!(
            DispatchError::Upstream("github api status 404".into()).to_string(),
            "upstream error: github api status 404"
        );
        assert!(DispatchError::Io("no such file".into())
            .to_string()
            .starts_with("io error:"));
    }
}
