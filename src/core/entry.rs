use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::core::content::Block;
use crate::core::error::DispatchError;
use crate::core::schema::Schema;

/// Raw argument payload: an untyped key-value map, one per invocation.
pub type Payload = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Tool,
    Resource,
    Prompt,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntryKind::Tool => "tool",
            EntryKind::Resource => "resource",
            EntryKind::Prompt => "prompt",
        })
    }
}

/// Typed view over a payload that already passed schema validation.
/// Accessors still return `InvalidArgument` rather than panic so handlers
/// stay total even if called outside `dispatch`.
#[derive(Clone, Copy)]
pub struct Args<'a>(&'a Payload);

impl<'a> Args<'a> {
    pub fn new(payload: &'a Payload) -> Self {
        Self(payload)
    }

    pub fn number(&self, field: &str) -> Result<f64, DispatchError> {
        self.0
            .get(field)
            .and_then(|v| v.as_f64())
            .ok_or_else(|| DispatchError::InvalidArgument(format!("{field}: expected number")))
    }

    pub fn str(&self, field: &str) -> Result<&'a str, DispatchError> {
        self.0
            .get(field)
            .and_then(|v| v.as_str())
            .ok_or_else(|| DispatchError::InvalidArgument(format!("{field}: expected string")))
    }
}

/// Backend of one registered entry. Implementations are stateless apart from
/// their collaborators (HTTP client, file path).
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, args: Args<'_>) -> Result<Vec<Block>, DispatchError>;
}

/// One named, schema-typed unit of functionality. Immutable after
/// registration; the registry owns it for the process lifetime.
pub struct Entry {
    pub kind: EntryKind,
    pub name: &'static str,
    pub description: &'static str,
    pub schema: Schema,
    /// URI address, resources only.
    pub uri: Option<&'static str>,
    /// Declared payload mime type, resources only.
    pub mime_type: Option<&'static str>,
    pub handler: Arc<dyn Handler>,
}

impl Entry {
    pub fn tool(
        name: &'static str,
        description: &'static str,
        schema: Schema,
        handler: Arc<dyn Handler>,
    ) -> Self {
        Self {
            kind: EntryKind::Tool,
            name,
            description,
            schema,
            uri: None,
            mime_type: None,
            handler,
        }
    }

    pub fn resource(
        name: &'static str,
        uri: &'static str,
        description: &'static str,
        mime_type: &'static str,
        handler: Arc<dyn Handler>,
    ) -> Self {
        Self {
            kind: EntryKind::Resource,
            name,
            description,
            schema: Schema::empty(),
            uri: Some(uri),
            mime_type: Some(mime_type),
            handler,
        }
    }

    pub fn prompt(
        name: &'static str,
        description: &'static str,
        schema: Schema,
        handler: Arc<dyn Handler>,
    ) -> Self {
        Self {
            kind: EntryKind::Prompt,
            name,
            description,
            schema,
            uri: None,
            mime_type: None,
            handler,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Echo;

    #[async_trait]
    impl Handler for Echo {
        async fn handle(&self, args: Args<'_>) -> Result<Vec<Block>, DispatchError> {
            Ok(vec![Block::text(args.str("msg")?)])
        }
    }

    #[test]
    fn kinds_display_lowercase() {
        assert_eq!(EntryKind::Tool.to_string(), "tool");
        assert_eq!(EntryKind::Resource.to_string(), "resource");
        assert_eq!(EntryKind::Prompt.to_string(), "prompt");
    }

    #[tokio::test]
    async fn args_accessors_type_check() {
        let payload = json!({"msg": "hi", "n": 4}).as_object().cloned().unwrap();
        let args = Args::new(&payload);
        assert_eq!(args.str("msg").unwrap(), "hi");
        assert_eq!(args.number("n").unwrap(), 4.0);
        assert!(args.number("msg").is_err());
        assert!(args.str("absent").is_err());

        let out = Echo.handle(args).await.unwrap();
        assert_eq!(out[0].as_text(), "hi");
    }

    #[test]
    fn resource_entries_carry_uri_and_mime() {
        let e = Entry::resource("r", "rules://all", "desc", "application/json", Arc::new(Echo));
        assert_eq!(e.kind, EntryKind::Resource);
        assert_eq!(e.uri, Some("rules://all"));
        assert_eq!(e.mime_type, Some("application/json"));
        assert!(e.schema.fields().is_empty());
    }
}
