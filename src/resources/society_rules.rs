use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use crate::core::{Args, Block, DispatchError, Entry, Handler};

pub const URI: &str = "rules://all";
pub const MIME_TYPE: &str = "application/json";

/// `society_rules`: serves one static JSON file verbatim. The payload is
/// never parsed or validated here; it is opaque text to this server.
#[derive(Clone)]
pub struct SocietyRules {
    path: PathBuf,
}

impl SocietyRules {
    pub fn entry(path: PathBuf) -> Entry {
        Entry::resource(
            "society_rules",
            URI,
            "Resource for all society rules",
            MIME_TYPE,
            Arc::new(Self { path }),
        )
    }
}

#[async_trait]
impl Handler for SocietyRules {
    async fn handle(&self, _args: Args<'_>) -> Result<Vec<Block>, DispatchError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| DispatchError::Io(format!("{}: {e}", self.path.display())))?;
        Ok(vec![Block::text(raw)])
    }
}
