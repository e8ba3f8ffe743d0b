use std::collections::HashMap;
use std::sync::Arc;

use crate::core::content::Block;
use crate::core::entry::{Args, Entry, EntryKind, Payload};
use crate::core::error::DispatchError;

/// Immutable `(kind, name) -> entry` table. Built once at startup via
/// [`RegistryBuilder`] and shared by cheap clone; never mutated afterwards,
/// so concurrent dispatches cannot race on it.
#[derive(Clone)]
pub struct Registry {
    entries: Arc<HashMap<(EntryKind, &'static str), Arc<Entry>>>,
}

pub struct RegistryBuilder {
    entries: HashMap<(EntryKind, &'static str), Arc<Entry>>,
}

impl RegistryBuilder {
    /// Add an entry. Panics on a duplicate `(kind, name)`; registration is a
    /// process-start-time assertion, never a runtime condition.
    pub fn register(mut self, entry: Entry) -> Self {
        let key = (entry.kind, entry.name);
        let prev = self.entries.insert(key, Arc::new(entry));
        assert!(
            prev.is_none(),
            "duplicate {} entry: {}",
            key.0,
            key.1
        );
        self
    }

    pub fn build(self) -> Registry {
        Registry {
            entries: Arc::new(self.entries),
        }
    }
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, kind: EntryKind, name: &str) -> Option<Arc<Entry>> {
        self.entries.get(&(kind, name)).cloned()
    }

    /// Entries of one kind, sorted by name for stable listings.
    pub fn entries(&self, kind: EntryKind) -> Vec<Arc<Entry>> {
        let mut out: Vec<Arc<Entry>> = self
            .entries
            .values()
            .filter(|e| e.kind == kind)
            .cloned()
            .collect();
        out.sort_by_key(|e| e.name);
        out
    }

    pub fn resource_by_uri(&self, uri: &str) -> Option<Arc<Entry>> {
        self.entries
            .values()
            .find(|e| e.kind == EntryKind::Resource && e.uri == Some(uri))
            .cloned()
    }

    /// Route one request: look the entry up, validate the payload against its
    /// schema, then run the handler. Lookup and validation failures reject
    /// the request before any handler runs; handler failures come back as
    /// `Err` values, never unwound past this boundary.
    pub async fn dispatch(
        &self,
        kind: EntryKind,
        name: &str,
        payload: &Payload,
    ) -> Result<Vec<Block>, DispatchError> {
        let entry = self.get(kind, name).ok_or_else(|| DispatchError::NotFound {
            kind,
            name: name.to_string(),
        })?;
        entry.schema.validate(payload)?;
        tracing::debug!(kind = %kind, name = %name, "dispatch");
        entry.handler.handle(Args::new(payload)).await
    }
}
