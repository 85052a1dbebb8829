//! In-memory parameter store.

use super::ParameterStore;
use crate::error::{TruncateError, TruncateResult};
use std::collections::HashMap;

/// Parameter store backed by a fixed map of entries.
#[derive(Debug, Clone, Default)]
pub struct StaticParameterStore {
    entries: HashMap<String, String>,
}

impl StaticParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.remove(name)
    }
}

impl ParameterStore for StaticParameterStore {
    async fn get_parameter(&self, name: &str) -> TruncateResult<String> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| TruncateError::configuration(name, "parameter not found"))
    }
}
