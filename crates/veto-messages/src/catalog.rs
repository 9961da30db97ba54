//! In-memory message catalog
//!
//! Maps `(locale, key)` to a message template. Lookup falls back from the
//! exact locale tag to its bare language and finally to the default table,
//! so a catalog can carry `ko-KR` overrides on top of `ko` messages on top
//! of locale-independent defaults. Misses return `None` and never fail.
//!
//! Copyright (c) 2025 Veto Team
//! Licensed under the Apache-2.0 license

use std::collections::HashMap;
use thiserror::Error;

/// Locale tag for messages that apply when no localized entry matches
pub const DEFAULT_LOCALE: &str = "";

/// Errors from loading a catalog out of a data document
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The document is not `{ "<locale>": { "<key>": "<template>" } }`
    #[error("invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Key-to-template store, one table per locale
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    tables: HashMap<String, HashMap<String, String>>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a JSON document of the shape
    /// `{ "<locale>": { "<key>": "<template>" } }`; the `""` locale holds
    /// the default messages.
    pub fn from_json(document: &str) -> Result<Self, CatalogError> {
        let tables: HashMap<String, HashMap<String, String>> = serde_json::from_str(document)?;
        Ok(Self { tables })
    }

    /// Register a template for `key` under `locale`.
    pub fn insert<L, K, T>(&mut self, locale: L, key: K, template: T)
    where
        L: Into<String>,
        K: Into<String>,
        T: Into<String>,
    {
        self.tables
            .entry(locale.into())
            .or_default()
            .insert(key.into(), template.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_message<L, K, T>(mut self, locale: L, key: K, template: T) -> Self
    where
        L: Into<String>,
        K: Into<String>,
        T: Into<String>,
    {
        self.insert(locale, key, template);
        self
    }

    /// Find the template for `key`, trying the exact locale, then its bare
    /// language, then the default table.
    pub fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        for candidate in locale_chain(locale) {
            if let Some(template) = self.tables.get(candidate).and_then(|t| t.get(key)) {
                return Some(template.as_str());
            }
        }
        None
    }

    /// Number of registered templates across all locales.
    pub fn len(&self) -> usize {
        self.tables.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.values().all(HashMap::is_empty)
    }
}

/// Fallback sequence for a locale tag: `ko-KR` yields `ko-KR`, `ko`, ``.
fn locale_chain(locale: &str) -> impl Iterator<Item = &str> {
    let language = locale
        .split_once(['-', '_'])
        .map(|(language, _)| language)
        .filter(|language| !language.is_empty());

    std::iter::once(locale)
        .chain(language)
        .chain(std::iter::once(DEFAULT_LOCALE))
        // A bare-language or empty tag would repeat itself otherwise.
        .scan(None::<&str>, |previous, candidate| {
            let repeat = *previous == Some(candidate);
            *previous = Some(candidate);
            Some((candidate, repeat))
        })
        .filter_map(|(candidate, repeat)| (!repeat).then_some(candidate))
}
