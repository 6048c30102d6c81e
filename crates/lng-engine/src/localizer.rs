//! Application-facing translation handle.
//!
//! Holds the active language and its [`Store`]. Readers take a cheap
//! `Arc` clone of the current store; switching language builds the new
//! store completely before publishing it, so a failed load leaves the
//! previous language in place and readers never see a half-built store.

use std::{
    path::Path,
    sync::{Arc, RwLock},
};

use relative_path::RelativePathBuf;

use crate::{
    error::{KeyError, LoadError, ResourceError},
    io, languages,
    store::{Key, Store},
};

#[derive(Debug)]
struct Active {
    language: String,
    store: Arc<Store>,
}

#[derive(Debug)]
pub struct Localizer {
    active: RwLock<Active>,
}

impl Localizer {
    /// An empty store for the default language; every lookup misses.
    pub fn new() -> Self {
        Self::with_store(languages::DEFAULT_LANGUAGE, Store::default())
    }

    pub fn with_store(language: impl Into<String>, store: Store) -> Self {
        Self {
            active: RwLock::new(Active {
                language: language.into(),
                store: Arc::new(store),
            }),
        }
    }

    /// The store answering lookups right now.
    pub fn store(&self) -> Arc<Store> {
        // Recover from poisoned lock (another thread panicked while holding it)
        let active = self.active.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&active.store)
    }

    pub fn language(&self) -> String {
        let active = self.active.read().unwrap_or_else(|e| e.into_inner());
        active.language.clone()
    }

    pub fn language_full_name(&self) -> String {
        languages::full_name(&self.language()).to_string()
    }

    /// Loads `text` as the resource for `language` and publishes it.
    pub fn reload_from_str(&self, language: &str, text: &str) -> Result<(), LoadError> {
        let store = crate::load(text)?;
        self.publish(languages::normalize_code(language), store);
        Ok(())
    }

    /// Switches to `{code}.lng` from `resources_dir`.
    pub fn set_language(&self, resources_dir: &Path, code: &str) -> Result<(), ResourceError> {
        let code = languages::normalize_code(code);
        let relative = RelativePathBuf::from(format!("{code}.{}", io::RESOURCE_EXTENSION));
        let text = io::read_resource(&relative, resources_dir)?;

        let store = crate::load(&text).map_err(|source| ResourceError::Load {
            path: relative.to_path(resources_dir),
            source,
        })?;
        log::info!(
            "Switched language to {} ({} strings)",
            languages::full_name(&code),
            store.len()
        );
        self.publish(code, store);
        Ok(())
    }

    /// Translated text for `key`, or the key itself when it is missing.
    pub fn tr(&self, key: &str) -> String {
        let key = key.trim();
        let store = self.store();
        let translation = store.lookup_or_key(key);
        if !translation.is_found() {
            log::debug!("no translation for `{key}`");
        }
        translation.text().to_string()
    }

    pub fn get(&self, key: &Key) -> Result<String, KeyError> {
        self.store().get(key).map(str::to_string)
    }

    fn publish(&self, language: String, store: Store) {
        let mut active = self.active.write().unwrap_or_else(|e| e.into_inner());
        *active = Active {
            language,
            store: Arc::new(store),
        };
    }
}

impl Default for Localizer {
    fn default() -> Self {
        Self::new()
    }
}
