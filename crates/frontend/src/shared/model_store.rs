//! Normalized in-memory store of models fetched for the current page.
//!
//! Models are kept as JSON under `(model_name, id)` and decoded on read, so a
//! model that is missing or does not match the requested shape reads as `None`.

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModelRegistry {
    models: HashMap<String, HashMap<String, Value>>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_model<T: Serialize>(&mut self, model_name: &str, id: &str, model: &T) {
        match serde_json::to_value(model) {
            Ok(value) => {
                self.models
                    .entry(model_name.to_string())
                    .or_default()
                    .insert(id.to_string(), value);
            }
            Err(e) => log::warn!("model {}/{} not stored: {}", model_name, id, e),
        }
    }

    pub fn get_model<T: DeserializeOwned>(&self, model_name: &str, id: &str) -> Option<T> {
        let value = self.models.get(model_name)?.get(id)?;
        serde_json::from_value(value.clone()).ok()
    }
}

/// Reactive wrapper provided as context
#[derive(Clone, Copy)]
pub struct ModelStore {
    pub registry: RwSignal<ModelRegistry>,
}

impl ModelStore {
    pub fn new(registry: ModelRegistry) -> Self {
        Self {
            registry: RwSignal::new(registry),
        }
    }
}

/// Provides a [`ModelStore`] to children.
#[component]
pub fn ModelStoreProvider(
    #[prop(optional)] registry: ModelRegistry,
    children: Children,
) -> impl IntoView {
    provide_context(ModelStore::new(registry));
    children()
}

/// Model `(model_name, id)` from the nearest [`ModelStore`].
///
/// Without a store in context the model simply reads as absent.
pub fn use_model<T>(model_name: &'static str, id: String) -> Memo<Option<T>>
where
    T: DeserializeOwned + PartialEq + Send + Sync + 'static,
{
    let store = use_context::<ModelStore>();
    Memo::new(move |_| {
        store.and_then(|store| {
            store
                .registry
                .with(|registry| registry.get_model::<T>(model_name, &id))
        })
    })
}
