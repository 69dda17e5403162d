//! Adapter Registry
//!
//! Maps adapter names to constructors so a generic logging front-end can
//! select an adapter by configuration. The map is built explicitly at
//! startup and passed to whoever needs it; there is no process-global
//! registration side effect.

use crate::output::OutputFactory;
use crate::router::{LogAdapter, MultiFileRouter};
use std::collections::HashMap;
use std::sync::Arc;

/// Well-known name of the multi-file router adapter.
pub const ADAPTER_MULTIFILE: &str = "multifile";

type AdapterConstructor = Arc<dyn Fn() -> Box<dyn LogAdapter> + Send + Sync>;

/// Registry of log-adapter constructors, keyed by adapter name.
pub struct AdapterRegistry {
    constructors: HashMap<String, AdapterConstructor>,
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AdapterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Create a registry with the built-in adapters registered: the
    /// multi-file router under [`ADAPTER_MULTIFILE`], constructing its
    /// outputs through `factory`.
    pub fn with_defaults(factory: Arc<dyn OutputFactory>) -> Self {
        let mut registry = Self::new();
        registry.register(ADAPTER_MULTIFILE, move || {
            Box::new(MultiFileRouter::new(factory.clone())) as Box<dyn LogAdapter>
        });
        registry
    }

    /// Register a constructor under an adapter name, replacing any previous
    /// registration for that name.
    pub fn register<F>(&mut self, name: &str, constructor: F)
    where
        F: Fn() -> Box<dyn LogAdapter> + Send + Sync + 'static,
    {
        self.constructors
            .insert(name.to_string(), Arc::new(constructor));
        tracing::debug!(adapter = name, "Registered adapter");
    }

    /// Construct a fresh, uninitialized adapter by name.
    pub fn create(&self, name: &str) -> Option<Box<dyn LogAdapter>> {
        self.constructors.get(name).map(|constructor| constructor())
    }

    /// Check if an adapter name is registered.
    pub fn has_adapter(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Get all registered adapter names.
    pub fn adapter_names(&self) -> Vec<&str> {
        self.constructors.keys().map(|s| s.as_str()).collect()
    }
}
