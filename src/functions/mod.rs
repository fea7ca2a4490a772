//! Constant and function registries consulted when resolving names.
//!
//! A [`Registry`] is filled once, then shared read-only with every evaluation
//! that uses it. Lookups are by exact, case-sensitive identifier text.
pub mod constants;
pub mod exponential;
pub mod trig;

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

pub type Function = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

#[derive(Clone, Default)]
pub struct Registry {
    constants: HashMap<String, f64>,
    functions: HashMap<String, Function>,
}

static STANDARD: LazyLock<Registry> = LazyLock::new(Registry::standard);

impl Registry {
    /// Creates a registry with no constants and no functions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding `pi`, `e`, `sin`, `cos`, `tan`, `sqrt` and `exp`.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        register_all(&mut registry);
        registry
    }

    /// The process-wide standard registry.
    pub fn shared() -> &'static Registry {
        &STANDARD
    }

    pub fn register_constant(&mut self, name: &str, value: f64) {
        self.constants.insert(name.to_string(), value);
    }

    pub fn register_function<F>(&mut self, name: &str, function: F)
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.functions.insert(name.to_string(), Arc::new(function));
    }

    pub fn constant(&self, name: &str) -> Option<f64> {
        self.constants.get(name).copied()
    }

    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut functions: Vec<&String> = self.functions.keys().collect();
        functions.sort();
        f.debug_struct("Registry")
            .field("constants", &self.constants)
            .field("functions", &functions)
            .finish()
    }
}

pub fn register_all(registry: &mut Registry) {
    constants::register(registry);
    trig::register(registry);
    exponential::register(registry);
}
