use std::collections::HashMap;

use lazy_static::lazy_static;
use tracing::debug;

use crate::core::{DataType, ReflectError, Result, TypeDescriptor};

/// Maps fully-qualified type names to the element kinds a list can hold.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<String, DataType>,
}

// Read-only default registry shared by `resolve_type`
lazy_static! {
    static ref GLOBAL_TYPE_REGISTRY: TypeRegistry = TypeRegistry::with_defaults();
}

const DEFAULT_TYPES: &[(&str, DataType)] = &[
    ("System.Int32", DataType::Integer),
    ("System.Int64", DataType::Integer),
    ("java.lang.Integer", DataType::Integer),
    ("java.lang.Long", DataType::Integer),
    ("int", DataType::Integer),
    ("i64", DataType::Integer),
    ("System.Double", DataType::Float),
    ("java.lang.Double", DataType::Float),
    ("float64", DataType::Float),
    ("f64", DataType::Float),
    ("System.String", DataType::Text),
    ("java.lang.String", DataType::Text),
    ("string", DataType::Text),
    ("String", DataType::Text),
    ("System.Boolean", DataType::Boolean),
    ("java.lang.Boolean", DataType::Boolean),
    ("bool", DataType::Boolean),
];

impl TypeRegistry {
    /// An empty registry. Every lookup fails until names are registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry preloaded with the .NET, Java, Go and Rust spellings of the
    /// supported element types.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (name, data_type) in DEFAULT_TYPES {
            registry.register(*name, *data_type);
        }
        registry
    }

    /// The shared default registry.
    pub fn global() -> &'static TypeRegistry {
        &GLOBAL_TYPE_REGISTRY
    }

    /// Adds `name` as an alias for `data_type`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, data_type: DataType) {
        self.types.insert(name.into(), data_type);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Looks up `name` exactly as given (case-sensitive, no trimming).
    pub fn resolve(&self, name: &str) -> Result<TypeDescriptor> {
        let data_type = self
            .types
            .get(name)
            .copied()
            .ok_or_else(|| ReflectError::UnknownType(name.to_string()))?;

        debug!(type_name = name, %data_type, "resolved type");
        Ok(TypeDescriptor::new(name, data_type))
    }
}

/// Resolves `name` against the default registry.
pub fn resolve_type(name: &str) -> Result<TypeDescriptor> {
    TypeRegistry::global().resolve(name)
}
