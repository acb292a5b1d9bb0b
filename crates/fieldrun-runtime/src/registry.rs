//! Two-level resolver registry: type name -> field name -> resolver.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use fieldrun_types::ResolverKey;

use crate::error::RegistryError;
use crate::resolver::Resolver;

/// Resolvers for the fields of one object type.
pub type ObjectResolvers = HashMap<String, Arc<dyn Resolver>>;

/// Immutable lookup table of resolvers.
///
/// Built once at startup through [`RegistryBuilder`]; read-only afterwards,
/// so it can be shared behind an `Arc` without locking.
#[derive(Clone, Default)]
pub struct ResolverRegistry {
    types: HashMap<String, ObjectResolvers>,
}

impl ResolverRegistry {
    /// Starts an empty registry builder.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Looks up a resolver by type and field name.
    ///
    /// Returns `None` if either level is missing.
    pub fn get(&self, type_name: &str, field_name: &str) -> Option<&Arc<dyn Resolver>> {
        self.types.get(type_name)?.get(field_name)
    }

    /// Looks up a resolver by key.
    pub fn lookup(&self, key: &ResolverKey) -> Option<&Arc<dyn Resolver>> {
        self.get(key.type_name(), key.field_name())
    }

    /// Returns `true` if at least one field of `type_name` is registered.
    pub fn contains_type(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// All registered keys, sorted.
    pub fn keys(&self) -> Vec<ResolverKey> {
        let mut keys: Vec<ResolverKey> = self
            .types
            .iter()
            .flat_map(|(type_name, fields)| {
                fields.keys().filter_map(move |field| {
                    ResolverKey::new(type_name.as_str(), field.as_str()).ok()
                })
            })
            .collect();
        keys.sort();
        keys
    }

    /// Number of registered resolvers.
    pub fn len(&self) -> usize {
        self.types.values().map(HashMap::len).sum()
    }

    /// Returns `true` if no resolver is registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl fmt::Debug for ResolverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<String> = self.keys().iter().map(ToString::to_string).collect();
        f.debug_struct("ResolverRegistry")
            .field("resolvers", &keys)
            .finish()
    }
}

/// Collects resolvers, rejecting duplicate keys.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: ResolverRegistry,
}

impl RegistryBuilder {
    /// Registers `resolver` for `type_name.field_name`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateResolver` if the key is taken,
    /// `RegistryError::InvalidKey` if either name is empty or the type
    /// name contains `.`.
    pub fn register(
        self,
        type_name: &str,
        field_name: &str,
        resolver: impl Resolver + 'static,
    ) -> Result<Self, RegistryError> {
        let key = ResolverKey::new(type_name, field_name)?;
        self.register_shared(key, Arc::new(resolver))
    }

    /// Registers an already shared resolver under `key`.
    pub fn register_shared(
        mut self,
        key: ResolverKey,
        resolver: Arc<dyn Resolver>,
    ) -> Result<Self, RegistryError> {
        let fields = self
            .registry
            .types
            .entry(key.type_name().to_string())
            .or_default();
        if fields.contains_key(key.field_name()) {
            return Err(RegistryError::DuplicateResolver {
                key: key.to_string(),
            });
        }
        fields.insert(key.field_name().to_string(), resolver);
        debug!(%key, "registered resolver");
        Ok(self)
    }

    /// Finishes the registry.
    pub fn build(self) -> ResolverRegistry {
        self.registry
    }
}
