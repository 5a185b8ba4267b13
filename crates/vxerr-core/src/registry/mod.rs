//! Error taxonomy registry.
//!
//! The registry is built from ordered layers. Layers are merged left to right
//! and a later layer replaces an earlier entry for the same code as a whole;
//! fields are never mixed between layers. The process-wide registry uses
//! `[APPLICATION, PLATFORM]`, so the platform layer is authoritative for codes
//! defined in both (e.g. `FUNCTION_THROTTLED`).
//!
//! Once built, a registry is never mutated; share it by `&Registry`.

mod data;
mod descriptor;

pub use data::{APPLICATION, PLATFORM};
pub use descriptor::{Category, ErrorDescriptor, UnknownCategory};

use std::collections::HashMap;
use std::sync::LazyLock;

/// A named, ordered group of descriptors.
#[derive(Debug, Clone, Copy)]
pub struct Layer {
    pub name: &'static str,
    pub entries: &'static [ErrorDescriptor],
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    descriptor: &'static ErrorDescriptor,
    layer: &'static str,
}

/// Immutable code -> descriptor lookup table.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: HashMap<&'static str, Slot>,
}

static GLOBAL: LazyLock<Registry> = LazyLock::new(|| {
    let registry = Registry::from_layers(&[APPLICATION, PLATFORM]);
    tracing::debug!(codes = registry.len(), "error registry built");
    registry
});

impl Registry {
    /// Merge layers in order; the last layer defining a code wins.
    pub fn from_layers(layers: &[Layer]) -> Self {
        let mut entries = HashMap::new();
        for layer in layers {
            for descriptor in layer.entries {
                let previous = entries.insert(
                    descriptor.code,
                    Slot {
                        descriptor,
                        layer: layer.name,
                    },
                );
                if let Some(prev) = previous {
                    tracing::trace!(
                        code = descriptor.code,
                        from = prev.layer,
                        to = layer.name,
                        "registry entry overridden"
                    );
                }
            }
        }
        Self { entries }
    }

    /// The process-wide registry (application layer, then platform layer).
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    pub fn lookup(&self, code: &str) -> Option<&'static ErrorDescriptor> {
        self.entries.get(code).map(|slot| slot.descriptor)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Name of the layer that supplied the winning entry for `code`.
    pub fn layer_of(&self, code: &str) -> Option<&'static str> {
        self.entries.get(code).map(|slot| slot.layer)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All descriptors, sorted by code.
    pub fn iter(&self) -> impl Iterator<Item = &'static ErrorDescriptor> {
        let mut all: Vec<&'static ErrorDescriptor> =
            self.entries.values().map(|slot| slot.descriptor).collect();
        all.sort_by_key(|d| d.code);
        all.into_iter()
    }
}
