// Tue Feb 3 2026 - Alex

use super::module::Module;
use super::structs::StructDef;
use indexmap::IndexMap;

/// Non-owning handle to a structure anywhere in the registry: the index of
/// its owning module plus its index within that module. Stable during a
/// load, since modules and structures are only ever appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StructKey {
    pub module: usize,
    pub index: usize,
}

/// The per-run symbol forest: every module loaded for one target program,
/// in discovery order. Passed explicitly through the pipeline stages;
/// "find module or create it" is an upsert here.
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    modules: IndexMap<String, Module>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self {
            modules: IndexMap::new(),
        }
    }

    /// Index of the named module, creating an empty one on first reference.
    pub fn find_or_create(&mut self, name: &str) -> usize {
        if let Some(index) = self.modules.get_index_of(name) {
            return index;
        }
        let (index, _) = self.modules.insert_full(name.to_string(), Module::new(name));
        index
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.modules.get_index_of(name)
    }

    pub fn get(&self, index: usize) -> Option<&Module> {
        self.modules.get_index(index).map(|(_, m)| m)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Module> {
        self.modules.get_index_mut(index).map(|(_, m)| m)
    }

    pub fn by_name(&self, name: &str) -> Option<&Module> {
        self.modules.get(name)
    }

    pub fn structure(&self, key: StructKey) -> Option<&StructDef> {
        self.get(key.module).and_then(|m| m.structs.get(key.index))
    }

    pub fn structure_mut(&mut self, key: StructKey) -> Option<&mut StructDef> {
        self.get_mut(key.module)
            .and_then(|m| m.structs.get_mut(key.index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Module> {
        self.modules.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Module> {
        self.modules.values_mut()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_or_create_is_upsert() {
        let mut registry = ModuleRegistry::new();
        let a = registry.find_or_create("core");
        let b = registry.find_or_create("vehicle");
        let again = registry.find_or_create("core");

        assert_eq!(a, again);
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(a).map(|m| m.name.as_str()), Some("core"));
    }

    #[test]
    fn test_struct_handles() {
        let mut registry = ModuleRegistry::new();
        let idx = registry.find_or_create("core");
        registry
            .get_mut(idx)
            .unwrap()
            .structs
            .push(StructDef::new("CTimer", "", "core"));

        let key = StructKey { module: idx, index: 0 };
        assert_eq!(
            registry.structure(key).map(|s| s.name.as_str()),
            Some("CTimer")
        );
        assert!(registry.structure(StructKey { module: idx, index: 5 }).is_none());
    }
}
