// Thu Feb 5 2026 - Alex

use crate::model::{ModuleRegistry, StructDef, StructKey, StructKind};
use crate::utils::string::break_at_last;

/// Find the structure whose qualified path matches `path`, searching the
/// given module first (nested structures included, their scope carries the
/// full path) and, when `deep` is set, every other loaded module.
pub fn find_struct(
    registry: &ModuleRegistry,
    module_index: usize,
    path: &str,
    deep: bool,
) -> Option<StructKey> {
    if let Some(module) = registry.get(module_index) {
        for (index, s) in module.structs.iter().enumerate() {
            if s.full_name() == path {
                return Some(StructKey {
                    module: module_index,
                    index,
                });
            }
        }
    }
    if deep {
        for (other, module) in registry.iter().enumerate() {
            if other == module_index {
                continue;
            }
            for (index, s) in module.structs.iter().enumerate() {
                if s.full_name() == path {
                    return Some(StructKey {
                        module: other,
                        index,
                    });
                }
            }
        }
    }
    None
}

/// Resolve a scope path to its owning structure, creating an empty
/// class-kind structure (and any missing intermediate scopes) in the
/// referencing module when no loaded module has one. Guarantees every
/// function or variable with a class scope lands on some structure, even
/// when no structure data was ever emitted for that class.
pub fn find_or_create_struct(
    registry: &mut ModuleRegistry,
    module_index: usize,
    path: &str,
) -> StructKey {
    if let Some(key) = find_struct(registry, module_index, path, true) {
        return key;
    }

    let (parent_scope, leaf) = break_at_last(path, "::");
    if !parent_scope.is_empty() {
        find_or_create_struct(registry, module_index, &parent_scope);
    }

    let module_name = registry
        .get(module_index)
        .map(|m| m.name.clone())
        .unwrap_or_default();
    let mut created = StructDef::new(&leaf, &parent_scope, &module_name);
    created.kind = StructKind::Class;

    match registry.get_mut(module_index) {
        Some(module) => {
            module.structs.push(created);
            StructKey {
                module: module_index,
                index: module.structs.len() - 1,
            }
        }
        // Unreachable with a valid module index; return a key that will
        // simply fail lookups rather than panic.
        None => StructKey {
            module: module_index,
            index: usize::MAX,
        },
    }
}
