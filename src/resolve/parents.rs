// Thu Feb 5 2026 - Alex

use super::scope;
use crate::model::ModuleRegistry;

/// Synthetic member holding the virtual-table pointer; derived, not
/// authored, so it must never reach emission.
const VTABLE_MEMBER: &str = "vtable";

/// Post-pass run once after all modules for a program are loaded: resolve
/// each structure's recorded parent name to the actual structure, wherever
/// it lives, and mark synthetic members as ignored. Idempotent and
/// order-independent; a parent name that resolves to nothing stays
/// unresolved.
pub fn link_parents(registry: &mut ModuleRegistry) {
    let mut pending = Vec::new();
    for (module_index, module) in registry.iter().enumerate() {
        for (index, s) in module.structs.iter().enumerate() {
            if !s.parent_name.is_empty() && s.parent.is_none() {
                pending.push((module_index, index, s.parent_name.clone()));
            }
        }
    }

    for (module_index, index, parent_name) in pending {
        let found = scope::find_struct(registry, module_index, &parent_name, true);
        if let Some(parent_key) = found {
            if let Some(module) = registry.get_mut(module_index) {
                if let Some(s) = module.structs.get_mut(index) {
                    s.parent = Some(parent_key);
                }
            }
        }
    }

    for module in registry.iter_mut() {
        for s in &mut module.structs {
            for member in &mut s.members {
                if member.name == VTABLE_MEMBER {
                    member.ignore = true;
                    break;
                }
            }
        }
    }
}
