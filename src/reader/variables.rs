// Thu Feb 5 2026 - Alex

use super::csv;
use crate::model::{ModuleRegistry, TypeDesc, Variable};
use crate::resolve::find_or_create_struct;
use crate::utils::string::{break_at_last, parse_flag, parse_number};

/// Base-build variable table. Row columns:
/// address, module, mangled name, demangled name, type, raw type, size,
/// default values, comment, read-only flag.
pub fn read_base(registry: &mut ModuleRegistry, content: &str, version_count: usize) {
    for line in csv::read_lines(content) {
        let row = csv::split_row(line);
        let address = csv::column(&row, 0);
        let module_name = csv::column(&row, 1);
        if module_name.is_empty() {
            continue;
        }
        let module_index = registry.find_or_create(module_name);

        let demangled = csv::column(&row, 3);
        let raw_type = csv::column(&row, 5);
        let effective_type = if raw_type.is_empty() {
            csv::column(&row, 4)
        } else {
            raw_type
        };

        if effective_type.is_empty() || demangled.is_empty() {
            let message = format!(
                "wrong variable '({}) {}' (address {})",
                if effective_type.is_empty() { "<no-type>" } else { effective_type },
                if demangled.is_empty() { "<no-name>" } else { demangled },
                address
            );
            if let Some(module) = registry.get_mut(module_index) {
                module.warn(message);
            }
            continue;
        }

        let (scope, name) = break_at_last(demangled, "::");
        let mut variable = Variable::new(&name, version_count);
        variable.mangled_name = csv::column(&row, 2).to_string();
        variable.module_name = module_name.to_string();
        variable.scope = scope.clone();
        variable.type_desc = TypeDesc::parse(effective_type);
        variable.size = parse_number(csv::column(&row, 6)) as u32;
        variable.default_values = csv::column(&row, 7).to_string();
        variable.comment = csv::column(&row, 8).to_string();
        variable.is_read_only = parse_flag(csv::column(&row, 9));
        if let Some(slot) = variable.versions.get_mut(0) {
            slot.address = parse_number(address);
        }

        if scope.is_empty() {
            if let Some(module) = registry.get_mut(module_index) {
                module.add_variable(variable);
            }
        } else {
            let key = find_or_create_struct(registry, module_index, &scope);
            if let Some(owner) = registry.structure_mut(key) {
                owner.add_variable(variable);
            }
        }
    }
}

/// Diff-build variable table: base address, new address, reference list.
/// Rows whose base address matches no known variable are stale and dropped
/// without a warning.
pub fn read_diff(registry: &mut ModuleRegistry, content: &str, slot: usize) {
    for line in csv::read_lines(content) {
        let row = csv::split_row(line);
        let new_address = parse_number(csv::column(&row, 1));
        if new_address == 0 {
            continue;
        }
        let base_address = parse_number(csv::column(&row, 0));
        if base_address == 0 {
            continue;
        }
        let refs = csv::column(&row, 2);

        // Addresses are module-unique, so the first match ends the scan.
        for module in registry.iter_mut() {
            if let Some(variable) = module.variable_by_address_mut(base_address) {
                if let Some(record) = variable.versions.get_mut(slot) {
                    record.address = new_address;
                    record.refs = refs.to_string();
                }
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "\
0x8580C8,core,?ms_fTimeScale@CTimer@@2MA,CTimer::ms_fTimeScale,float,,4,,time scale,0
0xC0BC15,core,_gbCheatsEnabled,gbCheatsEnabled,bool,,1,,,0
0x866D78,core,?ms_axes@CPad@@2PAHA,CPad::ms_axes,int[4],int *,16,,,1
";

    #[test]
    fn test_base_placement() {
        let mut registry = ModuleRegistry::new();
        read_base(&mut registry, BASE, 2);

        let core = registry.by_name("core").unwrap();
        // free variable lands on the module
        assert_eq!(core.variables.len(), 1);
        assert_eq!(core.variables[0].name, "gbCheatsEnabled");

        // scoped variables land on auto-created class structures
        assert_eq!(core.structs.len(), 2);
        let timer = core.structs.iter().find(|s| s.name == "CTimer").unwrap();
        assert_eq!(timer.variables.len(), 1);
        let v = &timer.variables[0];
        assert_eq!(v.name, "ms_fTimeScale");
        assert_eq!(v.scope, "CTimer");
        assert_eq!(v.type_desc.name, "float");
        assert_eq!(v.size, 4);
        assert_eq!(v.base_address(), 0x8580C8);
        assert!(!v.is_read_only);
    }

    #[test]
    fn test_raw_type_overrides_declared_type() {
        let mut registry = ModuleRegistry::new();
        read_base(&mut registry, BASE, 2);

        let core = registry.by_name("core").unwrap();
        let pad = core.structs.iter().find(|s| s.name == "CPad").unwrap();
        let v = &pad.variables[0];
        assert_eq!(v.type_desc.name, "int");
        assert!(v.type_desc.ends_with_pointer());
        assert!(v.is_read_only);
    }

    #[test]
    fn test_malformed_row_warns_and_is_dropped() {
        let mut registry = ModuleRegistry::new();
        read_base(&mut registry, "0x1000,core,_mangled,,int,,4,,,0\n", 1);

        let core = registry.by_name("core").unwrap();
        assert!(core.variables.is_empty());
        assert_eq!(core.warnings.len(), 1);
        assert!(core.warnings[0].contains("<no-name>"));
        assert!(core.warnings[0].contains("0x1000"));
    }

    #[test]
    fn test_diff_merge_and_silent_skip() {
        let mut registry = ModuleRegistry::new();
        read_base(&mut registry, BASE, 2);

        read_diff(
            &mut registry,
            "0x8580C8,0x9580C8,\n0xDEAD00,0x1,\n,0x2,\n",
            1,
        );

        let core = registry.by_name("core").unwrap();
        let timer = core.structs.iter().find(|s| s.name == "CTimer").unwrap();
        let v = &timer.variables[0];
        assert_eq!(v.versions.get(0).unwrap().address, 0x8580C8);
        assert_eq!(v.versions.get(1).unwrap().address, 0x9580C8);
        // stale row added nothing and raised no warning
        assert!(core.warnings.is_empty());
    }
}
