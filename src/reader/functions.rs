// Fri Feb 6 2026 - Alex

use super::csv;
use crate::model::types::{strip_raw_qualifier, TypeDesc, TypeModifier};
use crate::model::{CallConv, Function, FunctionUsage, ModuleRegistry, Parameter};
use crate::resolve::find_or_create_struct;
use crate::utils::string::{break_at_last, parse_flag, parse_int_or, parse_number};

/// Parameter serving as the return-value-optimization slot.
const RVO_PREFIX: &str = "ret_";
/// Pointer parameter that callers see as a reference.
const REF_PREFIX: &str = "ref_";
const THIS_NAME: &str = "this";
/// Itanium mangling suffixes for base and deleting destructors.
const BASE_DTOR_SUFFIX: &str = "D2Ev";
const DELETING_DTOR_SUFFIX: &str = "D0Ev";

/// Base-build function table. Row columns:
/// address, module, mangled name, demangled signature, declaration type,
/// calling convention, return type, parameters, const flag, reference list,
/// comment, priority, vtable index.
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
        let (cc, is_ellipsis) = parse_call_conv(csv::column(&row, 5));

        if demangled.is_empty() {
            let message = format!("function '{}' has no name", address);
            if let Some(module) = registry.get_mut(module_index) {
                module.warn(message);
            }
            continue;
        }
        if cc == CallConv::Unknown {
            // __usercall and friends are out of scope
            let message = format!(
                "function '{}' (address {}) has non-supported calling convention type",
                demangled, address
            );
            if let Some(module) = registry.get_mut(module_index) {
                module.warn(message);
            }
            continue;
        }

        // drop the parameter-list suffix of the demangled signature
        let signature = match demangled.find('(') {
            Some(pos) => &demangled[..pos],
            None => demangled,
        };
        let (scope, name) = break_at_last(signature, "::");

        let mut function = Function::new(&name, version_count);
        function.mangled_name = csv::column(&row, 2).to_string();
        function.module_name = module_name.to_string();
        function.scope = scope.clone();
        if !scope.is_empty() {
            let (_, class_name) = break_at_last(&scope, "::");
            function.class_name = class_name;
        }
        function.cc = cc;
        function.is_ellipsis = is_ellipsis;
        function.decl = csv::column(&row, 4).to_string();
        function.is_const = parse_flag(csv::column(&row, 8));
        function.comment = csv::column(&row, 10).to_string();
        function.priority = parse_int_or(csv::column(&row, 11), 1);
        function.vtable_index = parse_int_or(csv::column(&row, 12), -1);

        let (ret_type, _) = strip_raw_qualifier(csv::column(&row, 6));
        function.ret_type = TypeDesc::parse(ret_type);
        function.parameters = parse_parameters(csv::column(&row, 7));
        apply_parameter_conventions(&mut function);

        function.is_static = cc != CallConv::Thiscall && !function.class_name.is_empty();
        function.is_virtual = function.vtable_index != -1;
        function.usage = classify_usage(&function);
        if function.is_destructor() {
            function.name = format!("~{}", function.class_name);
        }

        if let Some(slot) = function.versions.get_mut(0) {
            slot.address = parse_number(address);
            slot.refs = csv::column(&row, 9).to_string();
        }

        if scope.is_empty() {
            if let Some(module) = registry.get_mut(module_index) {
                module.add_function(function);
            }
        } else {
            let key = find_or_create_struct(registry, module_index, &scope);
            if let Some(owner) = registry.structure_mut(key) {
                owner.add_function(function);
            }
        }
    }
}

/// Diff-build function table: base address, new address, reference list,
/// reference name. Unmatched base addresses are stale rows, dropped
/// silently.
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

        for module in registry.iter_mut() {
            if let Some(function) = module.function_by_address_mut(base_address) {
                if let Some(record) = function.versions.get_mut(slot) {
                    record.address = new_address;
                    record.refs = refs.to_string();
                }
                break;
            }
        }
    }
}

/// Closed lookup of the table's calling-convention tag. The bool is the
/// variadic flag (an `ellipsis` function is cdecl with `...`).
fn parse_call_conv(tag: &str) -> (CallConv, bool) {
    match tag {
        "thiscall" => (CallConv::Thiscall, false),
        "cdecl" | "voidarg" => (CallConv::Cdecl, false),
        "ellipsis" => (CallConv::Cdecl, true),
        _ => (CallConv::Unknown, false),
    }
}

/// Parse the positional parameter string, a space-separated sequence of
/// `[raw ]Type:name` tokens. Types may contain spaces; names may not, so
/// each token ends at the first space after its colon.
fn parse_parameters(text: &str) -> Vec<Parameter> {
    let mut parameters = Vec::new();
    let mut pos = 0;
    while let Some(rel) = text[pos..].find(':') {
        let colon = pos + rel;
        let (type_text, _) = strip_raw_qualifier(text[pos..colon].trim());
        let type_desc = TypeDesc::parse(type_text);
        match text[colon + 1..].find(' ') {
            None => {
                parameters.push(Parameter {
                    name: text[colon + 1..].trim().to_string(),
                    type_desc,
                });
                break;
            }
            Some(rel_space) => {
                let space = colon + 1 + rel_space;
                parameters.push(Parameter {
                    name: text[colon + 1..space].to_string(),
                    type_desc,
                });
                pos = space + 1;
            }
        }
    }
    parameters
}

/// Positional pass over the parsed parameter list: rename the this
/// pointer, synthesize names for unnamed parameters, designate the RVO
/// slot and rewrite `ref_` pointers into references. Also derives the
/// count of leading parameters a wrapper caller must not expose.
fn apply_parameter_conventions(function: &mut Function) {
    let is_thiscall = function.cc == CallConv::Thiscall;
    let rvo_candidate = if is_thiscall { 1 } else { 0 };
    let mut rvo_index = None;

    for i in 0..function.parameters.len() {
        let parameter = &mut function.parameters[i];
        if i == 0 && is_thiscall {
            parameter.name = THIS_NAME.to_string();
            continue;
        }
        if parameter.name.is_empty() {
            parameter.name = format!("arg{}", i + 1);
            continue;
        }
        if i == rvo_candidate && parameter.name.starts_with(RVO_PREFIX) {
            rvo_index = Some(i);
        } else if parameter.name.starts_with(REF_PREFIX)
            && parameter.type_desc.ends_with_pointer()
        {
            // rewrite requires a trailing pointer; otherwise it is a no-op
            parameter.type_desc.make_last_pointer_reference();
            parameter.name = parameter.name[REF_PREFIX.len()..].to_string();
        }
    }

    function.rvo_param_index = rvo_index;
    function.num_params_to_skip_for_wrapper = match rvo_index {
        Some(index) => index + 1,
        None if is_thiscall => 1,
        None => 0,
    };
}

/// Ordered decision sequence for the function's semantic role; first match
/// wins. Derived solely from class membership, naming, mangled-name suffix
/// and parameter shapes.
fn classify_usage(function: &Function) -> FunctionUsage {
    let in_class = !function.class_name.is_empty();

    if in_class && function.name == function.class_name {
        if function.parameters.len() == 1 {
            return FunctionUsage::DefaultConstructor;
        }
        if let Some(second) = function.parameters.get(1) {
            if second.type_desc.name == function.class_name
                && second.type_desc.modifiers == [TypeModifier::Reference]
            {
                return FunctionUsage::CopyConstructor;
            }
        }
        return FunctionUsage::CustomConstructor;
    }

    if in_class
        && (function.name == format!("_{}", function.class_name)
            || function.name == "destructor"
            || function.mangled_name.ends_with(BASE_DTOR_SUFFIX))
    {
        return FunctionUsage::BaseDestructor;
    }

    if in_class
        && (function.name == "deleting_destructor"
            || function.mangled_name.ends_with(DELETING_DTOR_SUFFIX))
    {
        return FunctionUsage::DeletingDestructor;
    }

    if let Some(rest) = function.name.strip_prefix("operator") {
        return match rest {
            " new" => FunctionUsage::OperatorNew,
            " delete" => FunctionUsage::OperatorDelete,
            _ => FunctionUsage::Operator,
        };
    }

    FunctionUsage::Default
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_one(row: &str) -> ModuleRegistry {
        let mut registry = ModuleRegistry::new();
        read_base(&mut registry, row, 2);
        registry
    }

    fn first_method<'a>(registry: &'a ModuleRegistry, class: &str) -> &'a Function {
        registry
            .iter()
            .flat_map(|m| m.structs.iter())
            .find(|s| s.name == class)
            .map(|s| &s.functions[0])
            .expect("method not found")
    }

    #[test]
    fn test_thiscall_member_end_to_end() {
        let registry = read_one(
            "1000,CORE,?foo@CFoo@@QAEXH@Z,CFoo::Foo(int),void (CFoo::*)(int),thiscall,void,CFoo*:this int*:ref_value,0,,,1,-1\n",
        );
        let f = first_method(&registry, "CFoo");

        assert_eq!(f.class_name, "CFoo");
        assert_eq!(f.name, "Foo");
        assert_eq!(f.cc, CallConv::Thiscall);
        assert_eq!(f.parameters[0].name, "this");
        assert_eq!(f.parameters[1].name, "value");
        assert_eq!(f.parameters[1].type_desc.to_string(), "int&");
        assert_eq!(f.usage, FunctionUsage::Default);
        assert_eq!(f.num_params_to_skip_for_wrapper, 1);
        assert!(!f.is_static);
        assert!(!f.is_virtual);
        assert_eq!(f.base_address(), 1000);
    }

    #[test]
    fn test_diff_merge_keeps_base_slot() {
        let mut registry = read_one(
            "1000,CORE,?foo@CFoo@@QAEXH@Z,CFoo::Foo(int),void (CFoo::*)(int),thiscall,void,CFoo*:this int*:ref_value,0,,,1,-1\n",
        );
        read_diff(&mut registry, "1000,2000,\n", 1);
        read_diff(&mut registry, "555,666,\n", 1);

        let f = first_method(&registry, "CFoo");
        assert_eq!(f.versions.get(0).unwrap().address, 1000);
        assert_eq!(f.versions.get(1).unwrap().address, 2000);
        assert!(registry.by_name("CORE").unwrap().warnings.is_empty());
    }

    #[test]
    fn test_this_rename_overrides_source_name() {
        let registry = read_one(
            "0x1000,veh,?Fix@CVehicle@@QAEXXZ,CVehicle::Fix(),void (CVehicle::*)(),thiscall,void,CVehicle*:self int:damage,0,,,1,-1\n",
        );
        let f = first_method(&registry, "CVehicle");
        assert_eq!(f.parameters[0].name, "this");
        assert_eq!(f.parameters[1].name, "damage");
    }

    #[test]
    fn test_unnamed_parameters_are_synthesized() {
        let registry = read_one(
            "0x2000,core,_DoSomething,\"DoSomething(int, float)\",\"void (*)(int, float)\",cdecl,void,int: float:,0,,,1,-1\n",
        );
        let core = registry.by_name("core").unwrap();
        let f = &core.functions[0];
        assert_eq!(f.parameters[0].name, "arg1");
        assert_eq!(f.parameters[1].name, "arg2");
        assert_eq!(f.num_params_to_skip_for_wrapper, 0);
    }

    #[test]
    fn test_rvo_slot_detection() {
        let registry = read_one(
            "0x3000,core,?GetPos@CEntity@@QAE?AVCVector@@XZ,CEntity::GetPos(),CVector (CEntity::*)(),thiscall,CVector,CEntity*:this CVector*:ret_pos,0,,,1,-1\n",
        );
        let f = first_method(&registry, "CEntity");
        assert_eq!(f.rvo_param_index, Some(1));
        assert_eq!(f.num_params_to_skip_for_wrapper, 2);
        // a designated RVO parameter keeps its prefix and pointer type
        assert_eq!(f.parameters[1].name, "ret_pos");
        assert_eq!(f.parameters[1].type_desc.to_string(), "CVector*");
    }

    #[test]
    fn test_ref_rewrite_is_noop_without_pointer() {
        let registry = read_one(
            "0x3100,core,_Clamp,Clamp(int),void (*)(int),cdecl,void,int:x int:ref_count,0,,,1,-1\n",
        );
        let f = &registry.by_name("core").unwrap().functions[0];
        assert_eq!(f.parameters[1].name, "ref_count");
        assert_eq!(f.parameters[1].type_desc.to_string(), "int");
    }

    #[test]
    fn test_constructor_classification() {
        let default_ctor = read_one(
            "0x4000,ped,??0CFoo@@QAE@XZ,CFoo::CFoo(),void (CFoo::*)(),thiscall,void,CFoo*:this,0,,,1,-1\n",
        );
        assert_eq!(
            first_method(&default_ctor, "CFoo").usage,
            FunctionUsage::DefaultConstructor
        );

        let copy_ctor = read_one(
            "0x4010,ped,??0CFoo@@QAE@ABV0@@Z,CFoo::CFoo(CFoo const&),void (CFoo::*)(CFoo const&),thiscall,void,CFoo*:this CFoo&:other,0,,,1,-1\n",
        );
        assert_eq!(
            first_method(&copy_ctor, "CFoo").usage,
            FunctionUsage::CopyConstructor
        );

        let custom_ctor = read_one(
            "0x4020,ped,??0CFoo@@QAE@H@Z,CFoo::CFoo(int),void (CFoo::*)(int),thiscall,void,CFoo*:this int:id,0,,,1,-1\n",
        );
        assert_eq!(
            first_method(&custom_ctor, "CFoo").usage,
            FunctionUsage::CustomConstructor
        );
    }

    #[test]
    fn test_destructor_classification_and_rename() {
        let by_name = read_one(
            "0x5000,ped,??1CFoo@@QAE@XZ,CFoo::_CFoo(),void (CFoo::*)(),thiscall,void,CFoo*:this,0,,,1,-1\n",
        );
        let f = first_method(&by_name, "CFoo");
        assert_eq!(f.usage, FunctionUsage::BaseDestructor);
        assert_eq!(f.name, "~CFoo");

        let by_mangling = read_one(
            "0x5010,ped,_ZN4CFooD2Ev,CFoo::destroy(),void (CFoo::*)(),thiscall,void,CFoo*:this,0,,,1,-1\n",
        );
        assert_eq!(
            first_method(&by_mangling, "CFoo").usage,
            FunctionUsage::BaseDestructor
        );

        let deleting = read_one(
            "0x5020,ped,_ZN4CFooD0Ev,CFoo::deleting_destructor(),void (CFoo::*)(),thiscall,void,CFoo*:this,0,,,1,-1\n",
        );
        let f = first_method(&deleting, "CFoo");
        assert_eq!(f.usage, FunctionUsage::DeletingDestructor);
        assert_eq!(f.name, "~CFoo");
    }

    #[test]
    fn test_operator_classification() {
        let op_new = read_one(
            "0x6000,core,??2@YAPAXI@Z,operator new(unsigned int),void* (*)(unsigned int),cdecl,void*,uint:size,0,,,1,-1\n",
        );
        assert_eq!(
            op_new.by_name("core").unwrap().functions[0].usage,
            FunctionUsage::OperatorNew
        );

        let op_delete = read_one(
            "0x6010,core,??3@YAXPAX@Z,operator delete(void*),void (*)(void*),cdecl,void,void*:ptr,0,,,1,-1\n",
        );
        assert_eq!(
            op_delete.by_name("core").unwrap().functions[0].usage,
            FunctionUsage::OperatorDelete
        );

        let op_eq = read_one(
            "0x6020,core,??4CFoo@@QAEAAV0@ABV0@@Z,CFoo::operator=(CFoo const&),CFoo& (CFoo::*)(CFoo const&),thiscall,CFoo&,CFoo*:this CFoo&:right,0,,,1,-1\n",
        );
        assert_eq!(
            first_method(&op_eq, "CFoo").usage,
            FunctionUsage::Operator
        );
    }

    #[test]
    fn test_static_and_virtual_attribution() {
        let static_fn = read_one(
            "0x7000,core,?Update@CTimer@@SAXXZ,CTimer::Update(),void (*)(),cdecl,void,,0,,,1,-1\n",
        );
        let f = first_method(&static_fn, "CTimer");
        assert!(f.is_static);
        assert!(!f.is_virtual);

        let virtual_fn = read_one(
            "0x7010,entity,?Render@CEntity@@UAEXXZ,CEntity::Render(),void (CEntity::*)(),thiscall,void,CEntity*:this,0,,,1,4\n",
        );
        let f = first_method(&virtual_fn, "CEntity");
        assert!(!f.is_static);
        assert!(f.is_virtual);
        assert_eq!(f.vtable_index, 4);
    }

    #[test]
    fn test_ellipsis_maps_to_variadic_cdecl() {
        let registry = read_one(
            "0x8000,core,_printf_like,\"DebugPrint(char const*, ...)\",\"void (*)(char const*, ...)\",ellipsis,void,char*:format,0,,,1,-1\n",
        );
        let f = &registry.by_name("core").unwrap().functions[0];
        assert_eq!(f.cc, CallConv::Cdecl);
        assert!(f.is_ellipsis);
    }

    #[test]
    fn test_rejected_rows_warn() {
        let mut registry = ModuleRegistry::new();
        read_base(
            &mut registry,
            "0x9000,core,_mangled,,void (*)(),cdecl,void,,0,,,1,-1\n\
             0x9010,core,_usercall,WeirdOne(),int (*)(),usercall,int,,0,,,1,-1\n",
            1,
        );
        let core = registry.by_name("core").unwrap();
        assert!(core.functions.is_empty());
        assert_eq!(core.warnings.len(), 2);
        assert!(core.warnings[0].contains("has no name"));
        assert!(core.warnings[1].contains("non-supported calling convention"));
    }

    #[test]
    fn test_parse_parameters_grammar() {
        let params = parse_parameters("raw CPool<CPed> *:pool int:value");
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].type_desc.to_string(), "CPool<CPed>*");
        assert_eq!(params[0].name, "pool");
        assert_eq!(params[1].type_desc.to_string(), "int");
        assert_eq!(params[1].name, "value");

        assert!(parse_parameters("").is_empty());
        assert!(parse_parameters("no colon here").is_empty());
    }

    #[test]
    fn test_overload_flag_on_name_collision() {
        let mut registry = ModuleRegistry::new();
        read_base(
            &mut registry,
            "0xA000,core,?Add@CPool@@QAEXH@Z,CPool::Add(int),void (CPool::*)(int),thiscall,void,CPool*:this int:value,0,,,1,-1\n\
             0xA010,core,?Add@CPool@@QAEXM@Z,CPool::Add(float),void (CPool::*)(float),thiscall,void,CPool*:this float:value,0,,,1,-1\n",
            1,
        );
        let pool = registry
            .iter()
            .flat_map(|m| m.structs.iter())
            .find(|s| s.name == "CPool")
            .unwrap();
        assert!(pool.functions[0].is_overloaded);
        assert!(pool.functions[1].is_overloaded);
    }
}
