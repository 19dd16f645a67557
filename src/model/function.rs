// Tue Feb 3 2026 - Alex

use super::types::TypeDesc;
use super::version::VersionTable;

/// Calling convention of a recovered function. Only the closed set the
/// tabular format can express; anything else comes through as Unknown and
/// the row is rejected with a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallConv {
    Cdecl,
    Stdcall,
    Fastcall,
    Thiscall,
    Unknown,
}

/// Semantic role of a function, inferred from class membership, naming and
/// signature shape. Stable after the base-version read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FunctionUsage {
    #[default]
    Default,
    DefaultConstructor,
    CustomConstructor,
    CopyConstructor,
    BaseDestructor,
    DeletingDestructor,
    Operator,
    OperatorNew,
    OperatorDelete,
}

#[derive(Debug, Clone, Default)]
pub struct Parameter {
    pub name: String,
    pub type_desc: TypeDesc,
}

/// A function recovered from the target binary, free or class member.
#[derive(Debug, Clone)]
pub struct Function {
    pub name: String,
    pub mangled_name: String,
    pub scope: String,
    pub class_name: String,
    pub module_name: String,
    pub cc: CallConv,
    pub ret_type: TypeDesc,
    pub is_const: bool,
    pub is_ellipsis: bool,
    pub is_overloaded: bool,
    pub is_static: bool,
    pub is_virtual: bool,
    pub vtable_index: i64,
    /// Index of the parameter serving as the return-value-optimization slot.
    pub rvo_param_index: Option<usize>,
    /// Leading parameters a wrapper caller must not expose (this pointer
    /// and/or RVO slot).
    pub num_params_to_skip_for_wrapper: usize,
    pub priority: i64,
    pub comment: String,
    /// Full declaration text as recovered from the table.
    pub decl: String,
    pub usage: FunctionUsage,
    pub parameters: Vec<Parameter>,
    pub versions: VersionTable,
}

impl Function {
    pub fn new(name: &str, version_count: usize) -> Self {
        Self {
            name: name.to_string(),
            mangled_name: String::new(),
            scope: String::new(),
            class_name: String::new(),
            module_name: String::new(),
            cc: CallConv::Cdecl,
            ret_type: TypeDesc::default(),
            is_const: false,
            is_ellipsis: false,
            is_overloaded: false,
            is_static: false,
            is_virtual: false,
            vtable_index: -1,
            rvo_param_index: None,
            num_params_to_skip_for_wrapper: 0,
            priority: 1,
            comment: String::new(),
            decl: String::new(),
            usage: FunctionUsage::Default,
            parameters: Vec::new(),
            versions: VersionTable::new(version_count),
        }
    }

    pub fn full_name(&self) -> String {
        if self.scope.is_empty() {
            self.name.clone()
        } else {
            format!("{}::{}", self.scope, self.name)
        }
    }

    pub fn base_address(&self) -> u64 {
        self.versions.base_address()
    }

    pub fn is_constructor(&self) -> bool {
        matches!(
            self.usage,
            FunctionUsage::DefaultConstructor
                | FunctionUsage::CustomConstructor
                | FunctionUsage::CopyConstructor
        )
    }

    pub fn is_destructor(&self) -> bool {
        matches!(
            self.usage,
            FunctionUsage::BaseDestructor | FunctionUsage::DeletingDestructor
        )
    }
}

/// Append a function, flagging both sides of any name collision as
/// overloaded.
pub(crate) fn add_to(list: &mut Vec<Function>, mut function: Function) {
    for existing in list.iter_mut() {
        if existing.name == function.name {
            existing.is_overloaded = true;
            function.is_overloaded = true;
        }
    }
    list.push(function);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_queries() {
        let mut f = Function::new("CFoo", 1);
        f.usage = FunctionUsage::CopyConstructor;
        assert!(f.is_constructor());
        assert!(!f.is_destructor());

        f.usage = FunctionUsage::DeletingDestructor;
        assert!(f.is_destructor());
    }

    #[test]
    fn test_overload_flagging() {
        let mut list = Vec::new();
        add_to(&mut list, Function::new("Render", 1));
        add_to(&mut list, Function::new("Update", 1));
        add_to(&mut list, Function::new("Render", 1));

        assert!(list[0].is_overloaded);
        assert!(!list[1].is_overloaded);
        assert!(list[2].is_overloaded);
    }
}
