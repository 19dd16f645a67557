// Tue Feb 3 2026 - Alex

use super::function::{self, Function};
use super::registry::StructKey;
use super::types::TypeDesc;
use super::variable::Variable;

/// Aggregate kind as recorded in the structured format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StructKind {
    Struct,
    Union,
    #[default]
    Class,
}

impl StructKind {
    /// Three-way closed choice; anything unrecognized is treated as class.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "struct" => StructKind::Struct,
            "union" => StructKind::Union,
            _ => StructKind::Class,
        }
    }
}

/// One data member of a structure layout.
#[derive(Debug, Clone, Default)]
pub struct StructMember {
    /// Empty if anonymous.
    pub name: String,
    pub type_desc: TypeDesc,
    pub offset: u32,
    pub size: u32,
    pub comment: String,
    /// Member at offset 0 holding the base-class subobject.
    pub is_base: bool,
    /// Skipped at emission time (synthetic members such as the vtable slot).
    pub ignore: bool,
}

/// A structure layout recovered from the target binary. The parent link is
/// recorded by name at parse time and resolved to a registry handle by the
/// parent linker once all modules are loaded; the parent is owned by
/// whichever module loaded it.
#[derive(Debug, Clone, Default)]
pub struct StructDef {
    pub name: String,
    pub scope: String,
    pub module_name: String,
    pub kind: StructKind,
    pub size: u32,
    pub alignment: u32,
    pub is_anonymous: bool,
    pub vtable_address: u64,
    pub vtable_size: u32,
    pub has_vtable: bool,
    pub comment: String,
    pub parent_name: String,
    pub parent: Option<StructKey>,
    pub members: Vec<StructMember>,
    pub variables: Vec<Variable>,
    pub functions: Vec<Function>,
}

impl StructDef {
    pub fn new(name: &str, scope: &str, module_name: &str) -> Self {
        Self {
            name: name.to_string(),
            scope: scope.to_string(),
            module_name: module_name.to_string(),
            ..Default::default()
        }
    }

    pub fn full_name(&self) -> String {
        if self.scope.is_empty() {
            self.name.clone()
        } else {
            format!("{}::{}", self.scope, self.name)
        }
    }

    pub fn add_function(&mut self, function: Function) {
        function::add_to(&mut self.functions, function);
    }

    pub fn add_variable(&mut self, variable: Variable) {
        self.variables.push(variable);
    }
}
