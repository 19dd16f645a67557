// Tue Feb 3 2026 - Alex

use super::enums::EnumDef;
use super::function::{self, Function};
use super::structs::StructDef;
use super::variable::Variable;

/// A named grouping of symbols belonging to one logical subsystem of the
/// target program. Created lazily the first time any entity references its
/// name; never merged or deleted.
#[derive(Debug, Clone, Default)]
pub struct Module {
    pub name: String,
    pub enums: Vec<EnumDef>,
    pub structs: Vec<StructDef>,
    /// Free variables, not inside any structure.
    pub variables: Vec<Variable>,
    /// Free functions.
    pub functions: Vec<Function>,
    /// Human-readable diagnostics for rows dropped during ingestion.
    pub warnings: Vec<String>,
}

impl Module {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn add_function(&mut self, function: Function) {
        function::add_to(&mut self.functions, function);
    }

    pub fn add_variable(&mut self, variable: Variable) {
        self.variables.push(variable);
    }

    pub fn warn(&mut self, message: String) {
        self.warnings.push(message);
    }

    /// Locate a variable by its base-build address, searching free variables
    /// and every structure's static members.
    pub fn variable_by_address_mut(&mut self, base_address: u64) -> Option<&mut Variable> {
        if let Some(v) = self
            .variables
            .iter_mut()
            .find(|v| v.base_address() == base_address)
        {
            return Some(v);
        }
        for s in &mut self.structs {
            if let Some(v) = s
                .variables
                .iter_mut()
                .find(|v| v.base_address() == base_address)
            {
                return Some(v);
            }
        }
        None
    }

    /// Locate a function by its base-build address, searching free functions
    /// and every structure's methods.
    pub fn function_by_address_mut(&mut self, base_address: u64) -> Option<&mut Function> {
        if let Some(f) = self
            .functions
            .iter_mut()
            .find(|f| f.base_address() == base_address)
        {
            return Some(f);
        }
        for s in &mut self.structs {
            if let Some(f) = s
                .functions
                .iter_mut()
                .find(|f| f.base_address() == base_address)
            {
                return Some(f);
            }
        }
        None
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len() + self.structs.iter().map(|s| s.variables.len()).sum::<usize>()
    }

    pub fn function_count(&self) -> usize {
        self.functions.len() + self.structs.iter().map(|s| s.functions.len()).sum::<usize>()
    }
}
