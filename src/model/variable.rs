// Mon Feb 2 2026 - Alex

use super::types::TypeDesc;
use super::version::VersionTable;

/// A global variable or static class member.
#[derive(Debug, Clone)]
pub struct Variable {
    pub name: String,
    pub mangled_name: String,
    pub scope: String,
    pub module_name: String,
    pub type_desc: TypeDesc,
    pub size: u32,
    pub is_read_only: bool,
    pub default_values: String,
    pub comment: String,
    pub versions: VersionTable,
}

impl Variable {
    pub fn new(name: &str, version_count: usize) -> Self {
        Self {
            name: name.to_string(),
            mangled_name: String::new(),
            scope: String::new(),
            module_name: String::new(),
            type_desc: TypeDesc::default(),
            size: 0,
            is_read_only: false,
            default_values: String::new(),
            comment: String::new(),
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
}
