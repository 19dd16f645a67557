// Mon Feb 2 2026 - Alex

/// One named constant inside an enumeration.
#[derive(Debug, Clone, Default)]
pub struct EnumMember {
    pub name: String,
    pub value: i64,
    pub comment: String,
}

/// An enumeration recovered from the target binary.
#[derive(Debug, Clone, Default)]
pub struct EnumDef {
    pub name: String,
    pub scope: String,
    pub module_name: String,
    pub width: u32,
    pub is_class: bool,
    pub is_hexadecimal: bool,
    pub is_signed: bool,
    pub is_bitfield: bool,
    pub comment: String,
    pub members: Vec<EnumMember>,
}

impl EnumDef {
    pub fn full_name(&self) -> String {
        if self.scope.is_empty() {
            self.name.clone()
        } else {
            format!("{}::{}", self.scope, self.name)
        }
    }
}
