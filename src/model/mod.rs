// Mon Feb 2 2026 - Alex

pub mod enums;
pub mod function;
pub mod module;
pub mod registry;
pub mod structs;
pub mod types;
pub mod variable;
pub mod version;

pub use enums::{EnumDef, EnumMember};
pub use function::{CallConv, Function, FunctionUsage, Parameter};
pub use module::Module;
pub use registry::{ModuleRegistry, StructKey};
pub use structs::{StructDef, StructKind, StructMember};
pub use types::{TypeDesc, TypeModifier};
pub use variable::Variable;
pub use version::{VersionRecord, VersionTable};
