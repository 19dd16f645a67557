// Thu Feb 5 2026 - Alex

pub mod parents;
pub mod scope;

pub use parents::link_parents;
pub use scope::{find_or_create_struct, find_struct};
