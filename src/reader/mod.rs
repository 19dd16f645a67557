// Thu Feb 5 2026 - Alex

pub mod csv;
pub mod error;
pub mod functions;
pub mod json;
pub mod variables;

pub use error::ReaderError;
