//! Content module - question packs in and session reports out
//!
//! The only place serde types live. Core questions never carry
//! serialization concerns; this module maps documents to them at the
//! boundary and validates on the way in.

pub mod builtin;
pub mod pack;
pub mod report;

pub use builtin::{builtin_pack, builtin_questions};
pub use pack::{load_pack, parse_pack, LoadedPack, PackError};
pub use report::SessionReport;
