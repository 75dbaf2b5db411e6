//! Validation of incoming record, comment and registration payloads
//!
//! Drafts arrive as loosely typed JSON (every field optional) and are checked
//! field by field. All failures for one payload are collected and reported
//! together before anything is written.

pub mod extractor;
pub mod validators;

pub use extractor::JsonBody;
pub use validators::FieldChecks;
