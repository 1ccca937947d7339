//! Built-in lints.

mod duplicate_field;
mod empty_description;
mod keyless_list;
mod unmatched_key;

pub use duplicate_field::DuplicateFieldLint;
pub use empty_description::EmptyDescriptionLint;
pub use keyless_list::KeylessListLint;
pub use unmatched_key::UnmatchedKeyLint;
