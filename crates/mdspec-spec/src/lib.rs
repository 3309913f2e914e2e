//! API specification document model.
//!
//! Loads a JSON spec, defaults `info` and `paths`, and checks that every
//! section the merge and scaffold walkers touch is an object. Also holds the
//! table of code-sample languages and their file extensions.

pub mod error;
pub mod model;
pub mod parser;

pub use error::SpecError;
pub use model::{CodeSample, Language, OperationKey, UnknownLanguage};
pub use parser::{parse_spec, parse_spec_file, SpecDocument};
