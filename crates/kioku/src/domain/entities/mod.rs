//! Domain Entities

mod prompt_record;

pub use prompt_record::*;
