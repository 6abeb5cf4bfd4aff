//! String, character and JSON sugar

pub mod chars;
pub mod json;
pub mod strings;

pub use chars::CharExt;
pub use json::{from_json, from_json_file, from_json_overwrite, to_json, try_from_json};
pub use strings::StrExt;
