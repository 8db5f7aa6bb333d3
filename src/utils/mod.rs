pub mod constants;
pub mod string_utils;
pub mod url_utils;

pub use constants::*;
pub use string_utils::{safe_file_stem, safe_truncate_chars, summary_snippet};
pub use url_utils::{is_valid_url, resolve_href};
