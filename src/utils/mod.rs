pub mod constants;
pub mod string_utils;
pub mod url_utils;

pub use constants::*;
pub use string_utils::{safe_truncate_chars, sanitize_dirname};
pub use url_utils::{is_absolute_http, resolve_reference};
