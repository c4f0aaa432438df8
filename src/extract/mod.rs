//! Content extraction for forum thread pages
//!
//! This module turns a fetched HTML document into structured post content:
//! - Forum section name from the page title
//! - Keyword tags from the keywords meta element
//! - Post body text with presentation noise removed and TeX math
//!   rewritten into canonical `[imath]...[/imath]` markers

mod content;
pub mod tex;

pub use content::{extract_content, ExtractedContent};
pub use tex::{normalize_math, replace_display_tex, replace_dollar_tex, replace_inline_tex};
