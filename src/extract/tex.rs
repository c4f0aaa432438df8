//! TeX region rewriting
//!
//! Forum posts carry math in three delimiter styles: display (`$$...$$` or
//! `\[...\]`), inline (`\(...\)`), and bare dollar (`$...$`). Each rewrite is
//! a pure, total text transform that wraps the math content in
//! `[imath]...[/imath]` markers, the canonical form downstream indexers
//! consume. The fixed application order display -> inline -> dollar matters:
//! the dollar pass must never see an unconsumed `$$` fence.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static DISPLAY_DOLLAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\$\$(.+?)\$\$").unwrap());
static DISPLAY_BRACKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\\\[(.+?)\\\]").unwrap());
static INLINE_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\\\((.+?)\\\)").unwrap());
static DOLLAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\$(.+?)\$").unwrap());

fn wrap(caps: &Captures) -> String {
    format!("[imath]{}[/imath]", caps[1].trim())
}

/// Rewrites display-math regions (`$$...$$` and `\[...\]`)
pub fn replace_display_tex(text: &str) -> String {
    let text = DISPLAY_DOLLAR.replace_all(text, wrap);
    DISPLAY_BRACKET.replace_all(&text, wrap).into_owned()
}

/// Rewrites inline-math regions (`\(...\)`)
pub fn replace_inline_tex(text: &str) -> String {
    INLINE_PAREN.replace_all(text, wrap).into_owned()
}

/// Rewrites dollar-delimited regions (`$...$`)
///
/// Must run after [`replace_display_tex`] so `$$` fences are already gone.
pub fn replace_dollar_tex(text: &str) -> String {
    DOLLAR.replace_all(text, wrap).into_owned()
}

/// Applies the three rewrites in their fixed order
pub fn normalize_math(text: &str) -> String {
    replace_dollar_tex(&replace_inline_tex(&replace_display_tex(text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dollar_region() {
        assert_eq!(
            normalize_math("some $x^2$ text"),
            "some [imath]x^2[/imath] text"
        );
    }

    #[test]
    fn test_dollar_region_whitespace_is_trimmed() {
        assert_eq!(
            normalize_math("some $ x^2 $ text"),
            "some [imath]x^2[/imath] text"
        );
    }

    #[test]
    fn test_display_dollar_region() {
        assert_eq!(
            normalize_math("before $$\\int_0^1 f$$ after"),
            "before [imath]\\int_0^1 f[/imath] after"
        );
    }

    #[test]
    fn test_display_bracket_region() {
        assert_eq!(
            normalize_math(r"see \[a+b\] here"),
            "see [imath]a+b[/imath] here"
        );
    }

    #[test]
    fn test_inline_paren_region() {
        assert_eq!(
            normalize_math(r"so \(e^{i\pi}\) equals"),
            "so [imath]e^{i\\pi}[/imath] equals"
        );
    }

    #[test]
    fn test_display_consumed_before_dollar() {
        // A lone dollar pass over "$$x$$" would produce a mangled "[imath]$x$[/imath]"
        // pair; the ordering guarantees the display pass wins.
        assert_eq!(normalize_math("$$x$$"), "[imath]x[/imath]");
    }

    #[test]
    fn test_multiline_region() {
        assert_eq!(
            normalize_math("$$a\n+b$$"),
            "[imath]a\n+b[/imath]"
        );
    }

    #[test]
    fn test_multiple_regions_in_one_line() {
        assert_eq!(
            normalize_math("$a$ and $b$"),
            "[imath]a[/imath] and [imath]b[/imath]"
        );
    }

    #[test]
    fn test_plain_text_is_untouched() {
        assert_eq!(normalize_math("price is 10 dollars"), "price is 10 dollars");
    }

    #[test]
    fn test_unpaired_dollar_is_untouched() {
        assert_eq!(normalize_math("costs $5 today"), "costs $5 today");
    }
}
