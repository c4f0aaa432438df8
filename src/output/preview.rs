//! Human-readable HTML preview output
//!
//! The preview is a fixed template with two placeholders: `{PREVIEW}` takes
//! the extracted text with newlines turned into line breaks, `{URL}` takes
//! the source page URL. The template file is read on every write so it can
//! be edited between pages without restarting a long crawl.

use std::path::Path;

/// Renders the template with the extracted text and source URL
pub fn render_preview(template: &str, text: &str, url: &str) -> String {
    let content_html = text.replace('\n', "</br>");
    template
        .replace("{PREVIEW}", &content_html)
        .replace("{URL}", url)
}

/// Writes the preview document for one page
pub fn write_preview(
    template_path: &Path,
    out_path: &Path,
    text: &str,
    url: &str,
) -> std::io::Result<()> {
    let template = std::fs::read_to_string(template_path)?;
    std::fs::write(out_path, render_preview(&template, text, url))
}
