//! Sitemap parsing
//!
//! Parses the standard sitemap format (namespace
//! `http://www.sitemaps.org/schemas/sitemap/0.9`): a `<urlset>` of `<url>`
//! entries whose `<loc>` children name the crawlable pages. Entries are
//! returned in document order, which the crawl loop preserves.

use crate::SitemapError;
use quick_xml::events::Event;
use quick_xml::Reader;

/// Parses sitemap XML into the listed page URLs, in document order
///
/// Element names are matched by local name, so a namespace prefix on the
/// urlset does not change the result.
///
/// # Arguments
///
/// * `xml` - Raw sitemap document bytes
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Every `<loc>` value under a `<url>` entry
/// * `Err(SitemapError)` - The document is not well-formed XML
pub fn parse_sitemap(xml: &[u8]) -> Result<Vec<String>, SitemapError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut urls = Vec::new();
    let mut buf = Vec::new();
    let mut in_url = false;
    let mut in_loc = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"url" => in_url = true,
                b"loc" if in_url => in_loc = true,
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"url" => in_url = false,
                b"loc" => in_loc = false,
                _ => {}
            },
            Event::Text(e) => {
                if in_loc {
                    let loc = e.unescape().map_err(quick_xml::Error::from)?;
                    let loc = loc.trim();
                    if !loc.is_empty() {
                        urls.push(loc.to_string());
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(urls)
}
