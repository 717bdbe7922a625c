//! Output writers for the build command.
//!
//! - **Feed**: RSS/Atom feed for blog readers (`rss.xml`)
//! - **Sitemap**: search engine indexing (`sitemap.xml`)
//! - **Manifest**: web app manifest (`manifest.webmanifest`)
//!
//! All of them work from the queried post list and the site config.

pub mod feed;
pub mod manifest;
pub mod sitemap;

use std::borrow::Cow;

/// Minify XML content if enabled.
///
/// Non UTF-8 input is returned as-is.
pub fn minify_xml(content: &[u8], enabled: bool) -> Cow<'_, [u8]> {
    if !enabled {
        return Cow::Borrowed(content);
    }
    let Ok(xml_str) = std::str::from_utf8(content) else {
        return Cow::Borrowed(content);
    };

    let minified = xml_str
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("");
    Cow::Owned(minified.into_bytes())
}
