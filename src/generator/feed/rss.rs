//! RSS 2.0 feed generation.
//!
//! Each entry becomes an `<item>` whose `content:encoded` carries the
//! rendered fragment as CDATA.

use super::{FeedEntry, FeedHeader};
use crate::{log, utils::date::DateTimeUtc};
use rss::{Channel, ChannelBuilder, GuidBuilder, Item, ItemBuilder, validation::Validate};
use std::collections::BTreeMap;

const CONTENT_NS: &str = "http://purl.org/rss/1.0/modules/content/";

/// Render the RSS document.
///
/// Validation problems are reported as warnings; the document is still
/// produced so a malformed post does not block the whole build.
pub fn to_xml(header: &FeedHeader<'_>, entries: &[FeedEntry]) -> String {
    let channel = build_channel(header, entries);
    if let Err(e) = channel.validate() {
        log!("warning"; "RSS validation failed: {e}");
    }
    channel.to_string()
}

fn build_channel(header: &FeedHeader<'_>, entries: &[FeedEntry]) -> Channel {
    let namespaces = BTreeMap::from([("content".to_string(), CONTENT_NS.to_string())]);
    let items: Vec<Item> = entries.iter().map(entry_to_item).collect();

    ChannelBuilder::default()
        .namespaces(namespaces)
        .title(header.title)
        .link(header.site.site_url.as_str())
        .description(header.site.description.as_str())
        .language(header.language.to_string())
        .generator("quire".to_string())
        .items(items)
        .build()
}

fn entry_to_item(entry: &FeedEntry) -> Item {
    // Unparseable dates leave pubDate out rather than dropping the item
    let pub_date = DateTimeUtc::parse(&entry.date).map(DateTimeUtc::to_rfc2822);

    ItemBuilder::default()
        .title(entry.title.clone())
        .link(Some(entry.url.clone()))
        .guid(GuidBuilder::default().permalink(true).value(&entry.guid).build())
        .description(entry.excerpt.clone())
        .pub_date(pub_date)
        .content(entry.content_encoded().map(str::to_string))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::feed::{PostRecord, SiteMetadata, serialize_posts};
    use std::path::Path;

    fn site() -> SiteMetadata {
        SiteMetadata::new("Blog", "A blog", "https://example.com")
    }

    fn header(site: &SiteMetadata) -> FeedHeader<'_> {
        FeedHeader {
            title: &site.title,
            site,
            language: "en",
            path: Path::new("rss.xml"),
            author: "",
        }
    }

    fn post(title: &str, date: &str, slug: &str) -> PostRecord {
        PostRecord {
            title: title.into(),
            date: date.into(),
            excerpt: format!("{title} excerpt"),
            slug: slug.into(),
        }
    }

    fn render(posts: &[PostRecord]) -> String {
        let site = site();
        let entries = serialize_posts(&site, posts);
        to_xml(&header(&site), &entries)
    }

    #[test]
    fn test_channel_fields() {
        let xml = render(&[]);

        assert!(xml.contains("<title>Blog</title>"));
        assert!(xml.contains("<link>https://example.com</link>"));
        assert!(xml.contains("<description>A blog</description>"));
        assert!(xml.contains("<language>en</language>"));
        assert!(xml.contains("<generator>quire</generator>"));
        assert!(!xml.contains("<item>"));
    }

    #[test]
    fn test_content_namespace_declared() {
        let xml = render(&[]);
        assert!(xml.contains(r#"xmlns:content="http://purl.org/rss/1.0/modules/content/""#));
    }

    #[test]
    fn test_item_fields() {
        let site = site();
        let entries = serialize_posts(&site, &[post("Hello", "January 1, 2023", "/blog/hello")]);
        let item = entry_to_item(&entries[0]);

        assert_eq!(item.title(), Some("Hello"));
        assert_eq!(item.link(), Some("https://example.com/blog/hello"));
        assert_eq!(item.description(), Some("Hello excerpt"));
        assert_eq!(item.pub_date(), Some("Sun, 01 Jan 2023 00:00:00 GMT"));

        let guid = item.guid().unwrap();
        assert_eq!(guid.value(), "https://example.com/blog/hello");
        assert!(guid.is_permalink());
        assert_eq!(item.content(), entries[0].content_encoded());
    }

    #[test]
    fn test_content_encoded_is_cdata() {
        let xml = render(&[post("Hello", "January 1, 2023", "/blog/hello")]);
        assert!(xml.contains(
            r#"<content:encoded><![CDATA[<p>Hello excerpt</p><div style="margin-top: 50px; font-style: italic;"><strong><a href="https://example.com/blog/hello">Keep reading</a>.</strong></div><br /> <br />]]></content:encoded>"#
        ));
    }

    #[test]
    fn test_items_keep_order() {
        let xml = render(&[
            post("Newer", "February 2, 2023", "/blog/newer"),
            post("Older", "January 1, 2023", "/blog/older"),
        ]);

        let newer = xml.find("<title>Newer</title>").unwrap();
        let older = xml.find("<title>Older</title>").unwrap();
        assert!(newer < older);
        assert_eq!(xml.matches("<item>").count(), 2);
    }

    #[test]
    fn test_unparseable_date_omits_pub_date() {
        let site = site();
        let entries = serialize_posts(&site, &[post("Hello", "someday", "/blog/hello")]);
        let item = entry_to_item(&entries[0]);

        assert_eq!(item.pub_date(), None);
        assert_eq!(item.title(), Some("Hello"));
    }
}
