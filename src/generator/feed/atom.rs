//! Atom 1.0 feed generation.
//!
//! Same entries as the RSS writer: `summary` holds the excerpt and
//! `content` (type `html`) holds the rendered fragment.

use super::{FeedEntry, FeedHeader};
use crate::utils::date::DateTimeUtc;
use atom_syndication::{
    ContentBuilder, Entry, EntryBuilder, Feed, FeedBuilder, FixedDateTime, GeneratorBuilder, Link,
    LinkBuilder, Person, PersonBuilder, Text,
};

/// Render the Atom document.
pub fn to_xml(header: &FeedHeader<'_>, entries: &[FeedEntry]) -> String {
    build_feed(header, entries).to_string()
}

fn build_feed(header: &FeedHeader<'_>, entries: &[FeedEntry]) -> Feed {
    let site_url = header.site.site_url.as_str();
    let entries: Vec<Entry> = entries.iter().map(entry_to_atom).collect();

    // Most recent entry date; epoch when nothing parses
    let updated = entries
        .iter()
        .map(|entry| *entry.updated())
        .max()
        .unwrap_or_default();

    let self_link: Link = LinkBuilder::default()
        .href(format!(
            "{}/{}",
            site_url.trim_end_matches('/'),
            header.path.display()
        ))
        .rel("self".to_string())
        .mime_type(Some("application/atom+xml".to_string()))
        .build();

    let alternate_link: Link = LinkBuilder::default()
        .href(site_url.to_string())
        .rel("alternate".to_string())
        .build();

    let authors: Vec<Person> = if header.author.is_empty() {
        Vec::new()
    } else {
        vec![PersonBuilder::default().name(header.author.to_string()).build()]
    };

    FeedBuilder::default()
        .title(Text::plain(header.title.to_string()))
        .id(site_url)
        .updated(updated)
        .authors(authors)
        .links(vec![self_link, alternate_link])
        .subtitle(Some(Text::plain(header.site.description.clone())))
        .generator(Some(GeneratorBuilder::default().value("quire").build()))
        .lang(Some(header.language.to_string()))
        .entries(entries)
        .build()
}

fn entry_to_atom(entry: &FeedEntry) -> Entry {
    let link: Link = LinkBuilder::default()
        .href(entry.url.as_str())
        .rel("alternate".to_string())
        .build();

    let content = entry.content_encoded().map(|html| {
        ContentBuilder::default()
            .value(Some(html.to_string()))
            .content_type(Some("html".to_string()))
            .build()
    });

    EntryBuilder::default()
        .title(Text::plain(entry.title.clone()))
        .id(entry.guid.as_str())
        .updated(parse_updated(&entry.date))
        .links(vec![link])
        .summary(Some(Text::plain(entry.excerpt.clone())))
        .content(content)
        .build()
}

fn parse_updated(date: &str) -> FixedDateTime {
    DateTimeUtc::parse(date)
        .and_then(|dt| dt.to_rfc3339().parse().ok())
        .unwrap_or_default()
}
