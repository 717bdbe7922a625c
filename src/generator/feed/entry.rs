//! Post → feed entry serialization.
//!
//! Pure mapping from the queried post list to syndication entries. Output
//! order and length always match the input; nothing is validated here.

use crate::config::SiteInfoConfig;
use crate::utils::html;
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;

/// Site-level fields the serializer needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMetadata {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Absolute site URL, expected without trailing slash.
    #[serde(default)]
    pub site_url: String,
}

impl SiteMetadata {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        site_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            site_url: site_url.into(),
        }
    }

    /// Fill empty fields from another metadata source.
    pub fn or(mut self, other: Option<&SiteMetadata>) -> Self {
        let Some(other) = other else {
            return self;
        };
        if self.title.is_empty() {
            self.title.clone_from(&other.title);
        }
        if self.description.is_empty() {
            self.description.clone_from(&other.description);
        }
        if self.site_url.is_empty() {
            self.site_url.clone_from(&other.site_url);
        }
        self
    }
}

impl From<&SiteInfoConfig> for SiteMetadata {
    fn from(info: &SiteInfoConfig) -> Self {
        Self {
            title: info.title.clone(),
            description: info.description.clone(),
            site_url: info.url.clone().unwrap_or_default(),
        }
    }
}

/// One post as returned by the content query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub title: String,
    /// Pre-formatted, e.g. "January 1, 2023".
    pub date: String,
    /// Plain text; absent or `null` reads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub excerpt: String,
    /// Site-relative path with leading `/`.
    pub slug: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Extension elements attached to an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CustomElement {
    #[serde(rename = "content:encoded")]
    ContentEncoded(String),
}

/// One syndication feed item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedEntry {
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub url: String,
    /// Always equal to `url`.
    pub guid: String,
    pub custom_elements: Vec<CustomElement>,
}

impl FeedEntry {
    /// HTML fragment for `content:encoded`.
    pub fn content_encoded(&self) -> Option<&str> {
        self.custom_elements.iter().find_map(|el| match el {
            CustomElement::ContentEncoded(html) => Some(html.as_str()),
        })
    }
}

/// How excerpt and url are embedded in the HTML fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentEscape {
    /// Embed verbatim.
    #[default]
    None,
    /// HTML-escape excerpt (text) and url (attribute).
    Html,
}

impl From<bool> for ContentEscape {
    fn from(escape: bool) -> Self {
        if escape { Self::Html } else { Self::None }
    }
}

/// Map posts to feed entries, embedding excerpt and url verbatim.
pub fn serialize_posts(site: &SiteMetadata, posts: &[PostRecord]) -> Vec<FeedEntry> {
    serialize_posts_with(site, posts, ContentEscape::None)
}

/// Map posts to feed entries with the given escaping for the HTML fragment.
pub fn serialize_posts_with(
    site: &SiteMetadata,
    posts: &[PostRecord],
    escape: ContentEscape,
) -> Vec<FeedEntry> {
    posts
        .iter()
        .map(|post| post_to_entry(site, post, escape))
        .collect()
}

fn post_to_entry(site: &SiteMetadata, post: &PostRecord, escape: ContentEscape) -> FeedEntry {
    let url = format!("{}{}", site.site_url, post.slug);
    let content = render_content(&post.excerpt, &url, escape);

    FeedEntry {
        title: post.title.clone(),
        date: post.date.clone(),
        excerpt: post.excerpt.clone(),
        guid: url.clone(),
        url,
        custom_elements: vec![CustomElement::ContentEncoded(content)],
    }
}

/// Render the `content:encoded` fragment: excerpt paragraph, then a
/// "Keep reading" link to the post.
pub fn render_content(excerpt: &str, url: &str, escape: ContentEscape) -> String {
    let (excerpt, url) = match escape {
        ContentEscape::None => (Cow::Borrowed(excerpt), Cow::Borrowed(url)),
        ContentEscape::Html => (html::escape(excerpt), html::escape_attr(url)),
    };

    format!(
        r#"<p>{excerpt}</p><div style="margin-top: 50px; font-style: italic;"><strong><a href="{url}">Keep reading</a>.</strong></div><br /> <br />"#
    )
}
