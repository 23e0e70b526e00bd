//! Feed renderer
//!
//! Renders a feed document as RSS 2.0 or JSON Feed version 1.

use chrono::{DateTime, SecondsFormat, Utc};
use rss::{ChannelBuilder, GuidBuilder, Item, ItemBuilder};
use serde::Serialize;

use super::document::{FeedDocument, FeedItem};
use crate::domain::join_url;

const RSS_DOCS: &str = "https://validator.w3.org/feed/docs/rss2.html";
const JSON_FEED_VERSION: &str = "https://jsonfeed.org/version/1";
const GENERATOR: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

/// Render a feed as RSS 2.0
///
/// Item content goes out as `<content:encoded>` and the `content` namespace is
/// declared by the writer.
pub fn render_rss(feed: &FeedDocument) -> Result<String, rss::Error> {
    let meta = &feed.channel;
    let channel = ChannelBuilder::default()
        .title(meta.title.clone())
        .link(meta.link.clone())
        .description(meta.description.clone())
        .language(Some(meta.language.clone()))
        .copyright(Some(meta.copyright.clone()))
        .last_build_date(Some(rfc822(&meta.updated)))
        .docs(Some(RSS_DOCS.to_string()))
        .generator(Some(GENERATOR.to_string()))
        .items(feed.items.iter().map(rss_item).collect::<Vec<_>>())
        .build();

    let buf = channel.write_to(Vec::new())?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn rss_item(item: &FeedItem) -> Item {
    let guid = GuidBuilder::default()
        .value(item.id.clone())
        .permalink(false)
        .build();

    ItemBuilder::default()
        .title(Some(item.title.clone()))
        .link(Some(item.link.clone()))
        .guid(Some(guid))
        .pub_date(item.date.as_ref().map(rfc822))
        .content(Some(item.content.clone()))
        .build()
}

/// RFC 822 date in GMT, e.g. `Wed, 07 Jun 2023 00:00:00 GMT`
fn rfc822(date: &DateTime<Utc>) -> String {
    date.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

#[derive(Serialize)]
struct JsonFeed<'a> {
    version: &'static str,
    title: &'a str,
    home_page_url: &'a str,
    feed_url: String,
    description: &'a str,
    favicon: &'a str,
    items: Vec<JsonFeedItem<'a>>,
}

#[derive(Serialize)]
struct JsonFeedItem<'a> {
    id: &'a str,
    content_html: &'a str,
    url: &'a str,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_modified: Option<String>,
}

/// Render a feed as JSON Feed version 1
pub fn render_json(feed: &FeedDocument) -> Result<String, serde_json::Error> {
    let channel = &feed.channel;
    let document = JsonFeed {
        version: JSON_FEED_VERSION,
        title: &channel.title,
        home_page_url: &channel.link,
        feed_url: join_url(&channel.id, "json"),
        description: &channel.description,
        favicon: &channel.favicon,
        items: feed
            .items
            .iter()
            .map(|item| JsonFeedItem {
                id: &item.id,
                content_html: &item.content,
                url: &item.link,
                title: &item.title,
                date_modified: item
                    .date
                    .map(|d| d.to_rfc3339_opts(SecondsFormat::Millis, true)),
            })
            .collect(),
    };

    serde_json::to_string_pretty(&document)
}
