//! About-us section: headline and a single paragraph.

use serde::Deserialize;

use crate::content::{fetch_section, ContentSource};
use crate::lang::Language;
use crate::node::Node;

#[derive(Debug, Default, Deserialize)]
pub struct AboutContent {
    pub headline: Option<String>,
    pub paragraph: Option<String>,
}

pub async fn render<S: ContentSource>(source: &S, lang: Language) -> Option<Node> {
    let content: AboutContent = fetch_section(source, "aboutUs", lang).await?;

    Some(
        Node::new("section")
            .class("about-us")
            .child(
                Node::new("h2").text(content.headline.unwrap_or_else(|| "About Us".to_string())),
            )
            .child(Node::new("p").text(content.paragraph.unwrap_or_default())),
    )
}
