//! Hero section: title bar, certification badge preview, and main nav.

use serde::Deserialize;

use crate::content::{fetch_section, ContentSource};
use crate::lang::Language;
use crate::node::Node;

#[derive(Debug, Default, Deserialize)]
pub struct HeroContent {
    pub title: Option<String>,
    pub navigation: Option<Vec<NavEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct NavEntry {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub section: String,
}

const DEFAULT_TITLE: &str = "shehirian bulgor inc.";

/// Certification badges previewed in the hero, linking to the
/// certifications section.
const CERT_PREVIEW: [(&str, &str, &str); 4] = [
    ("BRC Global Standard", "assets/img/cert-brc.svg", "BRC Certification"),
    ("Safe Quality Food", "assets/img/cert-sqf.svg", "SQF Certification"),
    ("FSSC 22000", "assets/img/cert-fssc.svg", "FSSC 22000"),
    ("IFS Food Standard", "assets/img/cert-ifs.svg", "IFS Certification"),
];

fn default_navigation() -> Vec<NavEntry> {
    [
        ("Home", "home"),
        ("About", "about-us"),
        ("Products", "products-carousel"),
        ("Recipes", "recipes"),
        ("Certifications", "certifications"),
        ("Contact us", "contact"),
    ]
    .into_iter()
    .map(|(label, section)| NavEntry {
        label: label.to_string(),
        section: section.to_string(),
    })
    .collect()
}

pub async fn render<S: ContentSource>(source: &S, lang: Language) -> Option<Node> {
    let content: HeroContent = fetch_section(source, "hero", lang).await?;

    let mut section = Node::new("div").class("home").id("home");

    section.push_child(
        Node::new("div")
            .class("title")
            .text(content.title.unwrap_or_else(|| DEFAULT_TITLE.to_string())),
    );

    let mut preview = Node::new("div").class("certifications-preview");
    for (full_name, logo, alt) in CERT_PREVIEW {
        preview.push_child(
            Node::new("a")
                .attr("href", "#certifications")
                .class("cert-badge-small")
                .attr("title", full_name)
                .child(Node::new("img").attr("src", logo).attr("alt", alt)),
        );
    }
    section.push_child(preview);

    section.push_child(Node::new("div").class("mid-spacer"));

    let mut nav = Node::new("div").class("nav").id("main-nav");
    for entry in content.navigation.unwrap_or_else(default_navigation) {
        nav.push_child(
            Node::new("h2")
                .attr("data-section", entry.section)
                .text(entry.label),
        );
    }
    section.push_child(nav);

    Some(section)
}
