//! Certifications section: a row of badge links with image and label.

use serde::Deserialize;

use crate::content::{fetch_section, ContentSource};
use crate::lang::Language;
use crate::node::Node;

#[derive(Debug, Default, Deserialize)]
pub struct CertificationsContent {
    pub title: Option<String>,
    pub intro: Option<String>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Certification {
    pub name: Option<String>,
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    pub logo: Option<String>,
}

pub async fn render<S: ContentSource>(source: &S, lang: Language) -> Option<Node> {
    let content: CertificationsContent = fetch_section(source, "certifications", lang).await?;

    let mut section = Node::new("section")
        .id("certifications")
        .class("certifications-section");

    section.push_child(
        Node::new("h2").text(
            content
                .title
                .unwrap_or_else(|| "Our Certifications".to_string()),
        ),
    );
    section.push_child(
        Node::new("p").class("certifications-intro").text(
            content
                .intro
                .unwrap_or_else(|| "GFSI-Recognized Food Safety Standards".to_string()),
        ),
    );

    let mut container = Node::new("div").class("certifications-container");

    if content.certifications.is_empty() {
        container.push_child(Node::new("p").text("No certifications available."));
    } else {
        for cert in content.certifications {
            let name = cert.name.unwrap_or_else(|| "Certification".to_string());
            // Badges link to the certifications section itself; the site
            // has no standalone certifications page.
            container.push_child(
                Node::new("a")
                    .attr("href", "#certifications")
                    .class("cert-badge")
                    .attr("title", cert.full_name.unwrap_or_else(|| name.clone()))
                    .child(
                        Node::new("img")
                            .attr(
                                "src",
                                cert.logo
                                    .unwrap_or_else(|| "assets/img/cert-placeholder.svg".to_string()),
                            )
                            .attr("alt", format!("{name} Certification")),
                    )
                    .child(Node::new("span").text(name)),
            );
        }
    }

    section.push_child(container);
    Some(section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::testutil::TestSource;
    use serde_json::json;

    #[tokio::test]
    async fn renders_badge_links() {
        let source = TestSource::new().with_doc(
            "certifications",
            json!({
                "title": "Certifications",
                "certifications": [
                    {"name": "BRC", "fullName": "BRC Global Standard", "logo": "assets/img/cert-brc.svg"},
                    {"name": "SQF"}
                ]
            }),
        );
        let node = render(&source, Language::En).await.unwrap();

        let container = node
            .children()
            .find(|c| c.get_attr("class") == Some("certifications-container"))
            .unwrap();
        assert_eq!(container.child_count(), 2);

        let html = container.to_html();
        assert!(html.contains("BRC Global Standard"));
        assert!(html.contains("assets/img/cert-placeholder.svg"));
        assert!(html.contains("SQF Certification"));
    }

    #[tokio::test]
    async fn badges_link_to_the_section_anchor() {
        let source = TestSource::new().with_doc(
            "certifications",
            json!({"certifications": [{"name": "BRC"}]}),
        );
        let node = render(&source, Language::En).await.unwrap();

        // The anchor target exists on every page: the section's own id.
        assert_eq!(node.get_attr("id"), Some("certifications"));
        assert!(node.to_html().contains("href=\"#certifications\""));
        assert!(!node.to_html().contains("certifications.html"));
    }

    #[tokio::test]
    async fn empty_list_renders_placeholder() {
        let source = TestSource::new().with_doc("certifications", json!({}));
        let node = render(&source, Language::En).await.unwrap();

        let text = node.text_content();
        assert!(text.contains("Our Certifications"));
        assert!(text.contains("GFSI-Recognized Food Safety Standards"));
        assert!(text.contains("No certifications available."));
    }
}
