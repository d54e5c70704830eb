//! Our-companies section: a grid of linked company cards.

use serde::Deserialize;

use crate::content::{fetch_section, ContentSource};
use crate::lang::Language;
use crate::node::Node;

#[derive(Debug, Default, Deserialize)]
pub struct CompaniesContent {
    pub title: Option<String>,
    #[serde(default)]
    pub companies: Vec<Company>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Company {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
}

pub async fn render<S: ContentSource>(source: &S, lang: Language) -> Option<Node> {
    let content: CompaniesContent = fetch_section(source, "ourCompanies", lang).await?;

    let mut section = Node::new("section")
        .id("products-carousel")
        .class("page-section section companies-section");

    section.push_child(
        Node::new("h2").text(content.title.unwrap_or_else(|| "Our Companies".to_string())),
    );

    let mut grid = Node::new("div").class("companies-grid");
    for company in content.companies {
        let mut card = Node::new("a")
            .attr("href", company.link.unwrap_or_else(|| "#".to_string()))
            .class("company-card");

        card.push_child(
            Node::new("div").class("company-image-container").child(
                Node::new("img")
                    .attr(
                        "src",
                        company.image.unwrap_or_else(|| "img/placeholder.png".to_string()),
                    )
                    .attr("alt", company.name.clone().unwrap_or_else(|| "Company".to_string())),
            ),
        );

        card.push_child(
            Node::new("div")
                .class("company-info")
                .child(
                    Node::new("h3")
                        .text(company.name.unwrap_or_else(|| "Company Name".to_string())),
                )
                .child(Node::new("p").text(company.description.unwrap_or_default())),
        );

        grid.push_child(card);
    }
    section.push_child(grid);

    Some(section)
}
