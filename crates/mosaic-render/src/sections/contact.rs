//! Contact section: labeled rows for email, phone, address, and hours.

use serde::Deserialize;

use crate::content::{fetch_section, ContentSource};
use crate::lang::Language;
use crate::node::Node;

#[derive(Debug, Default, Deserialize)]
pub struct ContactContent {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub hours: Option<String>,
}

pub async fn render<S: ContentSource>(source: &S, lang: Language) -> Option<Node> {
    let content: ContactContent = fetch_section(source, "contactUs", lang).await?;

    let mut section = Node::new("section").class("contact-us");
    section.push_child(Node::new("h2").text("Contact Us"));

    // The mailto link is only emitted when an email is present; the row
    // itself always renders.
    let mut email_row = Node::new("p").child(Node::new("strong").text("Email:")).text(" ");
    match content.email {
        Some(email) if !email.is_empty() => {
            email_row.push_child(
                Node::new("a")
                    .attr("href", format!("mailto:{email}"))
                    .text(email),
            );
        }
        _ => {}
    }
    section.push_child(email_row);

    for (label, value) in [
        ("Phone:", content.phone),
        ("Address:", content.address),
        ("Hours:", content.hours),
    ] {
        section.push_child(
            Node::new("p")
                .child(Node::new("strong").text(label))
                .text(format!(" {}", value.unwrap_or_default())),
        );
    }

    Some(section)
}
