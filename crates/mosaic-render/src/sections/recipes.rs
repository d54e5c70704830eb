//! Recipes section: a grid of cards with collapsible ingredient and step
//! lists, each carrying an embedded schema.org Recipe block when the
//! document has enough to build one.
//!
//! Unlike the other sections, the recipes document is a top-level array.

use serde::Deserialize;

use crate::content::{fetch_section, ContentSource};
use crate::lang::Language;
use crate::node::Node;
use crate::schema;

#[derive(Debug, Default, Deserialize)]
pub struct Recipe {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    pub cuisine: Option<String>,
    #[serde(rename = "yield")]
    pub recipe_yield: Option<String>,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub total_time: Option<String>,
    pub keywords: Option<String>,
}

pub async fn render<S: ContentSource>(source: &S, lang: Language) -> Option<Node> {
    let recipes: Vec<Recipe> = fetch_section(source, "recipes", lang).await?;

    let mut section = Node::new("section").class("recipes");
    section.push_child(Node::new("h2").text("Recipes"));

    for recipe in recipes {
        section.push_child(render_card(recipe));
    }

    Some(section)
}

fn render_card(recipe: Recipe) -> Node {
    let mut card = Node::new("div").class("recipe-card");

    card.push_child(Node::new("h3").text(
        recipe
            .title
            .clone()
            .unwrap_or_else(|| "Untitled recipe".to_string()),
    ));
    card.push_child(Node::new("p").text(recipe.description.clone().unwrap_or_default()));

    card.push_child(collapsible_list("Ingredients", "ul", &recipe.ingredients));
    card.push_child(collapsible_list("Steps", "ol", &recipe.steps));

    if let Some(block) = schema::recipe_json_ld(&recipe) {
        card.push_child(Node::json_ld(&block));
    }

    card
}

fn collapsible_list(summary: &str, list_tag: &str, items: &[String]) -> Node {
    let mut list = Node::new(list_tag);
    for item in items {
        list.push_child(Node::new("li").text(item));
    }
    Node::new("details")
        .child(Node::new("summary").text(summary))
        .child(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::testutil::TestSource;
    use serde_json::json;

    #[tokio::test]
    async fn renders_cards_with_structured_data() {
        let source = TestSource::new().with_doc(
            "recipes",
            json!([{
                "id": "armenian-lentil-soup",
                "title": "Armenian Lentil Soup",
                "description": "A mint-scented classic.",
                "ingredients": ["lentils", "mint"],
                "steps": ["Simmer lentils.", "Add mint."],
                "cuisine": "Armenian",
                "yield": "4 servings"
            }]),
        );
        let node = render(&source, Language::En).await.unwrap();

        assert_eq!(node.get_attr("class"), Some("recipes"));
        let card = node
            .children()
            .find(|c| c.get_attr("class") == Some("recipe-card"))
            .unwrap();

        let text = card.text_content();
        assert!(text.contains("Armenian Lentil Soup"));
        assert!(text.contains("Ingredients"));
        assert!(text.contains("Add mint."));

        let html = card.to_html();
        assert!(html.contains("application/ld+json"));
        assert!(html.contains("\"recipeCuisine\":\"Armenian\""));
    }

    #[tokio::test]
    async fn untitled_recipe_renders_without_structured_data() {
        let source = TestSource::new().with_doc("recipes", json!([{"description": "?"}]));
        let node = render(&source, Language::En).await.unwrap();

        let text = node.text_content();
        assert!(text.contains("Untitled recipe"));
        assert!(!node.to_html().contains("application/ld+json"));
    }

    #[tokio::test]
    async fn non_array_document_renders_heading_only() {
        let source = TestSource::new().with_doc("recipes", json!({}));
        let node = render(&source, Language::En).await.unwrap();

        assert_eq!(node.text_content(), "Recipes");
        assert_eq!(node.child_count(), 1);
    }
}
