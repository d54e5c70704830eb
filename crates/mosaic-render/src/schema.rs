//! Structured-data (schema.org) blocks.
//!
//! Blocks are purely additive: they ride along inside a rendered section as
//! a `script type="application/ld+json"` node for search engines and never
//! affect layout. A section that cannot build a block simply omits it.

use serde_json::{json, Value};

use crate::sections::recipes::Recipe;

/// Build a schema.org Recipe block from a recipe document.
///
/// Requires a title; everything else falls back to neutral values so a
/// sparse document still yields a valid block.
pub fn recipe_json_ld(recipe: &Recipe) -> Option<Value> {
    let title = recipe.title.as_deref()?;

    let instructions: Vec<Value> = recipe
        .steps
        .iter()
        .map(|step| json!({"@type": "HowToStep", "text": step}))
        .collect();

    Some(json!({
        "@context": "https://schema.org",
        "@type": "Recipe",
        "name": title,
        "author": {
            "@type": "Person",
            "name": "Shehirian Family"
        },
        "recipeCategory": "Soup",
        "recipeCuisine": recipe.cuisine.as_deref().unwrap_or("International"),
        "recipeYield": recipe.recipe_yield.as_deref().unwrap_or("N/A"),
        "prepTime": recipe.prep_time.as_deref().unwrap_or("PT0M"),
        "cookTime": recipe.cook_time.as_deref().unwrap_or("PT0M"),
        "totalTime": recipe.total_time.as_deref().unwrap_or("PT0M"),
        "recipeIngredient": recipe.ingredients,
        "recipeInstructions": instructions,
        "keywords": recipe.keywords.as_deref().unwrap_or(""),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_block_from_full_recipe() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": "royal-soup",
            "title": "Royal Soup",
            "description": "Lemon meatball soup.",
            "ingredients": ["bulghur", "lemon"],
            "steps": ["Simmer.", "Serve."],
            "cuisine": "Middle Eastern",
            "yield": "6 servings",
            "prep_time": "PT15M",
            "cook_time": "PT30M",
            "total_time": "PT45M",
            "keywords": "royal soup, lemon meatball soup"
        }))
        .unwrap();

        let block = recipe_json_ld(&recipe).unwrap();
        assert_eq!(block["@context"], "https://schema.org");
        assert_eq!(block["@type"], "Recipe");
        assert_eq!(block["recipeCuisine"], "Middle Eastern");
        assert_eq!(block["recipeYield"], "6 servings");
        assert_eq!(block["recipeInstructions"][1]["text"], "Serve.");
    }

    #[test]
    fn sparse_recipe_gets_neutral_fallbacks() {
        let recipe: Recipe = serde_json::from_value(json!({"title": "Plain Broth"})).unwrap();
        let block = recipe_json_ld(&recipe).unwrap();
        assert_eq!(block["recipeCuisine"], "International");
        assert_eq!(block["totalTime"], "PT0M");
        assert_eq!(block["recipeIngredient"], json!([]));
    }

    #[test]
    fn untitled_recipe_yields_no_block() {
        let recipe: Recipe = serde_json::from_value(json!({"description": "??"})).unwrap();
        assert!(recipe_json_ld(&recipe).is_none());
    }
}
