//! Initialize a site in the current directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing mosaic site...");

    let sections_dir = Path::new("sections");

    if sections_dir.exists() {
        if !yes {
            tracing::warn!("sections/ directory already exists. Use --yes to overwrite.");
            return Ok(());
        }
    } else {
        fs::create_dir_all(sections_dir).context("Failed to create sections directory")?;
    }

    let config_path = Path::new("site.toml");
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG).context("Failed to write site.toml")?;
        tracing::info!("Created site.toml");
    }

    let samples: &[(&str, &str, &str)] = &[
        ("hero", "hero.en.json", SAMPLE_HERO),
        ("aboutUs", "aboutUs.en.json", SAMPLE_ABOUT),
        ("ourCompanies", "ourCompanies.en.json", SAMPLE_COMPANIES),
        ("recipes", "recipes.en.json", SAMPLE_RECIPES),
        ("certifications", "certifications.en.json", SAMPLE_CERTIFICATIONS),
        ("contactUs", "contactUs.en.json", SAMPLE_CONTACT),
        ("hero", "hero.en.jsonld", SAMPLE_HERO_JSONLD),
    ];

    for (section, file, content) in samples {
        let dir = sections_dir.join(section);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create sections/{section}"))?;

        let path = dir.join(file);
        if !path.exists() || yes {
            fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Created sections/{}/{}", section, file);
        }
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Add French (.fr.json) and Arabic (.ar.json) documents, then run 'mosaic build'.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Mosaic Configuration

[site]
# Directory holding <section>/<section>.<lang>.json documents
sections = "sections"

# Output directory for built pages
output = "dist"

# Base URL (for deployment)
base_url = "/"

# Language the root index.html redirects to
default_lang = "en"

# Localized page titles
[site.titles]
en = "Shehirian Family Kitchen"
fr = "Cuisine familiale Shehirian"
ar = "مطبخ عائلة شيهريان"

[build]
# Enable CSS minification
minify = true
"#;

const SAMPLE_HERO: &str = r#"{
  "title": "shehirian bulgor inc.",
  "navigation": [
    { "label": "Home", "section": "home" },
    { "label": "About", "section": "about-us" },
    { "label": "Products", "section": "products-carousel" },
    { "label": "Recipes", "section": "recipes" },
    { "label": "Certifications", "section": "certifications" },
    { "label": "Contact us", "section": "contact" }
  ]
}
"#;

const SAMPLE_ABOUT: &str = r#"{
  "headline": "About Us",
  "paragraph": "Family owned and operated since 1958."
}
"#;

const SAMPLE_COMPANIES: &str = r##"{
  "title": "Our Companies",
  "companies": [
    {
      "name": "Bulgor Mills",
      "description": "Stone-ground bulghur and cracked wheat.",
      "image": "img/placeholder.png",
      "link": "#"
    }
  ]
}
"##;

const SAMPLE_RECIPES: &str = r#"[
  {
    "id": "armenian-lentil-soup",
    "title": "Armenian Lentil Soup",
    "description": "A mint-scented family classic.",
    "ingredients": ["red lentils", "onion", "dried mint"],
    "steps": ["Simmer lentils with onion.", "Finish with dried mint."],
    "cuisine": "Armenian",
    "yield": "4 servings",
    "prep_time": "PT15M",
    "cook_time": "PT60M",
    "total_time": "PT75M",
    "keywords": "lentil soup, Armenian recipe, mint soup"
  }
]
"#;

const SAMPLE_CERTIFICATIONS: &str = r#"{
  "title": "Our Certifications",
  "intro": "GFSI-Recognized Food Safety Standards",
  "certifications": [
    { "name": "BRC", "fullName": "BRC Global Standard", "logo": "assets/img/cert-brc.svg" },
    { "name": "SQF", "fullName": "Safe Quality Food", "logo": "assets/img/cert-sqf.svg" }
  ]
}
"#;

const SAMPLE_CONTACT: &str = r#"{
  "email": "info@shehirian.example",
  "phone": "+1 555 0100",
  "address": "12 Mill Road",
  "hours": "Mon-Fri 9-5"
}
"#;

const SAMPLE_HERO_JSONLD: &str = r#"{
  "@context": "https://schema.org",
  "@type": "Organization",
  "name": "Shehirian Bulgor Inc.",
  "foundingDate": "1958"
}
"#;
