//! Item categories.

use serde::{Deserialize, Deserializer, Serialize};

/// Color assigned to categories created without one.
pub const DEFAULT_COLOR: &str = "#cccccc";

/// Reference data describing a kind of itinerary item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable key items refer to
    pub key: String,
    /// Human-readable name
    pub name: String,
    /// Display color, as a CSS hex string
    #[serde(default = "default_color")]
    pub color: String,
    /// Display icon
    #[serde(default)]
    pub icon: String,
}

impl Category {
    /// Creates a category with the default color and no icon.
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            color: DEFAULT_COLOR.to_string(),
            icon: String::new(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// Categories every new trip starts with.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("activity", "Activity")
            .with_color("#3498db")
            .with_icon("🎯"),
        Category::new("meal", "Meal")
            .with_color("#e67e22")
            .with_icon("🍽️"),
        Category::new("transport", "Transport")
            .with_color("#2ecc71")
            .with_icon("🚗"),
        Category::new("overnight", "Overnight")
            .with_color("#9b59b6")
            .with_icon("🛏️"),
        Category::new("other", "Other")
            .with_color("#95a5a6")
            .with_icon("📌"),
    ]
}

/// Reads an item's category as either a bare key or an embedded category
/// object, keeping only the key.
pub(crate) fn deserialize_category_key<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum CategoryField {
        Key(String),
        Embedded { key: String },
    }

    Ok(match CategoryField::deserialize(deserializer)? {
        CategoryField::Key(key) | CategoryField::Embedded { key } => key,
    })
}
