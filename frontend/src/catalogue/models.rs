use serde::Deserialize;
use std::fmt;
use std::iter;

/// Closed set of treatment categories. Serialized by display label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum Category {
    #[serde(rename = "Facials")]
    Facials,
    #[serde(rename = "Advanced Skin")]
    AdvancedSkin,
    #[serde(rename = "Brows & Lips")]
    BrowsAndLips,
    #[serde(rename = "Massage")]
    Massage,
    #[serde(rename = "Consultation")]
    Consultation,
}

impl Category {
    /// Every category, in chip order.
    pub const ALL: [Category; 5] = [
        Category::Facials,
        Category::AdvancedSkin,
        Category::BrowsAndLips,
        Category::Massage,
        Category::Consultation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Facials => "Facials",
            Category::AdvancedSkin => "Advanced Skin",
            Category::BrowsAndLips => "Brows & Lips",
            Category::Massage => "Massage",
            Category::Consultation => "Consultation",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The active catalogue filter. Exactly one value is selected at any time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    const ALL_LABEL: &'static str = "All";

    /// Filter chips as rendered: "All" first, then each category.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_LABEL,
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Exact label match only; anything outside the closed set is `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        if label == Self::ALL_LABEL {
            return Some(CategoryFilter::All);
        }
        Category::from_label(label).map(CategoryFilter::Only)
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Treatment {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub duration: String,
    pub price: String,
    pub summary: String,
    #[serde(default)]
    pub best_for: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub downtime: String,
}

impl Treatment {
    /// DOM id of the collapsible detail panel.
    pub fn panel_id(&self) -> String {
        format!("treatment-{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_the_closed_set() {
        for option in CategoryFilter::options() {
            assert_eq!(CategoryFilter::from_label(option.label()), Some(option));
        }
    }

    #[test]
    fn label_parsing_is_exact() {
        assert_eq!(CategoryFilter::from_label("all"), None);
        assert_eq!(CategoryFilter::from_label("Facial"), None);
        assert_eq!(CategoryFilter::from_label(" Massage"), None);
        assert_eq!(CategoryFilter::from_label("Skin"), None);
        assert_eq!(
            CategoryFilter::from_label("Brows & Lips"),
            Some(CategoryFilter::Only(Category::BrowsAndLips))
        );
    }

    #[test]
    fn options_start_with_all() {
        let labels: Vec<_> = CategoryFilter::options().map(CategoryFilter::label).collect();
        assert_eq!(
            labels,
            ["All", "Facials", "Advanced Skin", "Brows & Lips", "Massage", "Consultation"]
        );
    }

    #[test]
    fn all_matches_every_category() {
        assert!(Category::ALL.iter().all(|c| CategoryFilter::All.matches(*c)));
        assert!(!CategoryFilter::Only(Category::Massage).matches(Category::Facials));
    }

    #[test]
    fn category_deserializes_from_display_label() {
        let category: Category = serde_json::from_str("\"Advanced Skin\"").unwrap();
        assert_eq!(category, Category::AdvancedSkin);
        assert!(serde_json::from_str::<Category>("\"AdvancedSkin\"").is_err());
    }
}
