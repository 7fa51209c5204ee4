//! Menu catalog

use std::str::FromStr;

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a category name is not one of the canteen's set.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown menu category: {0}")]
pub struct UnknownCategoryError(pub String);

/// Fixed set of categories the canteen lists items under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Vegetarian meals
    Veg,
    /// Non-vegetarian meals
    NonVeg,
    /// Tea & coffee
    TeaCoffee,
    /// Snacks
    Snacks,
    /// Ice creams
    IceCreams,
    /// Savouries
    Savouries,
    /// Beverages
    Beverages,
    /// Cold drinks
    ColdDrinks,
    /// Fresh juices
    FreshJuices,
    /// Desserts
    Desserts,
}

impl Category {
    /// All categories, in menu display order.
    pub const ALL: [Category; 10] = [
        Category::Veg,
        Category::NonVeg,
        Category::TeaCoffee,
        Category::Snacks,
        Category::IceCreams,
        Category::Savouries,
        Category::Beverages,
        Category::ColdDrinks,
        Category::FreshJuices,
        Category::Desserts,
    ];

    /// Display label for the category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::Veg => "Veg",
            Category::NonVeg => "Non-Veg",
            Category::TeaCoffee => "Tea & Coffee",
            Category::Snacks => "Snacks",
            Category::IceCreams => "Ice Creams",
            Category::Savouries => "Savouries",
            Category::Beverages => "Beverages",
            Category::ColdDrinks => "Cold Drinks",
            Category::FreshJuices => "Fresh Juices",
            Category::Desserts => "Desserts",
        }
    }
}

impl FromStr for Category {
    type Err = UnknownCategoryError;

    /// Parses a category from its display label, case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(value))
            .ok_or_else(|| UnknownCategoryError(value.to_string()))
    }
}

/// A catalog entry, read-only to the ordering client.
#[derive(Debug, Clone)]
pub struct MenuItem {
    /// Opaque identifier assigned by the catalog store.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Category the item is listed under.
    pub category: Category,

    /// Unit price.
    pub price: Money<'static, Currency>,

    /// Optional description shown alongside the name.
    pub description: Option<String>,

    /// Whether the item can currently be ordered.
    pub available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_from_display_label() {
        assert_eq!("Tea & Coffee".parse(), Ok(Category::TeaCoffee));
        assert_eq!("non-veg".parse(), Ok(Category::NonVeg));
    }

    #[test]
    fn unknown_category_errors_with_raw_value() {
        let result = "Sushi".parse::<Category>();

        assert_eq!(result, Err(UnknownCategoryError("Sushi".to_string())));
    }
}
