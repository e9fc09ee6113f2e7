//! Catalog Models
//!
//! Data structures matching the catalog API's JSON (camelCase fields).
//! Everything here is immutable once fetched.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product (a single catalog item)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub discount_percentage: f64,
    pub rating: f64,
    pub stock: u32,
    pub brand: Option<String>,
    pub sku: Option<String>,
    pub weight: Option<f64>,
    pub dimensions: Option<Dimensions>,
    pub warranty_information: Option<String>,
    pub shipping_information: Option<String>,
    pub availability_status: Option<String>,
    pub reviews: Vec<Review>,
    pub thumbnail: String,
    pub images: Vec<String>,
}

impl Product {
    /// Main image for detail views
    pub fn hero_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(self.thumbnail.as_str())
    }

    pub fn has_discount(&self) -> bool {
        self.discount_percentage > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Review {
    pub rating: f64,
    pub comment: String,
    pub date: String,
    pub reviewer_name: String,
}

/// Category (slug is the key)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// One page of a product listing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
}

// ========================
// Sorting
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Title,
    Price,
    Rating,
    Stock,
}

impl SortField {
    pub const ALL: [SortField; 4] = [SortField::Title, SortField::Price, SortField::Rating, SortField::Stock];

    /// Query parameter value
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Price => "price",
            SortField::Rating => "rating",
            SortField::Stock => "stock",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::Title => "Name",
            SortField::Price => "Price",
            SortField::Rating => "Rating",
            SortField::Stock => "Stock",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("unknown sort field: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Asc => "Ascending",
            SortOrder::Desc => "Descending",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order: {}", other)),
        }
    }
}
