//! Product types.

use crate::ids::{CategoryId, ProductId, UserId};
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Condition grade of a secondhand listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Condition {
    /// Unused, often still packaged.
    New,
    /// Used once or twice, no visible wear.
    LikeNew,
    /// Normal signs of use, fully functional.
    #[default]
    Good,
    /// Heavy wear but working.
    Fair,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::LikeNew => "like_new",
            Condition::Good => "good",
            Condition::Fair => "fair",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::LikeNew => "Like New",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
        }
    }
}

impl FromStr for Condition {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(Condition::New),
            "like_new" | "like-new" | "like new" => Ok(Condition::LikeNew),
            "good" => Ok(Condition::Good),
            "fair" => Ok(Condition::Fair),
            _ => Err(()),
        }
    }
}

/// A listing in the catalog.
///
/// Immutable from the cart's perspective; the engine only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Listing title.
    pub title: String,
    /// Full description.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Units available for purchase.
    pub available: u32,
    /// Category this listing belongs to.
    pub category_id: CategoryId,
    /// Seller who listed it.
    pub seller_id: UserId,
    /// Condition grade.
    pub condition: Condition,
    /// Brand, if known.
    pub brand: Option<String>,
    /// Image URLs.
    pub images: Vec<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a new listing.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: Money,
        available: u32,
        category_id: impl Into<CategoryId>,
        seller_id: impl Into<UserId>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            price,
            available,
            category_id: category_id.into(),
            seller_id: seller_id.into(),
            condition: Condition::default(),
            brand: None,
            images: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the condition grade.
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    /// Set the brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Set the creation timestamp (seed data needs stable ordering).
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = created_at;
        self
    }

    /// Check if any units are available.
    pub fn is_in_stock(&self) -> bool {
        self.available > 0
    }

    /// Clamp a requested quantity to what is available.
    pub fn clamp_quantity(&self, requested: u32) -> u32 {
        requested.min(self.available)
    }
}
