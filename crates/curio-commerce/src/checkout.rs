//! Purchase records produced by the checkout stub.

use crate::cart::CartLine;
use crate::catalog::Product;
use crate::ids::{ProductId, PurchaseId, UserId};
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Purchase status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PurchaseStatus {
    /// Placed, awaiting processing.
    #[default]
    Pending,
    /// Fulfilled.
    Completed,
    /// Cancelled before fulfilment.
    Cancelled,
}

impl PurchaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PurchaseStatus::Pending => "pending",
            PurchaseStatus::Completed => "completed",
            PurchaseStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PurchaseStatus::Pending => "Pending",
            PurchaseStatus::Completed => "Completed",
            PurchaseStatus::Cancelled => "Cancelled",
        }
    }

    /// Check if the purchase is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PurchaseStatus::Completed | PurchaseStatus::Cancelled)
    }
}

/// One purchased line, recorded at checkout.
///
/// Title and total are denormalized so the record stays meaningful after
/// the listing leaves the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Purchase {
    /// Unique purchase identifier.
    pub id: PurchaseId,
    /// Buyer.
    pub user_id: UserId,
    /// Product purchased.
    pub product_id: ProductId,
    /// Listing title at time of purchase.
    pub title: String,
    /// Units purchased.
    pub quantity: u32,
    /// Total paid for this line.
    pub total_price: Money,
    /// Purchase status.
    pub status: PurchaseStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Purchase {
    /// Record a cart line as a purchase against its resolved listing.
    pub fn from_line(line: &CartLine, product: &Product) -> Self {
        let now = Utc::now();
        Self {
            id: PurchaseId::generate(),
            user_id: line.user_id.clone(),
            product_id: line.product_id.clone(),
            title: product.title.clone(),
            quantity: line.quantity,
            total_price: product.price.multiply(line.quantity),
            status: PurchaseStatus::Completed,
            created_at: now,
            updated_at: now,
        }
    }
}
