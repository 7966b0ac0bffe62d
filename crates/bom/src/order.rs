use serde::{Deserialize, Serialize};

use millrace_core::{DomainError, DomainResult};

/// Production order: build N units of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionOrder {
    product_name: String,
    quantity: i64,
}

impl ProductionOrder {
    pub fn new(product_name: impl Into<String>, quantity: i64) -> DomainResult<Self> {
        let product_name = product_name.into();
        if product_name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if quantity < 1 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        Ok(Self {
            product_name,
            quantity,
        })
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

impl core::fmt::Display for ProductionOrder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "production order: {} (quantity: {})",
            self.product_name, self.quantity
        )
    }
}
