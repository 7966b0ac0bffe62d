//! Recursive material-availability check.
//!
//! A feasibility query only: nothing is reserved or consumed. When direct
//! stock falls short of a material that is itself a sub-assembly, the
//! check descends one recipe level and asks whether the shortfall could be
//! produced from deeper stock.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use millrace_bom::{BillOfMaterials, ProductionOrder};

use crate::store::InventoryStore;

/// Outcome of an availability check.
///
/// A query result, not an error: the check cannot fail destructively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Sufficient,
    /// The first material found to be short, deepest recipe level first.
    Insufficient { material: String },
}

impl Availability {
    pub fn insufficient(material: impl Into<String>) -> Self {
        Self::Insufficient {
            material: material.into(),
        }
    }

    pub fn is_sufficient(&self) -> bool {
        matches!(self, Self::Sufficient)
    }
}

impl core::fmt::Display for Availability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Sufficient => write!(f, "sufficient"),
            Self::Insufficient { material } => {
                write!(f, "insufficient inventory: {material}")
            }
        }
    }
}

impl InventoryStore {
    /// Check whether the order could be fulfilled from current stock.
    pub fn check_order(&self, bom: &BillOfMaterials, order: &ProductionOrder) -> Availability {
        self.check_availability(bom, order.product_name(), order.quantity())
    }

    /// Check whether `quantity` units of `product_name` could be built.
    ///
    /// For each required material, direct stock satisfies the requirement
    /// when `available >= required`. Otherwise, if the material has its own
    /// recipe, the shortfall (`required - available`) is checked recursively
    /// one level down; a sufficient recursive answer counts the material as
    /// satisfied. A product with no recipe is vacuously sufficient for any
    /// quantity.
    ///
    /// The recursion carries the set of products on the current path;
    /// re-entering one (a cyclic recipe) reports that material as
    /// insufficient instead of recursing forever. The quantity map is read
    /// but never written.
    pub fn check_availability<'a>(
        &self,
        bom: &'a BillOfMaterials,
        product_name: &'a str,
        quantity: i64,
    ) -> Availability {
        let mut visiting = HashSet::new();
        visiting.insert(product_name);
        self.check_recursive(bom, product_name, quantity, &mut visiting)
    }

    fn check_recursive<'a>(
        &self,
        bom: &'a BillOfMaterials,
        product_name: &'a str,
        quantity: i64,
        visiting: &mut HashSet<&'a str>,
    ) -> Availability {
        for material in bom.materials_for(product_name) {
            let required = material.quantity() * quantity;
            let available = self.quantity_of(material.name());
            if available >= required {
                continue;
            }

            if bom.has_recipe(material.name()) && visiting.insert(material.name()) {
                let shortfall = required - available;
                let outcome = self.check_recursive(bom, material.name(), shortfall, visiting);
                visiting.remove(material.name());
                match outcome {
                    Availability::Sufficient => continue,
                    // Keep the deepest short material in the report.
                    insufficient => return insufficient,
                }
            }

            return Availability::insufficient(material.name());
        }
        Availability::Sufficient
    }
}
