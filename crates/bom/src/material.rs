use serde::{Deserialize, Serialize};

use millrace_core::{DomainError, DomainResult};

/// A required material: name plus the quantity needed per unit of product.
///
/// Immutable once constructed; the quantity here is a recipe coefficient,
/// not an on-hand count, so it can never be negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    name: String,
    quantity: i64,
}

impl Material {
    pub fn new(name: impl Into<String>, quantity: i64) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("material name cannot be empty"));
        }
        if quantity < 0 {
            return Err(DomainError::validation("material quantity cannot be negative"));
        }
        Ok(Self { name, quantity })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

impl core::fmt::Display for Material {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} (quantity: {})", self.name, self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_material_keeps_name_and_quantity() {
        let material = Material::new("Aluminum Alloy", 10).unwrap();
        assert_eq!(material.name(), "Aluminum Alloy");
        assert_eq!(material.quantity(), 10);
    }

    #[test]
    fn new_material_accepts_zero_quantity() {
        let material = Material::new("Trace Element", 0).unwrap();
        assert_eq!(material.quantity(), 0);
    }

    #[test]
    fn new_material_rejects_empty_name() {
        let err = Material::new("   ", 10).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn new_material_rejects_negative_quantity() {
        let err = Material::new("Aluminum Alloy", -1).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for negative quantity"),
        }
    }

    #[test]
    fn display_shows_name_and_quantity() {
        let material = Material::new("Aluminum Alloy", 10).unwrap();
        assert_eq!(material.to_string(), "Aluminum Alloy (quantity: 10)");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: construction succeeds exactly for non-blank names and
            /// non-negative quantities.
            #[test]
            fn construction_boundary(
                name in "[A-Za-z][A-Za-z0-9 ]{0,30}",
                quantity in -1000i64..1000
            ) {
                let result = Material::new(name.clone(), quantity);
                if quantity >= 0 {
                    let material = result.unwrap();
                    prop_assert_eq!(material.name(), name.as_str());
                    prop_assert_eq!(material.quantity(), quantity);
                } else {
                    prop_assert!(result.is_err());
                }
            }
        }
    }
}
