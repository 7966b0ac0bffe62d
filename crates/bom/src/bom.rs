use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::material::Material;

/// Bill of materials: product name → ordered list of materials needed to
/// build one unit of that product.
///
/// A material name may itself appear as a product key, which makes it a
/// sub-assembly with its own recipe. Nothing in the table prevents a
/// cyclic definition; the availability checker guards against that at
/// traversal time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillOfMaterials {
    products: HashMap<String, Vec<Material>>,
}

impl BillOfMaterials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the material list for a product, replacing any existing entry.
    pub fn add_product(&mut self, product_name: impl Into<String>, materials: Vec<Material>) {
        self.products.insert(product_name.into(), materials);
    }

    /// Materials needed for one unit of the product, empty for unknown products.
    pub fn materials_for(&self, product_name: &str) -> &[Material] {
        self.products
            .get(product_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the product has a non-empty recipe of its own.
    pub fn has_recipe(&self, product_name: &str) -> bool {
        !self.materials_for(product_name).is_empty()
    }
}

impl core::fmt::Display for BillOfMaterials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "BOM:")?;
        // Sorted for stable output; the map itself has no meaningful order.
        let mut names: Vec<&String> = self.products.keys().collect();
        names.sort();
        for name in names {
            write!(f, "{name}:")?;
            for material in &self.products[name] {
                write!(f, " [{material}]")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material(name: &str, quantity: i64) -> Material {
        Material::new(name, quantity).unwrap()
    }

    #[test]
    fn materials_for_returns_recorded_list() {
        let mut bom = BillOfMaterials::new();
        bom.add_product("Sheet", vec![material("Alloy", 10)]);

        let materials = bom.materials_for("Sheet");
        assert_eq!(materials.len(), 1);
        assert_eq!(materials[0].name(), "Alloy");
        assert_eq!(materials[0].quantity(), 10);
    }

    #[test]
    fn materials_for_unknown_product_returns_empty() {
        let bom = BillOfMaterials::new();
        assert!(bom.materials_for("Sheet").is_empty());
    }

    #[test]
    fn add_product_replaces_existing_entry() {
        let mut bom = BillOfMaterials::new();
        bom.add_product("Sheet", vec![material("Alloy", 10)]);
        bom.add_product("Sheet", vec![material("Steel", 3)]);

        let materials = bom.materials_for("Sheet");
        assert_eq!(materials.len(), 1);
        assert_eq!(materials[0].name(), "Steel");
    }

    #[test]
    fn has_recipe_requires_non_empty_list() {
        let mut bom = BillOfMaterials::new();
        bom.add_product("Sheet", vec![material("Alloy", 10)]);
        bom.add_product("Scrap", vec![]);

        assert!(bom.has_recipe("Sheet"));
        assert!(!bom.has_recipe("Scrap"));
        assert!(!bom.has_recipe("Alloy"));
    }

    #[test]
    fn materials_keep_insertion_order() {
        let mut bom = BillOfMaterials::new();
        bom.add_product(
            "Panel",
            vec![material("Alloy", 4), material("Rivet", 12), material("Paint", 1)],
        );

        let names: Vec<&str> = bom.materials_for("Panel").iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["Alloy", "Rivet", "Paint"]);
    }
}
