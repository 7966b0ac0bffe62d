use std::collections::HashMap;
use std::sync::RwLock;

use millrace_bom::{BillOfMaterials, Material, ProductionOrder};

/// Shared mutable inventory: material name → on-hand quantity.
///
/// The quantity map is the single shared resource of the whole demo.
/// `consume` deliberately performs its read-modify-write in two separate
/// critical sections, so two concurrent callers can both read the same
/// stale value and one decrement is silently overwritten — the lost
/// update the harness measures. Quantities may go negative after an
/// over-consumption; the store does not prevent that.
#[derive(Debug, Default)]
pub struct InventoryStore {
    quantities: RwLock<HashMap<String, i64>>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increase on-hand quantity by the material's quantity.
    /// Repeated calls for the same material accumulate.
    pub fn add(&self, material: &Material) {
        let mut quantities = self.quantities.write().unwrap();
        *quantities.entry(material.name().to_string()).or_insert(0) += material.quantity();
    }

    /// Current on-hand quantity, 0 for unknown materials.
    pub fn quantity_of(&self, material_name: &str) -> i64 {
        let quantities = self.quantities.read().unwrap();
        quantities.get(material_name).copied().unwrap_or(0)
    }

    /// Consume the materials needed to fulfil the order, unconditionally.
    ///
    /// For each material in the order's recipe,
    /// `required = material.quantity * order.quantity` is subtracted from
    /// the stored quantity whether or not sufficient stock exists.
    ///
    /// The read and the write-back are separate critical sections: a
    /// concurrent `consume` can interleave between them, and the later
    /// write-back then stores a value computed from a stale read,
    /// discarding the other caller's decrement. This is the racy path
    /// under test; `consume_synchronized` is the corrected baseline.
    pub fn consume(&self, bom: &BillOfMaterials, order: &ProductionOrder) {
        for material in bom.materials_for(order.product_name()) {
            let required = material.quantity() * order.quantity();
            let available = self.quantity_of(material.name());
            let mut quantities = self.quantities.write().unwrap();
            quantities.insert(material.name().to_string(), available - required);
        }
    }

    /// Same arithmetic as `consume`, but the whole read-modify-write per
    /// order happens under one exclusive guard. Concurrent callers cannot
    /// lose updates through this path.
    pub fn consume_synchronized(&self, bom: &BillOfMaterials, order: &ProductionOrder) {
        let mut quantities = self.quantities.write().unwrap();
        for material in bom.materials_for(order.product_name()) {
            let required = material.quantity() * order.quantity();
            *quantities.entry(material.name().to_string()).or_insert(0) -= required;
        }
    }
}

impl core::fmt::Display for InventoryStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "inventory:")?;
        let quantities = self.quantities.read().unwrap();
        // Sorted for stable output; the map itself has no meaningful order.
        let mut names: Vec<&String> = quantities.keys().collect();
        names.sort();
        for name in names {
            writeln!(f, "{}: {}", name, quantities[name])?;
        }
        Ok(())
    }
}
