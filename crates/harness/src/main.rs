use millrace_bom::{BillOfMaterials, Material, ProductionOrder};
use millrace_harness::{Experiment, ExperimentConfig};

/// The original demo scenario: an aluminum alloy sheet takes 10 units of
/// alloy, 10000 units are on hand, and every order builds 2 sheets.
fn aluminum_sheet_demo() -> anyhow::Result<Experiment> {
    let mut bom = BillOfMaterials::new();
    bom.add_product(
        "Aluminum Alloy Sheet",
        vec![Material::new("Aluminum Alloy", 10)?],
    );
    let seed = vec![Material::new("Aluminum Alloy", 10_000)?];
    let order = ProductionOrder::new("Aluminum Alloy Sheet", 2)?;
    Ok(Experiment::new(bom, seed, order, "Aluminum Alloy")?)
}

fn main() -> anyhow::Result<()> {
    millrace_observability::init();

    let experiment = aluminum_sheet_demo()?;
    tracing::info!(
        material = experiment.tracked_material(),
        availability = %experiment.check_availability(),
        "pre-flight availability check"
    );

    let summary = experiment.run(&ExperimentConfig::default())?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
