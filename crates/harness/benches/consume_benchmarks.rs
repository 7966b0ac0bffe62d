use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use millrace_bom::{BillOfMaterials, Material, ProductionOrder};
use millrace_harness::{ConsumeMode, Experiment};
use millrace_inventory::InventoryStore;

fn sheet_bom() -> BillOfMaterials {
    let mut bom = BillOfMaterials::new();
    bom.add_product("Sheet", vec![Material::new("Alloy", 10).unwrap()]);
    bom
}

fn sheet_experiment() -> Experiment {
    let seed = vec![Material::new("Alloy", 10_000).unwrap()];
    let order = ProductionOrder::new("Sheet", 2).unwrap();
    Experiment::new(sheet_bom(), seed, order, "Alloy").unwrap()
}

/// Single-threaded cost of one consume call, racy vs synchronized path.
fn bench_consume_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("consume_paths");
    group.throughput(Throughput::Elements(1));

    group.bench_function("racy", |b| {
        let inventory = InventoryStore::new();
        inventory.add(&Material::new("Alloy", i64::MAX / 2).unwrap());
        let bom = sheet_bom();
        let order = ProductionOrder::new("Sheet", 2).unwrap();
        b.iter(|| inventory.consume(black_box(&bom), black_box(&order)));
    });

    group.bench_function("synchronized", |b| {
        let inventory = InventoryStore::new();
        inventory.add(&Material::new("Alloy", i64::MAX / 2).unwrap());
        let bom = sheet_bom();
        let order = ProductionOrder::new("Sheet", 2).unwrap();
        b.iter(|| inventory.consume_synchronized(black_box(&bom), black_box(&order)));
    });

    group.finish();
}

/// End-to-end trial latency (spawn two workers, run, join) across
/// iteration counts.
fn bench_trial_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("trial_latency");
    group.sample_size(20);

    for iterations in [100usize, 1_000].iter() {
        for mode in [ConsumeMode::Racy, ConsumeMode::Synchronized] {
            let label = match mode {
                ConsumeMode::Racy => "racy",
                ConsumeMode::Synchronized => "synchronized",
            };
            group.bench_with_input(
                BenchmarkId::new(label, iterations),
                iterations,
                |b, &iterations| {
                    let experiment = sheet_experiment();
                    b.iter(|| black_box(experiment.run_trial(mode, iterations)));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_consume_paths, bench_trial_latency);
criterion_main!(benches);
