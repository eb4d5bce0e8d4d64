//! Performance benchmarks for the Tariff Rule Engine.
//!
//! The whole unit of work is a single bounded arithmetic computation, so a
//! calculation should sit comfortably below a microsecond. The batch
//! benchmarks confirm there is no hidden shared state slowing down
//! concurrent-style workloads.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;
use std::str::FromStr;

use tariff_engine::calculation::calculate;
use tariff_engine::models::{
    EnginePowerUnit, EngineType, VehicleAge, VehicleFacts, VehicleOwnerType,
};

fn create_facts(owner_type: VehicleOwnerType, engine_type: EngineType) -> VehicleFacts {
    VehicleFacts {
        owner_type,
        engine_type,
        engine_power: 320,
        engine_power_unit: EnginePowerUnit::Horsepower,
        engine_capacity_cc: if engine_type == EngineType::Electric { 0 } else { 4_500 },
        vehicle_age: VehicleAge::Years(1),
        price_rub: Decimal::from(1_310_000),
        euro_exchange_rate: Decimal::from_str("103.3773").unwrap(),
        is_commercial_vehicle: false,
    }
}

/// Benchmark: a single full calculation.
fn bench_single_calculation(c: &mut Criterion) {
    let facts = create_facts(VehicleOwnerType::Company, EngineType::Diesel);

    c.bench_function("single_calculation", |b| {
        b.iter(|| black_box(calculate(black_box(&facts)).unwrap()))
    });
}

/// Benchmark: each owner/engine dispatch path.
fn bench_dispatch_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_paths");

    let cases = [
        ("company_diesel", VehicleOwnerType::Company, EngineType::Diesel),
        ("company_gasoline", VehicleOwnerType::Company, EngineType::Gasoline),
        ("individual_gasoline", VehicleOwnerType::Individual, EngineType::Gasoline),
        (
            "personal_use_gasoline",
            VehicleOwnerType::IndividualPersonalUse,
            EngineType::Gasoline,
        ),
        ("electric", VehicleOwnerType::Company, EngineType::Electric),
    ];

    for (name, owner, engine) in cases {
        let facts = create_facts(owner, engine);
        group.bench_with_input(BenchmarkId::from_parameter(name), &facts, |b, facts| {
            b.iter(|| black_box(calculate(facts).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark: a batch of 1000 varied calculations.
fn bench_batch_1000(c: &mut Criterion) {
    let owners = [
        VehicleOwnerType::Individual,
        VehicleOwnerType::IndividualPersonalUse,
        VehicleOwnerType::Company,
    ];
    let engines = [EngineType::Gasoline, EngineType::Diesel, EngineType::Hybrid];

    let batch: Vec<VehicleFacts> = (0..1_000)
        .map(|i| {
            let mut facts = create_facts(owners[i % 3], engines[i % 3]);
            facts.engine_capacity_cc = 1_000 + (i as i32 % 50) * 100;
            facts.vehicle_age = VehicleAge::Years(i as i32 % 12);
            facts.price_rub = Decimal::from(200_000 + (i as i64 % 100) * 50_000);
            facts
        })
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(1_000));

    group.bench_function("batch_1000", |b| {
        b.iter(|| {
            let mut results = Vec::with_capacity(batch.len());
            for facts in &batch {
                results.push(calculate(facts).unwrap());
            }
            black_box(results)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_calculation,
    bench_dispatch_paths,
    bench_batch_1000,
);
criterion_main!(benches);
