//! Performance benchmarks for gff-forest
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gff_forest::{build_forest, parse_record, Attributes, Feature};

/// Benchmark single record parsing
fn bench_record_parsing(c: &mut Criterion) {
    let lines = [
        "Chr1\tTAIR10\tchromosome\t1\t30427671\t.\t.\t.\tID=Chr1;Name=Chr1",
        "Chr1\tTAIR10\tmRNA\t3631\t5899\t.\t+\t.\tID=AT1G01010.1;Parent=AT1G01010;Name=AT1G01010.1;Index=1",
        "Chr1\tTAIR10\tCDS\t3760\t3913\t.\t+\t0\tParent=AT1G01010.1,AT1G01010.1-Protein",
    ];

    let mut group = c.benchmark_group("record_parsing");

    for (i, line) in lines.iter().enumerate() {
        let name = match i {
            0 => "chromosome",
            1 => "mRNA",
            2 => "dual_parent_CDS",
            _ => "unknown",
        };
        group.bench_with_input(BenchmarkId::from_parameter(name), line, |b, line| {
            b.iter(|| {
                let result = parse_record(black_box(line));
                black_box(result)
            })
        });
    }

    group.finish();
}

/// Benchmark attribute column parsing
fn bench_attribute_parsing(c: &mut Criterion) {
    let raw = "ID=AT1G01010.1;Parent=AT1G01010;Name=AT1G01010.1;Index=1";

    c.bench_function("attribute_parsing", |b| {
        b.iter(|| {
            let result = Attributes::parse(black_box(raw));
            black_box(result)
        })
    });
}

/// Generate a synthetic annotation: genes on one chromosome, each with
/// one transcript and a handful of exons
fn synthetic_annotation(genes: usize) -> Vec<Feature> {
    let mut features = Vec::with_capacity(genes * 6 + 1);
    features.push(
        parse_record("Chr1\tbench\tchromosome\t1\t100000000\t.\t.\t.\tID=Chr1").unwrap(),
    );

    for g in 0..genes {
        let start = 1000 + g as u64 * 5000;
        let end = start + 4000;
        features.push(
            parse_record(&format!(
                "Chr1\tbench\tgene\t{}\t{}\t.\t+\t.\tID=G{}",
                start, end, g
            ))
            .unwrap(),
        );
        features.push(
            parse_record(&format!(
                "Chr1\tbench\tmRNA\t{}\t{}\t.\t+\t.\tID=G{}.1;Parent=G{}",
                start, end, g, g
            ))
            .unwrap(),
        );
        for e in 0..4 {
            let exon_start = start + e * 1000;
            features.push(
                parse_record(&format!(
                    "Chr1\tbench\texon\t{}\t{}\t.\t+\t.\tParent=G{}.1",
                    exon_start,
                    exon_start + 800,
                    g
                ))
                .unwrap(),
            );
        }
    }

    features
}

/// Benchmark forest construction at increasing annotation sizes
fn bench_forest_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("forest_building");

    for genes in [100, 500, 1000].iter() {
        let features = synthetic_annotation(*genes);
        group.throughput(Throughput::Elements(features.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(genes), &features, |b, features| {
            b.iter(|| {
                let forest = build_forest(black_box(features.clone()));
                black_box(forest)
            })
        });
    }

    group.finish();
}

/// Benchmark a full depth-first traversal
fn bench_forest_walk(c: &mut Criterion) {
    let forest = build_forest(synthetic_annotation(1000));

    c.bench_function("forest_walk", |b| {
        b.iter(|| {
            let count = black_box(&forest).walk().count();
            black_box(count)
        })
    });
}

criterion_group!(
    benches,
    bench_record_parsing,
    bench_attribute_parsing,
    bench_forest_building,
    bench_forest_walk,
);

criterion_main!(benches);
