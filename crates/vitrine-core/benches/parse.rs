//! Parse pipeline benchmarks
//!
//! Measures performance of:
//! - Full query parsing (tables + regex price patterns)
//! - Filter application over a synthetic catalog

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vitrine_core::{apply_parsed, parse_query, CatalogItem, ParseOutcome};

const SAMPLE_QUERIES: &[&str] = &[
    "jean bleu T40 livraison rapide",
    "chemise lin blanche M <60€",
    "robe anne weyburn entre 30 et 60",
    "pas cher",
    "mode",
    "quelque chose de sympa pour sortir ce soir",
];

fn synthetic_catalog(size: usize) -> Vec<CatalogItem> {
    (0..size)
        .map(|i| CatalogItem {
            id: format!("p{}", i),
            name: if i % 2 == 0 {
                format!("Jean slim {}", i)
            } else {
                format!("Robe fluide {}", i)
            },
            brand: if i % 3 == 0 {
                "Anne Weyburn".to_string()
            } else {
                "La Redoute Collections".to_string()
            },
            price: 20.0 + (i % 80) as f64,
            original_price: None,
            image: String::new(),
            category: String::new(),
            colors: vec!["Bleu".to_string(), "Noir".to_string()],
            sizes: vec!["38".to_string(), "40".to_string()],
            description: "Coupe confortable en coton".to_string(),
            in_stock: true,
            fast_delivery: i % 2 == 0,
            rating: 4.0,
            reviews: 10,
        })
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_query");
    for query in SAMPLE_QUERIES {
        group.bench_with_input(BenchmarkId::from_parameter(query), query, |b, q| {
            b.iter(|| parse_query(black_box(q)));
        });
    }
    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let result = match parse_query("jean bleu t40 moins de 60") {
        ParseOutcome::Parsed(p) => p,
        _ => unreachable!(),
    };

    let mut group = c.benchmark_group("apply_parsed");
    for size in [100, 1_000, 10_000] {
        let catalog = synthetic_catalog(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, items| {
            b.iter(|| apply_parsed(black_box(items), black_box(&result)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_apply);
criterion_main!(benches);
