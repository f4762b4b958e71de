//! Benchmarks comparing glossmark rendering vs pulldown-cmark (Markdown)
//!
//! Run with: cargo bench -p glossmark-core

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use glossmark_core::{GlossaryTerm, Renderer};
use pulldown_cmark::{Options, Parser as MdParser};

/// Sample editorial article
const ARTICLE: &str = r#"# Understanding the Water Cycle

The water cycle describes the continuous movement of water on, above,
and below the surface of the Earth.

## Evaporation

The sun drives **evaporation** from oceans, lakes, and rivers.
Warm air carries the vapor upward where pressure drops.

## Condensation

As vapor rises it cools, and *condensation* forms clouds.
Tiny droplets collide and grow until gravity wins.

### Precipitation

* rain returns most water directly to the oceans
* snow stores water in glaciers and seasonal packs
- hail forms in strong convective updrafts

> Nothing is created, nothing is lost, everything is transformed.

## Collection

Runoff feeds rivers, infiltration recharges **groundwater**, and the
cycle begins again. Residence times range from *days* in the air to
thousands of years in deep aquifers.

### Why It Matters

Fresh water is a finite resource in constant motion, and every stage
of the cycle filters, stores, or moves it somewhere new.
"#;

fn glossary() -> Vec<GlossaryTerm> {
    vec![
        GlossaryTerm::new("evaporation", "liquid turning into vapor"),
        GlossaryTerm::new("condensation", "vapor turning back into liquid"),
        GlossaryTerm::new("precipitation", "water falling from clouds"),
        GlossaryTerm::new("groundwater", "water held in soil and rock"),
        GlossaryTerm::new("runoff", "water flowing over the land surface"),
        GlossaryTerm::new("infiltration", "water soaking into the ground"),
        GlossaryTerm::new("aquifers", "underground layers of water-bearing rock"),
        GlossaryTerm::new("water cycle", "the continuous movement of water"),
    ]
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.throughput(Throughput::Bytes(ARTICLE.len() as u64));

    let plain = Renderer::new(&[]);
    group.bench_function("glossmark_no_glossary", |b| {
        b.iter(|| black_box(plain.render(black_box(ARTICLE))))
    });

    let annotated = Renderer::new(&glossary());
    group.bench_function("glossmark_with_glossary", |b| {
        b.iter(|| black_box(annotated.render(black_box(ARTICLE))))
    });

    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let parser = MdParser::new_ext(black_box(ARTICLE), Options::empty());
            black_box(parser.count())
        })
    });

    group.finish();
}

fn bench_renderer_construction(c: &mut Criterion) {
    let terms = glossary();
    c.bench_function("compile_glossary", |b| {
        b.iter(|| black_box(Renderer::new(black_box(&terms))))
    });
}

criterion_group!(benches, bench_render, bench_renderer_construction);
criterion_main!(benches);
