use std::hint::black_box;

use criterion::{criterion_group, Criterion};

use fretboard::prelude::*;

// ---------------------------------------------------------------------------------------------

fn compose_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("Compose");
    group.bench_function("Shapes", |b| {
        b.iter(|| {
            for root in PitchClass::all() {
                for shape in chord_shapes() {
                    black_box(compose(root, Some(shape.quality), shape.tensions));
                }
            }
        })
    });
    group.bench_function("Symbols", |b| {
        let selection = ChordSelection::new()
            .with_root(PitchClass::G)
            .with_quality(Quality::Maj)
            .with_tension(Tension::SevenFlat9)
            .with_tension(Tension::Seventh)
            .with_bass(PitchClass::B);
        b.iter(|| black_box(selection.symbol(Spelling::Flats)))
    });
    group.finish();
}

// ---------------------------------------------------------------------------------------------

criterion_group! {
    name = compose_benches;
    config = Criterion::default();
    targets = compose_all
}
