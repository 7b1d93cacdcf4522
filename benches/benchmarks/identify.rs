use std::hint::black_box;

use criterion::{criterion_group, Criterion};

use fretboard::prelude::*;

// ---------------------------------------------------------------------------------------------

fn create_lookups() -> Vec<(Vec<PitchClass>, Option<PitchClass>)> {
    let mut lookups = Vec::new();
    for root in PitchClass::all() {
        for shape in chord_shapes() {
            let notes = compose(root, Some(shape.quality), shape.tensions).notes();
            // pinned on the last chord note, so most lookups need the fallback roots
            let pinned = notes.last().copied();
            lookups.push((notes, pinned));
        }
    }
    lookups
}

fn identify_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("Identify");
    let lookups = create_lookups();
    group.bench_function("Unpinned", |b| {
        b.iter(|| {
            for (notes, _) in &lookups {
                black_box(identify(notes, None));
            }
        })
    });
    group.bench_function("Pinned", |b| {
        b.iter(|| {
            for (notes, pinned) in &lookups {
                black_box(identify(notes, *pinned));
            }
        })
    });
    group.bench_function("Fretboard", |b| {
        let fretboard = Fretboard::default();
        let mut selection = LookupSelection::new();
        for (string, fret) in [(4, 3), (3, 2), (2, 3), (1, 1), (0, 0)] {
            selection.toggle(&fretboard, string, fret);
        }
        b.iter(|| black_box(selection.identify()))
    });
    group.finish();
}

// ---------------------------------------------------------------------------------------------

criterion_group! {
    name = identify_benches;
    config = Criterion::default();
    targets = identify_all
}
