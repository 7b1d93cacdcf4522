//! Reverse chord lookup: names a chord from an unordered set of pitch classes.

use lazy_static::lazy_static;

use crate::{
    chord::{Quality, Tension},
    compose::compose,
    pitch::{PitchClass, Spelling},
    selection::{format_symbol, ChordSelection},
};

// --------------------------------------------------------------------------------------------------

/// A known chord shape: a quality with tensions and the intervals they compose to.
#[derive(Debug, Clone, PartialEq)]
pub struct ChordShape {
    pub quality: Quality,
    pub tensions: &'static [Tension],
    /// Sorted, unique intervals in range `[0..=11]`.
    pub intervals: Vec<u8>,
}

impl ChordShape {
    fn new(quality: Quality, tensions: &'static [Tension]) -> Self {
        let intervals = compose(PitchClass::C, Some(quality), tensions)
            .intervals()
            .to_vec();
        Self {
            quality,
            tensions,
            intervals,
        }
    }
}

// Shapes in matching priority, highest first. Richer shapes must come before the shapes they
// contain, so extended chords are never named by a plain triad.
//
// `m7(9)` and `m9` have equal intervals: `m7(9)` wins, `m9` never matches.
const SHAPE_PRIORITY: [(Quality, &[Tension]); 21] = [
    // ninths and altered dominants
    (Quality::Min, &[Tension::Minor7Ninth]),
    (Quality::Maj, &[Tension::SevenFlat9]),
    (Quality::Maj, &[Tension::SevenSharp9]),
    (Quality::Maj, &[Tension::Ninth]),
    (Quality::Maj, &[Tension::Major9]),
    (Quality::Min, &[Tension::Minor9]),
    // sevenths and sixths
    (Quality::Dim, &[Tension::Minor7Flat5]),
    (Quality::Dim, &[Tension::Dim7]),
    (Quality::Maj, &[Tension::Major7]),
    (Quality::Maj, &[Tension::Seventh]),
    (Quality::Min, &[Tension::Minor7]),
    (Quality::Maj, &[Tension::Sixth]),
    (Quality::Min, &[Tension::Minor6]),
    // added ninths
    (Quality::Maj, &[Tension::Add9]),
    (Quality::Min, &[Tension::MinorAdd9]),
    // triads
    (Quality::Maj, &[]),
    (Quality::Min, &[]),
    (Quality::Dim, &[]),
    (Quality::Aug, &[]),
    // suspensions
    (Quality::Sus2, &[]),
    (Quality::Sus4, &[]),
];

lazy_static! {
    static ref CHORD_SHAPES: Vec<ChordShape> = SHAPE_PRIORITY
        .iter()
        .map(|(quality, tensions)| ChordShape::new(*quality, *tensions))
        .collect();
}

/// All known chord shapes, in matching priority.
pub fn chord_shapes() -> &'static [ChordShape] {
    &CHORD_SHAPES
}

// --------------------------------------------------------------------------------------------------

/// A successfully identified chord.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifiedChord {
    pub root: PitchClass,
    pub quality: Quality,
    pub tensions: Vec<Tension>,
    /// Bass note when the chord was found over a pinned note other than its root.
    pub bass: Option<PitchClass>,
}

impl IdentifiedChord {
    /// Convert to a chord selection, e.g. to save or edit the identified chord.
    pub fn selection(&self) -> ChordSelection {
        ChordSelection {
            root: Some(self.root),
            quality: Some(self.quality),
            tensions: self.tensions.clone(),
            bass: self.bass,
        }
    }

    /// Chord symbol, e.g. `C7/E`.
    pub fn symbol(&self, spelling: Spelling) -> String {
        format_symbol(
            self.root,
            Some(self.quality),
            &self.tensions,
            self.bass,
            spelling,
        )
    }
}

/// Result of a reverse chord lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identification {
    /// Less than two distinct notes were given.
    Insufficient,
    /// No known chord shape matches the notes.
    Unidentified,
    /// A chord shape matched.
    Chord(IdentifiedChord),
}

impl Identification {
    /// The identified chord, if any.
    pub fn chord(&self) -> Option<&IdentifiedChord> {
        match self {
            Identification::Chord(chord) => Some(chord),
            _ => None,
        }
    }
}

// --------------------------------------------------------------------------------------------------

/// Identify the chord formed by the given notes.
///
/// Duplicate notes are ignored. Less than two distinct `notes` are insufficient, regardless of
/// the pinned root. When a `pinned_root` is given, it is added to the notes and tested as root
/// first. When no shape matches on the pinned root, every note is tried as root,
/// in the order the notes are given, and the pinned note becomes the chord's bass note.
///
/// For each candidate root the intervals of all notes are compared against all known shapes in
/// priority order. Only exact matches count: the first one wins.
pub fn identify(notes: &[PitchClass], pinned_root: Option<PitchClass>) -> Identification {
    let mut unique_notes = Vec::with_capacity(notes.len() + 1);
    for note in notes.iter().copied() {
        if !unique_notes.contains(&note) {
            unique_notes.push(note);
        }
    }
    if unique_notes.len() < 2 {
        return Identification::Insufficient;
    }
    if let Some(pinned) = pinned_root {
        if !unique_notes.contains(&pinned) {
            unique_notes.push(pinned);
        }
    }

    if let Some(pinned) = pinned_root {
        if let Some(shape) = match_shape(&unique_notes, pinned) {
            log::debug!("identified {:?} on pinned root {}", shape.quality, pinned);
            return identified(pinned, shape, None);
        }
        log::trace!("no chord on pinned root {}, trying all notes", pinned);
    }

    for root in unique_notes.iter().copied() {
        if Some(root) == pinned_root {
            continue;
        }
        if let Some(shape) = match_shape(&unique_notes, root) {
            log::debug!("identified {:?} on root {}", shape.quality, root);
            return identified(root, shape, pinned_root);
        }
    }
    Identification::Unidentified
}

fn match_shape(notes: &[PitchClass], root: PitchClass) -> Option<&'static ChordShape> {
    let mut intervals = notes
        .iter()
        .map(|note| root.interval_to(*note))
        .collect::<Vec<_>>();
    intervals.sort_unstable();
    CHORD_SHAPES
        .iter()
        .find(|shape| shape.intervals == intervals)
}

fn identified(root: PitchClass, shape: &ChordShape, bass: Option<PitchClass>) -> Identification {
    Identification::Chord(IdentifiedChord {
        root,
        quality: shape.quality,
        tensions: shape.tensions.to_vec(),
        bass,
    })
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pcs(values: &[u8]) -> Vec<PitchClass> {
        values
            .iter()
            .map(|v| PitchClass::from_semitones(*v as i32))
            .collect()
    }

    #[test]
    fn shape_table() {
        let shapes = chord_shapes();
        assert_eq!(shapes.len(), SHAPE_PRIORITY.len());
        assert_eq!(shapes[0].intervals, vec![0, 2, 3, 7, 10]);
        assert_eq!(shapes[2].intervals, vec![0, 3, 4, 7, 10]);
        // shapes match the plain vocabulary intervals
        for shape in shapes {
            match shape.tensions {
                [] => assert_eq!(shape.intervals, shape.quality.intervals()),
                [tension] => assert_eq!(
                    shape.intervals,
                    tension.intervals(),
                    "{:?} {:?}",
                    shape.quality,
                    tension
                ),
                _ => panic!("unexpected multi tension shape {:?}", shape),
            }
        }
        // richer shapes come first
        for (index, shape) in shapes.iter().enumerate() {
            for later in &shapes[index + 1..] {
                assert!(
                    later.intervals.len() <= shape.intervals.len()
                        || !shape.intervals.iter().all(|i| later.intervals.contains(i)),
                    "{:?} shadows {:?}",
                    shape,
                    later
                );
            }
        }
    }

    #[test]
    fn insufficient_notes() {
        assert_eq!(identify(&[], None), Identification::Insufficient);
        assert_eq!(identify(&pcs(&[4]), None), Identification::Insufficient);
        assert_eq!(identify(&pcs(&[4, 16, 4]), None), Identification::Insufficient);
        assert_eq!(
            identify(&pcs(&[4]), Some(PitchClass::E)),
            Identification::Insufficient
        );
        // a pinned root does not count as a picked note
        assert_eq!(
            identify(&pcs(&[0]), Some(PitchClass::E)),
            Identification::Insufficient
        );
        assert_eq!(
            identify(&pcs(&[0, 0]), Some(PitchClass::G)),
            Identification::Insufficient
        );
    }

    #[test]
    fn unidentified() {
        assert_eq!(identify(&pcs(&[0, 1]), None), Identification::Unidentified);
        assert_eq!(identify(&pcs(&[0, 1, 2, 3]), None), Identification::Unidentified);
        assert_eq!(identify(&pcs(&[0, 4, 7, 11, 2, 5]), None), Identification::Unidentified);
    }

    #[test]
    fn triads_and_sevenths() {
        let chord = identify(&pcs(&[0, 4, 7]), None);
        let chord = chord.chord().expect("C major");
        assert_eq!(chord.root, PitchClass::C);
        assert_eq!(chord.quality, Quality::Maj);
        assert!(chord.tensions.is_empty());
        assert_eq!(chord.symbol(Spelling::Sharps), "C");

        let chord = identify(&pcs(&[0, 3, 6, 9]), None);
        let chord = chord.chord().expect("C dim7");
        assert_eq!(chord.root, PitchClass::C);
        assert_eq!(chord.tensions, vec![Tension::Dim7]);
        assert_eq!(chord.symbol(Spelling::Sharps), "Cdim7");

        // inversions are found in any order
        let chord = identify(&pcs(&[7, 11, 2, 5]), None);
        assert_eq!(
            chord.chord().map(|c| c.symbol(Spelling::Sharps)),
            Some("G7".to_string())
        );
        let chord = identify(&pcs(&[4, 7, 0]), None);
        assert_eq!(chord.chord().map(|c| c.root), Some(PitchClass::C));
    }

    #[test]
    fn root_order_decides_ambiguous_sets() {
        // C6 and Am7 share the same notes: the first note in the given order is tried first
        let c6 = identify(&pcs(&[0, 4, 7, 9]), None);
        assert_eq!(
            c6.chord().map(|c| c.symbol(Spelling::Sharps)),
            Some("C6".to_string())
        );
        let am7 = identify(&pcs(&[9, 0, 4, 7]), None);
        assert_eq!(
            am7.chord().map(|c| c.symbol(Spelling::Sharps)),
            Some("Am7".to_string())
        );
        // a pinned root decides too
        let am7 = identify(&pcs(&[0, 4, 7, 9]), Some(PitchClass::A));
        assert_eq!(
            am7.chord().map(|c| c.symbol(Spelling::Sharps)),
            Some("Am7".to_string())
        );
    }

    #[test]
    fn slash_chords() {
        let chord = identify(&pcs(&[0, 4, 7, 10]), Some(PitchClass::E));
        let chord = chord.chord().expect("C7/E");
        assert_eq!(chord.root, PitchClass::C);
        assert_eq!(chord.quality, Quality::Maj);
        assert_eq!(chord.tensions, vec![Tension::Seventh]);
        assert_eq!(chord.bass, Some(PitchClass::E));
        assert_eq!(chord.symbol(Spelling::Sharps), "C7/E");

        // the pinned note does not need to be part of the notes
        let chord = identify(&pcs(&[0, 7]), Some(PitchClass::E));
        assert_eq!(
            chord.chord().map(|c| c.symbol(Spelling::Sharps)),
            Some("C/E".to_string())
        );

        // when the pinned root matches, there is no slash bass
        let chord = identify(&pcs(&[0, 4, 7]), Some(PitchClass::C));
        assert_eq!(chord.chord().and_then(|c| c.bass), None);
    }

    #[test]
    fn known_collision() {
        let chord = identify(&pcs(&[2, 4, 5, 9, 0]), Some(PitchClass::D));
        let chord = chord.chord().expect("Dm7(9)");
        assert_eq!(chord.tensions, vec![Tension::Minor7Ninth]);
        assert_eq!(chord.symbol(Spelling::Sharps), "Dm7(9)");
    }

    #[test]
    fn round_trip() {
        for root in PitchClass::all() {
            for shape in chord_shapes() {
                let notes = shape
                    .intervals
                    .iter()
                    .map(|i| root + *i)
                    .collect::<Vec<_>>();
                let identified = identify(&notes, Some(root));
                let chord = identified.chord().expect("shape must be identified");
                assert_eq!(chord.root, root);
                assert_eq!(chord.bass, None);
                if shape.tensions == [Tension::Minor9] {
                    assert_eq!(chord.tensions, vec![Tension::Minor7Ninth]);
                } else {
                    assert_eq!(chord.quality, shape.quality);
                    assert_eq!(chord.tensions, shape.tensions);
                }
                let resolved = chord.selection().resolve().expect("root is set");
                assert_eq!(resolved.intervals(), shape.intervals.as_slice());
            }
        }
    }

    #[test]
    fn does_not_mutate_input() {
        let notes = pcs(&[7, 0, 4]);
        let copy = notes.clone();
        let _ = identify(&notes, Some(PitchClass::E));
        assert_eq!(notes, copy);
    }
}
