//! Overlay scales and diatonic chords based on a key `PitchClass`.

use crate::{
    chord::Quality,
    pitch::{PitchClass, Spelling},
    selection::{format_symbol, ChordSelection},
};

// -------------------------------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct Mode {
    name: &'static str,
    alt_names: &'static str,
    degrees: [usize; 12],
}

impl Mode {
    fn steps(&self) -> Vec<u8> {
        self.degrees
            .iter()
            .copied()
            .enumerate()
            .filter(|(_s, d)| *d != 0)
            .map(|(s, _d)| s as u8)
            .collect()
    }

    fn resolve_synonyms(scale: &str) -> String {
        scale
            .split(' ')
            .filter(|v| !v.is_empty())
            .map(|v| match v.to_ascii_lowercase().as_str() {
                "maj" => "major",
                "min" => "minor",
                "nat" => "natural",
                "penta" | "pent." => "pentatonic",
                _ => v,
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

const SCALE_MODES: [Mode; 5] = [
    Mode {
        name: "major pentatonic",
        alt_names: "pentatonic major",
        degrees: [1, 0, 2, 0, 3, 0, 0, 4, 0, 5, 0, 0],
    },
    Mode {
        name: "minor pentatonic",
        alt_names: "pentatonic minor",
        degrees: [1, 0, 0, 2, 0, 3, 0, 4, 0, 0, 5, 0],
    },
    Mode {
        name: "blues",
        alt_names: "blues minor;blues scale",
        degrees: [1, 0, 0, 2, 0, 3, 4, 5, 0, 0, 6, 0],
    },
    Mode {
        name: "natural major",
        alt_names: "major;ionian",
        degrees: [1, 0, 2, 0, 3, 4, 0, 5, 0, 6, 0, 7],
    },
    Mode {
        name: "natural minor",
        alt_names: "minor;aeolian",
        degrees: [1, 0, 2, 3, 0, 4, 0, 5, 6, 0, 7, 0],
    },
];

// -------------------------------------------------------------------------------------------------

/// Scales which can be shown on top of a chord.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ScaleKind {
    MajorPentatonic,
    MinorPentatonic,
    Blues,
    Major,
    Minor,
}

impl ScaleKind {
    pub const ALL: [ScaleKind; 5] = [
        ScaleKind::MajorPentatonic,
        ScaleKind::MinorPentatonic,
        ScaleKind::Blues,
        ScaleKind::Major,
        ScaleKind::Minor,
    ];

    fn mode(&self) -> &'static Mode {
        &SCALE_MODES[*self as usize]
    }

    /// Scale name.
    pub fn name(&self) -> &'static str {
        self.mode().name
    }

    /// Known scale names.
    pub fn names() -> Vec<&'static str> {
        SCALE_MODES.iter().map(|mode| mode.name).collect()
    }

    /// Semitone steps from the key, ascending.
    pub fn steps(&self) -> Vec<u8> {
        self.mode().steps()
    }

    /// Pitch classes of this scale in the given key, ascending from the key.
    pub fn notes(&self, key: PitchClass) -> Vec<PitchClass> {
        self.steps().into_iter().map(|step| key + step).collect()
    }
}

impl TryFrom<&str> for ScaleKind {
    type Error = String;

    /// Try converting the given string to a known scale.
    fn try_from(scale: &str) -> Result<Self, String> {
        let norm_scale = Mode::resolve_synonyms(scale).to_ascii_lowercase();
        Self::ALL
            .iter()
            .find(|kind| {
                let mode = kind.mode();
                mode.name.eq_ignore_ascii_case(&norm_scale)
                    || mode
                        .alt_names
                        .split(';')
                        .any(|v| v.eq_ignore_ascii_case(&norm_scale))
            })
            .copied()
            .ok_or_else(|| {
                format!(
                    "unknown scale '{}', valid scales are: {}",
                    scale,
                    Self::names().join(",")
                )
            })
    }
}

// -------------------------------------------------------------------------------------------------

/// A scale in a specific key.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Scale {
    key: PitchClass,
    kind: ScaleKind,
}

impl Scale {
    pub fn new(key: PitchClass, kind: ScaleKind) -> Self {
        Self { key, kind }
    }

    pub fn key(&self) -> PitchClass {
        self.key
    }

    pub fn kind(&self) -> ScaleKind {
        self.kind
    }

    /// Pitch classes of the scale, ascending from the key.
    pub fn notes(&self) -> Vec<PitchClass> {
        self.kind.notes(self.key)
    }

    /// Returns true when the note is part of the scale.
    pub fn contains(&self, note: PitchClass) -> bool {
        self.kind.mode().degrees[self.key.interval_to(note) as usize] != 0
    }

    /// 1-based scale degree of the given note, or `None` when the note is not in the scale.
    pub fn degree(&self, note: PitchClass) -> Option<usize> {
        match self.kind.mode().degrees[self.key.interval_to(note) as usize] {
            0 => None,
            degree => Some(degree),
        }
    }
}

impl TryFrom<(PitchClass, &str)> for Scale {
    type Error = String;

    fn try_from((key, kind): (PitchClass, &str)) -> Result<Self, String> {
        Ok(Self::new(key, ScaleKind::try_from(kind)?))
    }
}

// -------------------------------------------------------------------------------------------------

/// Key modes for diatonic chord tables.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DiatonicMode {
    Major,
    Minor,
}

impl DiatonicMode {
    /// Underlying seven note scale.
    pub fn scale_kind(&self) -> ScaleKind {
        match self {
            DiatonicMode::Major => ScaleKind::Major,
            DiatonicMode::Minor => ScaleKind::Minor,
        }
    }

    /// Triad qualities on the scale degrees I to VII.
    pub fn qualities(&self) -> [Quality; 7] {
        use Quality::*;
        match self {
            DiatonicMode::Major => [Maj, Min, Min, Maj, Maj, Min, Dim],
            DiatonicMode::Minor => [Min, Dim, Maj, Min, Min, Maj, Maj],
        }
    }
}

/// A triad on a degree of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiatonicChord {
    /// Scale degree in range `[1..=7]`.
    pub degree: usize,
    pub root: PitchClass,
    pub quality: Quality,
}

impl DiatonicChord {
    /// Selection of this chord, without tensions and bass note.
    pub fn selection(&self) -> ChordSelection {
        ChordSelection::new()
            .with_root(self.root)
            .with_quality(self.quality)
    }

    /// Chord symbol, e.g. `Dm`.
    pub fn symbol(&self, spelling: Spelling) -> String {
        format_symbol(self.root, Some(self.quality), &[], None, spelling)
    }
}

/// Diatonic triads of the given key and mode, from degree I to VII.
pub fn diatonic_chords(key: PitchClass, mode: DiatonicMode) -> Vec<DiatonicChord> {
    mode.scale_kind()
        .notes(key)
        .into_iter()
        .zip(mode.qualities())
        .enumerate()
        .map(|(index, (root, quality))| DiatonicChord {
            degree: index + 1,
            root,
            quality,
        })
        .collect()
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::identify::identify;
    use pretty_assertions::assert_eq;

    #[test]
    fn scale_from_string() {
        assert!(ScaleKind::try_from("wurst").is_err());
        assert!(ScaleKind::try_from("lydian").is_err());

        assert_eq!(ScaleKind::try_from("blues"), Ok(ScaleKind::Blues));
        assert_eq!(ScaleKind::try_from(" Maj  Penta "), Ok(ScaleKind::MajorPentatonic));
        assert_eq!(ScaleKind::try_from("pentatonic min"), Ok(ScaleKind::MinorPentatonic));
        assert_eq!(ScaleKind::try_from("Minor"), Ok(ScaleKind::Minor));
        assert_eq!(ScaleKind::try_from("ionian"), Ok(ScaleKind::Major));
    }

    #[test]
    fn scale_notes() -> Result<(), String> {
        assert_eq!(ScaleKind::MajorPentatonic.steps(), vec![0, 2, 4, 7, 9]);
        assert_eq!(ScaleKind::MinorPentatonic.steps(), vec![0, 3, 5, 7, 10]);
        assert_eq!(ScaleKind::Blues.steps(), vec![0, 3, 5, 6, 7, 10]);
        assert_eq!(
            ScaleKind::MinorPentatonic.notes(PitchClass::A),
            vec![
                PitchClass::A,
                PitchClass::C,
                PitchClass::D,
                PitchClass::E,
                PitchClass::G
            ]
        );

        let scale = Scale::try_from((PitchClass::E, "blues"))?;
        assert!(scale.contains(PitchClass::AS));
        assert!(!scale.contains(PitchClass::B + 1));
        assert_eq!(scale.degree(PitchClass::E), Some(1));
        assert_eq!(scale.degree(PitchClass::D), Some(6));
        assert_eq!(scale.degree(PitchClass::F), None);
        Ok(())
    }

    #[test]
    fn diatonic_triads() {
        let symbols = diatonic_chords(PitchClass::C, DiatonicMode::Major)
            .iter()
            .map(|chord| chord.symbol(Spelling::Sharps))
            .collect::<Vec<_>>();
        assert_eq!(symbols, vec!["C", "Dm", "Em", "F", "G", "Am", "Bdim"]);

        let symbols = diatonic_chords(PitchClass::A, DiatonicMode::Minor)
            .iter()
            .map(|chord| chord.symbol(Spelling::Sharps))
            .collect::<Vec<_>>();
        assert_eq!(symbols, vec!["Am", "Bdim", "C", "Dm", "Em", "F", "G"]);

        let chords = diatonic_chords(PitchClass::F, DiatonicMode::Major);
        assert_eq!(chords[3].degree, 4);
        assert_eq!(chords[3].symbol(Spelling::Flats), "Bb");
        assert!(chords[3].selection().tensions.is_empty());
    }

    #[test]
    fn diatonic_triads_stack_thirds() {
        // the quality tables match the triads stacked from the scale itself
        for mode in [DiatonicMode::Major, DiatonicMode::Minor] {
            for key in PitchClass::all() {
                let notes = mode.scale_kind().notes(key);
                for chord in diatonic_chords(key, mode) {
                    let index = chord.degree - 1;
                    let triad = [notes[index], notes[(index + 2) % 7], notes[(index + 4) % 7]];
                    let identified = identify(&triad, Some(chord.root));
                    let identified = identified.chord().expect("triads are known shapes");
                    assert_eq!(identified.root, chord.root);
                    assert_eq!(identified.quality, chord.quality);
                }
            }
        }
    }
}
