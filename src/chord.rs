//! Chord vocabulary: chord qualities and tensions with their intervals, degrees and notation.

use derive_more::Display;

// --------------------------------------------------------------------------------------------------

/// A scale degree slot, which can be replaced by a chord entry (e.g. `sus4` replaces the 3rd).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display)]
pub enum DegreeSlot {
    #[display("3rd")]
    Third,
    #[display("5th")]
    Fifth,
}

impl DegreeSlot {
    /// Slot of the given degree label, ignoring accidentals: `♭3` and `3` are both a 3rd,
    /// `♭5`, `5` and `♯5` are all a 5th. Other degrees have no slot.
    pub fn of_label(label: &str) -> Option<Self> {
        match label.trim_start_matches(['♭', '♯']) {
            "3" => Some(DegreeSlot::Third),
            "5" => Some(DegreeSlot::Fifth),
            _ => None,
        }
    }
}

// --------------------------------------------------------------------------------------------------

/// Static vocabulary record of a chord quality or tension.
#[derive(Debug, Clone, PartialEq)]
pub struct ChordEntry {
    /// Stable identifier.
    pub id: &'static str,
    /// Suffix appended to the root note name in chord symbols.
    pub notation: &'static str,
    /// Absolute semitone offsets from the root, ascending.
    pub intervals: &'static [u8],
    /// Degree names, aligned with `intervals`.
    pub degrees: &'static [&'static str],
    /// Degree slot which gets overwritten by this entry's intervals, if any.
    pub replaces: Option<DegreeSlot>,
}

impl ChordEntry {
    /// (interval, degree) pairs of the entry.
    pub fn pairs(&self) -> impl Iterator<Item = (u8, &'static str)> + '_ {
        self.intervals
            .iter()
            .copied()
            .zip(self.degrees.iter().copied())
    }
}

// triads
const MAJOR: ChordEntry = ChordEntry {
    id: "Maj",
    notation: "",
    intervals: &[0, 4, 7],
    degrees: &["R", "3", "5"],
    replaces: None,
};
const MINOR: ChordEntry = ChordEntry {
    id: "min",
    notation: "m",
    intervals: &[0, 3, 7],
    degrees: &["R", "♭3", "5"],
    replaces: None,
};
const DIMINISHED: ChordEntry = ChordEntry {
    id: "dim",
    notation: "dim",
    intervals: &[0, 3, 6],
    degrees: &["R", "♭3", "♭5"],
    replaces: None,
};
const AUGMENTED: ChordEntry = ChordEntry {
    id: "aug",
    notation: "aug",
    intervals: &[0, 4, 8],
    degrees: &["R", "3", "♯5"],
    replaces: None,
};
const SUS2: ChordEntry = ChordEntry {
    id: "sus2",
    notation: "sus2",
    intervals: &[0, 2, 7],
    degrees: &["R", "2", "5"],
    replaces: Some(DegreeSlot::Third),
};
const SUS4: ChordEntry = ChordEntry {
    id: "sus4",
    notation: "sus4",
    intervals: &[0, 5, 7],
    degrees: &["R", "4", "5"],
    replaces: Some(DegreeSlot::Third),
};
// sevenths and sixths
const SEVEN: ChordEntry = ChordEntry {
    id: "7",
    notation: "7",
    intervals: &[0, 4, 7, 10],
    degrees: &["R", "3", "5", "♭7"],
    replaces: None,
};
const MAJOR7: ChordEntry = ChordEntry {
    id: "M7",
    notation: "M7",
    intervals: &[0, 4, 7, 11],
    degrees: &["R", "3", "5", "7"],
    replaces: None,
};
const MINOR7: ChordEntry = ChordEntry {
    id: "m7",
    notation: "m7",
    intervals: &[0, 3, 7, 10],
    degrees: &["R", "♭3", "5", "♭7"],
    replaces: None,
};
const MINOR7FLAT5: ChordEntry = ChordEntry {
    id: "m7b5",
    notation: "m7(♭5)",
    intervals: &[0, 3, 6, 10],
    degrees: &["R", "♭3", "♭5", "♭7"],
    replaces: None,
};
const DIMINISHED7: ChordEntry = ChordEntry {
    id: "dim7",
    notation: "dim7",
    intervals: &[0, 3, 6, 9],
    degrees: &["R", "♭3", "♭5", "♭♭7"],
    replaces: None,
};
const SIX: ChordEntry = ChordEntry {
    id: "6",
    notation: "6",
    intervals: &[0, 4, 7, 9],
    degrees: &["R", "3", "5", "6"],
    replaces: None,
};
const MINOR6: ChordEntry = ChordEntry {
    id: "m6",
    notation: "m6",
    intervals: &[0, 3, 7, 9],
    degrees: &["R", "♭3", "5", "6"],
    replaces: None,
};
// added and extended ninths
const ADD9: ChordEntry = ChordEntry {
    id: "add9",
    notation: "add9",
    intervals: &[0, 2, 4, 7],
    degrees: &["R", "9", "3", "5"],
    replaces: None,
};
const MINOR_ADD9: ChordEntry = ChordEntry {
    id: "madd9",
    notation: "m(add9)",
    intervals: &[0, 2, 3, 7],
    degrees: &["R", "9", "♭3", "5"],
    replaces: None,
};
const NINE: ChordEntry = ChordEntry {
    id: "9",
    notation: "9",
    intervals: &[0, 2, 4, 7, 10],
    degrees: &["R", "9", "3", "5", "♭7"],
    replaces: None,
};
const MAJOR9: ChordEntry = ChordEntry {
    id: "M9",
    notation: "M9",
    intervals: &[0, 2, 4, 7, 11],
    degrees: &["R", "9", "3", "5", "7"],
    replaces: None,
};
const MINOR9: ChordEntry = ChordEntry {
    id: "m9",
    notation: "m9",
    intervals: &[0, 2, 3, 7, 10],
    degrees: &["R", "9", "♭3", "5", "♭7"],
    replaces: None,
};
const MINOR7_NINE: ChordEntry = ChordEntry {
    id: "m7(9)",
    notation: "m7(9)",
    intervals: &[0, 2, 3, 7, 10],
    degrees: &["R", "9", "♭3", "5", "♭7"],
    replaces: None,
};
const SEVEN_FLAT9: ChordEntry = ChordEntry {
    id: "7b9",
    notation: "7(♭9)",
    intervals: &[0, 1, 4, 7, 10],
    degrees: &["R", "♭9", "3", "5", "♭7"],
    replaces: None,
};
const SEVEN_SHARP9: ChordEntry = ChordEntry {
    id: "7s9",
    notation: "7(♯9)",
    intervals: &[0, 3, 4, 7, 10],
    degrees: &["R", "♯9", "3", "5", "♭7"],
    replaces: None,
};
// altered fifths
const FLAT5: ChordEntry = ChordEntry {
    id: "b5",
    notation: "(♭5)",
    intervals: &[6],
    degrees: &["♭5"],
    replaces: Some(DegreeSlot::Fifth),
};
const SHARP5: ChordEntry = ChordEntry {
    id: "s5",
    notation: "(♯5)",
    intervals: &[8],
    degrees: &["♯5"],
    replaces: Some(DegreeSlot::Fifth),
};

// --------------------------------------------------------------------------------------------------

/// Base chord quality. A chord has at most one quality.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quality {
    #[display("Major")]
    Maj,
    #[display("Minor")]
    Min,
    #[display("Diminished")]
    Dim,
    #[display("Augmented")]
    Aug,
    #[display("Suspended 2")]
    Sus2,
    #[display("Suspended 4")]
    Sus4,
}

impl Quality {
    /// All qualities in their canonical order.
    pub const ALL: [Quality; 6] = [
        Quality::Maj,
        Quality::Min,
        Quality::Dim,
        Quality::Aug,
        Quality::Sus2,
        Quality::Sus4,
    ];

    /// Vocabulary record of this quality.
    pub fn entry(&self) -> &'static ChordEntry {
        match self {
            Quality::Maj => &MAJOR,
            Quality::Min => &MINOR,
            Quality::Dim => &DIMINISHED,
            Quality::Aug => &AUGMENTED,
            Quality::Sus2 => &SUS2,
            Quality::Sus4 => &SUS4,
        }
    }

    pub fn id(&self) -> &'static str {
        self.entry().id
    }

    pub fn notation(&self) -> &'static str {
        self.entry().notation
    }

    pub fn intervals(&self) -> &'static [u8] {
        self.entry().intervals
    }

    pub fn degrees(&self) -> &'static [&'static str] {
        self.entry().degrees
    }

    /// Minor and diminished qualities: a major 3rd from tensions is dropped.
    pub fn is_minor_family(&self) -> bool {
        matches!(self, Quality::Min | Quality::Dim)
    }

    /// Major and augmented qualities: a minor 3rd from tensions is dropped.
    pub fn is_major_family(&self) -> bool {
        matches!(self, Quality::Maj | Quality::Aug)
    }

    /// Suspended qualities: chords never contain a 3rd.
    pub fn is_sus(&self) -> bool {
        matches!(self, Quality::Sus2 | Quality::Sus4)
    }

    /// List of all quality ids.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|quality| quality.id()).collect()
    }
}

impl TryFrom<&str> for Quality {
    type Error = String;

    /// Try converting the given id or common alias to a chord quality.
    fn try_from(s: &str) -> Result<Self, String> {
        let id = match s.trim() {
            "major" | "maj" | "M" => "Maj",
            "minor" | "m" | "-" => "min",
            "diminished" | "o" => "dim",
            "augmented" | "+" => "aug",
            other => other,
        };
        Self::ALL
            .iter()
            .find(|quality| quality.id() == id)
            .copied()
            .ok_or_else(|| {
                format!(
                    "invalid chord quality '{}', valid qualities are: {}",
                    s,
                    Self::names().join(",")
                )
            })
    }
}

// --------------------------------------------------------------------------------------------------

/// Tension, added on top of a chord quality. A chord can have any number of tensions.
///
/// The declaration order is the order in which tensions are named in chord symbols.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tension {
    #[display("Dominant 7th")]
    Seventh,
    #[display("Major 7th")]
    Major7,
    #[display("Minor 7th")]
    Minor7,
    #[display("Minor 7th flat 5")]
    Minor7Flat5,
    #[display("Diminished 7th")]
    Dim7,
    #[display("Major 6th")]
    Sixth,
    #[display("Minor 6th")]
    Minor6,
    #[display("Add 9")]
    Add9,
    #[display("Minor Add 9")]
    MinorAdd9,
    #[display("Dominant 9th")]
    Ninth,
    #[display("Major 9th")]
    Major9,
    #[display("Minor 9th")]
    Minor9,
    #[display("Minor 7th (9)")]
    Minor7Ninth,
    #[display("7th flat 9")]
    SevenFlat9,
    #[display("7th sharp 9")]
    SevenSharp9,
    #[display("Flat 5")]
    Flat5,
    #[display("Sharp 5")]
    Sharp5,
}

impl Tension {
    /// All tensions in naming order.
    pub const ALL: [Tension; 17] = [
        Tension::Seventh,
        Tension::Major7,
        Tension::Minor7,
        Tension::Minor7Flat5,
        Tension::Dim7,
        Tension::Sixth,
        Tension::Minor6,
        Tension::Add9,
        Tension::MinorAdd9,
        Tension::Ninth,
        Tension::Major9,
        Tension::Minor9,
        Tension::Minor7Ninth,
        Tension::SevenFlat9,
        Tension::SevenSharp9,
        Tension::Flat5,
        Tension::Sharp5,
    ];

    /// Vocabulary record of this tension.
    pub fn entry(&self) -> &'static ChordEntry {
        match self {
            Tension::Seventh => &SEVEN,
            Tension::Major7 => &MAJOR7,
            Tension::Minor7 => &MINOR7,
            Tension::Minor7Flat5 => &MINOR7FLAT5,
            Tension::Dim7 => &DIMINISHED7,
            Tension::Sixth => &SIX,
            Tension::Minor6 => &MINOR6,
            Tension::Add9 => &ADD9,
            Tension::MinorAdd9 => &MINOR_ADD9,
            Tension::Ninth => &NINE,
            Tension::Major9 => &MAJOR9,
            Tension::Minor9 => &MINOR9,
            Tension::Minor7Ninth => &MINOR7_NINE,
            Tension::SevenFlat9 => &SEVEN_FLAT9,
            Tension::SevenSharp9 => &SEVEN_SHARP9,
            Tension::Flat5 => &FLAT5,
            Tension::Sharp5 => &SHARP5,
        }
    }

    pub fn id(&self) -> &'static str {
        self.entry().id
    }

    pub fn notation(&self) -> &'static str {
        self.entry().notation
    }

    pub fn intervals(&self) -> &'static [u8] {
        self.entry().intervals
    }

    pub fn degrees(&self) -> &'static [&'static str] {
        self.entry().degrees
    }

    pub fn replaces(&self) -> Option<DegreeSlot> {
        self.entry().replaces
    }

    /// Tensions which carry their own minor 3rd in their notation (`m7`, `dim7`, ...).
    pub fn is_minor_family(&self) -> bool {
        matches!(
            self,
            Tension::Minor7
                | Tension::Minor7Flat5
                | Tension::Dim7
                | Tension::Minor6
                | Tension::MinorAdd9
                | Tension::Minor9
                | Tension::Minor7Ninth
        )
    }

    /// Position in the naming order.
    pub fn naming_rank(&self) -> usize {
        *self as usize
    }

    /// List of all tension ids.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|tension| tension.id()).collect()
    }
}

impl TryFrom<&str> for Tension {
    type Error = String;

    /// Try converting the given id or common alias to a tension.
    fn try_from(s: &str) -> Result<Self, String> {
        let id = match s.trim() {
            "dom7" => "7",
            "maj7" | "Δ7" => "M7",
            "min7" | "-7" => "m7",
            "m7(b5)" | "m7(♭5)" | "ø" => "m7b5",
            "o7" => "dim7",
            "min6" => "m6",
            "m(add9)" => "madd9",
            "maj9" => "M9",
            "min9" => "m9",
            "7(b9)" | "7(♭9)" | "7♭9" => "7b9",
            "7#9" | "7(#9)" | "7(♯9)" | "7♯9" => "7s9",
            "(b5)" | "♭5" => "b5",
            "#5" | "(#5)" | "♯5" => "s5",
            other => other,
        };
        Self::ALL
            .iter()
            .find(|tension| tension.id() == id)
            .copied()
            .ok_or_else(|| {
                format!(
                    "invalid tension '{}', valid tensions are: {}",
                    s,
                    Self::names().join(",")
                )
            })
    }
}

// --------------------------------------------------------------------------------------------------
