//! Pitch classes, note spelling and scale degree names.

use std::{
    fmt::Display,
    ops::{Add, Sub},
};

use derive_more::Into;

// -------------------------------------------------------------------------------------------------

const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Degree names relative to a root, indexed by semitone distance.
pub const DEGREE_NAMES: [&str; 12] = [
    "R", "♭2", "2", "♭3", "3", "4", "♭5", "5", "♭6", "6", "♭7", "7",
];

// key names which are displayed with flats
const FLAT_KEYS: [&str; 12] = [
    "F", "Bb", "Eb", "Ab", "Db", "Gb", "Cb", "A#", "D#", "G#", "C#", "F#",
];

// -------------------------------------------------------------------------------------------------

/// Enharmonic spelling mode used to display pitch classes.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Spelling {
    #[default]
    Sharps,
    Flats,
}

impl Spelling {
    /// Spelling for the given key name: flat keys (and the sharp keys which are
    /// commonly written as flat keys) use flats, everything else uses sharps.
    pub fn for_key(key: &str) -> Self {
        if FLAT_KEYS.contains(&key.trim()) {
            Spelling::Flats
        } else {
            Spelling::Sharps
        }
    }

    /// Spelling for a key given as pitch class.
    pub fn for_root(root: PitchClass) -> Self {
        Self::for_key(root.spell(Spelling::Sharps))
    }

    fn names(&self) -> &'static [&'static str; 12] {
        match self {
            Spelling::Sharps => &SHARP_NAMES,
            Spelling::Flats => &FLAT_NAMES,
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// A note modulo an octave: 0 = C, 1 = C# ... 11 = B.
///
/// All arithmetic on pitch classes wraps around the octave, so any value is always normalized
/// to the range `[0..=11]`.
///
/// For `TryFrom<&str>` conversions, note names like `C`, `C#`, `Db`, `f♯` or `B♭` are supported.
/// Octave numbers are not part of a pitch class and thus are rejected.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: Self = Self(0);
    pub const CS: Self = Self(1);
    pub const D: Self = Self(2);
    pub const DS: Self = Self(3);
    pub const E: Self = Self(4);
    pub const F: Self = Self(5);
    pub const FS: Self = Self(6);
    pub const G: Self = Self(7);
    pub const GS: Self = Self(8);
    pub const A: Self = Self(9);
    pub const AS: Self = Self(10);
    pub const B: Self = Self(11);

    /// Number of pitch classes in an octave.
    pub const COUNT: u8 = 12;

    /// Create a pitch class from any semitone value, wrapping into the octave.
    pub fn from_semitones(semitones: i32) -> Self {
        Self(semitones.rem_euclid(Self::COUNT as i32) as u8)
    }

    /// Pitch class of a MIDI note number.
    pub fn from_midi_note(note: u8) -> Self {
        Self(note % Self::COUNT)
    }

    /// All 12 pitch classes, ascending from C.
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..Self::COUNT).map(Self)
    }

    /// Raw value in range `[0..=11]`.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Display name using the given spelling table.
    pub fn spell(&self, spelling: Spelling) -> &'static str {
        spelling.names()[self.0 as usize]
    }

    /// Return a new pitch class, moved by the given (possibly negative) number of semitones.
    #[must_use]
    pub fn transposed(&self, semitones: i32) -> Self {
        Self::from_semitones(self.0 as i32 + semitones)
    }

    /// Ascending semitone distance from this pitch class to `other`, in range `[0..=11]`.
    pub fn interval_to(&self, other: PitchClass) -> u8 {
        (other.0 + Self::COUNT - self.0) % Self::COUNT
    }

    /// Scale degree name of this note relative to the given root.
    pub fn degree_from(&self, root: PitchClass) -> &'static str {
        degree_of(*self, root)
    }
}

/// Scale degree name of `note` relative to `root`: `R`, `♭2`, `2` ... `7`.
pub fn degree_of(note: PitchClass, root: PitchClass) -> &'static str {
    DEGREE_NAMES[root.interval_to(note) as usize]
}

impl TryFrom<u8> for PitchClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, String> {
        if value < Self::COUNT {
            Ok(Self(value))
        } else {
            Err(format!(
                "invalid pitch class '{}' - must be in range [0..11]",
                value
            ))
        }
    }
}

impl TryFrom<&str> for PitchClass {
    type Error = String;

    /// Try converting the given note name to a pitch class.
    fn try_from(s: &str) -> Result<Self, String> {
        fn accidental_value(c: char) -> Option<i32> {
            match c {
                '#' | '♯' | 's' | 'S' => Some(1),
                'b' | '♭' => Some(-1),
                _ => None,
            }
        }

        let name = s.trim();
        let mut chars = name.chars();
        let letter = chars
            .next()
            .ok_or_else(|| format!("invalid note name '{}' - string is empty.", s))?;
        let base = match letter {
            'c' | 'C' => 0,
            'd' | 'D' => 2,
            'e' | 'E' => 4,
            'f' | 'F' => 5,
            'g' | 'G' => 7,
            'a' | 'A' => 9,
            'b' | 'B' => 11,
            _ => {
                return Err(format!(
                    "invalid note name '{}' - note character '{}' is invalid.",
                    s, letter
                ))
            }
        };
        let offset = match (chars.next(), chars.next()) {
            (None, _) => 0,
            (Some(c), None) => accidental_value(c).ok_or_else(|| {
                format!(
                    "invalid note name '{}' - accidental '{}' is invalid.",
                    s, c
                )
            })?,
            _ => {
                return Err(format!(
                    "invalid note name '{}' - expected a single accidental.",
                    s
                ))
            }
        };
        Ok(Self::from_semitones(base + offset))
    }
}

impl Add<u8> for PitchClass {
    type Output = Self;
    fn add(self, rhs: u8) -> Self {
        Self::from_semitones(self.0 as i32 + rhs as i32)
    }
}

impl Sub<u8> for PitchClass {
    type Output = Self;
    fn sub(self, rhs: u8) -> Self {
        Self::from_semitones(self.0 as i32 - rhs as i32)
    }
}

impl Display for PitchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.spell(Spelling::Sharps))
    }
}

// --------------------------------------------------------------------------------------------------
