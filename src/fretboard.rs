//! Fretboard model: tuning, note positions and the fret selection used for reverse lookups.

use std::ops::RangeInclusive;

use crate::{
    compose::ResolvedChord,
    identify::{identify, Identification},
    pitch::PitchClass,
};

// -------------------------------------------------------------------------------------------------

/// Open string pitch classes, from the highest (first) to the lowest string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuning(Vec<PitchClass>);

impl Tuning {
    /// Create a custom tuning from open string notes, highest string first.
    pub fn new(strings: Vec<PitchClass>) -> Result<Self, String> {
        if strings.is_empty() {
            return Err("tuning needs at least one string".to_string());
        }
        Ok(Self(strings))
    }

    /// Six string standard tuning: E B G D A E.
    pub fn standard() -> Self {
        Self(vec![
            PitchClass::E,
            PitchClass::B,
            PitchClass::G,
            PitchClass::D,
            PitchClass::A,
            PitchClass::E,
        ])
    }

    /// Open string notes, highest string first.
    pub fn strings(&self) -> &[PitchClass] {
        &self.0
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::standard()
    }
}

// -------------------------------------------------------------------------------------------------

/// A position on the fretboard. String 0 is the highest string, fret 0 the open string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FretPosition {
    pub string: usize,
    pub fret: usize,
}

/// Fretboard with a tuning and a fixed number of frets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fretboard {
    tuning: Tuning,
    frets: usize,
}

impl Fretboard {
    /// Valid range for the number of frets.
    pub const FRET_RANGE: RangeInclusive<usize> = 12..=24;
    /// Default number of frets.
    pub const DEFAULT_FRETS: usize = 15;

    /// Create a new fretboard. `frets` must be in range `[12..=24]`.
    pub fn new(tuning: Tuning, frets: usize) -> Result<Self, String> {
        if !Self::FRET_RANGE.contains(&frets) {
            return Err(format!(
                "invalid fret count '{}' - must be in range [{}..{}]",
                frets,
                Self::FRET_RANGE.start(),
                Self::FRET_RANGE.end()
            ));
        }
        Ok(Self { tuning, frets })
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn string_count(&self) -> usize {
        self.tuning.strings().len()
    }

    /// Number of frets, not counting the open strings.
    pub fn frets(&self) -> usize {
        self.frets
    }

    /// Change the number of frets. An invalid count is rejected and leaves the board unchanged.
    pub fn set_frets(&mut self, frets: usize) -> Result<(), String> {
        *self = Self::new(self.tuning.clone(), frets)?;
        Ok(())
    }

    /// Note at the given position, or `None` when the position is not on the board.
    pub fn note_at(&self, string: usize, fret: usize) -> Option<PitchClass> {
        if fret > self.frets {
            return None;
        }
        self.tuning
            .strings()
            .get(string)
            .map(|open| *open + (fret % 12) as u8)
    }

    /// All positions on the board, string by string.
    pub fn positions(&self) -> impl Iterator<Item = FretPosition> + '_ {
        (0..self.string_count())
            .flat_map(move |string| (0..=self.frets).map(move |fret| FretPosition { string, fret }))
    }

    /// All positions which play the given note.
    pub fn positions_of(&self, note: PitchClass) -> Vec<FretPosition> {
        self.positions()
            .filter(|pos| self.note_at(pos.string, pos.fret) == Some(note))
            .collect()
    }

    /// All positions which play a note of the given chord, with the note's degree name.
    pub fn chord_positions(&self, chord: &ResolvedChord) -> Vec<(FretPosition, &'static str)> {
        self.positions()
            .filter_map(|pos| {
                let note = self.note_at(pos.string, pos.fret)?;
                chord.degree_of(note).map(|degree| (pos, degree))
            })
            .collect()
    }
}

impl Default for Fretboard {
    fn default() -> Self {
        Self {
            tuning: Tuning::standard(),
            frets: Self::DEFAULT_FRETS,
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// State of a marked position in a [`LookupSelection`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MarkStatus {
    Selected,
    /// Only open strings can be muted.
    Muted,
}

/// A marked fretboard position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FretMark {
    pub position: FretPosition,
    pub note: PitchClass,
    pub status: MarkStatus,
}

/// Positions picked on the fretboard to identify a chord from.
///
/// Each string holds at most one fretted note. Open strings cycle through selected, muted
/// and cleared. Frets below a fretted note on the same string can not be picked.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LookupSelection {
    marks: Vec<FretMark>,
}

impl LookupSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marked positions in selection order.
    pub fn marks(&self) -> &[FretMark] {
        &self.marks
    }

    /// Returns true when the position is blocked by a fretted note above it on the same string.
    pub fn is_disabled(&self, string: usize, fret: usize) -> bool {
        self.marks.iter().any(|mark| {
            mark.status == MarkStatus::Selected
                && mark.position.string == string
                && fret < mark.position.fret
        })
    }

    /// Click on the given position. Returns false when the click was ignored, because the
    /// position is not on the board or it is disabled.
    pub fn toggle(&mut self, fretboard: &Fretboard, string: usize, fret: usize) -> bool {
        let Some(note) = fretboard.note_at(string, fret) else {
            log::warn!("ignoring click on invalid fret position {}:{}", string, fret);
            return false;
        };
        if self.is_disabled(string, fret) {
            return false;
        }
        let position = FretPosition { string, fret };
        let existing = self.marks.iter().position(|mark| mark.position == position);
        match existing {
            Some(index) if fret == 0 && self.marks[index].status == MarkStatus::Selected => {
                self.marks[index].status = MarkStatus::Muted;
            }
            Some(index) => {
                self.marks.remove(index);
            }
            None => {
                if fret > 0 {
                    self.marks.retain(|mark| mark.position.string != string);
                }
                self.marks.push(FretMark {
                    position,
                    note,
                    status: MarkStatus::Selected,
                });
            }
        }
        true
    }

    /// Unique selected notes in selection order. Muted strings are excluded.
    pub fn notes(&self) -> Vec<PitchClass> {
        let mut notes = Vec::with_capacity(self.marks.len());
        for mark in &self.marks {
            if mark.status == MarkStatus::Selected && !notes.contains(&mark.note) {
                notes.push(mark.note);
            }
        }
        notes
    }

    /// Identify the chord of the selected notes.
    pub fn identify(&self) -> Identification {
        identify(&self.notes(), None)
    }

    /// Remove all marks.
    pub fn clear(&mut self) {
        self.marks.clear();
    }
}

// --------------------------------------------------------------------------------------------------
