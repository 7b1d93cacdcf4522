//! Composes a chord quality and tensions into a resolved list of intervals and degrees.

use crate::{
    chord::{DegreeSlot, Quality, Tension},
    pitch::{degree_of, PitchClass},
};

// -------------------------------------------------------------------------------------------------

/// Chord notes relative to a root, as resolved by [`compose`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedChord {
    root: PitchClass,
    intervals: Vec<u8>,
    degrees: Vec<&'static str>,
}

impl ResolvedChord {
    /// Root note.
    pub fn root(&self) -> PitchClass {
        self.root
    }

    /// Ascending, unique semitone offsets from the root. Always starts with 0.
    pub fn intervals(&self) -> &[u8] {
        &self.intervals
    }

    /// Degree names, aligned with `intervals`.
    pub fn degrees(&self) -> &[&'static str] {
        &self.degrees
    }

    /// Absolute pitch classes of the chord, in interval order.
    pub fn notes(&self) -> Vec<PitchClass> {
        self.intervals
            .iter()
            .map(|interval| self.root + *interval)
            .collect()
    }

    /// Returns true when the given pitch class is part of the chord.
    pub fn contains(&self, note: PitchClass) -> bool {
        self.intervals.contains(&self.root.interval_to(note))
    }

    /// Degree name of the given note, when it is part of the chord.
    pub fn degree_of(&self, note: PitchClass) -> Option<&'static str> {
        let interval = self.root.interval_to(note);
        self.intervals
            .iter()
            .position(|i| *i == interval)
            .map(|index| self.degrees[index])
    }
}

// -------------------------------------------------------------------------------------------------

/// Build the chord for the given root, optional quality and tensions.
///
/// Tensions are applied in the given order: a tension which replaces a degree slot overwrites
/// the current note in that slot, all other tension notes are added when not yet present.
/// Thirds that conflict with the quality are removed afterwards: minor qualities drop a major
/// 3rd, major qualities drop a minor 3rd and suspended qualities drop every 3rd.
///
/// Without a quality and tensions, the result is the bare root.
pub fn compose(root: PitchClass, quality: Option<Quality>, tensions: &[Tension]) -> ResolvedChord {
    // (interval, degree label) pairs, labels as written in the vocabulary
    let mut pairs: Vec<(u8, &'static str)> = match quality {
        Some(quality) => quality.entry().pairs().collect(),
        None => vec![(0, "R")],
    };

    for tension in tensions {
        let replaces = tension.replaces();
        for (interval, label) in tension.entry().pairs() {
            if let Some(slot) = replaces {
                if DegreeSlot::of_label(label) == Some(slot) {
                    pairs.retain(|(_, l)| DegreeSlot::of_label(l) != Some(slot));
                }
            }
            if !pairs.iter().any(|(i, _)| *i == interval) {
                pairs.push((interval, label));
            }
        }
    }

    if let Some(quality) = quality {
        let is_third = |label: &str| DegreeSlot::of_label(label) == Some(DegreeSlot::Third);
        if quality.is_minor_family() {
            pairs.retain(|(i, l)| !(*i == 4 && is_third(l)));
        } else if quality.is_major_family() {
            pairs.retain(|(i, l)| !(*i == 3 && is_third(l)));
        }
        if quality.is_sus() {
            pairs.retain(|(i, _)| *i != 3 && *i != 4);
        }
    }

    let mut intervals = pairs.into_iter().map(|(i, _)| i).collect::<Vec<_>>();
    intervals.sort_unstable();
    intervals.dedup();

    let degrees = intervals
        .iter()
        .map(|interval| degree_of(root + *interval, root))
        .collect();

    ResolvedChord {
        root,
        intervals,
        degrees,
    }
}

// --------------------------------------------------------------------------------------------------
