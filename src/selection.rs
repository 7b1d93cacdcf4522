//! User chord selection: root, quality, tensions and bass note, and chord symbol naming.

use crate::{
    chord::{Quality, Tension},
    compose::{compose, ResolvedChord},
    pitch::{PitchClass, Spelling},
};

// -------------------------------------------------------------------------------------------------

/// Placeholder symbol for a selection without a root note.
pub const NO_CHORD_SYMBOL: &str = "--";

// -------------------------------------------------------------------------------------------------

/// A snapshot of the user's chord selection.
///
/// The selection is a plain value: toggle functions mutate the selection in place, but
/// resolving or naming a chord never does. Saved chords and progressions store copies of it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChordSelection {
    pub root: Option<PitchClass>,
    pub quality: Option<Quality>,
    /// Selected tensions in selection order, without duplicates.
    pub tensions: Vec<Tension>,
    pub bass: Option<PitchClass>,
}

impl ChordSelection {
    /// Create a new, empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with the given root note.
    #[must_use]
    pub fn with_root(mut self, root: PitchClass) -> Self {
        self.root = Some(root);
        self
    }

    /// Return a copy with the given quality.
    #[must_use]
    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = Some(quality);
        self
    }

    /// Return a copy with the given tension added, if not yet present.
    #[must_use]
    pub fn with_tension(mut self, tension: Tension) -> Self {
        if !self.tensions.contains(&tension) {
            self.tensions.push(tension);
        }
        self
    }

    /// Return a copy with the given bass note.
    #[must_use]
    pub fn with_bass(mut self, bass: PitchClass) -> Self {
        self.bass = Some(bass);
        self
    }

    /// Select the given root, or deselect it when it already is the root.
    pub fn toggle_root(&mut self, root: PitchClass) {
        self.root = if self.root == Some(root) {
            None
        } else {
            Some(root)
        };
    }

    /// Select the given quality, or deselect it when it already is selected.
    pub fn toggle_quality(&mut self, quality: Quality) {
        self.quality = if self.quality == Some(quality) {
            None
        } else {
            Some(quality)
        };
    }

    /// Add the given tension, or remove it when it already is selected.
    pub fn toggle_tension(&mut self, tension: Tension) {
        if let Some(index) = self.tensions.iter().position(|t| *t == tension) {
            self.tensions.remove(index);
        } else {
            self.tensions.push(tension);
        }
    }

    /// Set or clear the bass note.
    pub fn set_bass(&mut self, bass: Option<PitchClass>) {
        self.bass = bass;
    }

    /// Clear the selection.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns true when nothing is selected.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Resolve the selection into chord intervals. Returns `None` without a root.
    pub fn resolve(&self) -> Option<ResolvedChord> {
        self.root
            .map(|root| compose(root, self.quality, &self.tensions))
    }

    /// Chord symbol, e.g. `Cm7`, `G7(♭9)/B` or `--` when no root is selected.
    pub fn symbol(&self, spelling: Spelling) -> String {
        match self.root {
            Some(root) => format_symbol(root, self.quality, &self.tensions, self.bass, spelling),
            None => NO_CHORD_SYMBOL.to_string(),
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Build a chord symbol from its parts.
///
/// Tensions are named in their fixed naming order, regardless of selection order, and tensions
/// whose notes are all part of another selected tension are left out. Minor
/// qualities are not repeated when the first tension already names its minor 3rd (`Cm7`,
/// `Cdim7`), suspensions are named last (`C7sus4`). A bass note which is not the root is
/// appended as slash bass.
pub fn format_symbol(
    root: PitchClass,
    quality: Option<Quality>,
    tensions: &[Tension],
    bass: Option<PitchClass>,
    spelling: Spelling,
) -> String {
    let mut sorted_tensions = tensions.to_vec();
    sorted_tensions.sort_by_key(Tension::naming_rank);
    sorted_tensions.dedup();
    // a tension contained in another selected tension is implied by it (7 in 7(♭9)).
    // of two tensions with equal notes, the first one in naming order is kept.
    let implied = |tension: &Tension| {
        sorted_tensions.iter().any(|other| {
            other != tension
                && tension
                    .intervals()
                    .iter()
                    .all(|i| other.intervals().contains(i))
                && (other.intervals().len() > tension.intervals().len()
                    || other.naming_rank() < tension.naming_rank())
        })
    };
    let sorted_tensions = sorted_tensions
        .iter()
        .copied()
        .filter(|tension| !implied(tension))
        .collect::<Vec<_>>();

    let tension_notation = sorted_tensions
        .iter()
        .map(Tension::notation)
        .collect::<String>();

    let mut symbol = String::from(root.spell(spelling));
    match quality {
        Some(quality) if quality.is_sus() => {
            symbol.push_str(&tension_notation);
            symbol.push_str(quality.notation());
        }
        Some(quality) => {
            let first_names_third = sorted_tensions
                .first()
                .is_some_and(|tension| tension.is_minor_family());
            if !(quality.is_minor_family() && first_names_third) {
                symbol.push_str(quality.notation());
            }
            symbol.push_str(&tension_notation);
        }
        None => symbol.push_str(&tension_notation),
    }

    if let Some(bass) = bass {
        if bass != root {
            symbol.push('/');
            symbol.push_str(bass.spell(spelling));
        }
    }
    symbol
}

// --------------------------------------------------------------------------------------------------
