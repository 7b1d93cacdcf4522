//! A music theory engine for guitar fretboard chord visualizers.
//!
//! Composes chords from a root, quality and tensions, names them, identifies chords from a
//! set of picked notes and places chord and scale notes on a fretboard.

pub mod pitch;
pub use pitch::{PitchClass, Spelling};

pub mod chord;
pub use chord::{Quality, Tension};

pub mod compose;
pub use compose::{compose, ResolvedChord};

pub mod selection;
pub use selection::ChordSelection;

pub mod identify;
pub use identify::{identify, IdentifiedChord, Identification};

pub mod scale;
pub use scale::{Scale, ScaleKind};

pub mod fretboard;
pub use fretboard::{Fretboard, LookupSelection, Tuning};

pub mod prelude;

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::prelude::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn select_and_look_up() -> Result<(), String> {
        // pick G7 with a B bass from the chord selector
        let selection = ChordSelection::new()
            .with_root(PitchClass::try_from("G")?)
            .with_quality(Quality::try_from("major")?)
            .with_tension(Tension::try_from("7")?)
            .with_bass(PitchClass::try_from("B")?);
        assert_eq!(selection.symbol(Spelling::Sharps), "G7/B");

        // and find it again from its notes, with the bass as pinned root
        let chord = selection.resolve().ok_or("missing root")?;
        let identified = identify(&chord.notes(), selection.bass);
        assert_eq!(identified.chord().map(|c| c.selection()), Some(selection));
        Ok(())
    }
}
