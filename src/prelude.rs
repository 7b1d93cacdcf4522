//! The fretboard prelude.
//!
//! The purpose of this module is to alleviate imports of common fretboard types:
//!
//! ```
//! # #![allow(unused_imports)]
//! use fretboard::prelude::*;
//! ```

pub use super::{
    // chord building and naming
    chord::{DegreeSlot, Quality, Tension},
    compose::{compose, ResolvedChord},
    selection::{format_symbol, ChordSelection, NO_CHORD_SYMBOL},
    // reverse lookup
    identify::{chord_shapes, identify, ChordShape, IdentifiedChord, Identification},
    // scales and keys
    scale::{diatonic_chords, DiatonicChord, DiatonicMode, Scale, ScaleKind},
    // fretboard
    fretboard::{FretMark, FretPosition, Fretboard, LookupSelection, MarkStatus, Tuning},
    // all public basic types
    pitch::{degree_of, PitchClass, Spelling},
};
