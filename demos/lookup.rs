use simplelog::*;

use fretboard::prelude::*;

fn main() -> anyhow::Result<()> {
    // init logging
    TermLogger::init(
        log::STATIC_MAX_LEVEL,
        ConfigBuilder::default().build(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap_or_else(|err| {
        log::error!("init_logger error: {:?}", err);
    });

    let fretboard = Fretboard::new(Tuning::standard(), 12).map_err(anyhow::Error::msg)?;

    // compose a chord from the selector and show where to find its notes
    let key = "Bb";
    let spelling = Spelling::for_key(key);
    let selection = ChordSelection::new()
        .with_root(PitchClass::try_from(key).map_err(anyhow::Error::msg)?)
        .with_quality(Quality::Maj)
        .with_tension(Tension::Major7)
        .with_bass(PitchClass::D);
    let chord = selection
        .resolve()
        .ok_or_else(|| anyhow::anyhow!("missing chord root"))?;
    println!("{}", selection.symbol(spelling));
    for (string, open) in fretboard.tuning().strings().iter().enumerate() {
        let frets = fretboard
            .chord_positions(&chord)
            .into_iter()
            .filter(|(position, _)| position.string == string)
            .map(|(position, degree)| format!("{}:{}", position.fret, degree))
            .collect::<Vec<_>>();
        println!("  {:<2} | {}", open.spell(spelling), frets.join(" "));
    }

    // look up chords from fretted notes
    let shapes: [(&str, &[(usize, usize)]); 4] = [
        ("open C", &[(4, 3), (3, 2), (2, 0), (1, 1), (0, 0)]),
        ("C7 over E", &[(5, 0), (4, 3), (3, 2), (2, 3), (1, 1), (0, 3)]),
        ("Am7 barre", &[(5, 5), (4, 7), (3, 5), (2, 5), (1, 5), (0, 5)]),
        ("Ab over Eb", &[(3, 1), (2, 1), (1, 1)]),
    ];
    for (name, positions) in shapes {
        let mut lookup = LookupSelection::new();
        for (string, fret) in positions {
            lookup.toggle(&fretboard, *string, *fret);
        }
        let notes = lookup.notes();
        // the lowest string's note is the bass
        let bass = lookup
            .marks()
            .iter()
            .filter(|mark| mark.status == MarkStatus::Selected)
            .max_by_key(|mark| mark.position.string)
            .map(|mark| mark.note);
        let symbol = match identify(&notes, bass) {
            Identification::Chord(chord) => chord.symbol(Spelling::Sharps),
            Identification::Unidentified => "unknown chord".to_string(),
            Identification::Insufficient => "select at least two notes".to_string(),
        };
        println!("{}: {}", name, symbol);
    }

    // diatonic chords and a scale overlay
    let key = PitchClass::G;
    let symbols = diatonic_chords(key, DiatonicMode::Major)
        .iter()
        .map(|chord| chord.symbol(Spelling::Sharps))
        .collect::<Vec<_>>();
    println!("G major: {}", symbols.join(" "));
    let scale = Scale::try_from((PitchClass::E, "minor pentatonic")).map_err(anyhow::Error::msg)?;
    let notes = scale
        .notes()
        .iter()
        .map(|note| note.spell(Spelling::Sharps))
        .collect::<Vec<_>>();
    println!("E minor pentatonic: {}", notes.join(" "));

    Ok(())
}
