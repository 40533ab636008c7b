#![allow(missing_docs)]
//! Spoken-time translation across languages.

use wordclock_kit::Error;
use wordclock_kit::language::{Language, Phrase, Word};
use wordclock_kit::wiring::{Wiring, WiringScheme};

fn spell(language: Language, phrase: &Phrase) -> String {
    phrase
        .iter()
        .filter_map(|&cell| language.letter(cell))
        .collect()
}

fn cells(words: &[Word]) -> Vec<u16> {
    words.iter().flat_map(|word| word.cells()).collect()
}

#[test]
fn english_ten_forty_seven_is_a_quarter_to_eleven() {
    let phrase = Language::English.translate(10, 47);
    assert_eq!(spell(Language::English, &phrase), "ITISAQUARTERTOELEVEN");
}

#[test]
fn english_ten_fifty_two_is_ten_to_eleven() {
    let phrase = Language::English.translate(10, 52);
    assert_eq!(spell(Language::English, &phrase), "ITISTENTOELEVEN");
}

#[test]
fn english_full_hour_says_oclock() {
    let phrase = Language::English.translate(15, 2);
    assert_eq!(spell(Language::English, &phrase), "ITISTHREEOCLOCK");
}

#[test]
fn translation_is_constant_within_a_bucket() {
    for language in Language::ALL {
        for hour in 0..24 {
            for bucket_start in (0..60).step_by(5) {
                let first = language.translate(hour, bucket_start);
                for minute in bucket_start + 1..bucket_start + 5 {
                    // The Mark Easter egg owns exactly one minute.
                    if language == Language::Mark && hour % 12 == 0 && (minute == 20 || bucket_start == 20) {
                        continue;
                    }
                    assert_eq!(language.translate(hour, minute), first, "{language:?} {hour}:{minute}");
                }
            }
        }
    }
}

#[test]
fn full_hour_suffix_only_on_the_hour() {
    for language in Language::ALL {
        let suffix = cells(language.full_hour_words());
        for hour in 0..24 {
            for minute in 0..60 {
                if language == Language::Mark && hour % 12 == 0 && minute == 20 {
                    continue;
                }
                let phrase = language.translate(hour, minute);
                assert_eq!(phrase.ends_with(&suffix), minute < 5, "{language:?} {hour}:{minute}");
            }
        }
    }
}

#[test]
fn past_the_half_hour_names_the_next_hour() {
    for language in Language::ALL {
        for hour in 0..24u8 {
            for minute in 35..60 {
                assert_eq!(language.hour_word_index(hour, minute), hour % 12 + 1);
            }
            for minute in 0..25 {
                assert_eq!(language.hour_word_index(hour, minute), hour % 12);
            }
        }
    }
}

#[test]
fn german_speaks_of_the_next_hour_from_twenty_five() {
    let phrase = Language::German.translate(10, 27);
    assert_eq!(spell(Language::German, &phrase), "ESISTFÜNFVORHALBELF");
    let english = Language::English.translate(10, 27);
    assert_eq!(spell(Language::English, &english), "ITISTWENTYFIVEPASTTEN");
}

#[test]
fn german_one_oclock_is_ein_uhr() {
    assert_eq!(spell(Language::German, &Language::German.translate(13, 0)), "ESISTEINUHR");
    assert_eq!(spell(Language::German, &Language::German.translate(1, 5)), "ESISTFÜNFNACHEINS");
}

#[test]
fn eleven_forty_rolls_over_to_twelve() {
    for hour in [11, 23] {
        let phrase = Language::English.translate(hour, 40);
        assert_eq!(spell(Language::English, &phrase), "ITISTWENTYTOTWELVE");
    }
    let phrase = Language::English.translate(23, 59);
    assert_eq!(spell(Language::English, &phrase), "ITISFIVETOTWELVE");
}

#[test]
fn mark_easter_egg_at_twenty_past_twelve() {
    let expected = Phrase::from_cells(&[49, 50, 51, 52, 53, 40, 51, 62, 73, 30, 41, 52, 63]);
    assert_eq!(Language::Mark.translate(0, 20), expected);
    assert_eq!(Language::Mark.translate(12, 20), expected);
    assert_eq!(spell(Language::Mark, &expected), "IVORYLOVEMARK");

    let regular = Language::Mark.translate(12, 21);
    assert_eq!(spell(Language::Mark, &regular), "ITSTWENTYPASTTWELVE");
    assert_ne!(Language::Mark.translate(1, 20), expected);
}

#[test]
fn mark_overlapping_hours() {
    assert_eq!(spell(Language::Mark, &Language::Mark.translate(1, 0)), "ITSONEOCLOCK");
    assert_eq!(spell(Language::Mark, &Language::Mark.translate(8, 30)), "ITSHALFPASTEIGHT");
    assert_eq!(spell(Language::Mark, &Language::Mark.translate(8, 50)), "ITSTENTONINE");
}

#[test]
fn phrase_cells_stay_on_the_stencil() {
    for language in Language::ALL {
        let (width, height) = language.stencil_size();
        let cell_count = width * height;
        for hour in 0..24 {
            for minute in 0..60 {
                for &cell in language.translate(hour, minute).iter() {
                    assert!(cell < cell_count, "{language:?} {hour}:{minute} -> {cell}");
                }
            }
        }
    }
}

#[test]
fn every_mark_phrase_lights_only_live_leds() {
    let (width, height) = Language::Mark.stencil_size();
    let wiring = Wiring::new(WiringScheme::Mark, width, height).expect("mark grid");
    for hour in 0..24 {
        for minute in 0..60 {
            for &cell in Language::Mark.translate(hour, minute).iter() {
                assert!(
                    wiring.try_strip_index_of(cell).is_ok(),
                    "{hour}:{minute} -> cell {cell} has no LED"
                );
            }
        }
    }
}

#[test]
fn unknown_language_falls_back_to_german() {
    assert_eq!(Language::from_name("klingon"), Err(Error::UnknownLanguage));
    assert_eq!(Language::from_name_or_default("klingon"), Language::German);
    assert_eq!(Language::from_name_or_default("mark"), Language::Mark);
}

#[test]
fn translate_time_matches_translate() {
    let time = time::Time::from_hms(21, 34, 56).expect("valid time");
    assert_eq!(Language::English.translate_time(time), Language::English.translate(21, 34));
}
