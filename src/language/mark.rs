//! Overlapping 11×11 stencil: "ONE" and "NINE" share letters with their neighbours,
//! and "FIVE" in the minutes hangs off "HALF".

use super::{EasterEgg, LanguageTable, Word};
use crate::geometry::LogicalIndex;

const ITS: Word = Word::span(0, 3);

const QUARTER: Word = Word::span(4, 11);
const TWENTY: Word = Word::span(13, 19);
const HALF: Word = Word::span(22, 26);
const FIVE: Word = Word::span(25, 29);
const TEN: Word = Word::span(34, 37);
const PAST: Word = Word::span(44, 48);
const TO: Word = Word::span(47, 49);

const H_THREE: Word = Word::span(55, 60);
const H_FOUR: Word = Word::span(66, 70);
const H_FIVE: Word = Word::span(70, 74);
const H_SIX: Word = Word::span(74, 77);
const H_TWO: Word = Word::span(77, 80);
const H_ONE: Word = Word::span(79, 82);
const H_EIGHT: Word = Word::span(81, 86);
const H_TEN: Word = Word::span(85, 88);
const H_SEVEN: Word = Word::span(89, 94);
const H_NINE: Word = Word::span(93, 97);
const H_TWELVE: Word = Word::span(99, 105);
const H_ELEVEN: Word = Word::span(104, 110);

const OCLOCK: Word = Word::span(113, 119);

// "IVORY" across, "LOVE" and "MARK" down through it.
const IVORY_LOVE_MARK: [LogicalIndex; 13] = [49, 50, 51, 52, 53, 40, 51, 62, 73, 30, 41, 52, 63];

pub(super) const TABLE: LanguageTable = LanguageTable {
    stencil: &[
        "ITSXQUARTER",
        "ACTWENTYZMB",
        "HALFIVEDMNO",
        "ETENWRULAQP",
        "PASTOIVORYS",
        "THREEGHVKEJ",
        "FOURFIVESIX",
        "TWONEIGHTEN",
        "USEVENINERD",
        "TWELVELEVEN",
        "BAROCLOCKTE",
    ],
    prefix: &[ITS],
    minutes: [
        &[],
        &[FIVE, PAST],
        &[TEN, PAST],
        &[QUARTER, PAST],
        &[TWENTY, PAST],
        &[TWENTY, FIVE, PAST],
        &[HALF, PAST],
        &[TWENTY, FIVE, TO],
        &[TWENTY, TO],
        &[QUARTER, TO],
        &[TEN, TO],
        &[FIVE, TO],
    ],
    hours: [
        &[H_TWELVE],
        &[H_ONE],
        &[H_TWO],
        &[H_THREE],
        &[H_FOUR],
        &[H_FIVE],
        &[H_SIX],
        &[H_SEVEN],
        &[H_EIGHT],
        &[H_NINE],
        &[H_TEN],
        &[H_ELEVEN],
        &[H_TWELVE],
    ],
    full_hour: &[OCLOCK],
    full_hour_hours: &[],
    next_hour_bucket: 7,
    easter_egg: Some(EasterEgg {
        hour: 0,
        minute: 20,
        cells: &IVORY_LOVE_MARK,
    }),
};
