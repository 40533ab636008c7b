use super::{LanguageTable, Word};

const IT: Word = Word::span(0, 2);
const IS: Word = Word::span(3, 5);

const A: Word = Word::span(11, 12);
const QUARTER: Word = Word::span(13, 20);
const TWENTY: Word = Word::span(22, 28);
const FIVE: Word = Word::span(28, 32);
const HALF: Word = Word::span(33, 37);
const TEN: Word = Word::span(38, 41);
const TO: Word = Word::span(42, 44);
const PAST: Word = Word::span(44, 48);

const H_NINE: Word = Word::span(51, 55);
const H_ONE: Word = Word::span(55, 58);
const H_SIX: Word = Word::span(58, 61);
const H_THREE: Word = Word::span(61, 66);
const H_FOUR: Word = Word::span(66, 70);
const H_FIVE: Word = Word::span(70, 74);
const H_TWO: Word = Word::span(74, 77);
const H_EIGHT: Word = Word::span(77, 82);
const H_ELEVEN: Word = Word::span(82, 88);
const H_SEVEN: Word = Word::span(88, 93);
const H_TWELVE: Word = Word::span(93, 99);
const H_TEN: Word = Word::span(99, 102);

const OCLOCK: Word = Word::span(104, 110);

pub(super) const TABLE: LanguageTable = LanguageTable {
    stencil: &[
        "ITLISASTIME",
        "ACQUARTERDC",
        "TWENTYFIVEX",
        "HALFSTENFTO",
        "PASTERUNINE",
        "ONESIXTHREE",
        "FOURFIVETWO",
        "EIGHTELEVEN",
        "SEVENTWELVE",
        "TENSEOCLOCK",
    ],
    prefix: &[IT, IS],
    minutes: [
        &[],
        &[FIVE, PAST],
        &[TEN, PAST],
        &[A, QUARTER, PAST],
        &[TWENTY, PAST],
        &[TWENTY, FIVE, PAST],
        &[HALF, PAST],
        &[TWENTY, FIVE, TO],
        &[TWENTY, TO],
        &[A, QUARTER, TO],
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
    easter_egg: None,
};
