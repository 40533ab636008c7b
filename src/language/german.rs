use super::{LanguageTable, Word};

const ES: Word = Word::span(0, 2);
const IST: Word = Word::span(3, 6);

const FUENF: Word = Word::span(7, 11);
const ZEHN: Word = Word::span(11, 15);
const ZWANZIG: Word = Word::span(15, 22);
const DREIVIERTEL: Word = Word::span(22, 33);
const VIERTEL: Word = Word::span(26, 33);
const VOR: Word = Word::span(33, 36);
const NACH: Word = Word::span(40, 44);
const HALB: Word = Word::span(44, 48);

const H_ELF: Word = Word::span(49, 52);
const H_FUENF: Word = Word::span(51, 55);
const H_EINS: Word = Word::span(55, 59);
// "EIN UHR"
const H_EIN: Word = Word::span(55, 58);
const H_ZWEI: Word = Word::span(62, 66);
const H_DREI: Word = Word::span(66, 70);
const H_VIER: Word = Word::span(73, 77);
const H_SECHS: Word = Word::span(77, 82);
const H_ACHT: Word = Word::span(84, 88);
const H_SIEBEN: Word = Word::span(88, 94);
const H_ZWOELF: Word = Word::span(94, 99);
const H_ZEHN: Word = Word::span(99, 103);
const H_NEUN: Word = Word::span(102, 106);

const UHR: Word = Word::span(107, 110);

pub(super) const TABLE: LanguageTable = LanguageTable {
    stencil: &[
        "ESKISTAFÜNF",
        "ZEHNZWANZIG",
        "DREIVIERTEL",
        "VORFUNKNACH",
        "HALBAELFÜNF",
        "EINSXAMZWEI",
        "DREIPMJVIER",
        "SECHSNLACHT",
        "SIEBENZWÖLF",
        "ZEHNEUNKUHR",
    ],
    prefix: &[ES, IST],
    minutes: [
        &[],
        &[FUENF, NACH],
        &[ZEHN, NACH],
        &[VIERTEL, NACH],
        &[ZWANZIG, NACH],
        &[FUENF, VOR, HALB],
        &[HALB],
        &[FUENF, NACH, HALB],
        &[ZWANZIG, VOR],
        &[DREIVIERTEL],
        &[ZEHN, VOR],
        &[FUENF, VOR],
    ],
    hours: [
        &[H_ZWOELF],
        &[H_EINS],
        &[H_ZWEI],
        &[H_DREI],
        &[H_VIER],
        &[H_FUENF],
        &[H_SECHS],
        &[H_SIEBEN],
        &[H_ACHT],
        &[H_NEUN],
        &[H_ZEHN],
        &[H_ELF],
        &[H_ZWOELF],
    ],
    full_hour: &[UHR],
    full_hour_hours: &[(1, &[H_EIN])],
    // "fünf vor halb" already names the next hour.
    next_hour_bucket: 5,
    easter_egg: None,
};
