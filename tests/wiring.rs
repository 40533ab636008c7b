#![allow(missing_docs)]
//! Mapping properties every wiring scheme must hold.

use std::collections::HashSet;

use wordclock_kit::Error;
use wordclock_kit::geometry::MinuteSlot;
use wordclock_kit::wiring::{FALLBACK_INDEX, Wiring, WiringScheme};

fn wirings() -> Vec<Wiring> {
    let mut wirings = Vec::new();
    for scheme in WiringScheme::ALL {
        if scheme == WiringScheme::Mark {
            wirings.push(Wiring::new(scheme, 11, 11).expect("mark grid"));
            continue;
        }
        for (width, height) in [(11, 10), (3, 2), (8, 8), (5, 7)] {
            wirings.push(Wiring::new(scheme, width, height).expect("valid grid"));
        }
    }
    wirings
}

fn live_indices(wiring: &Wiring) -> Vec<u16> {
    let geometry = wiring.geometry();
    let mut indices = Vec::new();
    for y in 0..geometry.height() {
        for x in 0..geometry.width() {
            if let Ok(index) = wiring.try_strip_index(x, y) {
                indices.push(index);
            }
        }
    }
    indices
}

#[test]
fn cells_map_into_the_strip() {
    for wiring in wirings() {
        let led_count = wiring.geometry().led_count();
        for index in live_indices(&wiring) {
            assert!(usize::from(index) < led_count, "{wiring:?} -> {index}");
        }
    }
}

#[test]
fn no_two_cells_share_an_led() {
    for wiring in wirings() {
        let indices = live_indices(&wiring);
        let unique: HashSet<u16> = indices.iter().copied().collect();
        assert_eq!(unique.len(), indices.len(), "{:?}", wiring.scheme());
    }
}

#[test]
fn closed_form_schemes_light_every_cell() {
    for wiring in wirings() {
        if wiring.scheme() == WiringScheme::Mark {
            continue;
        }
        assert_eq!(
            live_indices(&wiring).len(),
            wiring.geometry().cell_count(),
            "{:?}",
            wiring.scheme()
        );
    }
}

#[test]
fn minute_slots_are_distinct_and_off_the_grid() {
    for wiring in wirings() {
        let cells: HashSet<u16> = live_indices(&wiring).into_iter().collect();
        let slots: HashSet<u16> = MinuteSlot::ALL
            .into_iter()
            .map(|slot| wiring.minute_slot_index(slot))
            .collect();
        assert_eq!(slots.len(), 4, "{:?}", wiring.scheme());
        for slot in &slots {
            assert!(usize::from(*slot) < wiring.geometry().led_count());
            assert!(!cells.contains(slot), "{:?} slot {slot}", wiring.scheme());
        }
    }
}

#[test]
fn mapping_is_deterministic() {
    for wiring in wirings() {
        let again = Wiring::new(
            wiring.scheme(),
            wiring.geometry().width(),
            wiring.geometry().height(),
        )
        .expect("same grid");
        assert_eq!(live_indices(&wiring), live_indices(&again));
    }
}

#[test]
fn logical_index_follows_row_major_order() {
    let wiring = Wiring::new(WiringScheme::Timo, 11, 10).expect("valid grid");
    assert_eq!(wiring.try_strip_index_of(47), wiring.try_strip_index(3, 4));
    assert_eq!(
        wiring.try_strip_index_of(110),
        Err(Error::LogicalIndexOutOfRange { index: 110 })
    );
}

#[test]
fn out_of_range_minute_slots_fail_soft() {
    for wiring in wirings() {
        assert_eq!(
            wiring.try_minute_index(0),
            Err(Error::MinuteSlotOutOfRange { slot: 0 })
        );
        assert_eq!(wiring.minute_index(7), FALLBACK_INDEX);
    }
}

#[test]
fn unknown_scheme_name_falls_back_to_bernd() {
    assert_eq!(WiringScheme::from_name("nope"), Err(Error::UnknownWiring));
    assert_eq!(WiringScheme::from_name_or_default("nope"), WiringScheme::Bernd);
    assert_eq!(
        WiringScheme::from_name_or_default("christians_wiring"),
        WiringScheme::Christian
    );
}

#[test]
fn led_counts_leave_room_for_minutes() {
    assert_eq!(WiringScheme::Bernd.led_count(11, 10), 114);
    assert_eq!(WiringScheme::Christian.led_count(11, 10), 114);
    assert_eq!(WiringScheme::Timo.led_count(11, 10), 114);
    assert_eq!(WiringScheme::Mini.led_count(11, 10), 125);
    assert_eq!(WiringScheme::Mark.led_count(11, 11), 100);
}
