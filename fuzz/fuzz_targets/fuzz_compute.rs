#![no_main]

use libfuzzer_sys::fuzz_target;

use rackcalc_core::constants::MAX_RACK_TOTAL;
use rackcalc_core::{compute_layout, EvenSpread, RackInputs};

fuzz_target!(|data: &[u8]| {
    if data.len() < 26 {
        return;
    }
    let total_servers = i64::from_le_bytes(data[0..8].try_into().unwrap());
    let server_ru = f64::from(u16::from_le_bytes([data[8], data[9]])) / 4.0;
    let rack_total = i64::from_le_bytes(data[10..18].try_into().unwrap());
    let ru_per_rack = f64::from_le_bytes(data[18..26].try_into().unwrap());
    if !ru_per_rack.is_finite() {
        return;
    }
    // Large but allowed rack counts only slow the fuzzer down
    if rack_total > 4096 && rack_total <= MAX_RACK_TOTAL {
        return;
    }

    let inputs = RackInputs::new(total_servers, server_ru, rack_total, ru_per_rack);
    let layout = compute_layout(&inputs);

    if !layout.valid {
        assert!(layout.distribution.is_empty());
        assert_eq!(layout.even_spread, EvenSpread::NotComputed);
        assert_eq!(layout.rack_limit_exceeded, inputs.is_valid());
        return;
    }

    assert_eq!(layout.distribution.len() as i64, rack_total);
    let racks: usize = layout.rack_summary.values().sum();
    assert_eq!(racks, layout.distribution.len());
    if let Some(target) = layout.even_spread.target() {
        assert_eq!(target.rem_euclid(rack_total), 0);
        assert!(target >= total_servers);
    }
});
