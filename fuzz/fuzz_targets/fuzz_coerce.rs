#![no_main]

use libfuzzer_sys::fuzz_target;

use rackcalc_core::RawInputs;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let fields: Vec<&str> = text.splitn(4, '\n').collect();
    if fields.len() < 4 {
        return;
    }
    let raw = RawInputs::new(fields[0], fields[1], fields[2], fields[3]);

    // Lenient coercion never fails
    let lenient = raw.to_inputs_lenient();

    // Strict coercion agrees with lenient whenever it accepts the input
    if let Ok(strict) = raw.to_inputs_strict() {
        assert_eq!(strict, lenient);
    }
});
