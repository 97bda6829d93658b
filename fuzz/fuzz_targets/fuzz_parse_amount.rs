#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs.
        if let Ok(amount) = recibo::core::MonetaryAmount::parse_br(s) {
            let words = recibo::core::spell_amount(&amount);
            assert!(!words.contains("  "));
        }
    }
});
