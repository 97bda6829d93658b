#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let formatted = recibo::core::format_identifier(s);
        assert_eq!(
            recibo::core::digits_only(&formatted),
            recibo::core::digits_only(s)
        );
    }
});
