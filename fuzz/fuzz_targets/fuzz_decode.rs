#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut pos = 0usize;
    if purejson::decode_at(data, &mut pos).is_ok() {
        assert!(pos <= data.len());
    }
    for item in purejson::values(data) {
        let _ = item;
    }
});
