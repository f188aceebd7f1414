#![no_main]
use libfuzzer_sys::fuzz_target;
use purejson::{decode, encode};

// Anything the decoder accepts must encode to ASCII that decodes again.
fuzz_target!(|data: &[u8]| {
    if let Ok(value) = decode(data) {
        let encoded = match encode(&value) {
            Ok(e) => e,
            Err(e) => panic!("decoded value failed to encode: {e}\nValue: {value:?}"),
        };
        assert!(encoded.is_ascii(), "non-ASCII output: {:?}", encoded);
        if let Err(e) = decode(&encoded) {
            panic!(
                "failed to decode our own output!\nOutput: {}\nError: {}",
                String::from_utf8_lossy(&encoded),
                e
            );
        }
    }
});
