#![no_main]
use libfuzzer_sys::fuzz_target;
use typed_ini::{Options, from_str};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let opts = Options::default();

        if let Ok(first) = from_str(input, &opts) {
            let rendered = first.to_string();
            match from_str(&rendered, &opts) {
                Ok(second) => {
                    if first != second {
                        panic!(
                            "INI roundtrip mismatch!\nInput: {:?}\nRendered: {:?}\nFirst: {:?}\nSecond: {:?}",
                            input, rendered, first, second
                        );
                    }
                }
                Err(e) => {
                    panic!(
                        "Failed to parse rendered document!\nInput: {:?}\nRendered: {:?}\nError: {}",
                        input, rendered, e
                    );
                }
            }
        }
    }
});
