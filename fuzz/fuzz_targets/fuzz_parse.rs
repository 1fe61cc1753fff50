#![no_main]
use libfuzzer_sys::fuzz_target;
use typed_ini::{Options, from_str};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(doc) = from_str(s, &Options::default()) {
            let _ = doc.dump();
        }
        let _ = from_str(s, &Options::trimmed());
    }
});
