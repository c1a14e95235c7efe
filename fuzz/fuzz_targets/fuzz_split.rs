#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Either a parse error or a split that partitions the input
        if let Ok(split) = scriptmerge::split(text, std::path::Path::new("fuzz.csx")) {
            assert!(text.ends_with(split.body));
            assert!(text.starts_with(split.header));
        }
    }
});
