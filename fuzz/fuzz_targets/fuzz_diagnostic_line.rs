#![no_main]

use libfuzzer_sys::fuzz_target;
use scriptmerge::infrastructure::backend::diagnostics_format::parse_output;

fuzz_target!(|data: &[u8]| {
    let output = String::from_utf8_lossy(data);
    let _ = parse_output(&output);
});
