#![no_main]

use libfuzzer_sys::fuzz_target;
use scriptmerge::{compose, Fragment, HeaderPolicy};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // NUL separates fragments; the first is the primary
    let fragments: Vec<Fragment> = text
        .split('\0')
        .enumerate()
        .map(|(i, part)| Fragment::new(format!("f{}.csx", i), part))
        .collect();
    let Some((primary, imported)) = fragments.split_first() else {
        return;
    };

    if let Ok(composition) = compose(primary, imported, HeaderPolicy::Hoist) {
        for line in 0..composition.unit.len() {
            let _ = composition.range_map.translate(line);
        }
    }
});
