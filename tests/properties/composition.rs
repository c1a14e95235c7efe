//! Property tests for composition and range map translation.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use scriptmerge::domain::value_objects::PositionMarker;
use scriptmerge::{compose, Fragment, HeaderPolicy};

fn header_line() -> impl Strategy<Value = String> {
    proptest::string::string_regex("using [A-Z][a-z]{0,6}(\\.[A-Z][a-z]{0,6}){0,2};")
        .unwrap()
}

fn body_line() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::string::string_regex("f_[a-z0-9_]{0,10}\\(\\);").unwrap(),
        proptest::string::string_regex("var v_[a-z]{1,6} = [0-9]{1,4};").unwrap(),
        Just(String::new()),
    ]
}

fn fragment_text() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    (
        proptest::collection::vec(header_line(), 0..=4),
        proptest::collection::vec(body_line(), 1..=8),
    )
        .prop_map(|(headers, mut body)| {
            // A body must start with code so the header boundary is unambiguous
            body[0] = "f_start();".to_string();
            (headers, body)
        })
}

fn to_text(headers: &[String], body: &[String]) -> String {
    headers
        .iter()
        .chain(body)
        .map(|l| format!("{}\n", l))
        .collect()
}

fn fragments() -> impl Strategy<Value = Vec<Fragment>> {
    proptest::collection::vec(fragment_text(), 1..=4).prop_map(|texts| {
        texts
            .iter()
            .enumerate()
            .map(|(i, (headers, body))| {
                Fragment::new(PathBuf::from(format!("f{}.csx", i)), to_text(headers, body))
            })
            .collect()
    })
}

fn policy() -> impl Strategy<Value = HeaderPolicy> {
    prop_oneof![Just(HeaderPolicy::Hoist), Just(HeaderPolicy::Drop)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every non-marker line maps back to an identical original line.
    #[test]
    fn property_translated_lines_hold_the_same_content(
        fragments in fragments(),
        policy in policy(),
    ) {
        let (primary, imported) = fragments.split_first().unwrap();
        let composition = compose(primary, imported, policy).unwrap();

        for (line, text) in composition.unit.lines().iter().enumerate() {
            match composition.range_map.translate(line) {
                Some((file, original)) => {
                    let fragment = fragments.iter().find(|f| f.path() == file).unwrap();
                    prop_assert_eq!(fragment.lines()[original], text.as_str());
                }
                None => prop_assert!(PositionMarker::parse(text).is_some()),
            }
        }
    }

    /// PROPERTY: range entries never overlap and are recorded in order.
    #[test]
    fn property_ranges_are_disjoint_and_ordered(
        fragments in fragments(),
        policy in policy(),
    ) {
        let (primary, imported) = fragments.split_first().unwrap();
        let composition = compose(primary, imported, policy).unwrap();

        let entries = composition.range_map.entries();
        for pair in entries.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
        for entry in entries {
            prop_assert!(entry.start < entry.end);
            prop_assert!(entry.end <= composition.unit.len());
        }
    }

    /// PROPERTY: the primary fragment maps with offset zero.
    #[test]
    fn property_primary_lines_are_identity(fragments in fragments()) {
        let (primary, imported) = fragments.split_first().unwrap();
        let composition = compose(primary, imported, HeaderPolicy::Hoist).unwrap();

        let entry = composition
            .range_map
            .entries()
            .iter()
            .find(|e| e.source_file == primary.path())
            .unwrap();
        for k in 0..entry.len() {
            prop_assert_eq!(
                composition.range_map.translate(entry.start + k),
                Some((Path::new(primary.path()), k))
            );
        }
    }
}
