//! Gauge payload vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use gaugegen_core::PayloadBuilder;

use vector_loader::TestVector;

fn load(name: &str) -> TestVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

#[test]
fn payload_vectors() {
    let files = [
        "gauge_defaults.json",
        "gauge_clamped_high.json",
        "gauge_unclamped.json",
        "gauge_clamped_low.json",
        "gauge_rounding.json",
        "gauge_unicode_unit.json",
        "gauge_equal_bounds.json",
        "gauge_inverted_bounds.json",
        "gauge_negative_jitter.json",
        "gauge_huge_bounds.json",
    ];

    for f in files {
        let v = load(f);
        let res = PayloadBuilder::new(v.params.to_params()).build();

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.code().as_str(), err.code, "vector={}", v.description);
            continue;
        }

        let payload = res.expect("expected ok payload");
        let expected = v.expect_json.expect("missing expect_json");
        assert_eq!(payload.into_json().unwrap(), expected, "vector={}", v.description);
    }
}
