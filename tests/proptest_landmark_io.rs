use proptest::prelude::*;

use yogaform::landmark::io_csv::{from_csv_str, to_csv_string};
use yogaform::landmark::io_json::{from_json_str, to_json_string};

mod proptest_helpers;

proptest! {
    #![proptest_config(proptest_helpers::proptest_config())]

    #[test]
    fn json_roundtrip_preserves_recording(recording in proptest_helpers::arb_recording(8)) {
        let json = to_json_string(&recording).expect("serialize json");
        let restored = from_json_str(&json).expect("parse json");

        let res = proptest_helpers::assert_recordings_equivalent(
            &recording,
            &restored,
            proptest_helpers::EPS_JSON,
        );
        prop_assert!(res.is_ok(), "{}", res.unwrap_err());
    }

    #[test]
    fn csv_roundtrip_preserves_recording(recording in proptest_helpers::arb_recording(8)) {
        let csv = to_csv_string(&recording).expect("serialize csv");
        let restored = from_csv_str(&csv).expect("parse csv");

        let res = proptest_helpers::assert_recordings_equivalent(
            &recording,
            &restored,
            proptest_helpers::EPS_CSV,
        );
        prop_assert!(res.is_ok(), "{}", res.unwrap_err());
    }

    #[test]
    fn csv_and_json_agree(recording in proptest_helpers::arb_recording(8)) {
        let via_csv = from_csv_str(&to_csv_string(&recording).expect("serialize csv"))
            .expect("parse csv");
        let via_json = from_json_str(&to_json_string(&recording).expect("serialize json"))
            .expect("parse json");

        let res = proptest_helpers::assert_recordings_equivalent(
            &via_csv,
            &via_json,
            proptest_helpers::EPS_CSV,
        );
        prop_assert!(res.is_ok(), "{}", res.unwrap_err());
    }
}
