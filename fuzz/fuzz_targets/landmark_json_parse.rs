//! Fuzz target for landmark JSON parsing.
//!
//! This fuzzer feeds arbitrary byte sequences to the recording JSON parser,
//! then runs every pose over whatever parses, checking for panics.

#![no_main]

use libfuzzer_sys::fuzz_target;
use yogaform::landmark::io_json::from_json_slice;
use yogaform::pose::{self, PoseSelection, YogaPose};

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let Ok(recording) = from_json_slice(data) else {
        return;
    };
    for landmarks in recording.frames.iter().filter_map(|f| f.landmarks.as_ref()) {
        for pose in YogaPose::ALL {
            let _ = pose::analyze(PoseSelection::from(pose), landmarks);
        }
    }
});
