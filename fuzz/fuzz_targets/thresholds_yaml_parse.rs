#![no_main]

use libfuzzer_sys::fuzz_target;
use yogaform::pose::Thresholds;

fuzz_target!(|data: &[u8]| {
    let Ok(yaml) = std::str::from_utf8(data) else {
        return;
    };

    let _ = Thresholds::from_yaml_str(yaml);
});
