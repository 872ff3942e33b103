#![no_main]

use happlink::{HappLink, V2, V3, V4};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Try parsing as each version - should never panic
    let _ = HappLink::<V2>::try_from(data);
    let _ = HappLink::<V3>::try_from(data);
    let _ = HappLink::<V4>::try_from(data);
});
