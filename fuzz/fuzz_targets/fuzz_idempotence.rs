#![no_main]

use libfuzzer_sys::fuzz_target;
use jsmin_core::minify;

// Minified output is a fixed point: running the minifier over its own output
// must succeed and change nothing.
fuzz_target!(|data: &[u8]| {
    let Ok(src) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(once) = minify(src) else {
        return;
    };
    let twice = minify(&once).expect("minified output must minify again");
    assert_eq!(once, twice, "minification is not idempotent");
});
