#![no_main]

use libfuzzer_sys::fuzz_target;
use jsmin_core::{MinifyError, minify, minify_into};

// Drive the minifier with arbitrary UTF-8 and check the invariants that hold
// for every input, valid JavaScript or not:
//   - success output starts with exactly the leading `\n` convention;
//   - errors point at a character boundary inside the input;
//   - a failed `minify_into` leaves the caller's buffer untouched.
fuzz_target!(|data: &[u8]| {
    let Ok(src) = std::str::from_utf8(data) else {
        return;
    };

    match minify(src) {
        Ok(out) => {
            assert!(out.starts_with('\n'), "missing leading newline");
            assert!(!out[1..].starts_with('\n'), "doubled leading newline");
        }
        Err(err) => {
            let start = err.start();
            assert!(start.offset < src.len(), "error offset past end of input");
            assert!(src.is_char_boundary(start.offset));
            assert!(matches!(
                err,
                MinifyError::UnterminatedComment { .. }
                    | MinifyError::UnterminatedString { .. }
                    | MinifyError::UnterminatedRegex { .. }
            ));

            let mut out = String::from("prefix");
            assert!(minify_into(src, &mut out).is_err());
            assert_eq!(out, "prefix", "partial output leaked on error");
        }
    }
});
