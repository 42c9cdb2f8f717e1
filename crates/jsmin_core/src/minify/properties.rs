//! Property tests for the minifier.

use proptest::prelude::*;

use super::engine::minify;

/// Fragments that glue together into JavaScript-looking input.
fn token() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "a", "b1", "$", "_x", "return", "typeof", "in", "this", "1", "42", "0x1F", "1.5", "1e", "+",
        "-", "++", "--", "*", "/", "=", "==", "(", ")", "[", "]", "{", "}", ";", ",", ".", "?", ":",
        "!", "#", "@", "\"s t\"", "'q\\'r'", "`t ${ a } u`", "/re/g", "/[/]/",
    ])
}

/// Insignificant text placed between fragments.
fn filler() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "", "", " ", "  \t", "\n", "\r\n", "\n\n   ", "/* c */", "/*\n*/", "// c\n",
    ])
}

fn program() -> impl Strategy<Value = String> {
    prop::collection::vec((token(), filler()), 0..40).prop_map(|parts| {
        parts
            .into_iter()
            .flat_map(|(tok, fill)| [tok, fill])
            .collect()
    })
}

/// A string-literal body made of ordinary characters and escape sequences.
fn string_body() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        "[^\"\\\\\n\r]".prop_map(String::from),
        Just("\\\"".to_string()),
        Just("\\\\".to_string()),
        Just("\\'".to_string()),
        Just("\\\n".to_string()),
        Just("\t".to_string()),
        Just("/* */ // ".to_string()),
    ];
    prop::collection::vec(piece, 0..24).prop_map(|pieces| pieces.concat())
}

/// A regex body that can neither open a comment nor end a line.
fn regex_body() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        "[^/\\\\\\[\\]\n\r\u{2028}\u{2029}]".prop_map(String::from),
        Just("\\/".to_string()),
        Just("[/ ]".to_string()),
        Just(" ".to_string()),
    ];
    prop::collection::vec(piece, 0..16).prop_map(|pieces| format!("a{}", pieces.concat()))
}

proptest! {
    #[test]
    fn test_minify_never_panics(src in any::<String>()) {
        match minify(&src) {
            Ok(out) => prop_assert!(out.starts_with('\n')),
            Err(err) => {
                let offset = err.start().offset;
                prop_assert!(offset < src.len());
                prop_assert!(src.is_char_boundary(offset));
            }
        }
    }

    #[test]
    fn test_minify_is_idempotent(src in program()) {
        if let Ok(once) = minify(&src) {
            let twice = minify(&once).unwrap();
            prop_assert_eq!(twice, once);
        }
    }

    #[test]
    fn test_string_literals_are_preserved(body in string_body()) {
        let src = format!("var s = \"{body}\" ;\n");
        prop_assert_eq!(minify(&src).unwrap(), format!("\nvar s=\"{body}\";"));
    }

    #[test]
    fn test_regex_literals_are_preserved(body in regex_body()) {
        let src = format!("x = ( /{body}/gi ) ;");
        prop_assert_eq!(minify(&src).unwrap(), format!("\nx=(/{body}/gi);"));
    }
}
