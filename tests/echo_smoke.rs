use lineutils_core::{echo, EchoError, EchoOptions, EscapeError};

/// `enable` is what the parsed `-e` flag says; `tokens` feed the ordered scan.
fn echo_with(
    tokens: &[&str],
    enable: bool,
    no_newline: bool,
    strings: &[&str],
) -> Result<Vec<u8>, EchoError> {
    let options = EchoOptions::from_tokens(no_newline, enable, tokens.iter().copied());
    let mut out = Vec::new();
    echo(&mut out, strings, &options)?;
    Ok(out)
}

#[test]
fn plain_arguments() {
    assert_eq!(echo_with(&["a", "b"], false, false, &["a", "b"]).unwrap(), b"a b\n".to_vec());
}

#[test]
fn escapes_with_e() {
    let out = echo_with(&["-e", "a\\tb"], true, false, &["a\\tb"]).unwrap();
    assert_eq!(out, b"a\tb\n".to_vec());
}

#[test]
fn later_capital_e_disables() {
    let out = echo_with(&["-e", "-E", "a\\tb"], true, false, &["a\\tb"]).unwrap();
    assert_eq!(out, b"a\\tb\n".to_vec());
}

#[test]
fn later_e_re_enables() {
    let out = echo_with(&["-E", "-e", "x\\ny"], true, false, &["x\\ny"]).unwrap();
    assert_eq!(out, b"x\ny\n".to_vec());
}

#[test]
fn no_trailing_newline() {
    let out = echo_with(&["-n", "-e", "tab\\t"], true, true, &["tab\\t"]).unwrap();
    assert_eq!(out, b"tab\t".to_vec());
}

#[test]
fn joined_text_is_decoded_as_one_string() {
    let out = echo_with(&["-e", "\\x41", "\\x42"], true, false, &["\\x41", "\\x42"]).unwrap();
    assert_eq!(out, b"A B\n".to_vec());
}

#[test]
fn scan_without_parsed_flag_stays_literal() {
    let out = echo_with(&["-e", "a\\tb"], false, false, &["a\\tb"]).unwrap();
    assert_eq!(out, b"a\\tb\n".to_vec());
}

#[test]
fn parsed_flag_without_scan_stays_literal() {
    let out = echo_with(&["a\\tb"], true, false, &["a\\tb"]).unwrap();
    assert_eq!(out, b"a\\tb\n".to_vec());
}

#[test]
fn malformed_escape_is_fatal() {
    let err = echo_with(&["-e", "bad\\z"], true, false, &["bad\\z"]).unwrap_err();
    assert!(matches!(
        err,
        EchoError::Escape(EscapeError::UnknownEscape { sequence: 'z', .. })
    ));
}
