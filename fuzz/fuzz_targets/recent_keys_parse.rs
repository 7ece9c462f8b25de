#![no_main]

use gridkit::persist::{MalformedTokenPolicy, RECENT_KEY_SEPARATOR, encode_codes, parse_codes};
use libfuzzer_sys::fuzz_target;

// Fuzz the stored recents format
//
// Arbitrary strings must parse without panicking, skip-policy parsing must
// never yield fewer codes than abort-policy parsing, and re-encoding the
// parsed codes must parse back to the same codes.
fuzz_target!(|data: &[u8]| {
    let Ok(value) = std::str::from_utf8(data) else {
        return;
    };

    let skipped = parse_codes(value, MalformedTokenPolicy::Skip);
    let aborted = parse_codes(value, MalformedTokenPolicy::Abort);
    assert!(!skipped.aborted);
    assert!(skipped.codes.len() >= aborted.codes.len());
    assert_eq!(&skipped.codes[..aborted.codes.len()], &aborted.codes[..]);

    let tokens = value.split(RECENT_KEY_SEPARATOR).filter(|t| !t.is_empty()).count();
    assert_eq!(skipped.codes.len() + skipped.malformed, tokens);

    let encoded = encode_codes(skipped.codes.iter().copied());
    let reparsed = parse_codes(&encoded, MalformedTokenPolicy::Skip);
    assert_eq!(reparsed.codes, skipped.codes);
    assert_eq!(reparsed.malformed, 0);
});
