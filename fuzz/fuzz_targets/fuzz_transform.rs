#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use meteorsift::{Arch, markers, transform};

#[derive(Debug, Arbitrary)]
struct Input {
    client: bool,
    source: String,
}

fn is_char_subsequence(needle: &str, hay: &str) -> bool {
    let mut hay = hay.chars();
    needle.chars().all(|want| hay.by_ref().any(|got| got == want))
}

fuzz_target!(|input: Input| {
    let arch = if input.client { Arch::Client } else { Arch::Server };
    let out = transform(&input.source, arch);

    // Filtering only deletes.
    assert!(out.len() <= input.source.len());
    assert!(is_char_subsequence(&out, &input.source));

    // Without a marker the scan never leaves the top level.
    if !input.source.contains(markers::CLIENT_OPEN)
        && !input.source.contains(markers::SERVER_OPEN)
    {
        assert_eq!(out, input.source);
    }
});
