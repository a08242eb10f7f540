//! Randomized properties of the filter.

use alloc::{string::String, vec::Vec};

use quickcheck::{Arbitrary, Gen, QuickCheck, TestResult};

use crate::{Arch, markers, transform};

impl Arbitrary for Arch {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Arch::Client
        } else {
            Arch::Server
        }
    }
}

/// Property: input that never spells out a block marker passes through
/// unchanged, whatever else it contains.
#[test]
fn marker_free_text_is_a_fixed_point() {
    fn prop(src: String, arch: Arch) -> TestResult {
        if src.contains(markers::CLIENT_OPEN) || src.contains(markers::SERVER_OPEN) {
            return TestResult::discard();
        }
        TestResult::from_bool(transform(&src, arch) == src)
    }

    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(String, Arch) -> TestResult);
}

/// Property: filtering only ever deletes. The output characters appear in
/// the input, in order, for completely arbitrary input.
#[test]
fn output_is_a_subsequence_of_the_input() {
    fn is_char_subsequence(needle: &str, hay: &str) -> bool {
        let mut hay = hay.chars();
        needle.chars().all(|want| hay.by_ref().any(|got| got == want))
    }

    fn prop(src: String, arch: Arch) -> bool {
        is_char_subsequence(&transform(&src, arch), &src)
    }

    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(String, Arch) -> bool);
}

// ------------------------------------------------------------------------------------------------
// Structured programs
// ------------------------------------------------------------------------------------------------

/// One piece of a generated program: loose text, or a body wrapped in one
/// of the two guards.
#[derive(Debug, Clone)]
enum Segment {
    Top(String),
    Client(String),
    Server(String),
}

/// Characters that cannot form a marker, a brace, or a comment token, so
/// generated bodies never interfere with the scan.
const SAFE_ALPHABET: &[char] = &[
    'a', 'b', 'c', 'x', 'y', 'z', '0', '1', ' ', ';', '(', ')', '.', '\n',
];

fn safe_text(g: &mut Gen) -> String {
    let len = usize::arbitrary(g) % 24;
    (0..len).map(|_| *g.choose(SAFE_ALPHABET).unwrap()).collect()
}

impl Arbitrary for Segment {
    fn arbitrary(g: &mut Gen) -> Self {
        let text = safe_text(g);
        match usize::arbitrary(g) % 3 {
            0 => Segment::Top(text),
            1 => Segment::Client(text),
            _ => Segment::Server(text),
        }
    }
}

fn render(segments: &[Segment]) -> String {
    let mut src = String::new();
    for seg in segments {
        match seg {
            Segment::Top(text) => src.push_str(text),
            Segment::Client(text) => {
                src.push_str(markers::CLIENT_OPEN);
                src.push_str(text);
                src.push('}');
            }
            Segment::Server(text) => {
                src.push_str(markers::SERVER_OPEN);
                src.push_str(text);
                src.push('}');
            }
        }
    }
    src
}

fn expected(segments: &[Segment], arch: Arch) -> String {
    let mut out = String::new();
    for seg in segments {
        match (seg, arch) {
            (Segment::Top(text), _)
            | (Segment::Client(text), Arch::Client)
            | (Segment::Server(text), Arch::Server) => out.push_str(text),
            _ => {}
        }
    }
    out
}

/// Property: a program assembled from well-formed guarded blocks resolves
/// to exactly the selected segments, and resolving twice changes nothing.
#[test]
fn structured_programs_resolve_to_their_selected_segments() {
    fn prop(segments: Vec<Segment>, arch: Arch) -> bool {
        let src = render(&segments);
        let want = expected(&segments, arch);
        let out = transform(&src, arch);
        out == want && transform(&out, arch) == out
    }

    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(Vec<Segment>, Arch) -> bool);
}
