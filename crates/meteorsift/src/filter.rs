//! The single-pass block filter.
//!
//! One left-to-right scan drives everything. Each character is first
//! appended to both the [`Trail`] and the [`OutputBuffer`]; state
//! transitions then decide whether appended text is taken back:
//!
//! * a block-open marker completing at top level retracts the marker text,
//! * the closing brace of a block retracts itself,
//! * every character inside a block of the other architecture retracts
//!   itself.
//!
//! Appending first keeps the suffix test uniform. A token's final character
//! is already in the trail when the question "did a token just complete?"
//! is asked, so no lookahead is needed anywhere.
//!
//! Comment and brace tracking start at the block marker: top-level text has
//! no comment state, so a guard phrase spelled inside a top-level comment
//! still opens a block. String and regex literals are not tokenized, so a
//! brace inside a string literal counts toward depth. Both are accepted
//! limitations of the literal-marker design.

use alloc::string::String;

use crate::{arch::Arch, markers, output::OutputBuffer, trail::Trail};

// ------------------------------------------------------------------------------------------------
// Scan states
// ------------------------------------------------------------------------------------------------

/// Which block the scan is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    /// Outside any guarded block. Top-level text is always kept.
    Any,
    /// Inside an `if (Meteor.isClient) {` block.
    Client,
    /// Inside an `if (Meteor.isServer) {` block.
    Server,
}

impl From<Arch> for Target {
    fn from(arch: Arch) -> Self {
        match arch {
            Arch::Client => Target::Client,
            Arch::Server => Target::Server,
        }
    }
}

/// Comment context inside a guarded block.
///
/// While a comment is open, braces and comment openers carry no structural
/// meaning; only the matching terminator is looked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CodeState {
    Plain,
    LineComment,
    BlockComment,
}

// ------------------------------------------------------------------------------------------------
// Block filter
// ------------------------------------------------------------------------------------------------

/// Resolves `source` for one architecture.
///
/// Blocks guarded for `arch` lose their marker and matching closing brace
/// but keep their body verbatim; blocks guarded for the other architecture
/// disappear entirely; everything outside the guards is preserved unchanged.
///
/// The function is total: unbalanced braces or unterminated comments never
/// fail, the scan simply stays in whatever state it was left in until the
/// input ends.
///
/// # Examples
///
/// ```rust
/// use meteorsift::{Arch, transform};
///
/// let src = "if (Meteor.isClient) { ping(); }";
/// assert_eq!(transform(src, Arch::Client), " ping(); ");
/// assert_eq!(transform(src, Arch::Server), "");
/// ```
#[must_use]
pub fn transform(source: &str, arch: Arch) -> String {
    BlockFilter::new(source.len(), arch).run(source)
}

/// Scan state for one pass, built fresh per [`transform`] call.
struct BlockFilter {
    trail: Trail,
    out: OutputBuffer,
    target: Target,
    code: CodeState,
    /// Brace depth of the current block, meaningful only while
    /// `target != Any`. The marker's own trailing `{` counts as 1.
    depth: usize,
    desired: Target,
}

impl BlockFilter {
    fn new(capacity: usize, arch: Arch) -> Self {
        Self {
            trail: Trail::with_capacity(capacity),
            out: OutputBuffer::with_capacity(capacity),
            target: Target::Any,
            code: CodeState::Plain,
            depth: 0,
            desired: Target::from(arch),
        }
    }

    fn run(mut self, source: &str) -> String {
        for ch in source.chars() {
            self.trail.push(ch);
            self.out.push(ch);
            match self.target {
                Target::Any => self.scan_top_level(),
                Target::Client | Target::Server => self.scan_block(),
            }
        }
        self.out.into_string()
    }

    /// Top level: the only transition is a block-open marker completing.
    ///
    /// Marker text is appended while top-level, and top-level text is never
    /// retracted, so the whole marker is still in the buffer here. The open
    /// markers are ASCII, making byte length equal character count.
    #[inline]
    fn scan_top_level(&mut self) {
        if self.trail.ends_with(markers::CLIENT_OPEN) {
            self.open_block(Target::Client, markers::CLIENT_OPEN.len());
        } else if self.trail.ends_with(markers::SERVER_OPEN) {
            self.open_block(Target::Server, markers::SERVER_OPEN.len());
        }
    }

    fn open_block(&mut self, target: Target, marker_len: usize) {
        self.target = target;
        self.code = CodeState::Plain;
        self.depth = 1;
        self.out.retract(marker_len);
    }

    /// Inside a block: comment tracking and brace counting, then the
    /// keep/drop decision for the character itself.
    #[inline]
    fn scan_block(&mut self) {
        match self.code {
            CodeState::LineComment => {
                if self.trail.ends_with_any(markers::LINE_TERMINATORS) {
                    self.code = CodeState::Plain;
                }
            }
            CodeState::BlockComment => {
                if self.trail.ends_with(markers::BLOCK_COMMENT_CLOSE) {
                    self.code = CodeState::Plain;
                }
            }
            CodeState::Plain => {
                if self.trail.ends_with(markers::LINE_COMMENT_OPEN) {
                    self.code = CodeState::LineComment;
                } else if self.trail.ends_with(markers::BLOCK_COMMENT_OPEN) {
                    self.code = CodeState::BlockComment;
                } else if self.trail.ends_with(markers::OPEN_BRACE) {
                    self.depth += 1;
                } else if self.trail.ends_with(markers::CLOSE_BRACE) {
                    debug_assert!(self.depth > 0, "close brace outside any block");
                    self.depth -= 1;
                    if self.depth == 0 {
                        // This brace matched the marker's own `{`; it belongs
                        // to the wrapper, not the body, and is never subject
                        // to the keep/drop decision below.
                        self.out.retract(markers::CLOSE_BRACE.len());
                        self.target = Target::Any;
                        self.code = CodeState::Plain;
                        return;
                    }
                }
            }
        }

        if self.target != self.desired {
            self.out.retract(1);
        }
    }
}
