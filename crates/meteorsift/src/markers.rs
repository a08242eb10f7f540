//! Literal tokens the filter recognizes.
//!
//! Matching is exact: case-sensitive and whitespace-sensitive. A guard
//! written any other way (extra spaces, `Meteor['isClient']`, a negated
//! test) is ordinary code to the filter and passes through untouched.

/// Opens a client-guarded block. The trailing `{` belongs to the marker and
/// opens the block at depth 1.
pub const CLIENT_OPEN: &str = "if (Meteor.isClient) {";

/// Opens a server-guarded block. The trailing `{` belongs to the marker and
/// opens the block at depth 1.
pub const SERVER_OPEN: &str = "if (Meteor.isServer) {";

/// Opens a line comment inside a guarded block.
pub const LINE_COMMENT_OPEN: &str = "//";

/// Any of these ends a line comment.
pub const LINE_TERMINATORS: &[&str] = &["\r", "\n"];

/// Opens a block comment inside a guarded block.
pub const BLOCK_COMMENT_OPEN: &str = "/*";

/// Ends a block comment.
pub const BLOCK_COMMENT_CLOSE: &str = "*/";

/// Raises brace depth inside a guarded block, outside comments.
pub const OPEN_BRACE: &str = "{";

/// Lowers brace depth inside a guarded block, outside comments; the block
/// ends when depth reaches zero.
pub const CLOSE_BRACE: &str = "}";
