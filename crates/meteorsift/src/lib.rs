//! Resolve Meteor client/server conditional blocks to a single architecture.
//!
//! Meteor applications keep client-only and server-only code in one source
//! tree behind runtime guards:
//!
//! ```text
//! if (Meteor.isClient) {
//!     Session.set("ready", true);
//! }
//! ```
//!
//! [`transform`] rewrites one source text for one [`Arch`]: guarded blocks of
//! the selected architecture are unwrapped (the marker and its matching
//! closing brace disappear, the body stays verbatim), blocks of the other
//! architecture are removed outright, and everything outside the guards is
//! preserved unchanged.
//!
//! The filter is one left-to-right pass over the text. Inside a guarded block
//! it counts brace depth and tracks comment context, so a `}` inside `//` or
//! `/* */` cannot end the block early. It is not a JavaScript parser: the two
//! guard phrases are matched literally (see [`markers`]), string and regex
//! literals are not tokenized, and guards nested inside another guard are
//! left as ordinary code.
//!
//! ```rust
//! use meteorsift::{Arch, transform};
//!
//! let src = "boot();\nif (Meteor.isClient) { paint(); }\nif (Meteor.isServer) { listen(); }\n";
//!
//! assert_eq!(transform(src, Arch::Client), "boot();\n paint(); \n\n");
//! assert_eq!(transform(src, Arch::Server), "boot();\n\n listen(); \n");
//! ```

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod arch;
mod filter;
pub mod markers;
mod output;
mod trail;

#[cfg(test)]
mod tests;

pub use arch::{Arch, ParseArchError};
pub use filter::transform;
