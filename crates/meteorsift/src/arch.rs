use alloc::string::String;
use core::{fmt, str::FromStr};

use thiserror::Error;

/// The build architecture a source text is being resolved for.
///
/// Selects which guarded blocks survive unwrapped; blocks guarded for the
/// other architecture are removed entirely. Code outside any guard is kept
/// either way. The selector is fixed for the duration of one
/// [`transform`](crate::transform) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Arch {
    /// Keep `if (Meteor.isClient) { … }` bodies, drop server blocks.
    Client,
    /// Keep `if (Meteor.isServer) { … }` bodies, drop client blocks.
    Server,
}

impl Arch {
    /// Canonical lowercase name, as accepted by the [`FromStr`] impl.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Arch::Client => "client",
            Arch::Server => "server",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known architecture.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown architecture {input:?}, expected \"client\" or \"server\"")]
pub struct ParseArchError {
    input: String,
}

impl ParseArchError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Arch {
    type Err = ParseArchError;

    /// Parses `"client"` or `"server"`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("client") {
            Ok(Arch::Client)
        } else if s.eq_ignore_ascii_case("server") {
            Ok(Arch::Server)
        } else {
            Err(ParseArchError { input: s.into() })
        }
    }
}
