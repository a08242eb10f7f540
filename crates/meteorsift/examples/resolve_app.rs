//! Resolves one in-memory Meteor source file for both architectures and
//! prints the two builds side by side.
//!
//! The input mixes shared top-level code with one guarded block per
//! architecture. Each build keeps the shared code, unwraps its own block,
//! and loses the other block entirely.
//!
//! Run with
//!
//! ```bash
//! cargo run -p meteorsift --example resolve_app
//! ```

use meteorsift::{Arch, transform};

const APP: &str = r#"var rooms = new Meteor.Collection("rooms");

if (Meteor.isClient) {
  Template.lobby.rooms = function () {
    return rooms.find({}, { sort: { name: 1 } });
  };
}

if (Meteor.isServer) {
  Meteor.startup(function () {
    if (rooms.find().count() === 0) {
      rooms.insert({ name: "general" });
    }
  });
}
"#;

fn main() {
    for arch in [Arch::Client, Arch::Server] {
        println!("==== {arch} build ====");
        println!("{}", transform(APP, arch));
    }
}
