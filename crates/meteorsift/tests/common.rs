#![allow(missing_docs)]

/// A small Meteor application file touching both architectures: top-level
/// shared code, a client block whose line comment hides a close brace, and
/// a server block with nested braces.
pub const APP_SOURCE: &str = r#"var config = { api: "/v1", retries: 2 };

if (Meteor.isClient) {
  Template.counter.events({
    // real close is below: }
    "click button": function () {
      Session.set("count", Session.get("count") + 1);
    }
  });
}

if (Meteor.isServer) {
  Meteor.startup(function () {
    ensureIndexes({ unique: true });
  });
}

runShared(config);
"#;
