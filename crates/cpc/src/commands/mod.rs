//! Command handlers, one module per subcommand.

pub mod completion;
pub mod config_cmd;
pub mod parse;
pub mod render;
pub mod roundtrip;
pub mod symbols;
pub mod version;
