// Presentation helpers for the CLI: text/JSON rendering and the interactive prompt.

pub mod render;
pub mod session;
