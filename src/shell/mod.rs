// Composition root for the administration context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in memory repositories and wire them into the use case handlers.
// - Expose the HTTP router the binary serves.

pub mod config;
pub mod http;
pub mod state;
