// Composition root.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the entity store and the clock.
// - Wire them into the use case handlers and the HTTP router.

pub mod config;
pub mod http;
pub mod state;
