// Composition root for the timesheets service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in memory record store.
// - Wire it into the use case handlers and expose the HTTP router.

pub mod config;
pub mod http;
pub mod state;
