// Composition root of the bot.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the store and the transport and wire them into the use case handlers.
// - Run the dispatcher, and either the poller or the webhook server.

pub mod config;
pub mod dispatcher;
pub mod http;
pub mod polling;
pub mod state;
