//! HTTP layer: the tutor API client, its wire types, and the task manager
//! that runs calls off the event loop.

pub mod client;
pub mod error;
pub mod manager;
pub mod types;
