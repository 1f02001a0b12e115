//! Flight duration server.
//!
//! A web service that answers: "how long is a flight that leaves one
//! airport at a local time and lands at another at its local time?"

pub mod config;
pub mod directory;
pub mod domain;
pub mod duration;
pub mod web;
