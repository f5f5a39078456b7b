//! # API Route Modules
//!
//! - `verify` — the single submission endpoint, `POST /verify`: encode the
//!   inbound bundle, hand it to the coordinator, return the terminal
//!   submission result.

pub mod verify;
