//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` reports accepted submissions to the server. Forms validate locally,
//! so nothing in the UI waits on the network.

pub mod api;
