//! Clients for the remote services the domain layer talks to.

pub mod fathom;
