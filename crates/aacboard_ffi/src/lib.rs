//! Flutter-facing bindings for the AAC picture board core.

pub mod api;
