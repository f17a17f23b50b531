//! FFI crate exposing the PinDrop core to the mobile UI.

pub mod api;
