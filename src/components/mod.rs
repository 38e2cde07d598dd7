//! UI components.

pub mod star_network;
