//! Application wiring

pub mod controller;

pub use controller::Controller;
