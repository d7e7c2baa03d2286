//! tasklist - Interactive in-memory task list
//!
//! This library provides a small model/view/controller core: a store owning
//! an ordered task collection, a presenter boundary for rendering it, and a
//! controller wiring user gestures to store mutations.

pub mod app;
pub mod models;
pub mod store;
pub mod ui;

pub use app::Controller;
pub use models::Task;
pub use store::TaskStore;
pub use ui::{Command, CommandError, JsonPresenter, OutputFormat, Presenter, TablePresenter};
