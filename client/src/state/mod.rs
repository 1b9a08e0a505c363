//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State types are plain Rust values wrapped in `RwSignal`s by the pages, so
//! their behavior is testable without a browser.

pub mod editor;
