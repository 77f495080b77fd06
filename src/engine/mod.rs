//! The visualizer lifecycle engine.
//!
//! [`Visualizer`] owns a pool of reusable [`TouchView`] bookkeeping records,
//! binds them to live contacts, and drives a [`crate::surface::Surface`]
//! with marker commands. Everything here is pure Rust; platform backends
//! only feed events in and render the resulting marker state.

pub mod log;
pub mod pool;
pub mod touch_view;
pub mod visualizer;

pub use log::DiagnosticLog;
pub use pool::TouchViewPool;
pub use touch_view::TouchView;
pub use visualizer::Visualizer;
