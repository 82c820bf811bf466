//! # state-layout
//!
//! Host agnostic container that shows exactly one of several mutually
//! exclusive views (loading, content, empty, error, offline, or any custom
//! state) and switches between them by name.
//!
//! The container never draws anything. It talks to the host UI toolkit only
//! through the traits in [`host`], so it can be driven by a real renderer or
//! by a recording fake in tests.
//!
//! ## Core Types
//!
//! - [`StateLayout`] - The container and its switching state machine
//! - [`StateId`] - Open, string keyed state identifier with five reserved values
//! - [`StateRegistry`] - Bidirectional state ↔ view bindings
//! - [`ClickDispatcher`] - Routes clicks on managed views to per-state listeners
//!
//! ## Host Collaborators
//!
//! - [`ViewHost`] - Child management, visibility and view construction
//! - [`TransitionDriver`] - Fire-and-forget animated visibility changes
//!
//! ## Configuration
//!
//! - [`StateLayoutConfig`] - Construction-time sources and transition toggles
//! - [`Transition`] - Fade effect, duration and easing for enter/exit

mod config;
mod dispatch;
mod error;
pub mod host;
mod layout;
mod registry;
mod source;
mod state;
pub mod transition;

pub use config::*;
pub use dispatch::*;
pub use error::*;
pub use host::{NoTransition, TransitionDriver, ViewHost, Visibility};
pub use layout::*;
pub use registry::*;
pub use source::*;
pub use state::*;
pub use transition::{EasingFn, Fade, Transition};
