//! Core application layer
//!
//! Section state, the root composer, scroll subscription and input routing.
//! NO imports of rendering code: the core emits view trees and frontends
//! commit them.

pub mod app_core;
pub mod contact_form;
pub mod input_router;
pub mod scroll;

pub use app_core::{start, AppCore};
