//! Shared helpers.
//!
//! This module provides:
//! - Static regex compilation
//! - CSS selector parsing for HTML bodies
//! - Snippet sanitization for error context

mod pattern;
pub mod sanitize;
mod selector;

pub(crate) use pattern::compile_regex_unsafe;
pub(crate) use selector::parse_selector_unsafe;
