//! Logic modules: translate user choices into concrete actions.
//!
//! # Modules
//!
//! - `resolver`: package selection to install command resolution

pub mod resolver;
