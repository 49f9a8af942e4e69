// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for cj.
//!
//! This module handles loading and parsing configuration from files and
//! defaults. The loaded configuration is injected into the convention
//! factory by the CLI; nothing reads it through global state.

pub mod default;
pub(crate) mod loader;
mod schema;

pub use default::{default_config, example_config};
pub use loader::{find_config_file, load_config};
pub use schema::*;
