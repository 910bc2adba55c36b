//! # searchable-conf
//!
//! Layered configuration for searchable.
//!
//! Settings are collected from several [`ConfigSource`]s (built-in
//! defaults, TOML or JSON files, environment variables), merged in
//! priority order, and read back through `serde`.
//!
//! ## Example
//!
//! ```rust
//! use searchable_conf::prelude::*;
//! use serde_json::json;
//!
//! let merged = SettingsBuilder::new()
//!     .add_source(DefaultSource::new().with_value("search", json!({ "case_sensitive": false })))
//!     .add_source(TomlFileSource::new("does-not-exist.toml"))
//!     .add_source(EnvSource::new().with_prefix("SEARCHABLE_DOCTEST_"))
//!     .build()
//!     .unwrap();
//!
//! assert!(!merged.get::<bool>("search.case_sensitive").unwrap());
//! ```

pub mod builder;
pub mod sources;

pub use builder::{MergedSettings, SettingsBuilder, SettingsError};
pub use sources::{
	ConfigSource, DefaultSource, EnvSource, JsonFileSource, SourceError, TomlFileSource,
	auto_source,
};

/// Prelude module for convenient imports
pub mod prelude {
	pub use crate::builder::{MergedSettings, SettingsBuilder, SettingsError};
	pub use crate::sources::{
		ConfigSource, DefaultSource, EnvSource, JsonFileSource, SourceError, TomlFileSource,
		auto_source,
	};
}
