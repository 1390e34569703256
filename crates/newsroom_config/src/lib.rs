//! Layered TOML configuration for the newsroom workspace.
//!
//! Configuration sources, later overriding earlier:
//! 1. Bundled defaults (`newsroom.toml` shipped with the library)
//! 2. `~/.config/newsroom/newsroom.toml`
//! 3. `./newsroom.toml`
//!
//! The loaded configuration is validated before it is handed out, then
//! converted into the immutable tables the pipeline runs on.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod sections;

pub use config::NewsroomConfig;
pub use sections::{
    AuthConfig, GenerationConfig, PlatformConfig, ProviderConfig, ScheduleConfig,
    ScheduleRuleConfig, SuitabilityConfig, ValidationConfig,
};
