//! seedcfg: bootstrap a live configuration file from its versioned default
//! template.
//!
//! The core is two primitives shared by every installer: a flat
//! placeholder-substitution engine ([`domain::translate`]) and a
//! local-network-address resolver ([`services::RouteProbeResolver`]). The
//! install command glues them together: it assembles the variable mapping,
//! renders `config.default.yml`, and writes `config.yml`.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use app::commands::install;
use services::RouteProbeResolver;

pub use app::commands::install::{InstallOptions, InstallOutcome};
pub use domain::AppError;

/// Render the default configuration template into the live configuration
/// file, resolving a default address for any absent operator override.
pub fn install(options: &InstallOptions) -> Result<InstallOutcome, AppError> {
    let resolver = RouteProbeResolver::new();
    install::execute(&resolver, options)
}
