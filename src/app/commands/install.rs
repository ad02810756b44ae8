//! Render a default configuration template into the live configuration file.

use std::fs;
use std::path::PathBuf;

use crate::domain::{AppError, VariableMap, translate};
use crate::ports::AddressResolver;

/// Port the service locator listens on, appended to the deployment address.
const SERVICE_LOCATOR_PORT: u16 = 20000;

/// Operator inputs for one bootstrap run.
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Deployment address; resolved automatically when absent.
    pub address: Option<String>,
    /// Administrative account name.
    pub username: String,
    /// Administrative account password.
    pub password: String,
    /// Local interface address; resolved automatically when absent.
    pub local: Option<String>,
    /// Additional KEY=VALUE substitutions.
    pub set: Vec<String>,
    /// Path to the default configuration template.
    pub template: PathBuf,
    /// Path of the live configuration file to produce.
    pub output: PathBuf,
}

/// Result of a successful bootstrap run.
#[derive(Debug)]
pub struct InstallOutcome {
    /// Deployment address that ended up in the variable mapping.
    pub address: String,
    /// Path of the configuration file that was written.
    pub output: PathBuf,
}

/// Take an operator override, or probe for a default address at most once
/// per run.
fn override_or_probe<R: AddressResolver>(
    value: &Option<String>,
    resolver: &R,
    probed: &mut Option<String>,
) -> String {
    match value {
        Some(value) => value.clone(),
        None => probed.get_or_insert_with(|| resolver.resolve().to_string()).clone(),
    }
}

fn parse_assignment(assignment: &str) -> Result<(String, String), AppError> {
    match assignment.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(AppError::InvalidAssignment(assignment.to_string())),
    }
}

/// Execute the install command.
///
/// Assembles the variable mapping, renders the template in memory, then
/// copies the default file to the output path and overwrites it with the
/// rendered text. Keys with no matching placeholder in the template are
/// harmless, so the full observed key set is always supplied.
pub fn execute<R: AddressResolver>(
    resolver: &R,
    options: &InstallOptions,
) -> Result<InstallOutcome, AppError> {
    let mut probed = None;
    let address = override_or_probe(&options.address, resolver, &mut probed);
    let local = override_or_probe(&options.local, resolver, &mut probed);

    let mut variables = VariableMap::new();
    variables.set("username", &options.username);
    variables.set("admin_password", &options.password);
    variables.set("service_locator_address", format!("{address}:{SERVICE_LOCATOR_PORT}"));
    variables.set("local_interface", local);
    for assignment in &options.set {
        let (key, value) = parse_assignment(assignment)?;
        variables.set(key, value);
    }

    let template = fs::read_to_string(&options.template).map_err(|source| {
        AppError::TemplateRead { path: options.template.clone(), source }
    })?;
    let rendered = translate(&template, &variables);

    fs::copy(&options.template, &options.output).map_err(|source| {
        AppError::TemplateWrite { path: options.output.clone(), source }
    })?;
    fs::write(&options.output, &rendered).map_err(|source| {
        AppError::TemplateWrite { path: options.output.clone(), source }
    })?;

    Ok(InstallOutcome { address, output: options.output.clone() })
}
