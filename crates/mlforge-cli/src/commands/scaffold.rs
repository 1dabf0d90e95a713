//! Implementation of the scaffold command — the tool's one job.
//!
//! Responsibility: resolve the project name, call the core scaffold service,
//! and display the completion summary. No business logic lives here.

use tracing::{debug, info, instrument};

use mlforge_adapters::{LocalFilesystem, MlBlueprint};
use mlforge_core::application::ScaffoldService;

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the scaffold command.
///
/// Dispatch sequence:
/// 1. Resolve the project name (argument, config default, built-in fallback)
/// 2. Validate the name before touching the filesystem
/// 3. Execute scaffolding via `ScaffoldService`
/// 4. Print the completion summary and next-steps guidance
#[instrument(skip_all)]
pub fn execute(
    name: Option<String>,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve project name
    let project_name = match name {
        Some(name) => name,
        None => {
            let fallback = config.defaults.project_name.clone();
            output.info(&format!("No name given, using default '{fallback}'"))?;
            fallback
        }
    };

    // 2. Validate early for a friendlier error than the core would give
    validate_project_name(&project_name)?;

    debug!(project = %project_name, "name resolved");

    // Overwrites are part of the contract; still worth a heads-up.
    if std::path::Path::new(&project_name).is_dir() {
        output.warning(&format!(
            "Directory '{project_name}' already exists; its template files will be refreshed"
        ))?;
    }

    // 3. Create adapters and scaffold into the current directory
    let blueprint = Box::new(MlBlueprint::new());
    let filesystem = Box::new(LocalFilesystem::new());
    let service = ScaffoldService::new(blueprint, filesystem);

    output.header(&format!("Creating '{project_name}'..."))?;
    info!(project = %project_name, "Scaffold started");

    let report = service.scaffold(&project_name, ".").map_err(CliError::Core)?;

    info!(
        project = %project_name,
        directories = report.directories_created,
        files = report.files_written,
        "Scaffold completed"
    );

    // 4. Completion summary + next steps
    output.success(&format!(
        "ML project '{project_name}' created successfully!"
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {project_name}"))?;
        output.print("  python -m venv venv")?;
        output.print("  source venv/bin/activate  # On Windows: venv\\Scripts\\activate")?;
        output.print("  pip install -r requirements.txt")?;
    }

    Ok(())
}

// ── Name validation ───────────────────────────────────────────────────────────

fn validate_project_name(name: &str) -> CliResult<()> {
    if name.is_empty() {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.starts_with('.') {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot start with '.'".into(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot contain path separators".into(),
        });
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
