//! Implementation of the `skelly new` command.
//!
//! Responsibility: merge CLI flags with config defaults, pick strategies
//! from the factory, wire adapters into a `ProjectBuilder` and display the
//! report. No scaffolding logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use skelly_adapters::{LocalFilesystem, NoopInstaller, ProcessInstaller, TeraRenderer};
use skelly_core::{
    application::{BuildMode, BuildOutcome, BuildReport, ProjectBuilder, ports::Installer},
    domain::{ArchitectureKind, BackendStack, FrontendStack},
    strategies::StrategyFactory,
};

use crate::{
    cli::{NewArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, invalid_default},
    output::OutputManager,
};

/// Everything a build needs, after flags and config defaults are merged.
#[derive(Debug, Clone, PartialEq)]
struct Selection {
    name: String,
    backend: BackendStack,
    frontend: FrontendStack,
    architecture: ArchitectureKind,
    folders: Vec<String>,
    backend_libs: Vec<String>,
    frontend_libs: Vec<String>,
    output_dir: PathBuf,
    templates: Option<PathBuf>,
    install: bool,
}

/// Execute the `skelly new` command.
///
/// 1. Merge flags with `[defaults]`
/// 2. Create strategies and adapters
/// 3. Build (dry run or real) under a spinner
/// 4. Print the report; `--strict` turns recorded issues into a failure
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let strict = args.strict;
    let mode = if args.dry_run {
        BuildMode::DryRun
    } else {
        BuildMode::Execute
    };
    let selection = resolve_selection(args, &config)?;
    debug!(?selection, "Selection resolved");

    let spinner = output.spinner(&format!("Scaffolding '{}'...", selection.name));
    let installer: Box<dyn Installer> = if selection.install {
        // Child output would tear through the spinner line.
        let quiet = !spinner.is_hidden()
            || output.is_quiet()
            || output.format() == OutputFormat::Json;
        Box::new(ProcessInstaller::new().quiet(quiet))
    } else {
        Box::new(NoopInstaller::new())
    };

    let result = build(&selection, installer, mode);
    spinner.finish_and_clear();
    let report = result?;

    info!(
        build_id = %report.build_id,
        folders = report.folder_count(),
        issues = report.issues.len(),
        "Build finished"
    );

    render_report(&report, &output, global.verbose > 0)?;

    if strict && !report.is_clean() {
        return Err(CliError::BuildIncomplete {
            issues: report.issues.len(),
        });
    }
    Ok(())
}

fn resolve_selection(args: NewArgs, config: &AppConfig) -> CliResult<Selection> {
    validate_project_name(&args.name)?;
    let defaults = &config.defaults;

    let backend: BackendStack = match (args.backend, defaults.backend.as_deref()) {
        (Some(flag), _) => flag.into(),
        (None, Some(default)) => default
            .parse()
            .map_err(invalid_default("defaults.backend"))?,
        (None, None) => return Err(CliError::MissingBackend),
    };
    let frontend: FrontendStack = match args.frontend {
        Some(flag) => flag.into(),
        None => defaults
            .frontend
            .parse()
            .map_err(invalid_default("defaults.frontend"))?,
    };
    let architecture: ArchitectureKind = match args.architecture {
        Some(flag) => flag.into(),
        None => defaults
            .architecture
            .parse()
            .map_err(invalid_default("defaults.architecture"))?,
    };

    Ok(Selection {
        name: args.name,
        backend,
        frontend,
        architecture,
        folders: args.folders,
        backend_libs: args.backend_libs,
        frontend_libs: args.frontend_libs,
        output_dir: args.output.unwrap_or_else(|| defaults.output_dir.clone()),
        templates: args.templates.or_else(|| config.templates.dir.clone()),
        install: !args.skip_install && config.install.enabled,
    })
}

/// Blank names are left to the builder, which reports them itself.
fn validate_project_name(name: &str) -> CliResult<()> {
    let invalid = |reason| CliError::InvalidProjectName {
        name: name.into(),
        reason,
    };
    let trimmed = name.trim();

    if trimmed == "." || trimmed == ".." {
        return Err(invalid("name cannot be '.' or '..'"));
    }
    if trimmed.contains('/') || trimmed.contains('\\') {
        return Err(invalid("name cannot contain path separators"));
    }
    Ok(())
}

fn build(
    selection: &Selection,
    installer: Box<dyn Installer>,
    mode: BuildMode,
) -> CliResult<BuildReport> {
    let architecture = StrategyFactory::create_architecture(
        selection.architecture,
        &selection.name,
        Some(selection.backend),
        Some(selection.folders.as_slice()),
    )
    .map_err(|e| CliError::Core(e.into()))?;
    let backend = StrategyFactory::create_backend(selection.backend, &selection.name)
        .map_err(|e| CliError::Core(e.into()))?;
    let frontend = StrategyFactory::create_frontend(selection.frontend);

    let renderer = match &selection.templates {
        Some(dir) => TeraRenderer::with_overrides(dir)?,
        None => TeraRenderer::builtin()?,
    };

    let mut builder = ProjectBuilder::new(
        Box::new(LocalFilesystem::new()),
        Box::new(renderer),
        installer,
    );
    builder
        .set_meta_data(selection.name.as_str())
        .set_backend_stack(selection.backend.label())
        .set_frontend_stack(selection.frontend.label())
        .add_backend_libraries(selection.backend_libs.iter().cloned())
        .add_frontend_libraries(selection.frontend_libs.iter().cloned())
        .set_output_path(selection.output_dir.as_path())
        .attach_architecture_strategy(architecture)
        .attach_backend_strategy(backend)
        .attach_frontend_strategy(frontend);

    Ok(builder.build(mode)?)
}

// ── Report rendering ──────────────────────────────────────────────────────────

fn render_report(report: &BuildReport, out: &OutputManager, verbose: bool) -> CliResult<()> {
    if out.format() == OutputFormat::Json {
        out.json(report)?;
        return Ok(());
    }

    let config = &report.config;
    out.header("Configuration")?;
    out.print(&format!("  Project:      {}", config.name()))?;
    out.print(&format!("  Architecture: {}", config.architecture()))?;
    out.print(&format!("  Backend:      {}", config.backend_stack()))?;
    out.print(&format!("  Frontend:     {}", config.frontend_stack()))?;
    print_libraries(out, "Backend libs: ", config.backend_libraries())?;
    print_libraries(out, "Frontend libs:", config.frontend_libraries())?;
    out.print(&format!("  Location:     {}", report.project_root.display()))?;
    out.print("")?;

    match &report.outcome {
        BuildOutcome::Preview { folders } => {
            out.info(&format!(
                "Dry run: would create {} folder(s), nothing was written",
                folders.len()
            ))?;
            for folder in folders {
                out.print(&format!("  {folder}"))?;
            }
        }
        BuildOutcome::Materialized { folders_created } => {
            for issue in &report.issues {
                let message = if verbose {
                    format!("{}: {:?}", issue.stage, issue.error)
                } else {
                    format!("{}: {}", issue.stage, issue.error)
                };
                out.warning(&message)?;
            }

            if report.is_clean() {
                out.success(&format!(
                    "Project '{}' created ({folders_created} folders)",
                    config.name()
                ))?;
            } else {
                out.warning(&format!(
                    "Project '{}' created with {} issue(s) ({folders_created} folders)",
                    config.name(),
                    report.issues.len()
                ))?;
            }

            out.print("")?;
            out.print("Next steps:")?;
            out.print(&format!("  cd {}", shell_path(&report.project_root)))?;
        }
    }

    Ok(())
}

fn print_libraries(out: &OutputManager, label: &str, libraries: &[String]) -> CliResult<()> {
    if !libraries.is_empty() {
        out.print(&format!("  {label} {}", libraries.join(", ")))?;
    }
    Ok(())
}

fn shell_path(path: &Path) -> String {
    let display = path.display().to_string();
    if display.contains(' ') {
        format!("\"{display}\"")
    } else {
        display
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
