//! Implementation of the `hatch service` command.
//!
//! Responsibility: turn flags, remembered answers and prompts into a
//! `GenerationConfig`, run the core `ServiceGenerator` against the local
//! filesystem and report what happened. No business logic lives here.

use std::path::{Path, PathBuf};

use serde_json::json;
use tracing::{info, instrument, warn};

use hatch_adapters::{LocalFilesystem, SimpleRenderer, TemplateModelGenerator};
use hatch_core::{
    application::{
        AnswerResolver, GenerationPlan, GenerationReport, PatchOutcome, ServiceGenerator,
        ports::ModelOutcome,
    },
    domain::{GenerationConfig, GenerationOptions, ProjectLayout, PromptDefaults},
};

use crate::{
    cli::ServiceArgs,
    commands::template_store,
    config::{AppConfig, LocalConfigFile},
    error::CliResult,
    output::OutputManager,
    prompt,
};

/// Execute the `hatch service` command.
///
/// 1. Resolve answers (flags, then prompts seeded by remembered defaults)
/// 2. Dry run: print the plan and stop
/// 3. Generate: service files, registry patch, model
/// 4. Remember the answers in `.hatch.toml`, only after a successful run
/// 5. Report
#[instrument(skip_all, fields(project = %project_dir(&args).display()))]
pub fn execute(args: ServiceArgs, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    let project_dir = project_dir(&args);

    let defaults = prompt_defaults(&config, &args);
    let options = GenerationOptions {
        category: args.service_type.map(Into::into),
        driver: args.database.map(Into::into),
        name: args.name.clone(),
    };

    let prompter = prompt::select(args.yes);
    let resolution = AnswerResolver::new(prompter.as_ref()).resolve(options, &defaults)?;
    let layout = config.layout(&project_dir);
    let generator = build_generator(&config, &layout)?;

    if args.dry_run {
        let plan = generator.plan(&resolution.config, &layout)?;
        return print_plan(&resolution.config, &plan, output);
    }

    info!(service = %resolution.config, "Generating service");
    let report = generator.generate(&resolution.config, &layout, args.force)?;

    remember(&project_dir, &resolution.answers, output)?;

    print_report(&resolution.config, &layout, &report, output)
}

fn project_dir(args: &ServiceArgs) -> PathBuf {
    args.project_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Remembered answers, with the positional NAME as the name default.
fn prompt_defaults(config: &AppConfig, args: &ServiceArgs) -> PromptDefaults {
    config.defaults.clone().merged_with(PromptDefaults {
        name: args.suggested_name.clone(),
        ..PromptDefaults::default()
    })
}

fn build_generator(config: &AppConfig, layout: &ProjectLayout) -> CliResult<ServiceGenerator> {
    let store = template_store(config)?;
    let filesystem = LocalFilesystem::new();
    let models = TemplateModelGenerator::new(filesystem, layout.models_root());

    Ok(ServiceGenerator::new(
        Box::new(store),
        Box::new(SimpleRenderer::new()),
        Box::new(filesystem),
        Box::new(models),
    ))
}

/// Persist answers as next run's defaults. Failure only warns: the
/// service itself does not depend on it.
fn remember(project_dir: &Path, answers: &PromptDefaults, output: &OutputManager) -> CliResult<()> {
    let saved = LocalConfigFile::open(project_dir).and_then(|mut file| {
        file.set_defaults(answers);
        file.save()
    });

    if let Err(e) = saved {
        warn!(error = %e, "Could not remember answers");
        output.warning(&format!("Answers were not saved: {e}"))?;
    }
    Ok(())
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_plan(
    config: &GenerationConfig,
    plan: &GenerationPlan,
    output: &OutputManager,
) -> CliResult<()> {
    if output.is_json() {
        output.json(&json!({
            "dry_run": true,
            "service": config.name().as_str(),
            "template": config.template_kind(),
            "service_dir": plan.service_dir,
            "files": plan.files,
            "registry": plan.registry_file,
            "service_exists": plan.service_exists,
            "needs_model": plan.needs_model,
        }))?;
        return Ok(());
    }

    output.info(&format!("Dry run: would generate {config}"))?;
    output.print(&format!("  Template: {}", config.template_kind()))?;
    for file in &plan.files {
        output.print(&format!("  create  {}", file.display()))?;
    }
    output.print(&format!("  update  {}", plan.registry_file.display()))?;
    if plan.needs_model {
        output.print(&format!("  model   {}.model.js", config.name()))?;
    }
    if plan.service_exists {
        output.warning(&format!(
            "{} already exists; --force is needed to overwrite it",
            plan.service_dir.display()
        ))?;
    }
    Ok(())
}

fn print_report(
    config: &GenerationConfig,
    layout: &ProjectLayout,
    report: &GenerationReport,
    output: &OutputManager,
) -> CliResult<()> {
    let registry_file = layout.registry_file();

    if output.is_json() {
        output.json(&json!({
            "service": config.name().as_str(),
            "template": config.template_kind(),
            "service_dir": report.service_dir,
            "files": report.files,
            "registry": registry_status(report.registry),
            "registry_file": registry_file,
            "model": report.model.as_ref().map(|m| json!({
                "status": match m {
                    ModelOutcome::Created(_) => "created",
                    ModelOutcome::Kept(_) => "kept",
                },
                "path": m.path(),
            })),
        }))?;
        return Ok(());
    }

    output.success(&format!(
        "Service '{}' created in {}",
        config.name(),
        report.service_dir.display()
    ))?;
    for file in &report.files {
        output.print(&format!("  create  {}", file.display()))?;
    }

    match report.registry {
        PatchOutcome::Patched(anchor) => output.print(&format!(
            "  update  {} (inserted at {anchor})",
            registry_file.display()
        ))?,
        PatchOutcome::AlreadyRegistered => output.info(&format!(
            "'{}' is already imported in {}",
            config.name(),
            registry_file.display()
        ))?,
        PatchOutcome::RegistryMissing => output.warning(&format!(
            "No registry at {}; register '{}' by hand or run 'hatch init'",
            registry_file.display(),
            config.name()
        ))?,
    }

    match &report.model {
        Some(ModelOutcome::Created(path)) => {
            output.print(&format!("  create  {}", path.display()))?
        }
        Some(ModelOutcome::Kept(path)) => {
            output.info(&format!("Kept existing model {}", path.display()))?
        }
        None => {}
    }

    Ok(())
}

fn registry_status(outcome: PatchOutcome) -> &'static str {
    match outcome {
        PatchOutcome::Patched(_) => "patched",
        PatchOutcome::AlreadyRegistered => "already_registered",
        PatchOutcome::RegistryMissing => "missing",
    }
}
