//! Implementation of the `hatch templates` command.

use hatch_core::application::{TemplateInfo, TemplateService};

use crate::{
    cli::{ListFormat, TemplatesArgs},
    commands::template_store,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: TemplatesArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let service = TemplateService::new(Box::new(template_store(config)?));
    let templates = service.list()?;

    // --output-format json wins so scripted callers always get JSON.
    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Available templates:")?;
            for template in &templates {
                output.print(&table_row(template))?;
            }
        }
        ListFormat::List => {
            for template in &templates {
                println!("{}", template.kind);
            }
        }
        ListFormat::Json => output.json(&templates)?,
    }

    Ok(())
}

fn table_row(template: &TemplateInfo) -> String {
    let model = if template.requires_model {
        " [+model]"
    } else {
        ""
    };
    format!(
        "  {:<10} {}{} ({})",
        template.kind.as_str(),
        template.description,
        model,
        template.files.join(", ")
    )
}
