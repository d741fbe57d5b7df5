use anyhow::{bail, Context, Result};
use colored::Colorize;
use jfw_core::{JfwConfig, MessageCatalog};
use jfw_validation::{ConfigurationError, Validator, Violation};
use jfw_web::{MessageContext, Scope, ValidationsTag};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

pub struct CheckOptions {
    pub config: PathBuf,
    pub model: String,
    pub render: bool,
    pub only_message: bool,
    pub input: PathBuf,
}

/// Check every record of the input file; returns whether all of them passed
pub fn execute(options: CheckOptions) -> Result<bool> {
    let config = JfwConfig::load(&options.config)?;
    let catalog = Arc::new(config.message_catalog()?);

    let model = config
        .model(&options.model)
        .ok_or_else(|| ConfigurationError::UnknownModel(options.model.clone()))?;
    let validator = Validator::from_model(model, catalog)
        .with_context(|| format!("Invalid constraint declaration in model `{}`", model.name))?;

    let content = fs::read_to_string(&options.input)
        .with_context(|| format!("Failed to read input file: {:?}", options.input))?;
    let records = parse_records(&content)
        .with_context(|| format!("Failed to parse input file: {:?}", options.input))?;

    tracing::info!(model = %model.name, records = records.len(), "checking records");

    let mut clean = true;
    for (index, record) in records.iter().enumerate() {
        let violations = validator
            .validate(record)
            .with_context(|| format!("Record {} could not be validated", index))?;

        if !violations.is_empty() {
            clean = false;
        }

        if options.render {
            println!(
                "{}",
                render(&config, &model.name, &violations, options.only_message)
            );
        } else {
            print_violations(index, &violations);
        }
    }

    Ok(clean)
}

/// Accept a single JSON object or an array of objects
fn parse_records(content: &str) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(content)?;
    let records = match value {
        Value::Array(items) => items,
        other => vec![other],
    };

    if let Some(index) = records.iter().position(|record| !record.is_object()) {
        bail!("record {} is not a JSON object", index);
    }

    Ok(records)
}

/// Violation messages are already interpolated, so they render as literal text
fn render(
    config: &JfwConfig,
    model_name: &str,
    violations: &[Violation],
    only_message: bool,
) -> String {
    let mut context = MessageContext::new();
    for violation in violations {
        context.save_validation_message(
            Scope::Request,
            violation.message.as_str(),
            violation.property_path.as_str(),
            violation.constraint_kind,
            model_name,
        );
    }

    ValidationsTag::new(&config.render)
        .only_message(only_message)
        .render(&context, &MessageCatalog::new())
}

fn print_violations(index: usize, violations: &[Violation]) {
    if violations.is_empty() {
        println!("{} record {}", "ok".green().bold(), index);
        return;
    }

    println!(
        "{} record {} ({} violation{})",
        "invalid".red().bold(),
        index,
        violations.len(),
        if violations.len() == 1 { "" } else { "s" }
    );
    for violation in violations {
        println!(
            "  {} {} [{}]",
            violation.property_path.yellow(),
            violation.message,
            violation.constraint_kind.dimmed()
        );
    }
}
