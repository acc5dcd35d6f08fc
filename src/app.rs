//! Conversion and validation pipelines behind the binaries.
//!
//! The two pipelines share the loader and nothing else: conversion never
//! validates, validation never builds a tree.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{Config, ConvertArgs, OutputFormat, ProjectConfig, ValidateArgs};
use crate::loader::{load_document, load_source};
use crate::parser::parse_document;
use crate::render::{HtmlRenderer, JsonRenderer, Renderer};
use crate::validation::{ValidationResult, Validator};

/// Load, parse, render and write a questionnaire
///
/// The project config is only consulted for an HTML template when none was
/// given on the command line.
pub fn convert(args: &ConvertArgs, workdir: &Path) -> Result<()> {
    let text = load_document(&args.input)?;
    let document = parse_document(&text);

    let renderer = build_renderer(args, workdir)?;
    let output = renderer.render(&document)?;

    std::fs::write(&args.output, output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    log::info!(
        "Converted {} ({} blocks, {} questions)",
        args.input.display(),
        document.blocks.len(),
        document.question_count()
    );
    Ok(())
}

fn build_renderer(args: &ConvertArgs, workdir: &Path) -> Result<Box<dyn Renderer>> {
    if args.format == OutputFormat::Json {
        return Ok(Box::new(JsonRenderer));
    }

    let template = match &args.template {
        Some(path) => Some(path.clone()),
        None => ProjectConfig::discover(workdir)?
            .and_then(|(project, _)| project.template)
            .map(|path| workdir.join(path)),
    };

    let renderer = match template {
        Some(path) => HtmlRenderer::from_file(&path)?,
        None => HtmlRenderer::new(),
    };
    Ok(Box::new(renderer))
}

/// Load a questionnaire and check its structure
///
/// Error line numbers in the result refer to lines of the input file.
pub fn validate(args: &ValidateArgs, config: &Config) -> Result<ValidationResult> {
    let registry = config.profile_registry()?;

    let mut profile = config.select_profile(&registry)?;
    if let Some(project) = &args.project {
        profile = profile.with_project(project.as_str());
    }

    let source = load_source(&args.file)?;
    let mut result = Validator::new(&profile)?.validate(&source.text);
    result.map_lines(|line| source.source_line(line));

    log::info!(
        "Validated {} against profile '{}': {} errors",
        args.file.display(),
        profile.name,
        result.errors.len()
    );
    Ok(result)
}
