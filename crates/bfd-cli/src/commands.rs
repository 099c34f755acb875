use std::path::PathBuf;

use anyhow::{Context, Result};
use bfd_core::{CatalogSummary, ConfigCatalog, FieldResolver, RejectedCell, Resolution};
use bfd_ingest::default_config_path;
use bfd_model::{EncounterContext, ExportField, ExportOptions, SamplingMode};
use tracing::{info, warn};

use crate::cli::{CheckArgs, ResolveArgs, SourceArgs};

/// Outcome of `bfd-export check`.
#[derive(Debug)]
pub struct CheckReport {
    pub source: PathBuf,
    pub summary: CatalogSummary,
    pub rejections: Vec<RejectedCell>,
}

/// Settings from `--settings`, or defaults when no file is given.
pub fn load_options(source: &SourceArgs) -> Result<ExportOptions> {
    match &source.settings {
        Some(path) => {
            info!(path = %path.display(), "reading settings");
            ExportOptions::load_from(path).context("load settings")
        }
        None => Ok(ExportOptions::default()),
    }
}

/// Configuration location: `--field-values`, then settings, then the default.
pub fn config_path(source: &SourceArgs, options: &ExportOptions) -> PathBuf {
    source
        .field_values
        .clone()
        .or_else(|| options.field_values.clone())
        .unwrap_or_else(default_config_path)
}

pub fn run_check(args: &CheckArgs) -> Result<CheckReport> {
    let options = load_options(&args.source)?;
    let path = config_path(&args.source, &options);
    let catalog = ConfigCatalog::load(&path)?;
    Ok(CheckReport {
        source: path,
        summary: catalog.summary(),
        rejections: catalog.rejections().to_vec(),
    })
}

pub fn run_resolve(args: &ResolveArgs) -> Result<Resolution<ExportField>> {
    let mut options = load_options(&args.source)?;
    if args.random {
        options = options.with_sampling(SamplingMode::Random);
    }
    if args.seed.is_some() {
        options = options.with_seed(args.seed);
    }
    if args.stop < args.start {
        warn!(start = %args.start, stop = %args.stop, "encounter stops before it starts");
    }

    let path = config_path(&args.source, &options);
    let catalog = ConfigCatalog::load(&path)?;
    let encounter = EncounterContext::new(args.start, args.stop);
    let mut resolver = FieldResolver::new(&catalog, &options);
    Ok(resolver.resolve_any(args.category, &encounter))
}

/// Ordered JSON object of the resolved fields.
pub fn render_values(resolution: &Resolution<ExportField>) -> Result<String> {
    serde_json::to_string_pretty(&resolution.values).context("serialize field values")
}
