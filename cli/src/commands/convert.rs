//! `nrn convert <province>`: runs S1-S6 over every configured source
//! and checkpoints the canonical store to a working GeoPackage.

use anyhow::{Context, Result};
use nrn_core::config::SourceConfig;
use nrn_core::pipeline::{Pipeline, PipelineInputs};
use tracing::info;

use crate::cli::{validate_province, Cli, ConvertArgs};
use crate::readers::GpkgSourceReader;

pub fn run(_cli: &Cli, args: &ConvertArgs) -> Result<()> {
    let province = validate_province(&args.province)?;
    let boundary = crate::boundary::load(&args.boundary)?;

    let work_dir = tempfile::tempdir().context("creating scratch directory")?;
    let previous_store = match &args.previous {
        Some(p) => {
            let resolved = crate::download::resolve_previous(p, work_dir.path())?;
            let gpkg = crate::storefile::locate(&resolved)?;
            Some(crate::storefile::read(&gpkg)?)
        }
        None => None,
    };

    let today = chrono::Local::now().format("%Y%m%d").to_string();
    let inputs = PipelineInputs {
        admin_boundary: &boundary,
        previous: previous_store.as_ref(),
        today: &today,
    };

    let mut pipeline = Pipeline::new();

    for config_path in &args.configs {
        let config = SourceConfig::load(config_path).context("loading source config")?;
        let base_dir = config_path.parent().map(|p| p.to_path_buf()).unwrap_or_default();
        let reader = GpkgSourceReader { base_dir };

        for target in config.conform.keys() {
            let Some(schema) = nrn_schema::table(target) else {
                anyhow::bail!("source config references unknown table `{target}`");
            };
            info!(table = schema.name, "ingesting and conforming");
            pipeline.ingest_and_conform(&reader, &config, schema.name)?;
        }
    }

    pipeline.split_and_recover(&inputs)?;
    pipeline.domain_and_clean()?;
    pipeline.build_topology(&inputs)?;
    let reports = pipeline.reconcile_nids(&inputs)?;
    for (table, report) in &reports {
        let table = *table;
        info!(
            table,
            added = report.added.len(),
            deleted_or_changed = report.deleted_or_changed.len(),
            "reconciled NIDs"
        );
    }

    std::fs::create_dir_all(&args.output)?;
    let out_path = args.output.join(format!("{}_working.gpkg", province.to_ascii_lowercase()));
    crate::storefile::write(pipeline.store(), &out_path)?;
    info!(path = %out_path.display(), "wrote working checkpoint");
    Ok(())
}
