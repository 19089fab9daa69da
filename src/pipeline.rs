//! Orchestrates S0 configuration through S8 validation (§2) in strict
//! sequence — the pipeline never runs two stages concurrently (§5
//! "Scheduling model").

use std::path::Path;

use anyhow::{Context, Result};
use geo::Polygon;
use nrn_schema::{Lang, OutputFormat};
use tracing::info_span;

use crate::config::SourceConfig;
use crate::reader::SourceReader;
use crate::stages::{s1_ingest, s2_conform, s3_split_recover, s4_domain_clean, s5_topology, s6_nid, s7_project, s8_validate};
use crate::stages::s8_validate::ValidationCheck as _;
use crate::store::TableStore;
use crate::writer::LayerWriter;

/// Everything one run of the pipeline needs besides the source configs:
/// the admin boundary used for junction classification, the previous
/// vintage's tables for recovery/reconciliation, and the nominal run
/// date stamped onto newly-created rows.
pub struct PipelineInputs<'a> {
    pub admin_boundary: &'a Polygon<f64>,
    pub previous: Option<&'a TableStore>,
    pub today: &'a str,
}

pub struct Pipeline {
    store: TableStore,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    pub fn new() -> Self {
        Pipeline { store: TableStore::empty() }
    }

    /// Resumes from a checkpoint written by a prior `ingest_and_conform`
    /// run (the `convert`/`package`/`validate` CLI split): `package` and
    /// `validate` both start here instead of from S1.
    pub fn from_store(store: TableStore) -> Self {
        Pipeline { store }
    }

    pub fn store(&self) -> &TableStore {
        &self.store
    }

    /// S1+S2: reads and conforms every configured source into the store.
    /// `target_table` is the per-config canonical table the reader's rows
    /// should land in; SPEC_FULL.md's per-source YAML does not name it
    /// explicitly since one config's `conform` document keys already say
    /// which table(s) it populates, so the caller supplies it alongside
    /// the loaded config (mirroring how `cli`'s `convert` subcommand
    /// walks `--config` arguments paired with a table name from the
    /// config's own path or a CLI flag).
    pub fn ingest_and_conform(
        &mut self,
        reader: &dyn SourceReader,
        config: &SourceConfig,
        target_table: &'static str,
    ) -> Result<()> {
        if nrn_schema::table(target_table).is_none() {
            return Err(crate::error::SchemaError::UnknownTable(target_table.to_string()).into());
        }
        let _span = info_span!("s1_ingest", table = target_table).entered();
        let raw = reader.read(&config.data).context("reading source layer")?;
        let ingested = s1_ingest::ingest(&raw, config.data.crs)?;
        drop(_span);

        let _span = info_span!("s2_conform", table = target_table).entered();
        s2_conform::conform_into(&mut self.store, target_table, &ingested, &config.conform)
            .context("applying conform document")?;
        Ok(())
    }

    /// S3 Split & Recover: materializes packed `strplaname` pairs into
    /// rows, repoints `altnamlink`, de-duplicates, and recovers any
    /// canonical table left empty from the previous vintage.
    pub fn split_and_recover(&mut self, inputs: &PipelineInputs) -> Result<()> {
        let _span = info_span!("s3_split_recover").entered();

        if let Some(strplaname) = self.store.table_mut("strplaname") {
            let (left_map, right_map) = s3_split_recover::split_strplaname(strplaname);
            if let Some(altnamlink) = self.store.table_mut("altnamlink") {
                s3_split_recover::split_altnamlink(altnamlink, &left_map, &right_map);
            }
            if let Some(addrange) = self.store.table_mut("addrange") {
                for field in ["l_altnamnid", "l_offnanid"] {
                    s3_split_recover::rewrite_references(addrange, field, &left_map);
                }
                for field in ["r_altnamnid", "r_offnanid"] {
                    s3_split_recover::rewrite_references(addrange, field, &right_map);
                }
            }
        }

        if let Some(strplaname) = self.store.table_mut("strplaname") {
            let dedup_map = s3_split_recover::dedupe_strplaname(strplaname);
            if let Some(addrange) = self.store.table_mut("addrange") {
                for field in ["l_altnamnid", "r_altnamnid", "l_offnanid", "r_offnanid"] {
                    s3_split_recover::rewrite_references(addrange, field, &dedup_map);
                }
            }
            if let Some(altnamlink) = self.store.table_mut("altnamlink") {
                s3_split_recover::rewrite_references(altnamlink, "strnamenid", &dedup_map);
            }
        }

        if let Some(previous) = inputs.previous {
            for name in nrn_schema::ALL_TABLES.iter().map(|s| s.name) {
                s3_split_recover::recover_missing(&mut self.store, name, previous);
            }
        }

        Ok(())
    }

    /// S4 Domain & Clean (§4.2–§4.3): resolves every domain-bearing field
    /// to its canonical code and runs the four cleaning sweeps.
    pub fn domain_and_clean(&mut self) -> Result<()> {
        let _span = info_span!("s4_domain_clean").entered();

        for &schema in nrn_schema::ALL_TABLES {
            let Some(table) = self.store.table_mut(schema.name) else { continue };
            for field in schema.fields {
                if let Some(domain) = field.domain {
                    s4_domain_clean::apply_domain(table, field.name, domain, crate::value::Scalar::Int(-1));
                }
            }
            s4_domain_clean::lowercase_ids(table);
            s4_domain_clean::normalize_whitespace(table);
        }

        if let Some(roadseg) = self.store.table_mut("roadseg") {
            s4_domain_clean::title_case_route_names(roadseg);
            s4_domain_clean::renumber_roadsegid(roadseg);
        }
        if let Some(ferryseg) = self.store.table_mut("ferryseg") {
            s4_domain_clean::title_case_route_names(ferryseg);
        }

        Ok(())
    }

    /// S5 Topology (§4.5): builds the junction table from the cleaned
    /// road/ferry network.
    pub fn build_topology(&mut self, inputs: &PipelineInputs) -> Result<()> {
        let _span = info_span!("s5_topology").entered();
        s5_topology::build_junction_table(&mut self.store, inputs.admin_boundary, inputs.today);
        Ok(())
    }

    /// S6 NID Reconciliation (§4.6): preserves `nid` across vintages for
    /// geometrically unchanged rows in every spatial table.
    pub fn reconcile_nids(&mut self, inputs: &PipelineInputs) -> Result<Vec<(&'static str, s6_nid::ReconcileReport)>> {
        let _span = info_span!("s6_nid").entered();
        let Some(previous) = inputs.previous else { return Ok(Vec::new()) };

        let mut reports = Vec::new();
        for &schema in nrn_schema::ALL_TABLES {
            if schema.geometry == nrn_schema::GeometryKind::None {
                continue;
            }
            let Some(prev_table) = previous.table(schema.name) else { continue };
            let prev_table = prev_table.clone();
            let Some(current) = self.store.table_mut(schema.name) else { continue };
            let report = s6_nid::reconcile(current, &prev_table);
            reports.push((schema.name, report));
        }
        Ok(reports)
    }

    /// S7 Project & Emit (§4.7): projects every canonical table into each
    /// requested (format, language) pair and hands the result to `writer`.
    pub fn project_and_emit(&self, formats: &[OutputFormat], writer: &mut dyn LayerWriter) -> Result<()> {
        let _span = info_span!("s7_project").entered();

        for &format in formats {
            for lang in [Lang::En, Lang::Fr] {
                for &schema in nrn_schema::ALL_TABLES {
                    let Some(table) = self.store.table(schema.name) else { continue };
                    let Some(prepared) = s7_project::project(table, schema, format, lang) else { continue };

                    if format == OutputFormat::Kml && schema.name == "roadseg" {
                        self.emit_kml_partitions(table, &prepared, lang, writer)?;
                    } else {
                        writer.write(format, lang, &prepared)?;
                    }
                }
                writer.finish(format, lang)?;
            }
        }
        Ok(())
    }

    fn emit_kml_partitions(
        &self,
        table: &crate::store::Table,
        prepared: &s7_project::PreparedTable,
        lang: Lang,
        writer: &mut dyn LayerWriter,
    ) -> Result<()> {
        let partitions = s7_project::partition_roadseg_kml(table, s7_project::DEFAULT_KML_FEATURE_CAP);
        for partition in partitions {
            let chunk = s7_project::PreparedTable {
                layer_name: partition.filename,
                columns: prepared
                    .columns
                    .iter()
                    .map(|(name, values)| {
                        let subset = partition.row_indices.iter().map(|&i| values[i].clone()).collect();
                        (name.clone(), subset)
                    })
                    .collect(),
                geometry: prepared.geometry.as_ref().map(|g| {
                    partition.row_indices.iter().map(|&i| g[i].clone()).collect()
                }),
            };
            writer.write(OutputFormat::Kml, lang, &chunk)?;
        }
        Ok(())
    }

    /// S8 Validate (§4.8, advisory): runs the fixed check set over every
    /// table it applies to and returns the full failure list. Never
    /// returns an `Err`; failures are data, not pipeline faults.
    pub fn validate(&self, current_year: i32) -> Vec<s8_validate::ValidationFailure> {
        let _span = info_span!("s8_validate").entered();
        let mut failures = Vec::new();

        if let Some(roadseg) = self.store.table("roadseg") {
            let speed = s8_validate::SpeedLimitCheck { field: "speed" };
            failures.extend(speed.run("roadseg", roadseg));
        }

        for &schema in nrn_schema::ALL_TABLES {
            let Some(table) = self.store.table(schema.name) else { continue };
            for date_field in ["credate", "revdate"] {
                if schema.field(date_field).is_none() {
                    continue;
                }
                let check = s8_validate::DateCheck { field: date_field, current_year };
                failures.extend(check.run(schema.name, table));
            }
            if schema.geometry == nrn_schema::GeometryKind::Point {
                let check = s8_validate::DuplicatePointCheck;
                failures.extend(check.run(schema.name, table));
            }
        }

        failures
    }
}

/// Loads every `--config` path into a `SourceConfig`, preserving order
/// (§5 determinism: stages never depend on an unspecified config order,
/// but downstream ID reporting is easier to reason about when it's
/// stable).
pub fn load_source_configs(paths: &[impl AsRef<Path>]) -> Result<Vec<SourceConfig>> {
    paths.iter().map(|p| SourceConfig::load(p.as_ref())).collect()
}
