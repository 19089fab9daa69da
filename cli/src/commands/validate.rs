//! `nrn validate <province>`: runs S8's advisory checks over an
//! already-converted working checkpoint and prints each failure.

use anyhow::Result;
use chrono::Datelike;

use crate::cli::{validate_province, Cli, ValidateArgs};

pub fn run(_cli: &Cli, args: &ValidateArgs) -> Result<()> {
    validate_province(&args.province)?;
    let gpkg = crate::storefile::locate(&args.source)?;
    let store = crate::storefile::read(&gpkg)?;
    let pipeline = nrn_core::Pipeline::from_store(store);

    let current_year = chrono::Local::now().year();
    let failures = pipeline.validate(current_year);

    if failures.is_empty() {
        println!("no validation failures");
        return Ok(());
    }
    for failure in &failures {
        println!(
            "{code} {layer}.{field} record={record}: {message}",
            code = failure.code,
            layer = failure.layer,
            field = failure.field,
            record = failure.record,
            message = failure.message,
        );
    }
    anyhow::bail!("{} validation checks reported failures", failures.len());
}
