//! `nrn ls <province>`: lists the canonical tables and fields this tool
//! knows about, for discovering the field names per-source `conform`
//! documents must target.

use anyhow::Result;

use crate::cli::{validate_province, Cli, LsArgs};

pub fn run(_cli: &Cli, args: &LsArgs) -> Result<()> {
    let province = validate_province(&args.province)?;
    println!("canonical tables ({province}):");
    for schema in nrn_schema::ALL_TABLES {
        println!("  {} ({:?})", schema.name, schema.geometry);
        for field in schema.fields {
            println!("    {} : {:?}", field.name, field.semantic);
        }
    }
    Ok(())
}
