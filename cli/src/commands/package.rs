//! `nrn package <province>`: runs S7 over an already-converted working
//! checkpoint, emitting one named delivery format.

use anyhow::Result;
use nrn_schema::OutputFormat;
use tracing::info;

use crate::cli::{validate_province, Cli, PackageArgs};
use crate::writers::MultiFormatWriter;

pub fn run(_cli: &Cli, args: &PackageArgs) -> Result<()> {
    let province = validate_province(&args.province)?;
    let gpkg = crate::storefile::locate(&args.source)?;
    let store = crate::storefile::read(&gpkg)?;

    let pipeline = nrn_core::Pipeline::from_store(store);
    let format: OutputFormat = args.format.into();

    std::fs::create_dir_all(&args.out_path)?;
    let mut writer = MultiFormatWriter::new(args.out_path.clone(), province, args.major_version, args.minor_version);

    pipeline.project_and_emit(&[format], &mut writer)?;

    if args.compress() {
        info!(path = %args.out_path.display(), "compressing delivery output is not yet implemented; left uncompressed");
    }

    info!(format = ?format, path = %args.out_path.display(), "packaged delivery output");
    Ok(())
}
