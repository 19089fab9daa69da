//! Fetches the previous vintage when `--previous` names an HTTP(S) URL
//! (§5 Timeouts, §6 `convert --previous`), grounded on the teacher's
//! `src/io.rs::download_big_file` atomic-write pattern and
//! `src/common/fs.rs::extract_zip`.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use tempfile::NamedTempFile;

const TIMEOUT: Duration = Duration::from_secs(30);
const MAX_RETRIES: u32 = 3;
const BACKOFF: Duration = Duration::from_secs(5);

/// Resolves `previous` (a local path or an HTTP(S) URL) to a local path,
/// downloading and extracting it into `work_dir` first if it's a URL.
pub fn resolve_previous(previous: &str, work_dir: &Path) -> Result<PathBuf> {
    if !previous.starts_with("http://") && !previous.starts_with("https://") {
        return Ok(PathBuf::from(previous));
    }

    fs::create_dir_all(work_dir).with_context(|| format!("creating {}", work_dir.display()))?;
    let zip_path = work_dir.join("previous_vintage.zip");
    let out_dir = work_dir.join("previous_vintage");

    download_with_retries(previous, &zip_path)?;
    extract_zip(&zip_path, &out_dir)?;
    Ok(out_dir)
}

fn download_with_retries(url: &str, out_path: &Path) -> Result<()> {
    let client = reqwest::blocking::Client::builder()
        .timeout(TIMEOUT)
        .build()
        .context("building HTTP client")?;

    let mut last_err = None;
    for attempt in 0..=MAX_RETRIES {
        if attempt > 0 {
            tracing::warn!(attempt, "retrying previous-vintage download after {url}");
            std::thread::sleep(BACKOFF);
        }
        match download_once(&client, url, out_path) {
            Ok(()) => return Ok(()),
            Err(e) => last_err = Some(e),
        }
    }
    Err(last_err.unwrap())
}

fn download_once(client: &reqwest::blocking::Client, url: &str, out_path: &Path) -> Result<()> {
    let mut resp = client
        .get(url)
        .send()
        .with_context(|| format!("GET {url}"))?
        .error_for_status()
        .with_context(|| format!("GET {url} returned error status"))?;

    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    let mut tmp = NamedTempFile::new_in(out_path.parent().unwrap_or_else(|| Path::new(".")))
        .context("creating temp file for download")?;
    std::io::copy(&mut resp, &mut tmp).with_context(|| format!("writing {}", out_path.display()))?;
    tmp.flush().ok();
    tmp.persist(out_path)
        .with_context(|| format!("finalizing {}", out_path.display()))?;
    Ok(())
}

fn extract_zip(zip_path: &Path, dest_dir: &Path) -> Result<()> {
    let file = File::open(zip_path).with_context(|| format!("opening {}", zip_path.display()))?;
    let mut archive = zip::ZipArchive::new(file)
        .with_context(|| format!("reading zip archive {}", zip_path.display()))?;
    archive
        .extract(dest_dir)
        .with_context(|| format!("extracting {} to {}", zip_path.display(), dest_dir.display()))?;
    if fs::remove_file(zip_path).is_err() {
        bail!("downloaded zip at {} could not be cleaned up", zip_path.display());
    }
    Ok(())
}
