use crate::core::{parser, symbol, walker};
use crate::domain::model::BuildResult;
use crate::domain::ports::StoreConfig;
use crate::utils::error::Result;
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

const ICON_EXTENSION: &str = ".svg";

/// Drives the walk → parse → assemble → write pipeline over a source
/// directory and produces the combined store document.
pub struct StoreBuilder<C: StoreConfig> {
    config: C,
}

impl<C: StoreConfig> StoreBuilder<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// Builds the store file and reports the outcome.
    ///
    /// This never fails: an unreadable source directory counts as an empty
    /// enumeration, per-file parse problems skip that file, and a write
    /// failure comes back as `success = false`.
    pub fn build(&self) -> BuildResult {
        let source = self.config.source_dir();
        let destination = self.config.destination_file();

        tracing::info!("Building svgstore from {}", source.display());

        let list = walker::walk(source).unwrap_or_else(|e| {
            tracing::warn!("Source enumeration failed, building empty store: {}", e);
            Vec::new()
        });

        let mut symbols = Vec::new();
        for item in &list {
            if !item.ends_with(ICON_EXTENSION) {
                continue;
            }
            let path = source.join(item);
            let Some(id) = icon_id(item) else {
                continue;
            };
            let content = match fs::read(&path) {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::warn!("Skipping unreadable file {}: {}", path.display(), e);
                    continue;
                }
            };
            match parser::parse(&content).and_then(|icon| symbol::assemble(&id, &icon)) {
                Ok(fragment) => {
                    tracing::debug!("Added symbol #{}", id);
                    symbols.push(fragment);
                }
                Err(e) => {
                    tracing::debug!("Skipping {}: {}", path.display(), e);
                }
            }
        }

        let document = format!(
            r#"<svg xmlns="{}" xmlns:xlink="{}">{}</svg>"#,
            SVG_NS,
            XLINK_NS,
            symbols.concat(),
        );

        let success = match write_store(destination, &document) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Failed to write {}: {}", destination.display(), e);
                false
            }
        };

        BuildResult {
            success,
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            files_scanned: list.len(),
            symbols_written: symbols.len(),
        }
    }
}

/// Symbol id: the file name without extension or directory segments.
fn icon_id(relative: &str) -> Option<String> {
    Path::new(relative)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}

/// Writes the document under an exclusive lock, through a temporary file
/// renamed over the destination so readers never see a partial store.
fn write_store(destination: &Path, document: &str) -> Result<()> {
    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir)?;

    let lock = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .open(lock_path(destination))?;
    lock.lock_exclusive()?;

    let outcome = (|| -> Result<()> {
        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(document.as_bytes())?;
        tmp.persist(destination).map_err(|e| e.error)?;
        Ok(())
    })();

    let _ = FileExt::unlock(&lock);
    outcome
}

fn lock_path(destination: &Path) -> PathBuf {
    let mut os = destination.as_os_str().to_os_string();
    os.push(".lock");
    PathBuf::from(os)
}
