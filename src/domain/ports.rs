use std::path::Path;

/// Configuration surface the store pipeline reads from.
pub trait StoreConfig {
    /// Directory holding the individual SVG icon files.
    fn source_dir(&self) -> &Path;
    /// File the combined store document is written to.
    fn destination_file(&self) -> &Path;
}
