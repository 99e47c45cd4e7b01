use quick_xml::events::Event;
use serde::Serialize;
use std::path::PathBuf;

/// One top-level element lifted out of an icon document.
///
/// The element and its whole subtree are stored as an owned event stream, so
/// a parsed icon never aliases the reader it came from.
#[derive(Debug, Clone)]
pub struct IconElement {
    pub events: Vec<Event<'static>>,
}

/// Parse result for a single icon document.
#[derive(Debug, Clone)]
pub struct IconDocument {
    /// The root element's `viewBox` attribute, verbatim. Empty if absent.
    pub view_box: String,
    /// Direct child elements of the root, in document order.
    pub children: Vec<IconElement>,
}

/// Outcome of one store build.
///
/// `files_scanned` is the raw enumeration length before the `.svg` filter;
/// `symbols_written` counts only files that produced a symbol.
#[derive(Debug, Clone, Serialize)]
pub struct BuildResult {
    pub success: bool,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub files_scanned: usize,
    pub symbols_written: usize,
}

/// Outcome of removing the store file. `NotFound` is not an error, there was
/// simply nothing to remove.
#[derive(Debug)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
    Failed(std::io::Error),
}
