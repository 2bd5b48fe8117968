//! File-path entry control with a pick-file dialog collaborator.
//!
//! [`FileChooserControl`] owns the text-field state of a "path + browse
//! button" row: the current file name, a derived exists flag, the dialog
//! title, the open/save mode and the filter list. The native dialog itself is
//! a collaborator behind [`FileDialogProvider`]; the control builds a
//! [`FileDialogRequest`] from its state (seeding the initial directory and
//! file name from existing input) and applies whatever path the provider
//! returns.
//!
//! # Example
//!
//! ```
//! use tradeforms::widgets::{FileChooserControl, FileFilter};
//!
//! let chooser = FileChooserControl::new()
//!     .with_title("Import trades...")
//!     .with_filter(FileFilter::new("CSV Files", &["*.csv"]));
//!
//! chooser.file_name_changed.connect(|name| {
//!     println!("Importing from {}", name);
//! });
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use tradeforms_core::logging::targets;
use tradeforms_core::{Property, Signal};

// ============================================================================
// FileDialogMode
// ============================================================================

/// The mode of operation for a file dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileDialogMode {
    /// Select an existing file to open.
    #[default]
    OpenFile,

    /// Select a file to save to.
    SaveFile,
}

impl FileDialogMode {
    /// Check if this mode is for opening (vs saving).
    pub fn is_open_mode(&self) -> bool {
        matches!(self, FileDialogMode::OpenFile)
    }

    /// Get the appropriate accept button text for this mode.
    pub fn accept_button_text(&self) -> &'static str {
        match self {
            FileDialogMode::OpenFile => "Open",
            FileDialogMode::SaveFile => "Save",
        }
    }
}

// ============================================================================
// FileFilter
// ============================================================================

/// A file filter for restricting visible files in the dialog.
///
/// # Example
///
/// ```
/// use tradeforms::widgets::FileFilter;
///
/// let filter = FileFilter::new("Images", &["*.png", "*.jpg", "*.gif"]);
/// let all_files = FileFilter::all_files();
/// assert!(filter.matches("chart.png"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    /// Display name for the filter (e.g., "Image Files").
    pub name: String,

    /// Glob patterns for matching files (e.g., ["*.png", "*.jpg"]).
    pub patterns: Vec<String>,
}

impl FileFilter {
    /// Create a new file filter with a name and patterns.
    pub fn new(name: impl Into<String>, patterns: &[&str]) -> Self {
        Self {
            name: name.into(),
            patterns: patterns.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Create an "All Files" filter that matches everything.
    pub fn all_files() -> Self {
        Self::new("All Files", &["*"])
    }

    /// Create a filter for CSV exports.
    pub fn csv_files() -> Self {
        Self::new("CSV Files", &["*.csv"])
    }

    /// Create a filter for image files.
    pub fn image_files() -> Self {
        Self::new(
            "Images",
            &["*.png", "*.jpg", "*.jpeg", "*.gif", "*.bmp", "*.webp"],
        )
    }

    /// Parse a compact `"Label:*.a,*.b"` filter spec.
    ///
    /// The part before the colon is the display name; the comma-separated
    /// rest are the patterns.
    ///
    /// # Example
    ///
    /// ```
    /// use tradeforms::widgets::FileFilter;
    ///
    /// let filter = FileFilter::parse_spec("Images:*.png,*.jpg").unwrap();
    /// assert_eq!(filter.name, "Images");
    /// assert_eq!(filter.patterns, vec!["*.png", "*.jpg"]);
    /// ```
    pub fn parse_spec(spec: &str) -> Result<Self, FilterSpecError> {
        let (name, patterns) = spec.split_once(':').ok_or_else(|| FilterSpecError {
            spec: spec.to_string(),
        })?;
        if name.is_empty() || patterns.is_empty() {
            return Err(FilterSpecError {
                spec: spec.to_string(),
            });
        }
        Ok(Self {
            name: name.to_string(),
            patterns: patterns.split(',').map(|p| p.trim().to_string()).collect(),
        })
    }

    /// Check if a filename matches this filter.
    pub fn matches(&self, filename: &str) -> bool {
        let filename_lower = filename.to_lowercase();

        for pattern in &self.patterns {
            if pattern == "*" {
                return true;
            }

            // Handle simple extension patterns like "*.csv"
            if let Some(ext_pattern) = pattern.strip_prefix("*.")
                && filename_lower.ends_with(&format!(".{}", ext_pattern.to_lowercase()))
            {
                return true;
            }
        }

        false
    }

    /// Get the display text for this filter (name + patterns).
    pub fn display_text(&self) -> String {
        format!("{} ({})", self.name, self.patterns.join(", "))
    }
}

impl Default for FileFilter {
    fn default() -> Self {
        Self::all_files()
    }
}

/// Error returned when a compact filter spec cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpecError {
    /// The offending spec string.
    pub spec: String,
}

impl fmt::Display for FilterSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid filter spec '{}', expected 'Label:*.a,*.b'", self.spec)
    }
}

impl std::error::Error for FilterSpecError {}

// ============================================================================
// Dialog Collaborator
// ============================================================================

/// The state handed to the dialog collaborator when the user browses.
#[derive(Debug, Clone)]
pub struct FileDialogRequest {
    /// Dialog window title.
    pub title: String,

    /// Open or save mode.
    pub mode: FileDialogMode,

    /// Directory the dialog should start in, when known.
    pub initial_directory: Option<PathBuf>,

    /// File name the dialog should pre-select, when known.
    pub initial_file_name: Option<String>,

    /// Filters offered to the user.
    pub filters: Vec<FileFilter>,
}

/// The host-supplied native dialog.
///
/// Implementations show whatever picker the platform offers and return the
/// chosen path, or `None` when the user cancels.
pub trait FileDialogProvider {
    /// Show the dialog described by `request` and return the chosen path.
    fn pick_file(&self, request: &FileDialogRequest) -> Option<PathBuf>;
}

// ============================================================================
// FileChooserControl
// ============================================================================

/// The state behind a "file path + browse button" row.
///
/// # Signals
///
/// - `file_name_changed(String)`: Emitted when the file name changes
/// - `exists_changed(bool)`: Emitted when the derived exists flag flips
pub struct FileChooserControl {
    /// Current file name (free text; may name a file that does not exist).
    file_name: Property<String>,

    /// Whether the current file name names an existing path.
    exists: Property<bool>,

    /// Dialog title.
    title: Property<String>,

    /// Open or save mode.
    mode: Property<FileDialogMode>,

    /// Filters offered by the dialog.
    filters: Vec<FileFilter>,

    /// Signal emitted when the file name changes.
    pub file_name_changed: Signal<String>,

    /// Signal emitted when the exists flag flips.
    pub exists_changed: Signal<bool>,
}

impl FileChooserControl {
    /// Create an empty control in open mode.
    pub fn new() -> Self {
        Self {
            file_name: Property::new(String::new()),
            exists: Property::new(false),
            title: Property::new("Pick file...".to_string()),
            mode: Property::new(FileDialogMode::OpenFile),
            filters: Vec::new(),
            file_name_changed: Signal::new(),
            exists_changed: Signal::new(),
        }
    }

    // =========================================================================
    // File Name
    // =========================================================================

    /// Get the current file name.
    pub fn file_name(&self) -> String {
        self.file_name.get()
    }

    /// Set the current file name and recompute the exists flag.
    pub fn set_file_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.file_name.set(name.clone()) {
            let exists = Path::new(&name).exists();
            if self.exists.set(exists) {
                self.exists_changed.emit(exists);
            }
            self.file_name_changed.emit(name);
        }
    }

    /// Set the file name using builder pattern.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.set_file_name(name);
        self
    }

    /// Check whether the current file name names an existing path.
    pub fn exists(&self) -> bool {
        self.exists.get()
    }

    // =========================================================================
    // Dialog Options
    // =========================================================================

    /// Get the dialog title.
    pub fn title(&self) -> String {
        self.title.get()
    }

    /// Set the dialog title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title.set(title.into());
    }

    /// Set the dialog title using builder pattern.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.set_title(title);
        self
    }

    /// Get the open/save mode.
    pub fn mode(&self) -> FileDialogMode {
        self.mode.get()
    }

    /// Set the open/save mode.
    pub fn set_mode(&mut self, mode: FileDialogMode) {
        self.mode.set(mode);
    }

    /// Set the open/save mode using builder pattern.
    pub fn with_mode(mut self, mode: FileDialogMode) -> Self {
        self.set_mode(mode);
        self
    }

    /// Check if the control saves rather than opens.
    pub fn is_save(&self) -> bool {
        self.mode.get() == FileDialogMode::SaveFile
    }

    /// Get the filter list.
    pub fn filters(&self) -> &[FileFilter] {
        &self.filters
    }

    /// Append a filter.
    pub fn add_filter(&mut self, filter: FileFilter) {
        self.filters.push(filter);
    }

    /// Append a filter using builder pattern.
    pub fn with_filter(mut self, filter: FileFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Append a filter parsed from a compact `"Label:*.a,*.b"` spec.
    pub fn add_filter_spec(&mut self, spec: &str) -> Result<(), FilterSpecError> {
        self.filters.push(FileFilter::parse_spec(spec)?);
        Ok(())
    }

    // =========================================================================
    // Picking
    // =========================================================================

    /// Build the dialog request for the current state.
    ///
    /// When the current file name names an existing file, its parent
    /// directory and file name seed the dialog.
    pub fn dialog_request(&self) -> FileDialogRequest {
        let mut initial_directory = None;
        let mut initial_file_name = None;

        let name = self.file_name.get();
        if !name.is_empty() {
            let path = Path::new(&name);
            if path.exists() {
                initial_directory = path.parent().map(Path::to_path_buf);
                initial_file_name = path
                    .file_name()
                    .map(|f| f.to_string_lossy().into_owned());
            }
        }

        FileDialogRequest {
            title: self.title.get(),
            mode: self.mode.get(),
            initial_directory,
            initial_file_name,
            filters: self.filters.clone(),
        }
    }

    /// Show the dialog through `provider` and apply its result.
    ///
    /// A cancelled dialog leaves the control untouched. Returns the chosen
    /// path, if any.
    pub fn pick_file(&mut self, provider: &dyn FileDialogProvider) -> Option<PathBuf> {
        let request = self.dialog_request();
        let result = provider.pick_file(&request);
        match &result {
            Some(path) => {
                tracing::debug!(target: targets::FILE_CHOOSER, path = %path.display(), "file picked");
                self.set_file_name(path.to_string_lossy().into_owned());
            }
            None => {
                tracing::trace!(target: targets::FILE_CHOOSER, "dialog cancelled");
            }
        }
        result
    }
}

impl Default for FileChooserControl {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(FileChooserControl: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    struct StubDialog {
        result: Option<PathBuf>,
        seen: Arc<Mutex<Vec<FileDialogRequest>>>,
    }

    impl FileDialogProvider for StubDialog {
        fn pick_file(&self, request: &FileDialogRequest) -> Option<PathBuf> {
            self.seen.lock().push(request.clone());
            self.result.clone()
        }
    }

    #[test]
    fn test_defaults() {
        let chooser = FileChooserControl::new();
        assert_eq!(chooser.file_name(), "");
        assert!(!chooser.exists());
        assert_eq!(chooser.title(), "Pick file...");
        assert_eq!(chooser.mode(), FileDialogMode::OpenFile);
        assert!(!chooser.is_save());
    }

    #[test]
    fn test_exists_follows_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trades.csv");
        std::fs::write(&path, "id,entry\n").unwrap();

        let mut chooser = FileChooserControl::new();
        let flips = Arc::new(Mutex::new(Vec::new()));

        let flips_clone = flips.clone();
        chooser.exists_changed.connect(move |&exists| {
            flips_clone.lock().push(exists);
        });

        chooser.set_file_name(path.to_string_lossy().into_owned());
        assert!(chooser.exists());

        chooser.set_file_name(dir.path().join("missing.csv").to_string_lossy().into_owned());
        assert!(!chooser.exists());

        assert_eq!(*flips.lock(), vec![true, false]);
    }

    #[test]
    fn test_existing_input_seeds_dialog_request() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.csv");
        std::fs::write(&path, "").unwrap();

        let chooser = FileChooserControl::new()
            .with_file_name(path.to_string_lossy().into_owned())
            .with_title("Import trades...");

        let request = chooser.dialog_request();
        assert_eq!(request.title, "Import trades...");
        assert_eq!(request.initial_directory.as_deref(), Some(dir.path()));
        assert_eq!(request.initial_file_name.as_deref(), Some("journal.csv"));
    }

    #[test]
    fn test_missing_input_leaves_request_unseeded() {
        let chooser = FileChooserControl::new().with_file_name("/no/such/file.csv");
        let request = chooser.dialog_request();
        assert_eq!(request.initial_directory, None);
        assert_eq!(request.initial_file_name, None);
    }

    #[test]
    fn test_pick_file_applies_result() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let dialog = StubDialog {
            result: Some(PathBuf::from("/data/journal.csv")),
            seen: seen.clone(),
        };

        let mut chooser = FileChooserControl::new()
            .with_mode(FileDialogMode::SaveFile)
            .with_filter(FileFilter::csv_files());
        let picked = chooser.pick_file(&dialog);

        assert_eq!(picked, Some(PathBuf::from("/data/journal.csv")));
        assert_eq!(chooser.file_name(), "/data/journal.csv");

        let requests = seen.lock();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].mode, FileDialogMode::SaveFile);
        assert_eq!(requests[0].filters, vec![FileFilter::csv_files()]);
    }

    #[test]
    fn test_cancelled_pick_leaves_control_untouched() {
        let dialog = StubDialog {
            result: None,
            seen: Arc::new(Mutex::new(Vec::new())),
        };

        let mut chooser = FileChooserControl::new().with_file_name("kept.csv");
        assert_eq!(chooser.pick_file(&dialog), None);
        assert_eq!(chooser.file_name(), "kept.csv");
    }

    #[test]
    fn test_filter_matches() {
        let filter = FileFilter::new("Images", &["*.png", "*.jpg"]);
        assert!(filter.matches("chart.png"));
        assert!(filter.matches("CHART.PNG"));
        assert!(filter.matches("report.jpg"));
        assert!(!filter.matches("report.pdf"));

        assert!(FileFilter::all_files().matches("anything.xyz"));
    }

    #[test]
    fn test_filter_display_text() {
        let filter = FileFilter::new("CSV Files", &["*.csv"]);
        assert_eq!(filter.display_text(), "CSV Files (*.csv)");
    }

    #[test]
    fn test_parse_spec() {
        let filter = FileFilter::parse_spec("Images:*.png,*.jpg").unwrap();
        assert_eq!(filter.name, "Images");
        assert_eq!(filter.patterns, vec!["*.png", "*.jpg"]);
        assert!(filter.matches("shot.jpg"));

        assert!(FileFilter::parse_spec("no-colon").is_err());
        assert!(FileFilter::parse_spec(":*.png").is_err());
        assert!(FileFilter::parse_spec("Images:").is_err());
    }

    #[test]
    fn test_add_filter_spec() {
        let mut chooser = FileChooserControl::new();
        chooser.add_filter_spec("CSV Files:*.csv").unwrap();
        assert_eq!(chooser.filters().len(), 1);
        assert!(chooser.add_filter_spec("broken").is_err());
        assert_eq!(chooser.filters().len(), 1);
    }

    #[test]
    fn test_mode_accept_text() {
        assert_eq!(FileDialogMode::OpenFile.accept_button_text(), "Open");
        assert_eq!(FileDialogMode::SaveFile.accept_button_text(), "Save");
        assert!(FileDialogMode::OpenFile.is_open_mode());
        assert!(!FileDialogMode::SaveFile.is_open_mode());
    }
}
