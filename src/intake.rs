use std::path::{Path, PathBuf};

/// Extensions the file picker accepts. Contents are never read.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["csv", "xlsx", "xls", "pdf"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Csv,
    Excel,
    Pdf,
}

impl FileKind {
    pub fn from_path(path: &Path) -> Option<FileKind> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "xlsx" | "xls" => Some(Self::Excel),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Excel => "Excel",
            Self::Pdf => "PDF",
        }
    }
}

/// A picked statement file, described from metadata only.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
    pub kind: FileKind,
}

/// Inspect a candidate file. Returns None for anything the picker would not
/// offer: unknown extensions, missing paths and directories.
pub fn inspect(path: &Path) -> Option<SelectedFile> {
    let kind = FileKind::from_path(path)?;
    let meta = std::fs::metadata(path).ok()?;
    if !meta.is_file() {
        return None;
    }
    let name = path.file_name()?.to_string_lossy().to_string();
    Some(SelectedFile {
        name,
        path: path.to_path_buf(),
        size: meta.len(),
        kind,
    })
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
