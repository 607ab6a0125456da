//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`, while
//! CLI/main uses `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: Top-level application error enum
//! - Module-specific errors (e.g. [`crate::catalog::CatalogError`]) for
//!   detailed handling at the scan-loop boundary

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
///
/// Aggregates errors from all subsystems so a single scan can report
/// whichever step failed and the loop can move on to the next code.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog lookup error
    #[error("Catalog error: {0}")]
    Catalog(#[from] crate::catalog::CatalogError),

    /// Barcode generation error
    #[error("Barcode error: {0}")]
    Barcode(#[from] crate::barcode::BarcodeError),

    /// Label composition error
    #[error("Label error: {0}")]
    Label(#[from] crate::label::LabelError),

    /// Print submission error
    #[error("Print error: {0}")]
    Print(#[from] crate::printing::PrintError),
}
