use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("cannot write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
