use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("cannot open schedule sheet {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed schedule sheet: {0}")]
    Malformed(#[from] csv::Error),

    #[error("record {record} has {found} columns, expected at least {expected}")]
    ShortRecord {
        record: usize,
        found: usize,
        expected: usize,
    },
}
