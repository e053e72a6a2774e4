/// Errors from reading or parsing a tile record.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("line {line}: expected `left top right bottom`, got {content:?}")]
    MalformedLine { line: usize, content: String },
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{path}: {source}")]
    Record {
        path: String,
        #[source]
        source: RecordError,
    },
}
