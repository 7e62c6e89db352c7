use thiserror::Error;

/// Errors surfaced while loading the catalog feed.
///
/// `Read` and `Parse` are load failures: the whole feed is unusable and the
/// presentation boundary shows an empty catalog plus an error banner.
/// `Malformed` is per-record: the loader skips the record and continues.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog feed {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON deserialization error for {context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed record '{name}': {reason}")]
    Malformed { name: String, reason: String },
}
