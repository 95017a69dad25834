/// Crate-wide result type; errors are `anyhow::Error` so adapters can attach
/// context while `DepVizError` stays downcastable for exit codes.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
