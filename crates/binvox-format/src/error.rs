//! Header decode errors.

/// Errors raised while decoding a BINVOX header.
///
/// Each variant carries the offending header line as read (empty when the buffer
/// ended before that line was reached).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BinvoxError {
    /// The first line is not exactly `#binvox 1`.
    #[error("first line reads \"{0}\" instead of \"#binvox 1\"")]
    InvalidSignature(String),

    /// The second line is not `dim` followed by three integers.
    #[error("invalid dimension line: \"{0}\"")]
    InvalidDimensionLine(String),

    /// The third line is not `translate` followed by three numbers.
    #[error("invalid translate line: \"{0}\"")]
    InvalidTranslateLine(String),

    /// The fourth line is not `scale` followed by a number.
    #[error("invalid scale line: \"{0}\"")]
    InvalidScaleLine(String),

    /// The fifth line is not exactly `data`.
    #[error("expected \"data\" marker, found \"{0}\"")]
    InvalidDataMarker(String),
}
