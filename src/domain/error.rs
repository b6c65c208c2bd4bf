use super::registry::InstrumentKind;

/// Errors surfaced by instrument registration and measurement recording.
///
/// All variants indicate programmer error in instrument usage, not transient
/// conditions. Nothing here is retried or swallowed; the error goes straight
/// back to the caller that misused the API.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    /// An instrument name was reused with a different kind, or a histogram
    /// was re-registered with different bucket boundaries.
    #[error("instrument `{name}` is already registered as a {existing}")]
    DuplicateName {
        name: String,
        existing: InstrumentKind,
    },

    /// Histogram bucket boundaries were empty, non-finite, or not strictly
    /// ascending.
    #[error("invalid histogram boundaries for `{name}`: {reason}")]
    InvalidBoundaries { name: String, reason: &'static str },

    /// A non-finite value (NaN or infinity) was recorded into a histogram.
    #[error("non-finite value {value} recorded into histogram `{name}`")]
    InvalidValue { name: String, value: f64 },
}
