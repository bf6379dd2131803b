use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetainfoError {
    /// The field is absent or holds the wrong kind of value.
    #[error("Missing field '{field}' (expected {expected})")]
    MissingField {
        field: &'static str,
        expected: &'static str,
    },
}
