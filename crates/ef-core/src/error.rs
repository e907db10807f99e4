use thiserror::Error;

pub type EfResult<T> = Result<T, EfError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EfError {
    #[error("Invalid {kind} identifier: {label:?}")]
    InvalidLabel { kind: &'static str, label: String },

    #[error("Invalid capacity: {text:?}")]
    InvalidCapacity { text: String },

    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },
}
