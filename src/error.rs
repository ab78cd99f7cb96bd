use thiserror::Error;

/// Faults raised by vector operations.
///
/// Degenerate geometry (normalizing or measuring the angle of a zero-length
/// vector) is not an error and never shows up here.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum VectorError {
    #[error("divided by zero")]
    DivideByZero,

    #[error("component index {index} out of range for a {len}-component vector")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("float {value} cannot be represented as a fixed-point component")]
    UnrepresentableFloat { value: f64 },
}

pub type Result<T> = std::result::Result<T, VectorError>;

/// Log and panic with `err`. Backs the operators that cannot return a `Result`.
#[track_caller]
pub(crate) fn fault(err: VectorError) -> ! {
    tracing::error!("vector fault: {err}");
    panic!("{err}");
}
