use thiserror::Error;

/// The error returned by the checked operations on reference wrappers.
#[derive(Error, Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// A required reference was constructed from a null address.
    #[error("cannot make a required reference from a null pointer")]
    Null,
    /// The value of an absent optional reference was accessed.
    #[error("attempted to access the value of an absent optional reference")]
    Empty,
    /// The referent of a required reference is not of the requested type.
    #[error("referent is not of the requested type")]
    BadCast,
}
