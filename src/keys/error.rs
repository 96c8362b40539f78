//! Errors produced while constructing key and parameter objects.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyError {
    /// A variant that requires a key id was constructed without one, or a
    /// `NoPrefix` key was constructed with one.
    InvalidParameter,
}
