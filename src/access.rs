//! Access markers.
//!
//! Every reference wrapper carries an access marker in its last type
//! parameter. The marker plays the role of the `const` qualifier on the
//! pointee: a [`Shared`] wrapper only ever hands out `&T`, a [`Unique`]
//! wrapper hands out `&mut T` through `&mut self` and `&T` through `&self`.

/// Read-only access. Wrappers with this marker are `Copy`, like `&T`.
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Shared {}

/// Read-write access. Wrappers with this marker are move-only, like `&mut T`.
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Unique {}

/// An access marker: either [`Shared`] or [`Unique`].
///
/// This trait is sealed.
pub trait Access: seal::Sealed + 'static {}

impl Access for Shared {}
impl Access for Unique {}

mod seal {
    pub trait Sealed {}
    impl Sealed for super::Shared {}
    impl Sealed for super::Unique {}
}
