//! Non-owning reference wrappers, for the places raw pointers are used to
//! *refer* to objects rather than to own them.
//!
//! # Basic Structure
//!
//! - A [`Required`] always refers to a live object. It has no null state, no
//!   default, and can only be made from a borrow (or, `unsafe`ly, from an
//!   address that is checked for null).
//!
//! - An [`Optional`] refers to zero or one live object. It defaults to
//!   absent, and converts to a `Required` only through a checked operation.
//!
//! - A [`ConstPropagating`] wraps either of these, a plain reference, or a raw
//!   pointer, and makes the constness of the access path decide the constness
//!   of the referent.
//!
//! Both reference wrappers carry an [access marker](access): [`Shared`]
//! wrappers are `Copy` and read-only, [`Unique`] wrappers are move-only and
//! read-write. The two wrappers differ on purpose in how a failed
//! [`downcast`](Required::downcast) is reported: `Required` has nowhere to
//! put an absent result and returns an [`Error`], `Optional` becomes absent.
//!
//! # Identity
//!
//! - Equality, ordering and hashing of the wrappers are defined on the
//!   *address* of the referent, never on its contents. Two wrappers are equal
//!   exactly when they refer to the same object (or, for `Optional`, are both
//!   absent).
//!
//! - Lifetimes are tracked by the borrow checker. A wrapper can not outlive
//!   the borrow it was made from:
//!
//! ```compile_fail
//! use indirect::Required;
//!
//! let r = Required::new(&String::from("temporary"));
//! println!("{}", *r);
//! ```
//!
//! - A `Required` can never be made out of thin air:
//!
//! ```compile_fail
//! use indirect::Required;
//!
//! let r: Required<'_, i32> = Default::default();
//! ```

#![no_std]
#![deny(rust_2018_idioms, unconditional_recursion)]

mod error;
mod r#impl;
mod optional;
mod propagate;
mod required;

pub mod access;
pub mod traits;

pub use crate::{
    access::{Shared, Unique},
    error::Error,
    optional::Optional,
    propagate::ConstPropagating,
    required::Required,
};

/// A move-only required reference with write access.
///
/// Through `&self` it only hands out `&T`; through `&mut self` it hands out
/// `&mut T`. Like `&mut T` it is not `Copy`:
///
/// ```compile_fail
/// use indirect::Retained;
///
/// let mut a = 1;
/// let r = Retained::new_mut(&mut a);
/// let s = r;
/// println!("{} {}", *r, *s);
/// ```
pub type Retained<'a, T> = Required<'a, T, Unique>;

/// Make a [`Required`] from a shared borrow.
pub fn required<T: ?Sized>(r: &T) -> Required<'_, T> {
    Required::new(r)
}

/// Make a [`Retained`] from an exclusive borrow.
pub fn retained<T: ?Sized>(r: &mut T) -> Retained<'_, T> {
    Required::new_mut(r)
}

/// Make an engaged [`Optional`] from a shared borrow.
pub fn optional<T: ?Sized>(r: &T) -> Optional<'_, T> {
    Optional::new(r)
}

/// The address of `ptr` with any metadata stripped.
///
/// This is what wrappers compare, order and hash by.
pub(crate) fn address<T: ?Sized>(ptr: *const T) -> *const () {
    ptr as *const ()
}
