use core::any::Any;

/// A pointer-like type with a read-only counterpart.
///
/// This is the contract [`ConstPropagating`](crate::ConstPropagating) relies
/// on. An indirection publishes two views of itself: the one handed out
/// through `&mut self`, which may write to the referent, and its *const
/// counterpart*, handed out through `&self`, which may not.
///
/// | `Self`                     | `Mut<'s>`                  | `Const<'s>`                |
/// |----------------------------|----------------------------|----------------------------|
/// | `Required<'a, T, Unique>`  | `Required<'s, T, Unique>`  | `Required<'s, T, Shared>`  |
/// | `Optional<'a, T, Unique>`  | `Optional<'s, T, Unique>`  | `Optional<'s, T, Shared>`  |
/// | `&'a mut T`                | `&'s mut T`                | `&'s T`                    |
/// | `*mut T`                   | `*mut T`                   | `*const T`                 |
/// | `NonNull<T>`               | `NonNull<T>`               | `*const T`                 |
///
/// Read-only indirections (`Shared` wrappers, `&T`, `*const T`) are their
/// own const counterpart.
pub trait Indirect {
    /// The type referred to.
    type Target: ?Sized;

    /// The read-only view of this indirection.
    type Const<'s>: Indirect<Target = Self::Target>
    where
        Self: 's;

    /// The view of this indirection that may write to the referent.
    type Mut<'s>
    where
        Self: 's;

    /// A read-only view, borrowed from `self`.
    fn to_const(&self) -> Self::Const<'_>;

    /// A view that may write to the referent, borrowed from `self`.
    fn to_mut(&mut self) -> Self::Mut<'_>;
}

/// Types whose concrete runtime type can be queried.
///
/// Referents of this type support the checked `downcast` on
/// [`Required`](crate::Required) and [`Optional`](crate::Optional).
pub trait Downcast {
    /// Whether the concrete type of `self` is `U`.
    fn is_type<U: Any>(&self) -> bool;
}

#[allow(non_snake_case)]
macro_rules! impl_Downcast {
    ($($ty:ty),*$(,)?) => {
        $(impl Downcast for $ty {
            fn is_type<U: Any>(&self) -> bool { self.is::<U>() }
        })*
    };
}

impl_Downcast! {
    dyn Any,
    dyn Any + Send,
    dyn Any + Send + Sync,
}
