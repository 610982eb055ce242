use {
    crate::{access::Access, traits::Indirect, Optional, Required},
    core::{
        cmp, fmt,
        hash::{self, Hash},
        mem, ops,
    },
};

/// An adapter that propagates the constness of its access path to the
/// referent of the wrapped indirection.
///
/// A plain pointer stored in a struct does not care whether the struct is
/// borrowed shared or exclusive: `*mut T` can be written through from
/// `&self`. `ConstPropagating` ties the two together. Through `&self` it only
/// exposes the const counterpart of `W` (see [`Indirect`]), through
/// `&mut self` it exposes `W`'s own mutable view.
///
/// ```
/// use indirect::{ConstPropagating, Retained};
///
/// let mut x = 1;
/// let mut p = ConstPropagating::new(Retained::new_mut(&mut x));
/// *p += 1; // `&mut self` gives `&mut i32`
/// let shared: &ConstPropagating<Retained<'_, i32>> = &p;
/// assert_eq!(*shared.get(), 2); // `&self` gives `Required<'_, i32, Shared>`
/// ```
///
/// Writing through the const path does not compile:
///
/// ```compile_fail
/// use indirect::{ConstPropagating, Retained};
///
/// fn write(p: &ConstPropagating<Retained<'_, i32>>) {
///     *p.get() = 2;
/// }
/// ```
///
/// The adapter is move-only, so a copy can not hand out a second,
/// differently-qualified view of the same referent:
///
/// ```compile_fail
/// use indirect::{ConstPropagating, Retained};
///
/// let mut x = 1;
/// let p = ConstPropagating::new(Retained::new_mut(&mut x));
/// let q = ConstPropagating::clone(&p);
/// ```
#[repr(transparent)]
pub struct ConstPropagating<W> {
    inner: W,
}

/// Constructors
impl<W> ConstPropagating<W> {
    /// Wrap an indirection.
    pub const fn new(inner: W) -> Self {
        ConstPropagating { inner }
    }

    /// Assign from anything convertible to the wrapped indirection.
    pub fn set<U: Into<W>>(&mut self, value: U) {
        self.inner = value.into();
    }

    /// Convert the wrapped indirection.
    pub fn convert<V>(self) -> ConstPropagating<V>
    where
        W: Into<V>,
    {
        ConstPropagating::new(self.inner.into())
    }
}

/// Downgrade
impl<W> ConstPropagating<W> {
    /// The wrapped indirection, mutably.
    pub fn underlying_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwrap the indirection.
    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Exchange the wrapped indirections.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.inner, &mut other.inner)
    }
}

/// Access
impl<W: Indirect> ConstPropagating<W> {
    /// The const counterpart of the wrapped indirection.
    pub fn get(&self) -> W::Const<'_> {
        self.inner.to_const()
    }

    /// The mutable view of the wrapped indirection.
    pub fn get_mut(&mut self) -> W::Mut<'_> {
        self.inner.to_mut()
    }

    /// The const counterpart of the wrapped indirection.
    ///
    /// This is the conversion used where only a read-only `W` is needed.
    pub fn to_const(&self) -> W::Const<'_> {
        self.get()
    }
}

impl<'a, T: ?Sized, A: Access> ConstPropagating<Optional<'a, T, A>> {
    /// Whether the wrapped reference is engaged.
    pub fn has_value(&self) -> bool {
        self.inner.has_value()
    }
}

// ~~~ Standard traits ~~~ //

impl<W: ops::Deref> ops::Deref for ConstPropagating<W> {
    type Target = W::Target;

    fn deref(&self) -> &W::Target {
        &self.inner
    }
}

impl<W: ops::DerefMut> ops::DerefMut for ConstPropagating<W> {
    fn deref_mut(&mut self) -> &mut W::Target {
        &mut self.inner
    }
}

impl<W> From<W> for ConstPropagating<W> {
    fn from(inner: W) -> Self {
        ConstPropagating::new(inner)
    }
}

impl<W: Default> Default for ConstPropagating<W> {
    fn default() -> Self {
        ConstPropagating::new(W::default())
    }
}

impl<W: fmt::Debug> fmt::Debug for ConstPropagating<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConstPropagating").field(&self.inner).finish()
    }
}

impl<W: fmt::Pointer> fmt::Pointer for ConstPropagating<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&self.inner, f)
    }
}

impl<W: Eq> Eq for ConstPropagating<W> {}

impl<W: PartialEq<V>, V> PartialEq<ConstPropagating<V>> for ConstPropagating<W> {
    fn eq(&self, other: &ConstPropagating<V>) -> bool {
        self.inner.eq(&other.inner)
    }
}

impl<'b, W, U: ?Sized, B: Access> PartialEq<Required<'b, U, B>> for ConstPropagating<W>
where
    W: PartialEq<Required<'b, U, B>>,
{
    fn eq(&self, other: &Required<'b, U, B>) -> bool {
        self.inner.eq(other)
    }
}

impl<'b, W, U: ?Sized, B: Access> PartialEq<Optional<'b, U, B>> for ConstPropagating<W>
where
    W: PartialEq<Optional<'b, U, B>>,
{
    fn eq(&self, other: &Optional<'b, U, B>) -> bool {
        self.inner.eq(other)
    }
}

impl<W: Ord> Ord for ConstPropagating<W> {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.inner.cmp(&other.inner)
    }
}

impl<W: PartialOrd<V>, V> PartialOrd<ConstPropagating<V>> for ConstPropagating<W> {
    fn partial_cmp(&self, other: &ConstPropagating<V>) -> Option<cmp::Ordering> {
        self.inner.partial_cmp(&other.inner)
    }
}

impl<'b, W, U: ?Sized, B: Access> PartialOrd<Required<'b, U, B>> for ConstPropagating<W>
where
    W: PartialOrd<Required<'b, U, B>>,
{
    fn partial_cmp(&self, other: &Required<'b, U, B>) -> Option<cmp::Ordering> {
        self.inner.partial_cmp(other)
    }
}

impl<'b, W, U: ?Sized, B: Access> PartialOrd<Optional<'b, U, B>> for ConstPropagating<W>
where
    W: PartialOrd<Optional<'b, U, B>>,
{
    fn partial_cmp(&self, other: &Optional<'b, U, B>) -> Option<cmp::Ordering> {
        self.inner.partial_cmp(other)
    }
}

impl<W: Hash> Hash for ConstPropagating<W> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.inner.hash(state)
    }
}
