use {
    crate::{
        access::{Access, Shared, Unique},
        address,
        traits::{Downcast, Indirect},
        Error, Required,
    },
    core::{
        any::Any,
        cmp, fmt,
        hash::{self, Hash},
        marker::PhantomData,
        mem, ops,
        ptr::{self, NonNull},
    },
    debug_unreachable::debug_unreachable,
};

/// A non-owning reference to zero or one live object.
///
/// An `Optional` is either *engaged*, referring to an object, or *absent*.
/// It starts out absent, can be bound and rebound to objects, and can be
/// reset to absent again:
///
/// ```
/// use indirect::Optional;
///
/// let a = 1;
/// let mut o: Optional<'_, i32> = Optional::none();
/// assert!(!o.has_value());
/// o.set(&a);
/// assert!(o.has_value() && *o == 1);
/// o.reset();
/// assert!(!o.has_value());
/// ```
///
/// Like [`Required`], comparisons and hashing look at the address of the
/// referent only. An absent reference is equal to every other absent
/// reference and orders before every engaged one.
#[repr(transparent)]
pub struct Optional<'a, T: ?Sized, A: Access = Shared> {
    ptr: Option<NonNull<T>>,
    marker: PhantomData<(&'a mut T, A)>,
}

/// Constructors
impl<'a, T: ?Sized, A: Access> Optional<'a, T, A> {
    /// The absent reference.
    pub const fn none() -> Self {
        Optional {
            ptr: None,
            marker: PhantomData,
        }
    }

    /// Wrap a possibly-null address.
    ///
    /// # Safety
    ///
    /// If `Some`, the address must be valid for the access `A` grants for
    /// all of `'a`.
    pub unsafe fn from_non_null(ptr: Option<NonNull<T>>) -> Self {
        Optional {
            ptr,
            marker: PhantomData,
        }
    }
}

impl<'a, T: ?Sized> Optional<'a, T, Shared> {
    /// Wrap a shared borrow.
    pub fn new(r: &'a T) -> Self {
        unsafe { Optional::from_non_null(Some(NonNull::from(r))) }
    }

    /// Wrap a raw address. A null address gives the absent reference.
    ///
    /// # Safety
    ///
    /// If non-null, `ptr` must be valid for shared access for all of `'a`.
    pub unsafe fn from_ptr(ptr: *const T) -> Self {
        Optional::from_non_null(NonNull::new(ptr as *mut T))
    }
}

impl<'a, T: ?Sized> Optional<'a, T, Unique> {
    /// Wrap an exclusive borrow.
    pub fn new_mut(r: &'a mut T) -> Self {
        unsafe { Optional::from_non_null(Some(NonNull::from(r))) }
    }

    /// Wrap a raw address. A null address gives the absent reference.
    ///
    /// # Safety
    ///
    /// If non-null, `ptr` must be valid for exclusive access for all of `'a`.
    pub unsafe fn from_mut_ptr(ptr: *mut T) -> Self {
        Optional::from_non_null(NonNull::new(ptr))
    }
}

/// Access
impl<'a, T: ?Sized, A: Access> Optional<'a, T, A> {
    /// Whether this reference is engaged.
    pub fn has_value(&self) -> bool {
        self.ptr.is_some()
    }

    /// Whether this reference is absent.
    pub fn is_none(&self) -> bool {
        self.ptr.is_none()
    }

    /// The referent, if engaged.
    pub fn get(&self) -> Option<&T> {
        self.ptr.map(|ptr| unsafe { &*ptr.as_ptr() })
    }

    /// The referent, or [`Error::Empty`] if absent.
    pub fn value(&self) -> Result<&T, Error> {
        self.get().ok_or(Error::Empty)
    }

    /// A copy of the referent, or `default` if absent.
    pub fn value_or(&self, default: T) -> T
    where
        T: Clone,
    {
        match self.get() {
            Some(value) => value.clone(),
            None => default,
        }
    }

    /// A copy of the referent, or the result of `f` if absent.
    pub fn value_or_else(&self, f: impl FnOnce() -> T) -> T
    where
        T: Clone,
    {
        match self.get() {
            Some(value) => value.clone(),
            None => f(),
        }
    }

    /// The referent, without checking for absence.
    ///
    /// # Safety
    ///
    /// This reference must be engaged.
    pub unsafe fn get_unchecked(&self) -> &T {
        match self.ptr {
            Some(ptr) => &*ptr.as_ptr(),
            None => debug_unreachable!(),
        }
    }

    /// The address of the referent, if engaged.
    pub fn as_non_null(&self) -> Option<NonNull<T>> {
        self.ptr
    }

    /// Convert to a required reference, or [`Error::Empty`] if absent.
    pub fn required(self) -> Result<Required<'a, T, A>, Error> {
        match self.ptr {
            Some(ptr) => Ok(unsafe { Required::from_non_null(ptr) }),
            None => Err(Error::Empty),
        }
    }

    /// Whether this refers to the object `other`.
    pub fn refers_to<U: ?Sized>(&self, other: &U) -> bool {
        self.address() == address(other as *const U)
    }

    /// Make this reference absent.
    pub fn reset(&mut self) {
        self.ptr = None;
    }

    /// Take the referent out, leaving this reference absent.
    pub fn take(&mut self) -> Self {
        mem::replace(self, Optional::none())
    }

    /// Replace the referent, returning the old one.
    pub fn replace(&mut self, other: Self) -> Self {
        mem::replace(self, other)
    }

    /// Exchange referents with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr)
    }

    fn key(&self) -> Option<*const ()> {
        self.ptr.map(|p| address(p.as_ptr() as *const T))
    }

    /// The thin address compared and hashed; null when absent.
    fn address(&self) -> *const () {
        self.key().unwrap_or(ptr::null())
    }
}

impl<'a, T, A: Access> Optional<'a, T, A> {
    /// The address of the referent; null when absent.
    ///
    /// Only sized referents have a null address to stand for absence. For an
    /// unsized `T` (`dyn Trait`, slices) use [`as_non_null`](Self::as_non_null).
    pub fn as_ptr(&self) -> *const T {
        match self.ptr {
            Some(ptr) => ptr.as_ptr(),
            None => ptr::null(),
        }
    }
}

impl<'a, T: ?Sized> Optional<'a, T, Shared> {
    /// The referent, if engaged, for the whole of `'a`.
    pub fn into_option(self) -> Option<&'a T> {
        self.ptr.map(|ptr| unsafe { &*ptr.as_ptr() })
    }

    /// Bind to `r`.
    pub fn set(&mut self, r: &'a T) {
        *self = Optional::new(r);
    }

    /// Project an engaged reference to a part of the referent, or to a less
    /// specific view of it.
    pub fn map<U: ?Sized>(self, f: impl FnOnce(&'a T) -> &'a U) -> Optional<'a, U, Shared> {
        Optional::from(self.into_option().map(f))
    }

    /// Grant write access through this reference (`const_cast`).
    ///
    /// # Safety
    ///
    /// If engaged, the referent must be valid for exclusive access for all of
    /// `'a`, and no other reference to it may be used while the result is
    /// alive.
    pub unsafe fn cast_mut(self) -> Optional<'a, T, Unique> {
        Optional::from_non_null(self.ptr)
    }
}

impl<'a, T: ?Sized> Optional<'a, T, Unique> {
    /// The referent, mutably, if engaged.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.ptr.map(|ptr| unsafe { &mut *ptr.as_ptr() })
    }

    /// The referent, mutably, or [`Error::Empty`] if absent.
    pub fn value_mut(&mut self) -> Result<&mut T, Error> {
        self.get_mut().ok_or(Error::Empty)
    }

    /// The referent, mutably, without checking for absence.
    ///
    /// # Safety
    ///
    /// This reference must be engaged.
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        match self.ptr {
            Some(ptr) => &mut *ptr.as_ptr(),
            None => debug_unreachable!(),
        }
    }

    /// The referent, mutably, if engaged, for the whole of `'a`.
    pub fn into_option(self) -> Option<&'a mut T> {
        self.ptr.map(|ptr| unsafe { &mut *ptr.as_ptr() })
    }

    /// Bind to `r`.
    pub fn set(&mut self, r: &'a mut T) {
        *self = Optional::new_mut(r);
    }

    /// Borrow this reference for a shorter lifetime.
    pub fn reborrow(&mut self) -> Optional<'_, T, Unique> {
        unsafe { Optional::from_non_null(self.ptr) }
    }

    /// Give up write access.
    pub fn into_shared(self) -> Optional<'a, T, Shared> {
        unsafe { Optional::from_non_null(self.ptr) }
    }

    /// Project an engaged reference to a part of the referent, or to a less
    /// specific view of it.
    pub fn map<U: ?Sized>(
        self,
        f: impl FnOnce(&'a mut T) -> &'a mut U,
    ) -> Optional<'a, U, Unique> {
        Optional::from(self.into_option().map(f))
    }
}

/// Casts
impl<'a, T: ?Sized, A: Access> Optional<'a, T, A> {
    /// Reinterpret the referent as a `U` (`static_cast`).
    ///
    /// # Safety
    ///
    /// If engaged, the referent must actually be a valid `U`.
    pub unsafe fn cast<U>(self) -> Optional<'a, U, A> {
        Optional::from_non_null(self.ptr.map(NonNull::cast))
    }
}

impl<'a, T: ?Sized + Downcast, A: Access> Optional<'a, T, A> {
    /// Check the runtime type of the referent and convert to it
    /// (`dynamic_cast`).
    ///
    /// A mismatch gives the absent reference rather than an error.
    ///
    /// ```
    /// use {core::any::Any, indirect::Optional};
    ///
    /// let x = 5_u32;
    /// let any = Optional::new(&x).map(|x| x as &dyn Any);
    /// assert_eq!(any.downcast::<u32>().value(), Ok(&5));
    /// assert!(any.downcast::<i64>().is_none());
    /// ```
    pub fn downcast<U: Any>(self) -> Optional<'a, U, A> {
        if self.get().map_or(false, |value| value.is_type::<U>()) {
            unsafe { self.cast() }
        } else {
            Optional::none()
        }
    }
}

// ~~~ Standard traits ~~~ //

unsafe impl<'a, T: ?Sized + Sync> Send for Optional<'a, T, Shared> {}
unsafe impl<'a, T: ?Sized + Sync> Sync for Optional<'a, T, Shared> {}
unsafe impl<'a, T: ?Sized + Send> Send for Optional<'a, T, Unique> {}
unsafe impl<'a, T: ?Sized + Sync> Sync for Optional<'a, T, Unique> {}

impl<'a, T: ?Sized> Copy for Optional<'a, T, Shared> {}

impl<'a, T: ?Sized> Clone for Optional<'a, T, Shared> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: ?Sized, A: Access> Default for Optional<'a, T, A> {
    fn default() -> Self {
        Optional::none()
    }
}

impl<'a, T: ?Sized, A: Access> ops::Deref for Optional<'a, T, A> {
    type Target = T;

    /// # Panics
    ///
    /// Panics if this reference is absent.
    fn deref(&self) -> &T {
        match self.get() {
            Some(value) => value,
            None => panic!("dereferenced an absent optional reference"),
        }
    }
}

impl<'a, T: ?Sized> ops::DerefMut for Optional<'a, T, Unique> {
    /// # Panics
    ///
    /// Panics if this reference is absent.
    fn deref_mut(&mut self) -> &mut T {
        match self.get_mut() {
            Some(value) => value,
            None => panic!("dereferenced an absent optional reference"),
        }
    }
}

impl<'a, T: ?Sized> From<&'a T> for Optional<'a, T, Shared> {
    fn from(r: &'a T) -> Self {
        Optional::new(r)
    }
}

impl<'a, T: ?Sized> From<&'a mut T> for Optional<'a, T, Unique> {
    fn from(r: &'a mut T) -> Self {
        Optional::new_mut(r)
    }
}

impl<'a, T: ?Sized> From<Option<&'a T>> for Optional<'a, T, Shared> {
    fn from(r: Option<&'a T>) -> Self {
        unsafe { Optional::from_non_null(r.map(NonNull::from)) }
    }
}

impl<'a, T: ?Sized> From<Option<&'a mut T>> for Optional<'a, T, Unique> {
    fn from(r: Option<&'a mut T>) -> Self {
        unsafe { Optional::from_non_null(r.map(NonNull::from)) }
    }
}

impl<'a, T: ?Sized, A: Access> From<Required<'a, T, A>> for Optional<'a, T, A> {
    fn from(r: Required<'a, T, A>) -> Self {
        unsafe { Optional::from_non_null(Some(r.as_non_null())) }
    }
}

impl<'a, T: ?Sized> From<Optional<'a, T, Unique>> for Optional<'a, T, Shared> {
    fn from(o: Optional<'a, T, Unique>) -> Self {
        o.into_shared()
    }
}

impl<'a, T: ?Sized, A: Access> TryFrom<Optional<'a, T, A>> for Required<'a, T, A> {
    type Error = Error;

    fn try_from(o: Optional<'a, T, A>) -> Result<Self, Error> {
        o.required()
    }
}

impl<'a, T: ?Sized, A: Access> fmt::Debug for Optional<'a, T, A>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Optional").field(&self.get()).finish()
    }
}

impl<'a, T: ?Sized, A: Access> fmt::Pointer for Optional<'a, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&self.address(), f)
    }
}

impl<'a, T: ?Sized, A: Access> Eq for Optional<'a, T, A> {}

impl<'a, 'b, T: ?Sized, U: ?Sized, A: Access, B: Access> PartialEq<Optional<'b, U, B>>
    for Optional<'a, T, A>
{
    fn eq(&self, other: &Optional<'b, U, B>) -> bool {
        self.address() == other.address()
    }
}

impl<'a, 'b, T: ?Sized, U: ?Sized, A: Access, B: Access> PartialEq<Required<'b, U, B>>
    for Optional<'a, T, A>
{
    fn eq(&self, other: &Required<'b, U, B>) -> bool {
        self.address() == address(other.as_ptr())
    }
}

impl<'a, 'b, T: ?Sized, U: ?Sized, A: Access, B: Access> PartialEq<Optional<'b, U, B>>
    for Required<'a, T, A>
{
    fn eq(&self, other: &Optional<'b, U, B>) -> bool {
        address(self.as_ptr()) == other.address()
    }
}

// Option orders `None` first, which is where the absent reference belongs.
impl<'a, T: ?Sized, A: Access> Ord for Optional<'a, T, A> {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.key().cmp(&other.key())
    }
}

impl<'a, 'b, T: ?Sized, U: ?Sized, A: Access, B: Access> PartialOrd<Optional<'b, U, B>>
    for Optional<'a, T, A>
{
    fn partial_cmp(&self, other: &Optional<'b, U, B>) -> Option<cmp::Ordering> {
        self.key().partial_cmp(&other.key())
    }
}

impl<'a, 'b, T: ?Sized, U: ?Sized, A: Access, B: Access> PartialOrd<Required<'b, U, B>>
    for Optional<'a, T, A>
{
    fn partial_cmp(&self, other: &Required<'b, U, B>) -> Option<cmp::Ordering> {
        self.key().partial_cmp(&Some(address(other.as_ptr())))
    }
}

impl<'a, 'b, T: ?Sized, U: ?Sized, A: Access, B: Access> PartialOrd<Optional<'b, U, B>>
    for Required<'a, T, A>
{
    fn partial_cmp(&self, other: &Optional<'b, U, B>) -> Option<cmp::Ordering> {
        Some(address(self.as_ptr())).partial_cmp(&other.key())
    }
}

impl<'a, T: ?Sized, A: Access> Hash for Optional<'a, T, A> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.address().hash(state)
    }
}

// ~~~ Const propagation ~~~ //

impl<'a, T: ?Sized> Indirect for Optional<'a, T, Shared> {
    type Target = T;
    type Const<'s> = Optional<'a, T, Shared> where Self: 's;
    type Mut<'s> = Optional<'a, T, Shared> where Self: 's;

    fn to_const(&self) -> Self::Const<'_> {
        *self
    }

    fn to_mut(&mut self) -> Self::Mut<'_> {
        *self
    }
}

impl<'a, T: ?Sized> Indirect for Optional<'a, T, Unique> {
    type Target = T;
    type Const<'s> = Optional<'s, T, Shared> where Self: 's;
    type Mut<'s> = Optional<'s, T, Unique> where Self: 's;

    fn to_const(&self) -> Self::Const<'_> {
        Optional::from(self.get())
    }

    fn to_mut(&mut self) -> Self::Mut<'_> {
        self.reborrow()
    }
}
