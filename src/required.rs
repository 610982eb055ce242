use {
    crate::{
        access::{Access, Shared, Unique},
        address,
        traits::{Downcast, Indirect},
        Error, Optional,
    },
    core::{
        any::Any,
        cmp, fmt,
        hash::{self, Hash},
        marker::PhantomData,
        mem, ops,
        ptr::NonNull,
    },
};

/// A non-owning reference that always refers to a live object.
///
/// `Required` is what you reach for where you would otherwise store a raw
/// pointer that is never null. It is constructed from a borrow, so it can
/// never dangle past `'a` and never be null. Unlike a plain reference, it
/// compares, orders and hashes by the *address* of the referent rather than
/// its contents, which makes it usable as an identity key in containers.
///
/// The access marker `A` decides what it hands out: [`Shared`] wrappers are
/// `Copy` and read-only, [`Unique`] wrappers are move-only and read-write
/// (see [`Retained`](crate::Retained)).
#[repr(transparent)]
pub struct Required<'a, T: ?Sized, A: Access = Shared> {
    ptr: NonNull<T>,
    marker: PhantomData<(&'a mut T, A)>,
}

/// Constructors
impl<'a, T: ?Sized> Required<'a, T, Shared> {
    /// Wrap a shared borrow.
    pub fn new(r: &'a T) -> Self {
        unsafe { Required::from_non_null(NonNull::from(r)) }
    }

    /// Wrap a raw address, failing if it is null.
    ///
    /// # Safety
    ///
    /// If non-null, `ptr` must be valid for shared access for all of `'a`.
    pub unsafe fn from_ptr(ptr: *const T) -> Result<Self, Error> {
        match NonNull::new(ptr as *mut T) {
            Some(ptr) => Ok(Required::from_non_null(ptr)),
            None => Err(Error::Null),
        }
    }
}

impl<'a, T: ?Sized> Required<'a, T, Unique> {
    /// Wrap an exclusive borrow.
    pub fn new_mut(r: &'a mut T) -> Self {
        unsafe { Required::from_non_null(NonNull::from(r)) }
    }

    /// Wrap a raw address, failing if it is null.
    ///
    /// # Safety
    ///
    /// If non-null, `ptr` must be valid for exclusive access for all of `'a`.
    pub unsafe fn from_mut_ptr(ptr: *mut T) -> Result<Self, Error> {
        match NonNull::new(ptr) {
            Some(ptr) => Ok(Required::from_non_null(ptr)),
            None => Err(Error::Null),
        }
    }
}

impl<'a, T: ?Sized, A: Access> Required<'a, T, A> {
    /// Wrap a non-null address.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for the access `A` grants for all of `'a`.
    pub unsafe fn from_non_null(ptr: NonNull<T>) -> Self {
        Required {
            ptr,
            marker: PhantomData,
        }
    }
}

/// Access
impl<'a, T: ?Sized, A: Access> Required<'a, T, A> {
    /// The referent.
    pub fn get(&self) -> &T {
        unsafe { self.ptr.as_ref() }
    }

    /// The address of the referent. Never null.
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// The address of the referent.
    pub fn as_non_null(&self) -> NonNull<T> {
        self.ptr
    }

    /// Whether this refers to the object `other`.
    ///
    /// This is the address comparison `==` performs, for plain borrows.
    pub fn refers_to<U: ?Sized>(&self, other: &U) -> bool {
        address(self.as_ptr()) == address(other as *const U)
    }

    /// This reference as an (engaged) optional reference.
    pub fn optional(self) -> Optional<'a, T, A> {
        Optional::from(self)
    }

    /// Exchange referents with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr)
    }
}

impl<'a, T: ?Sized> Required<'a, T, Shared> {
    /// The referent, for the whole of `'a`.
    pub fn into_ref(self) -> &'a T {
        unsafe { self.ptr.as_ref() }
    }

    /// Rebind to a different object. Neither referent is touched.
    pub fn rebind(&mut self, r: &'a T) {
        *self = Required::new(r);
    }

    /// Project to a part of the referent, or to a less specific view of it.
    ///
    /// This is the equivalent of a derived-to-base conversion:
    ///
    /// ```
    /// use {core::fmt::Debug, indirect::Required};
    ///
    /// let x = 5;
    /// let r = Required::new(&x).map(|x| x as &dyn Debug);
    /// assert!(r.refers_to(&x));
    /// ```
    pub fn map<U: ?Sized>(self, f: impl FnOnce(&'a T) -> &'a U) -> Required<'a, U, Shared> {
        Required::new(f(self.into_ref()))
    }

    /// Grant write access through this reference (`const_cast`).
    ///
    /// # Safety
    ///
    /// The referent must be valid for exclusive access for all of `'a`, and
    /// no other reference to it may be used while the result is alive.
    pub unsafe fn cast_mut(self) -> Required<'a, T, Unique> {
        Required::from_non_null(self.ptr)
    }
}

impl<'a, T: ?Sized> Required<'a, T, Unique> {
    /// The referent, mutably.
    pub fn get_mut(&mut self) -> &mut T {
        unsafe { self.ptr.as_mut() }
    }

    /// The address of the referent, for writing. Never null.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// The referent, mutably, for the whole of `'a`.
    pub fn into_mut(mut self) -> &'a mut T {
        unsafe { self.ptr.as_mut() }
    }

    /// Rebind to a different object. Neither referent is touched.
    pub fn rebind(&mut self, r: &'a mut T) {
        *self = Required::new_mut(r);
    }

    /// Borrow this reference for a shorter lifetime.
    pub fn reborrow(&mut self) -> Required<'_, T, Unique> {
        unsafe { Required::from_non_null(self.ptr) }
    }

    /// Give up write access.
    pub fn into_shared(self) -> Required<'a, T, Shared> {
        unsafe { Required::from_non_null(self.ptr) }
    }

    /// Project to a part of the referent, or to a less specific view of it.
    pub fn map<U: ?Sized>(
        self,
        f: impl FnOnce(&'a mut T) -> &'a mut U,
    ) -> Required<'a, U, Unique> {
        Required::new_mut(f(self.into_mut()))
    }
}

/// Casts
impl<'a, T: ?Sized, A: Access> Required<'a, T, A> {
    /// Reinterpret the referent as a `U` (`static_cast`).
    ///
    /// # Safety
    ///
    /// The referent must actually be a valid `U`.
    pub unsafe fn cast<U>(self) -> Required<'a, U, A> {
        Required::from_non_null(self.ptr.cast())
    }
}

impl<'a, T: ?Sized + Downcast, A: Access> Required<'a, T, A> {
    /// Check the runtime type of the referent and convert to it
    /// (`dynamic_cast`).
    ///
    /// There is no absent state to fall back to, so a mismatch is an error.
    ///
    /// ```
    /// use {core::any::Any, indirect::{Error, Required}};
    ///
    /// let x = 5_u32;
    /// let any = Required::new(&x).map(|x| x as &dyn Any);
    /// assert_eq!(*any.downcast::<u32>().unwrap(), 5);
    /// assert_eq!(any.downcast::<i64>(), Err(Error::BadCast));
    /// ```
    pub fn downcast<U: Any>(self) -> Result<Required<'a, U, A>, Error> {
        if self.get().is_type::<U>() {
            Ok(unsafe { self.cast() })
        } else {
            Err(Error::BadCast)
        }
    }
}

// ~~~ Standard traits ~~~ //

unsafe impl<'a, T: ?Sized + Sync> Send for Required<'a, T, Shared> {}
unsafe impl<'a, T: ?Sized + Sync> Sync for Required<'a, T, Shared> {}
unsafe impl<'a, T: ?Sized + Send> Send for Required<'a, T, Unique> {}
unsafe impl<'a, T: ?Sized + Sync> Sync for Required<'a, T, Unique> {}

impl<'a, T: ?Sized> Copy for Required<'a, T, Shared> {}

impl<'a, T: ?Sized> Clone for Required<'a, T, Shared> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: ?Sized, A: Access> ops::Deref for Required<'a, T, A> {
    type Target = T;

    fn deref(&self) -> &T {
        self.get()
    }
}

impl<'a, T: ?Sized> ops::DerefMut for Required<'a, T, Unique> {
    fn deref_mut(&mut self) -> &mut T {
        self.get_mut()
    }
}

impl<'a, T: ?Sized, A: Access> AsRef<T> for Required<'a, T, A> {
    fn as_ref(&self) -> &T {
        self.get()
    }
}

impl<'a, T: ?Sized> AsMut<T> for Required<'a, T, Unique> {
    fn as_mut(&mut self) -> &mut T {
        self.get_mut()
    }
}

impl<'a, T: ?Sized> From<&'a T> for Required<'a, T, Shared> {
    fn from(r: &'a T) -> Self {
        Required::new(r)
    }
}

impl<'a, T: ?Sized> From<&'a mut T> for Required<'a, T, Unique> {
    fn from(r: &'a mut T) -> Self {
        Required::new_mut(r)
    }
}

impl<'a, T: ?Sized> From<Required<'a, T, Unique>> for Required<'a, T, Shared> {
    fn from(r: Required<'a, T, Unique>) -> Self {
        r.into_shared()
    }
}

impl<'a, T: ?Sized, A: Access> fmt::Debug for Required<'a, T, A>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Required").field(&self.get()).finish()
    }
}

impl<'a, T: ?Sized, A: Access> fmt::Pointer for Required<'a, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&self.as_ptr(), f)
    }
}

impl<'a, T: ?Sized, A: Access> Eq for Required<'a, T, A> {}

impl<'a, 'b, T: ?Sized, U: ?Sized, A: Access, B: Access> PartialEq<Required<'b, U, B>>
    for Required<'a, T, A>
{
    fn eq(&self, other: &Required<'b, U, B>) -> bool {
        address(self.as_ptr()) == address(other.as_ptr())
    }
}

impl<'a, T: ?Sized, A: Access> Ord for Required<'a, T, A> {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        address(self.as_ptr()).cmp(&address(other.as_ptr()))
    }
}

impl<'a, 'b, T: ?Sized, U: ?Sized, A: Access, B: Access> PartialOrd<Required<'b, U, B>>
    for Required<'a, T, A>
{
    fn partial_cmp(&self, other: &Required<'b, U, B>) -> Option<cmp::Ordering> {
        address(self.as_ptr()).partial_cmp(&address(other.as_ptr()))
    }
}

impl<'a, T: ?Sized, A: Access> Hash for Required<'a, T, A> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        address(self.as_ptr()).hash(state)
    }
}

// ~~~ Const propagation ~~~ //

impl<'a, T: ?Sized> Indirect for Required<'a, T, Shared> {
    type Target = T;
    type Const<'s> = Required<'a, T, Shared> where Self: 's;
    type Mut<'s> = Required<'a, T, Shared> where Self: 's;

    fn to_const(&self) -> Self::Const<'_> {
        *self
    }

    fn to_mut(&mut self) -> Self::Mut<'_> {
        *self
    }
}

impl<'a, T: ?Sized> Indirect for Required<'a, T, Unique> {
    type Target = T;
    type Const<'s> = Required<'s, T, Shared> where Self: 's;
    type Mut<'s> = Required<'s, T, Unique> where Self: 's;

    fn to_const(&self) -> Self::Const<'_> {
        Required::new(self.get())
    }

    fn to_mut(&mut self) -> Self::Mut<'_> {
        self.reborrow()
    }
}
