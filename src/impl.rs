use {crate::traits::Indirect, core::ptr::NonNull};

// ~~~ References ~~~ //

impl<'a, T: ?Sized> Indirect for &'a T {
    type Target = T;
    type Const<'s> = &'a T where Self: 's;
    type Mut<'s> = &'a T where Self: 's;

    fn to_const(&self) -> &'a T {
        *self
    }

    fn to_mut(&mut self) -> &'a T {
        *self
    }
}

impl<'a, T: ?Sized> Indirect for &'a mut T {
    type Target = T;
    type Const<'s> = &'s T where Self: 's;
    type Mut<'s> = &'s mut T where Self: 's;

    fn to_const(&self) -> &T {
        self
    }

    fn to_mut(&mut self) -> &mut T {
        self
    }
}

// ~~~ Raw pointers ~~~ //

impl<T: ?Sized> Indirect for *const T {
    type Target = T;
    type Const<'s> = *const T where Self: 's;
    type Mut<'s> = *const T where Self: 's;

    fn to_const(&self) -> *const T {
        *self
    }

    fn to_mut(&mut self) -> *const T {
        *self
    }
}

impl<T: ?Sized> Indirect for *mut T {
    type Target = T;
    type Const<'s> = *const T where Self: 's;
    type Mut<'s> = *mut T where Self: 's;

    fn to_const(&self) -> *const T {
        *self
    }

    fn to_mut(&mut self) -> *mut T {
        *self
    }
}

impl<T: ?Sized> Indirect for NonNull<T> {
    type Target = T;
    type Const<'s> = *const T where Self: 's;
    type Mut<'s> = NonNull<T> where Self: 's;

    fn to_const(&self) -> *const T {
        self.as_ptr()
    }

    fn to_mut(&mut self) -> NonNull<T> {
        *self
    }
}
