use {
    indirect::{required, retained, Error, Optional, Required, Retained},
    std::{
        any::Any,
        collections::{BTreeSet, HashSet},
        fmt::Debug,
        ptr::{self, NonNull},
    },
};

#[test]
fn deref_yields_the_referent() {
    let a = 1;
    let r = Required::new(&a);
    assert!(ptr::eq(&*r, &a));
    assert_eq!(*r, 1);
}

#[test]
fn rebinding() {
    let a = 1;
    let b = 2;
    let mut r: Required<'_, i32> = required(&a);
    assert!(r.refers_to(&a));
    r.rebind(&b);
    assert!(r.refers_to(&b));
    assert!(!r.refers_to(&a));
    assert_eq!((a, b), (1, 2));
}

#[test]
fn equality_is_identity() {
    let a = 1;
    let b = 1;
    assert_eq!(Required::new(&a), Required::new(&a));
    assert_ne!(Required::new(&a), Required::new(&b));

    // different views of the same object are still the same object
    let debug = Required::new(&a).map(|a| a as &dyn Debug);
    assert_eq!(debug, Required::new(&a));
    assert!(debug.refers_to(&a));
}

#[test]
fn ordering_follows_addresses() {
    let pair = [1, 2];
    let lo = Required::new(&pair[0]);
    let hi = Required::new(&pair[1]);
    assert!(lo < hi);
    assert!(hi > lo);
    assert_eq!(lo.cmp(&lo), std::cmp::Ordering::Equal);
}

#[test]
fn usable_as_set_keys() {
    let values = [1, 1, 1];
    let mut hashed = HashSet::new();
    let mut ordered = BTreeSet::new();
    for v in &values {
        hashed.insert(Required::new(v));
        ordered.insert(Required::new(v));
    }
    // equal contents, distinct objects
    assert_eq!(hashed.len(), 3);
    assert_eq!(ordered.len(), 3);
    assert!(hashed.contains(&Required::new(&values[1])));
}

#[test]
fn address_round_trip() {
    let a = 7;
    let r = Required::new(&a);
    let back = unsafe { Required::from_ptr(r.as_ptr()) }.unwrap();
    assert_eq!(back, r);
}

#[test]
fn null_is_rejected() {
    let r = unsafe { Required::<i32>::from_ptr(ptr::null()) };
    assert_eq!(r, Err(Error::Null));
    let r = unsafe { Retained::<i32>::from_mut_ptr(ptr::null_mut()) };
    assert_eq!(r.err(), Some(Error::Null));
}

#[test]
fn retained_writes_through() {
    let mut a = 1;
    {
        let mut r = retained(&mut a);
        *r += 1;
        *r.reborrow() *= 10;
        assert_eq!(*r, 20);
    }
    assert_eq!(a, 20);
}

#[test]
fn retained_into_shared() {
    let mut a = String::from("abc");
    let r = Retained::new_mut(&mut a).map(|s| s.as_mut_str());
    let shared: Required<'_, str> = r.into();
    let copy = shared;
    assert_eq!(&*shared, "abc");
    assert_eq!(copy, shared);
}

#[test]
fn swap_exchanges_referents() {
    let a = 1;
    let b = 2;
    let mut x = Required::new(&a);
    let mut y = Required::new(&b);
    x.swap(&mut y);
    assert!(x.refers_to(&b));
    assert!(y.refers_to(&a));
}

trait Shape: Any {
    fn as_any(&self) -> &dyn Any;
}

#[derive(Debug)]
struct Circle;
#[derive(Debug)]
struct Square;

impl Shape for Circle {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Shape for Square {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn failed_downcast_is_an_error() {
    let square = Square;
    let shape: Required<'_, dyn Shape> = Required::new(&square).map(|s| s as &dyn Shape);
    let any = shape.map(Shape::as_any);

    assert_eq!(any.downcast::<Circle>().err(), Some(Error::BadCast));
    let back = any.downcast::<Square>().unwrap();
    assert!(back.refers_to(&square));
}

#[test]
fn unchecked_cast() {
    let square = Square;
    let any = Required::new(&square).map(|s| s as &dyn Any);
    let back: Required<'_, Square> = unsafe { any.cast() };
    assert_eq!(back, any);
}

#[test]
fn const_cast_grants_write_access() {
    let mut a = 1;
    let shared = Retained::new_mut(&mut a).into_shared();
    let mut unique = unsafe { shared.cast_mut() };
    *unique += 1;
    assert!(unique.refers_to(&*shared));
    drop(unique);
    assert_eq!(a, 2);
}

#[test]
fn from_non_null() {
    let a = 1;
    let r: Required<'_, i32> = unsafe { Required::from_non_null(NonNull::from(&a)) };
    assert!(r.refers_to(&a));

    let mut b = 2;
    let mut w: Retained<'_, i32> = unsafe { Required::from_non_null(NonNull::from(&mut b)) };
    *w += 1;
    drop(w);
    assert_eq!(b, 3);
}

#[test]
fn writes_through_mut_ptr() {
    let mut a = 1;
    let mut r = retained(&mut a);
    let p = r.as_mut_ptr();
    unsafe { *p = 3 };
    assert_eq!(*r, 3);
    assert!(ptr::eq(p, r.as_ptr()));
}

#[test]
fn becomes_an_engaged_optional() {
    let a = 1;
    let r = Required::new(&a);
    let o: Optional<'_, i32> = r.into();
    assert!(o.has_value());
    assert_eq!(o, r);
    assert_eq!(r, o);
}

#[test]
fn debug_and_pointer_formatting() {
    let a = 5;
    let r = Required::new(&a);
    assert_eq!(format!("{:?}", r), "Required(5)");
    assert_eq!(format!("{:p}", r), format!("{:p}", &a));
}

#[test]
fn is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Required<'_, i32>>();
    assert_send_sync::<Retained<'_, i32>>();
}
