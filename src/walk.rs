//! Visit every string reachable from a value.
//!
//! Containers recurse into their elements; scalars other than strings are
//! skipped. Structs opt in with [`walk_struct!`], listing the fields to
//! visit in order.

use std::collections::BTreeMap;

pub trait Walk {
    fn walk(&self, f: &mut dyn FnMut(&str));
}

/// Calls `f` once for each string inside `x`, depth first.
pub fn walk<T: Walk + ?Sized>(x: &T, mut f: impl FnMut(&str)) {
    x.walk(&mut f);
}

/// Implements [`Walk`] for a struct by walking the listed fields in order.
///
/// ```
/// use idiom_drills::walk::{walk, Walk};
/// use idiom_drills::walk_struct;
///
/// struct Profile {
///     age: u32,
///     city: String,
/// }
/// walk_struct!(Profile { age, city });
///
/// let mut got = Vec::new();
/// walk(&Profile { age: 33, city: "London".into() }, |s| got.push(s.to_string()));
/// assert_eq!(got, ["London"]);
/// ```
#[macro_export]
macro_rules! walk_struct {
    ($name:ident { $($field:ident),* $(,)? }) => {
        impl $crate::walk::Walk for $name {
            #[allow(unused_variables)]
            fn walk(&self, f: &mut dyn FnMut(&str)) {
                $( $crate::walk::Walk::walk(&self.$field, f); )*
            }
        }
    };
}

impl Walk for str {
    fn walk(&self, f: &mut dyn FnMut(&str)) {
        f(self)
    }
}

impl Walk for String {
    fn walk(&self, f: &mut dyn FnMut(&str)) {
        f(self)
    }
}

macro_rules! skip_scalars {
    ($($ty:ty),*) => {
        $(
            impl Walk for $ty {
                fn walk(&self, _f: &mut dyn FnMut(&str)) {}
            }
        )*
    };
}

skip_scalars!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T: Walk + ?Sized> Walk for &T {
    fn walk(&self, f: &mut dyn FnMut(&str)) {
        (**self).walk(f)
    }
}

impl<T: Walk + ?Sized> Walk for Box<T> {
    fn walk(&self, f: &mut dyn FnMut(&str)) {
        (**self).walk(f)
    }
}

impl<T: Walk> Walk for Option<T> {
    fn walk(&self, f: &mut dyn FnMut(&str)) {
        if let Some(inner) = self {
            inner.walk(f);
        }
    }
}

impl<T: Walk> Walk for [T] {
    fn walk(&self, f: &mut dyn FnMut(&str)) {
        for item in self {
            item.walk(f);
        }
    }
}

impl<T: Walk, const N: usize> Walk for [T; N] {
    fn walk(&self, f: &mut dyn FnMut(&str)) {
        self.as_slice().walk(f)
    }
}

impl<T: Walk> Walk for Vec<T> {
    fn walk(&self, f: &mut dyn FnMut(&str)) {
        self.as_slice().walk(f)
    }
}

// Values only, in key order.
impl<K, V: Walk> Walk for BTreeMap<K, V> {
    fn walk(&self, f: &mut dyn FnMut(&str)) {
        for value in self.values() {
            value.walk(f);
        }
    }
}

impl<A: Walk, B: Walk> Walk for (A, B) {
    fn walk(&self, f: &mut dyn FnMut(&str)) {
        self.0.walk(f);
        self.1.walk(f);
    }
}

impl<A: Walk, B: Walk, C: Walk> Walk for (A, B, C) {
    fn walk(&self, f: &mut dyn FnMut(&str)) {
        self.0.walk(f);
        self.1.walk(f);
        self.2.walk(f);
    }
}
