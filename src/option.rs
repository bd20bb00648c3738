//! Null-safe optional container.
//!
//! [`FOption`] is the return type of every pull on an [`FStream`](crate::FStream)
//! and a general replacement for nullable values. A present value is wrapped in
//! [`FOption::Present`]; absence is the single unit variant [`FOption::Absent`],
//! so there is exactly one empty value and it carries no data.
//!
//! # Examples
//!
//! ```rust
//! use fstream::FOption;
//!
//! let name = FOption::of("ferris");
//! assert!(name.is_present());
//! assert_eq!(name.map(str::len).get_or(0), 6);
//!
//! let missing: FOption<&str> = FOption::of_nullable(None);
//! assert_eq!(missing, FOption::empty());
//! ```

use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    fmt,
    hash::{Hash, Hasher},
    rc::Rc,
    sync::Arc,
};

use crate::error::{Error, Result};

/// A value that is either present or absent.
///
/// Two containers are equal when both are absent or both hold equal values.
/// An absent container hashes as the constant `0`; a present one hashes as its
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FOption<T> {
    /// A value is present
    Present(T),
    /// No value
    #[default]
    Absent,
}

impl<T> FOption<T> {
    /// Wrap a value.
    ///
    /// ```rust
    /// use fstream::FOption;
    ///
    /// assert_eq!(FOption::of(3).get(), Ok(3));
    /// ```
    #[inline]
    pub const fn of(value: T) -> Self {
        FOption::Present(value)
    }

    /// Wrap a value that may be missing. `None` always yields the empty container.
    ///
    /// ```rust
    /// use fstream::FOption;
    ///
    /// assert!(FOption::of_nullable(Some(1)).is_present());
    /// assert_eq!(FOption::<i32>::of_nullable(None), FOption::empty());
    /// ```
    #[inline]
    pub fn of_nullable(value: Option<T>) -> Self {
        match value {
            Some(v) => FOption::Present(v),
            None => FOption::Absent,
        }
    }

    /// The empty container.
    #[inline]
    pub const fn empty() -> Self {
        FOption::Absent
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, FOption::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, FOption::Absent)
    }

    /// Returns the value, or [`Error::ElementMissing`] when absent.
    ///
    /// ```rust
    /// use fstream::{Error, FOption};
    ///
    /// assert_eq!(FOption::of(7).get(), Ok(7));
    /// assert_eq!(FOption::<i32>::empty().get(), Err(Error::ElementMissing));
    /// ```
    #[inline]
    pub fn get(self) -> Result<T> {
        match self {
            FOption::Present(v) => Ok(v),
            FOption::Absent => Err(Error::ElementMissing),
        }
    }

    /// Returns the value as an [`Option`], without any presence check.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            FOption::Present(v) => Some(v),
            FOption::Absent => None,
        }
    }

    /// Returns the value or `default` when absent.
    #[inline]
    pub fn get_or(self, default: T) -> T {
        match self {
            FOption::Present(v) => v,
            FOption::Absent => default,
        }
    }

    /// Returns the value or computes one from `supplier`.
    ///
    /// `supplier` is only invoked when the container is absent.
    ///
    /// ```rust
    /// use fstream::FOption;
    ///
    /// let v = FOption::of(1).get_or_else(|| unreachable!());
    /// assert_eq!(v, 1);
    /// assert_eq!(FOption::empty().get_or_else(|| 2), 2);
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            FOption::Present(v) => v,
            FOption::Absent => supplier(),
        }
    }

    /// Returns the value, or the error produced by `thrower` when absent.
    ///
    /// ```rust
    /// use fstream::FOption;
    ///
    /// let missing: FOption<u32> = FOption::empty();
    /// assert_eq!(missing.get_or_else_throw(|| "no port"), Err("no port"));
    /// ```
    #[inline]
    pub fn get_or_else_throw<E, F>(self, thrower: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            FOption::Present(v) => Ok(v),
            FOption::Absent => Err(thrower()),
        }
    }

    /// Run `effect` with the value if present, then return `self`.
    #[inline]
    pub fn if_present<F>(self, effect: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let FOption::Present(v) = &self {
            effect(v);
        }
        self
    }

    /// Run `action`, then return `self`.
    ///
    /// The action runs whether or not a value is present.
    ///
    /// ```rust
    /// use fstream::FOption;
    ///
    /// let mut runs = 0;
    /// let _ = FOption::of(1).if_absent(|| runs += 1);
    /// let _ = FOption::<i32>::empty().if_absent(|| runs += 1);
    /// assert_eq!(runs, 2);
    /// ```
    #[inline]
    pub fn if_absent<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        action();
        self
    }

    /// Keep the value only if `pred` holds for it.
    #[inline]
    pub fn filter<P>(self, pred: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            FOption::Present(v) if pred(&v) => FOption::Present(v),
            FOption::Present(_) => FOption::Absent,
            FOption::Absent => FOption::Absent,
        }
    }

    /// Returns `true` if a value is present and `pred` holds for it.
    #[inline]
    pub fn test<P>(&self, pred: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        matches!(self, FOption::Present(v) if pred(v))
    }

    /// Transform the value if present.
    #[inline]
    pub fn map<U, F>(self, mapper: F) -> FOption<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            FOption::Present(v) => FOption::Present(mapper(v)),
            FOption::Absent => FOption::Absent,
        }
    }

    /// Converts from `&FOption<T>` to `FOption<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> FOption<&T> {
        match self {
            FOption::Present(v) => FOption::Present(v),
            FOption::Absent => FOption::Absent,
        }
    }

    /// Converts from `&mut FOption<T>` to `FOption<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> FOption<&mut T> {
        match self {
            FOption::Present(v) => FOption::Present(v),
            FOption::Absent => FOption::Absent,
        }
    }
}

impl<T: Hash> Hash for FOption<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            FOption::Present(v) => v.hash(state),
            FOption::Absent => 0u64.hash(state),
        }
    }
}

impl<T: fmt::Display> fmt::Display for FOption<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FOption::Present(v) => write!(f, "FOption({v})"),
            FOption::Absent => write!(f, "FOption.empty"),
        }
    }
}

impl<T> From<Option<T>> for FOption<T> {
    fn from(value: Option<T>) -> Self {
        FOption::of_nullable(value)
    }
}

impl<T> From<FOption<T>> for Option<T> {
    fn from(value: FOption<T>) -> Self {
        value.into_option()
    }
}

/// Unwraps nested [`FOption`] layers down to a plain value.
///
/// [`FStream::flat_map`](crate::FStream::flat_map) uses this to peel every
/// `FOption` wrapper off a pulled element before mapping it. A nested container
/// flattens to its innermost value, or to `Absent` as soon as any layer is
/// absent. Every other type is a leaf and flattens to `Present(self)`.
///
/// ```rust
/// use fstream::{FOption, Flatten};
///
/// let nested = FOption::of(FOption::of(FOption::of(5)));
/// assert_eq!(nested.flatten(), FOption::of(5));
///
/// let hole = FOption::of(FOption::<i32>::empty());
/// assert_eq!(hole.flatten(), FOption::empty());
/// ```
///
/// Implement it for your own types with [`impl_flatten_leaf!`](crate::impl_flatten_leaf).
pub trait Flatten {
    /// The innermost non-`FOption` type
    type Leaf;

    /// Remove every `FOption` layer.
    fn flatten(self) -> FOption<Self::Leaf>;
}

impl<T: Flatten> Flatten for FOption<T> {
    type Leaf = T::Leaf;

    fn flatten(self) -> FOption<Self::Leaf> {
        match self {
            FOption::Present(inner) => inner.flatten(),
            FOption::Absent => FOption::Absent,
        }
    }
}

/// Mark types as [`Flatten`] leaves.
///
/// ```rust
/// use fstream::{FOption, Flatten, impl_flatten_leaf};
///
/// #[derive(Debug, PartialEq)]
/// struct Celsius(f64);
/// impl_flatten_leaf!(Celsius);
///
/// assert_eq!(FOption::of(Celsius(21.5)).flatten(), FOption::of(Celsius(21.5)));
/// ```
#[macro_export]
macro_rules! impl_flatten_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Flatten for $ty {
                type Leaf = $ty;

                fn flatten(self) -> $crate::FOption<Self::Leaf> {
                    $crate::FOption::Present(self)
                }
            }
        )*
    };
}

impl_flatten_leaf!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    String,
);

macro_rules! generic_leaf {
    ($([$($g:ident),+] $ty:ty;)*) => {
        $(
            impl<$($g),+> Flatten for $ty {
                type Leaf = $ty;

                fn flatten(self) -> FOption<Self::Leaf> {
                    FOption::Present(self)
                }
            }
        )*
    };
}

generic_leaf! {
    [T] Option<T>;
    [T] Vec<T>;
    [T] VecDeque<T>;
    [T, S] HashSet<T, S>;
    [K, V, S] HashMap<K, V, S>;
    [T] BTreeSet<T>;
    [K, V] BTreeMap<K, V>;
    [A, B] (A, B);
    [A, B, C] (A, B, C);
}

impl<'a, T: ?Sized> Flatten for &'a T {
    type Leaf = &'a T;

    fn flatten(self) -> FOption<Self::Leaf> {
        FOption::Present(self)
    }
}

impl<T: ?Sized> Flatten for Box<T> {
    type Leaf = Box<T>;

    fn flatten(self) -> FOption<Self::Leaf> {
        FOption::Present(self)
    }
}

impl<T: ?Sized> Flatten for Rc<T> {
    type Leaf = Rc<T>;

    fn flatten(self) -> FOption<Self::Leaf> {
        FOption::Present(self)
    }
}

impl<T: ?Sized> Flatten for Arc<T> {
    type Leaf = Arc<T>;

    fn flatten(self) -> FOption<Self::Leaf> {
        FOption::Present(self)
    }
}
