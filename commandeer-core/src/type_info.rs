//! Opaque type references.
//!
//! A [`TypeInfo`] identifies a Rust type by its [`TypeId`] and carries the
//! display data (namespace and simple name) used for diagnostics and for
//! namespace-based filtering. Two `TypeInfo` values are equal when they refer
//! to the same type, regardless of how their display data was obtained.

use std::{
    any::{TypeId, type_name},
    fmt,
    hash::{Hash, Hasher},
};

/// Identity and display data of a type.
#[derive(Clone, Copy)]
pub struct TypeInfo {
    id: TypeId,
    namespace: Option<&'static str>,
    name: &'static str,
}

impl TypeInfo {
    /// Describe `T` using [`std::any::type_name`].
    ///
    /// The namespace is the path before the last `::` that is not part of a
    /// generic argument list, so `alloc::vec::Vec<core::option::Option<u8>>`
    /// yields the namespace `alloc::vec` and the name `Vec<core::option::Option<u8>>`.
    /// Tuples, references, pointers, arrays, slices, trait objects and function
    /// pointers have no namespace.
    pub fn of<T: ?Sized + 'static>() -> Self {
        let (namespace, name) = split_type_path(type_name::<T>());
        Self {
            id: TypeId::of::<T>(),
            namespace,
            name,
        }
    }

    /// Describe `T` with an explicit module path and simple name.
    ///
    /// This is what the derive macros emit, passing `module_path!()` and the
    /// identifier of the item. An empty module path means "no namespace".
    pub fn named<T: ?Sized + 'static>(module_path: &'static str, name: &'static str) -> Self {
        Self {
            id: TypeId::of::<T>(),
            namespace: (!module_path.is_empty()).then_some(module_path),
            name,
        }
    }

    /// The [`TypeId`] this reference stands for.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The namespace (module path) of the type, if it has one.
    pub fn namespace(&self) -> Option<&'static str> {
        self.namespace
    }

    /// The simple name of the type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this reference describes `T`.
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

/// Type-name prefixes of compound types, which have no namespace of their own.
const COMPOUND_PREFIXES: &[&str] = &[
    "(", "[", "&", "*", "dyn ", "fn(", "unsafe ", "extern ", "impl ",
];

fn split_type_path(path: &'static str) -> (Option<&'static str>, &'static str) {
    if COMPOUND_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        return (None, path);
    }
    let head_end = path.find('<').unwrap_or(path.len());
    match path[..head_end].rfind("::") {
        Some(pos) => (Some(&path[..pos]), &path[pos + 2..]),
        None => (None, path),
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl Hash for TypeInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.namespace {
            Some(ns) => write!(f, "{}::{}", ns, self.name),
            None => f.write_str(self.name),
        }
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeInfo").field(&format_args!("{self}")).finish()
    }
}
