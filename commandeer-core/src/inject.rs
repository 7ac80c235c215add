//! # Injection-point metadata
//!
//! An injection point is a member of a type designated to receive a value
//! resolved from a DI container. The metadata is declarative only: nothing in
//! this module resolves or assigns anything.
//!
//! # Keys
//!
//! A marker with an identifier is resolved by that identifier. A marker
//! without one is resolved by the declared type of the member. See
//! [`InjectionPoint::key`].
//!
//! # Declaring points
//!
//! With the `macros` feature of the facade crate, `#[derive(Injectable)]`
//! produces the metadata for named struct fields:
//!
//! ```rust,ignore
//! #[derive(Injectable)]
//! struct Greeter {
//!     #[inject]
//!     clock: Arc<dyn Clock>,
//!     #[inject("greeting")]
//!     greeting: String,
//!     count: usize,
//! }
//! ```
//!
//! Property (setter) members are described manually with
//! [`InjectionPoint::property`].

use crate::{error::InjectError, type_info::TypeInfo};
use std::{any::Any, borrow::Cow, fmt};

/// The injection marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inject {
    identifier: Option<Cow<'static, str>>,
}

impl Inject {
    /// A marker resolved by the member's declared type.
    pub const fn new() -> Self {
        Self { identifier: None }
    }

    /// A marker resolved by `identifier`.
    pub fn with_identifier(identifier: impl Into<Cow<'static, str>>) -> Self {
        Self {
            identifier: Some(identifier.into()),
        }
    }

    /// The identifier of the binding to inject, if any.
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }
}

/// The kind of member a marker is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// A struct field.
    Field,
    /// A setter-backed property.
    Property,
}

/// The key an injector resolves a member by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InjectionKey<'a> {
    /// A binding registered under an identifier.
    Identifier(&'a str),
    /// A binding keyed by the member's declared type.
    Type(TypeInfo),
}

impl fmt::Display for InjectionKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InjectionKey::Identifier(id) => write!(f, "identifier \"{id}\""),
            InjectionKey::Type(ty) => write!(f, "type {ty}"),
        }
    }
}

/// Description of one member carrying an injection marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionPoint {
    member: &'static str,
    kind: MemberKind,
    declared: TypeInfo,
    marker: Inject,
}

impl InjectionPoint {
    /// Describe a field member.
    pub fn field(member: &'static str, declared: TypeInfo, marker: Inject) -> Self {
        Self {
            member,
            kind: MemberKind::Field,
            declared,
            marker,
        }
    }

    /// Describe a property member.
    pub fn property(member: &'static str, declared: TypeInfo, marker: Inject) -> Self {
        Self {
            member,
            kind: MemberKind::Property,
            declared,
            marker,
        }
    }

    /// The member name.
    pub fn member(&self) -> &'static str {
        self.member
    }

    /// Whether the member is a field or a property.
    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    /// The declared type of the member.
    pub fn declared(&self) -> TypeInfo {
        self.declared
    }

    /// The marker attached to the member.
    pub fn marker(&self) -> &Inject {
        &self.marker
    }

    /// The key an injector must resolve this member by.
    pub fn key(&self) -> InjectionKey<'_> {
        match self.marker.identifier() {
            Some(id) => InjectionKey::Identifier(id),
            None => InjectionKey::Type(self.declared),
        }
    }
}

/// A type exposing injection points.
///
/// Usually implemented through `#[derive(Injectable)]`.
pub trait Injectable: 'static {
    /// The injection points of this type, own members first, then members
    /// inherited from an embedded base that this type does not redeclare.
    fn injection_points() -> Vec<InjectionPoint>
    where
        Self: Sized;

    /// Assign `value` into the member named `member`.
    fn assign(&mut self, member: &str, value: Box<dyn Any + Send>) -> Result<(), InjectError>;
}

/// The external injector's lookup contract.
pub trait Resolver {
    /// Resolve a value for `key`, or `None` when nothing is bound to it.
    fn resolve(&self, key: &InjectionKey<'_>) -> Option<Box<dyn Any + Send>>;
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn resolve(&self, key: &InjectionKey<'_>) -> Option<Box<dyn Any + Send>> {
        (**self).resolve(key)
    }
}

/// Merge a base type's points into a derived type's own points.
///
/// Base members whose name the derived type redeclares are dropped.
pub fn inherit_points(own: Vec<InjectionPoint>, base: Vec<InjectionPoint>) -> Vec<InjectionPoint> {
    let mut points = own;
    let inherited: Vec<_> = base
        .into_iter()
        .filter(|b| !points.iter().any(|p| p.member == b.member))
        .collect();
    points.extend(inherited);
    points
}

/// Downcast `value` to the declared type of `member`.
///
/// Used by the code `#[derive(Injectable)]` generates.
pub fn downcast_member<T: Any>(member: &str, value: Box<dyn Any + Send>) -> Result<T, InjectError> {
    value
        .downcast::<T>()
        .map(|boxed| *boxed)
        .map_err(|_| InjectError::TypeMismatch {
            member: member.to_string(),
            expected: TypeInfo::of::<T>(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Clock;

    #[test]
    fn test_key_without_identifier_uses_declared_type() {
        let point = InjectionPoint::field("clock", TypeInfo::of::<Clock>(), Inject::new());
        assert_eq!(point.key(), InjectionKey::Type(TypeInfo::of::<Clock>()));
        assert_eq!(point.kind(), MemberKind::Field);
    }

    #[test]
    fn test_key_with_identifier() {
        let point = InjectionPoint::property(
            "greeting",
            TypeInfo::of::<String>(),
            Inject::with_identifier("greeting.en"),
        );
        assert_eq!(point.key(), InjectionKey::Identifier("greeting.en"));
        assert_eq!(point.kind(), MemberKind::Property);
    }

    #[test]
    fn test_inherit_skips_redeclared_members() {
        let own = vec![InjectionPoint::field(
            "clock",
            TypeInfo::of::<Clock>(),
            Inject::with_identifier("utc"),
        )];
        let base = vec![
            InjectionPoint::field("clock", TypeInfo::of::<Clock>(), Inject::new()),
            InjectionPoint::field("name", TypeInfo::of::<String>(), Inject::new()),
        ];

        let merged = inherit_points(own, base);
        let members: Vec<_> = merged.iter().map(InjectionPoint::member).collect();
        assert_eq!(members, ["clock", "name"]);
        assert_eq!(merged[0].marker().identifier(), Some("utc"));
    }

    #[test]
    fn test_downcast_member_mismatch() {
        let err = downcast_member::<u32>("count", Box::new("nope")).unwrap_err();
        assert_eq!(
            err,
            InjectError::TypeMismatch {
                member: "count".into(),
                expected: TypeInfo::of::<u32>(),
            }
        );
        assert_eq!(downcast_member::<u32>("count", Box::new(7u32)), Ok(7));
    }
}
