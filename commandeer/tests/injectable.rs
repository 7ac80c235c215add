#![cfg(feature = "macros")]

use commandeer::{
    InjectError, Injectable, InjectionKey, InjectionPoint, MemberKind, TypeInfo, inject_members,
    testing::{FakeResolver, RecordedKey},
};
use std::sync::Arc;

// ============================================================================
// Test Types
// ============================================================================

trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

struct FixedClock(u64);

impl Clock for FixedClock {
    fn now(&self) -> u64 {
        self.0
    }
}

#[derive(Injectable)]
struct Service {
    #[inject]
    clock: Arc<dyn Clock>,
    #[inject("service.name")]
    name: String,
    #[inject(id = "service.retries")]
    retries: u32,
    calls: usize,
}

impl Default for Service {
    fn default() -> Self {
        Self {
            clock: Arc::new(FixedClock(0)),
            name: String::new(),
            retries: 0,
            calls: 0,
        }
    }
}

#[derive(Injectable, Default)]
struct Derived {
    #[inject(base)]
    base: Service,
    #[inject("derived.name")]
    name: String,
    #[inject]
    r#type: u8,
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_derive_lists_marked_fields_only() {
    let points = Service::injection_points();
    let members: Vec<_> = points.iter().map(InjectionPoint::member).collect();

    assert_eq!(members, ["clock", "name", "retries"]);
    assert!(points.iter().all(|p| p.kind() == MemberKind::Field));
}

#[test]
fn test_marker_keys() {
    let points = Service::injection_points();

    assert_eq!(
        points[0].key(),
        InjectionKey::Type(TypeInfo::of::<Arc<dyn Clock>>())
    );
    assert_eq!(points[1].key(), InjectionKey::Identifier("service.name"));
    assert_eq!(points[2].key(), InjectionKey::Identifier("service.retries"));
    assert_eq!(points[0].marker().identifier(), None);
}

#[test]
fn test_untagged_marker_resolves_by_declared_type() {
    let resolver = FakeResolver::new()
        .bind_type(|| Arc::new(FixedClock(42)) as Arc<dyn Clock>)
        .bind_identifier("service.name", || String::from("billing"))
        .bind_identifier("service.retries", || 3u32);
    let mut service = Service::default();

    let assigned = inject_members(&mut service, &resolver).unwrap();

    assert_eq!(assigned, 3);
    assert_eq!(service.clock.now(), 42);
    assert_eq!(service.name, "billing");
    assert_eq!(service.retries, 3);
    assert_eq!(service.calls, 0);
    assert_eq!(
        resolver.keys(),
        [
            RecordedKey::Type(TypeInfo::of::<Arc<dyn Clock>>()),
            RecordedKey::Identifier("service.name".into()),
            RecordedKey::Identifier("service.retries".into()),
        ]
    );
}

#[test]
fn test_inherited_points_unless_redeclared() {
    let points = Derived::injection_points();
    let members: Vec<_> = points.iter().map(InjectionPoint::member).collect();

    // `name` is redeclared by Derived, so Service's `name` is not inherited.
    assert_eq!(members, ["name", "type", "clock", "retries"]);
    assert_eq!(points[0].key(), InjectionKey::Identifier("derived.name"));
}

#[test]
fn test_inherited_member_assigned_into_base() {
    let resolver = FakeResolver::new()
        .bind_type(|| Arc::new(FixedClock(7)) as Arc<dyn Clock>)
        .bind_type(|| 9u8)
        .bind_identifier("derived.name", || String::from("derived"))
        .bind_identifier("service.retries", || 5u32);
    let mut derived = Derived::default();

    inject_members(&mut derived, &resolver).unwrap();

    assert_eq!(derived.name, "derived");
    assert_eq!(derived.r#type, 9);
    assert_eq!(derived.base.clock.now(), 7);
    assert_eq!(derived.base.retries, 5);
    assert_eq!(derived.base.name, "");
}

#[test]
fn test_assign_unknown_member() {
    let mut service = Service::default();
    let err = service.assign("calls", Box::new(1usize)).unwrap_err();

    assert_eq!(
        err,
        InjectError::UnknownMember {
            target: TypeInfo::of::<Service>(),
            member: "calls".into(),
        }
    );
}

#[test]
fn test_assign_type_mismatch() {
    let mut service = Service::default();
    let err = service.assign("retries", Box::new("three")).unwrap_err();

    assert_eq!(
        err,
        InjectError::TypeMismatch {
            member: "retries".into(),
            expected: TypeInfo::of::<u32>(),
        }
    );
}
