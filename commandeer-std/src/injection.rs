//! Assigning resolved values into injection points.
//!
//! This is the thinnest possible consumer of the injection metadata: one
//! level, no graph construction, no cycle detection. Each marked member is
//! looked up through a [`Resolver`] by its key and assigned.

use commandeer_core::{InjectError, Injectable, Resolver};

/// Resolve and assign every injection point of `target`.
///
/// Members are processed in [`Injectable::injection_points`] order and the
/// first member that cannot be resolved or assigned stops the process.
/// Returns the number of members assigned.
pub fn inject_members<T, R>(target: &mut T, resolver: &R) -> Result<usize, InjectError>
where
    T: Injectable,
    R: Resolver + ?Sized,
{
    let points = T::injection_points();
    for point in &points {
        let key = point.key();
        let value = resolver
            .resolve(&key)
            .ok_or_else(|| InjectError::unresolved(point.member(), &key))?;

        #[cfg(feature = "tracing")]
        tracing::trace!(member = point.member(), %key, "injecting member");

        target.assign(point.member(), value)?;
    }
    Ok(points.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeResolver, RecordedKey};
    use commandeer_core::{Inject, InjectionPoint, TypeInfo, downcast_member};
    use std::any::Any;

    #[derive(Default)]
    struct Greeter {
        greeting: String,
        retries: u32,
    }

    impl Injectable for Greeter {
        fn injection_points() -> Vec<InjectionPoint> {
            vec![
                InjectionPoint::field("retries", TypeInfo::of::<u32>(), Inject::new()),
                InjectionPoint::property(
                    "greeting",
                    TypeInfo::of::<String>(),
                    Inject::with_identifier("greeting"),
                ),
            ]
        }

        fn assign(&mut self, member: &str, value: Box<dyn Any + Send>) -> Result<(), InjectError> {
            match member {
                "retries" => self.retries = downcast_member(member, value)?,
                "greeting" => self.greeting = downcast_member(member, value)?,
                _ => {
                    return Err(InjectError::UnknownMember {
                        target: TypeInfo::of::<Self>(),
                        member: member.to_string(),
                    });
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_resolves_by_type_and_identifier() {
        let resolver = FakeResolver::new()
            .bind_type(|| 3u32)
            .bind_identifier("greeting", || String::from("hello"));
        let mut greeter = Greeter::default();

        let assigned = inject_members(&mut greeter, &resolver).unwrap();

        assert_eq!(assigned, 2);
        assert_eq!(greeter.retries, 3);
        assert_eq!(greeter.greeting, "hello");
        assert_eq!(
            resolver.keys(),
            [
                RecordedKey::Type(TypeInfo::of::<u32>()),
                RecordedKey::Identifier("greeting".into()),
            ]
        );
    }

    #[test]
    fn test_unresolved_member() {
        let resolver = FakeResolver::new().bind_type(|| 3u32);
        let mut greeter = Greeter::default();

        let err = inject_members(&mut greeter, &resolver).unwrap_err();

        assert!(matches!(err, InjectError::Unresolved { ref member, .. } if member == "greeting"));
        assert_eq!(greeter.retries, 3);
    }

    #[test]
    fn test_wrong_value_type() {
        let resolver = FakeResolver::new()
            .bind_type(|| 3u32)
            .bind_identifier("greeting", || 42i64);
        let mut greeter = Greeter::default();

        let err = inject_members(&mut greeter, &resolver).unwrap_err();

        assert_eq!(
            err,
            InjectError::TypeMismatch {
                member: "greeting".into(),
                expected: TypeInfo::of::<String>(),
            }
        );
    }
}
