//! Namespace grouping for diagnostics and display.

use commandeer_core::TypeInfo;
use std::collections::BTreeMap;

/// Group key used for types without a namespace.
pub const NO_NAMESPACE: &str = "-";

/// Group simple type names by namespace.
///
/// Types without a namespace are grouped under [`NO_NAMESPACE`]. Within each
/// group names keep the order of `types`, duplicates included. Every key in
/// the result has at least one name; an empty input yields an empty map.
///
/// Keys come out sorted, not in the order their namespaces first appear in
/// `types`.
pub fn group_by_namespace(types: &[TypeInfo]) -> BTreeMap<&'static str, Vec<&'static str>> {
    let mut groups: BTreeMap<&'static str, Vec<&'static str>> = BTreeMap::new();
    for ty in types {
        let key = ty.namespace().unwrap_or(NO_NAMESPACE);
        groups.entry(key).or_default().push(ty.name());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Open;
    struct Save;
    struct Quit;

    #[test]
    fn test_empty_input() {
        assert!(group_by_namespace(&[]).is_empty());
    }

    #[test]
    fn test_groups_preserve_input_order() {
        let types = [
            TypeInfo::named::<Save>("app::file", "Save"),
            TypeInfo::named::<Quit>("app", "Quit"),
            TypeInfo::named::<Open>("app::file", "Open"),
            TypeInfo::of::<u8>(),
        ];

        let groups = group_by_namespace(&types);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups["app::file"], ["Save", "Open"]);
        assert_eq!(groups["app"], ["Quit"]);
        assert_eq!(groups[NO_NAMESPACE], ["u8"]);
    }

    #[test]
    fn test_grouping_is_idempotent() {
        let types = [
            TypeInfo::named::<Open>("", "Open"),
            TypeInfo::named::<Save>("io", "Save"),
            TypeInfo::named::<Quit>("", "Quit"),
        ];

        let first = group_by_namespace(&types);
        let second = group_by_namespace(&types);

        assert_eq!(first, second);
        assert_eq!(first[NO_NAMESPACE], ["Open", "Quit"]);
    }

    #[test]
    fn test_keys_sorted_not_first_seen() {
        let types = [
            TypeInfo::named::<Quit>("zeta", "Quit"),
            TypeInfo::of::<u8>(),
            TypeInfo::named::<Open>("alpha", "Open"),
        ];

        let keys: Vec<_> = group_by_namespace(&types).into_keys().collect();

        assert_eq!(keys, [NO_NAMESPACE, "alpha", "zeta"]);
    }
}
