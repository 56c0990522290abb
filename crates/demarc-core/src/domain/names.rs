//! Heuristics for telling entity accessors apart from client methods.

/// Client methods that are never entity accessors.
pub const DATA_ACCESS_METHODS: &[&str] = &[
    "find",
    "findMany",
    "findFirst",
    "findFirstOrThrow",
    "findUnique",
    "findUniqueOrThrow",
    "create",
    "createMany",
    "createManyAndReturn",
    "update",
    "updateMany",
    "updateManyAndReturn",
    "upsert",
    "delete",
    "deleteMany",
    "count",
    "aggregate",
    "groupBy",
    "connect",
    "disconnect",
    "transaction",
    "executeRaw",
    "executeRawUnsafe",
    "queryRaw",
    "queryRawUnsafe",
    "extends",
    "use",
    "on",
];

/// Built-in property names present on every object.
pub const LANGUAGE_PROPERTIES: &[&str] =
    &["length", "constructor", "prototype", "toString", "valueOf"];

/// Whether `identifier` plausibly names a schema entity.
///
/// Only alphanumeric identifiers longer than one character that are not
/// written in constant case qualify.
pub fn looks_like_entity_name(identifier: &str) -> bool {
    if DATA_ACCESS_METHODS.contains(&identifier) || LANGUAGE_PROPERTIES.contains(&identifier) {
        return false;
    }

    let mut chars = identifier.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    if identifier.len() <= 1
        || !starts_with_letter
        || !chars.all(|c| c.is_ascii_alphanumeric())
    {
        return false;
    }

    identifier.chars().any(|c| c.is_ascii_lowercase())
}

/// Convert an accessor (`oAuthToken`) to the declaration's casing (`OAuthToken`).
///
/// Only the first character changes.
pub fn to_declaration_casing(accessor: &str) -> String {
    let mut chars = accessor.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_case_rejected() {
        assert!(!looks_like_entity_name("USER"));
        assert!(!looks_like_entity_name("ID2"));
        assert!(looks_like_entity_name("User"));
    }

    #[test]
    fn test_empty_casing() {
        assert_eq!(to_declaration_casing(""), "");
    }
}
