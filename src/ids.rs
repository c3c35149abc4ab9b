use uuid::Uuid;

/// Opaque record identifier: 32 lowercase hex characters from a v4 UUID.
///
/// Unique within a process lifetime for any realistic number of records;
/// collisions are not detected or retried.
pub fn generate() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_fixed_length_hex() {
        let id = generate();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn ids_do_not_repeat() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(generate()));
        }
    }
}
