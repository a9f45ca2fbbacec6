//! Deterministic hash-to-color mapping for assignee badges.
//!
//! This is a display aid only: it is not a security- or identity-bearing
//! hash, and collisions across distinct ids are acceptable.

/// Neutral gray used for the empty id.
pub const FALLBACK_COLOR: &str = "#888888";

/// Map an assignee id to a stable `#rrggbb` color.
///
/// Same id, same color, within and across sessions. The empty id maps to
/// [`FALLBACK_COLOR`].
pub fn color_from_id(id: &str) -> String {
    if id.is_empty() {
        return FALLBACK_COLOR.to_string();
    }
    format!("#{:06x}", rgb_from_hash(id_hash(id)))
}

/// Rolling hash over UTF-16 code units: `hash = unit + (hash << 5) - hash`,
/// with two's-complement i32 wrapping.
pub fn id_hash(id: &str) -> i32 {
    let mut hash: i32 = 0;
    for unit in id.encode_utf16() {
        hash = (unit as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }
    hash
}

fn rgb_from_hash(hash: i32) -> u32 {
    (((hash as f64).sin().abs() * 16_777_215.0).floor() as u32) % 16_777_215
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_matches_known_values() {
        assert_eq!(id_hash(""), 0);
        assert_eq!(id_hash("a"), 97);
        // 98 + (97 << 5) - 97
        assert_eq!(id_hash("ab"), 3105);
    }

    #[test]
    fn hash_wraps_instead_of_overflowing() {
        let long: String = "x".repeat(10_000);
        // Must not panic in debug builds; exact value is irrelevant.
        let _ = id_hash(&long);
    }

    #[test]
    fn color_is_pure() {
        for id in ["183", "none", "42u", "日本語"] {
            assert_eq!(color_from_id(id), color_from_id(id));
        }
    }

    #[test]
    fn color_is_well_formed_hex() {
        for id in ["183", "7", "someone"] {
            let color = color_from_id(id);
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn empty_id_gets_fallback_gray() {
        assert_eq!(color_from_id(""), FALLBACK_COLOR);
    }

    #[test]
    fn numeric_looking_ids_are_hashed_as_strings() {
        assert_eq!(id_hash("1"), 49);
        assert_eq!(color_from_id("1"), color_from_id("1"));
    }
}
