//! Locale-aware ordering of member names.
//!
//! Uses the Unicode Collation Algorithm with the CLDR root tailoring, so
//! accented and non-Latin names sort where people expect them ("Émile"
//! before "Zoe") instead of by code point.

use std::cmp::Ordering;

use feruca::Collator;

/// Compare two display names.
///
/// Case and accents only break ties: "bob" sorts between "Alice" and "Carol",
/// and "ana" sorts just before "Ana". Builds a collator per call; use
/// [`sort_by_name`] when ordering a whole list.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    Collator::default().collate(a, b)
}

/// Stable sort of `items` by the name `name` extracts, sharing one collator.
pub fn sort_by_name<T, F>(items: &mut [T], name: F)
where
    F: Fn(&T) -> &str,
{
    let mut collator = Collator::default();
    items.sort_by(|a, b| collator.collate(name(a), name(b)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_primary_order() {
        assert_eq!(compare_names("bob", "Carol"), Ordering::Less);
        assert_eq!(compare_names("Alice", "bob"), Ordering::Less);
        assert_eq!(compare_names("Zane", "aaron"), Ordering::Greater);
    }

    #[test]
    fn test_lowercase_before_uppercase_on_tie() {
        assert_eq!(compare_names("ana", "Ana"), Ordering::Less);
        assert_eq!(compare_names("Ana", "ana"), Ordering::Greater);
    }

    #[test]
    fn test_identical_names_are_equal() {
        assert_eq!(compare_names("Sam", "Sam"), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(compare_names("Sam", "Samantha"), Ordering::Less);
    }

    #[test]
    fn test_accented_initials_sort_with_their_base_letter() {
        assert_eq!(compare_names("Émile", "Zoe"), Ordering::Less);
        assert_eq!(compare_names("Ana", "Émile"), Ordering::Less);
        assert_eq!(compare_names("Émile", "Emma"), Ordering::Less);
        assert_eq!(compare_names("Øystein", "Zoe"), Ordering::Less);
    }

    #[test]
    fn test_sort_by_name_orders_accented_names() {
        let mut names = vec!["Zoe", "Émile", "bob", "Ana"];
        sort_by_name(&mut names, |n| *n);
        assert_eq!(names, vec!["Ana", "bob", "Émile", "Zoe"]);
    }
}
