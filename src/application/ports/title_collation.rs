use std::cmp::Ordering;

/// Compares two titles under the display locale's collation rules.
///
/// Injected rather than hardwired so the sort stays testable with a
/// deterministic comparator and swappable per deployment locale.
/// Implementations are immutable once constructed and safe to share across
/// concurrent callers.
pub trait TitleCollation: Send + Sync {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}
