use std::collections::HashMap;

/// A registered term with its frequency count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermRecord {
    /// Case-folded identity of the term.
    pub key: String,
    /// Casing as first registered.
    pub display: String,
    pub count: u64,
    /// Sequence number of the last registration that touched the record.
    pub last_updated: u64,
}

/// Outcome of decrementing a term's count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecrementResult {
    pub existed: bool,
    pub removed: bool,
    pub remaining: u64,
}

/// Canonical record of every known term, keyed by the case-folded form.
/// Records with a zero count are never kept.
#[derive(Debug, Default)]
pub struct TermStore {
    terms: HashMap<String, TermRecord>,
}

impl TermStore {
    /// Create the record with `by` as its count, or add `by` to an existing
    /// record's count. `display` is only used on creation.
    pub fn upsert(&mut self, key: &str, display: &str, by: u64, now: u64) -> &TermRecord {
        self.terms
            .entry(key.to_string())
            .and_modify(|r| {
                r.count = r.count.saturating_add(by);
                r.last_updated = now;
            })
            .or_insert_with(|| TermRecord {
                key: key.to_string(),
                display: display.to_string(),
                count: by,
                last_updated: now,
            })
    }

    /// Decrement a term's count, removing the record when it reaches zero.
    /// `last_updated` is left untouched.
    pub fn decrement(&mut self, key: &str) -> DecrementResult {
        let Some(rec) = self.terms.get_mut(key) else {
            return DecrementResult {
                existed: false,
                removed: false,
                remaining: 0,
            };
        };

        rec.count = rec.count.saturating_sub(1);
        if rec.count > 0 {
            return DecrementResult {
                existed: true,
                removed: false,
                remaining: rec.count,
            };
        }

        self.terms.remove(key);
        DecrementResult {
            existed: true,
            removed: true,
            remaining: 0,
        }
    }

    pub fn get(&self, key: &str) -> Option<&TermRecord> {
        self.terms.get(key)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }
}
