use std::cmp::Ordering;

use serde::Serialize;

use super::store::TermRecord;

/// One ranked autocomplete result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub term: String,
    pub count: u64,
}

impl From<&TermRecord> for Suggestion {
    fn from(r: &TermRecord) -> Self {
        Self {
            term: r.display.clone(),
            count: r.count,
        }
    }
}

/// Total order over records: count desc, then most recently updated, then key asc.
pub fn compare(a: &TermRecord, b: &TermRecord) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| b.last_updated.cmp(&a.last_updated))
        .then_with(|| a.key.cmp(&b.key))
}

/// Rank candidates and return at most `limit` suggestions.
///
/// If `boost` (already case-folded) names one of the candidates, that
/// candidate goes first and the rest keep their ranked order. A boost that
/// matches no candidate is ignored. Boosting is applied before truncation, so
/// a boosted term outside the top `limit` still makes it in.
pub fn rank(
    mut candidates: Vec<&TermRecord>,
    boost: Option<&str>,
    limit: usize,
) -> Vec<Suggestion> {
    if limit == 0 || candidates.is_empty() {
        return Vec::new();
    }

    let boosted = boost
        .and_then(|b| candidates.iter().position(|r| r.key == b))
        .map(|i| candidates.swap_remove(i));

    let rest = limit - usize::from(boosted.is_some());
    let top = top_k(candidates, rest);

    boosted
        .into_iter()
        .chain(top)
        .map(Suggestion::from)
        .collect()
}

/// The `k` best records in ranked order, without sorting the whole set.
fn top_k(mut v: Vec<&TermRecord>, k: usize) -> Vec<&TermRecord> {
    if k == 0 {
        return Vec::new();
    }
    if v.len() > k {
        v.select_nth_unstable_by(k - 1, |a, b| compare(a, b));
        v.truncate(k);
    }
    // compare() is total over distinct keys, so an unstable sort is deterministic.
    v.sort_unstable_by(|a, b| compare(a, b));
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(key: &str, count: u64, last_updated: u64) -> TermRecord {
        TermRecord {
            key: key.to_lowercase(),
            display: key.to_string(),
            count,
            last_updated,
        }
    }

    fn terms(v: &[Suggestion]) -> Vec<&str> {
        v.iter().map(|s| s.term.as_str()).collect()
    }

    #[test]
    fn orders_by_count_then_recency_then_key() {
        let recs = [
            rec("b", 2, 1),
            rec("a", 2, 1),
            rec("c", 2, 5),
            rec("d", 9, 0),
            rec("e", 1, 9),
        ];
        let out = rank(recs.iter().collect(), None, 10);
        assert_eq!(terms(&out), vec!["d", "c", "a", "b", "e"]);
    }

    #[test]
    fn truncates_to_limit() {
        let recs: Vec<TermRecord> = (0..100).map(|i| rec(&format!("t{i:03}"), i, i)).collect();
        let out = rank(recs.iter().collect(), None, 5);
        assert_eq!(terms(&out), vec!["t099", "t098", "t097", "t096", "t095"]);
        assert_eq!(out[0].count, 99);
    }

    #[test]
    fn boost_moves_to_front() {
        let recs = [rec("current", 3, 3), rec("cursor", 2, 2), rec("curly", 1, 1)];
        let out = rank(recs.iter().collect(), Some("curly"), 5);
        assert_eq!(terms(&out), vec!["curly", "current", "cursor"]);
    }

    #[test]
    fn boost_from_outside_window() {
        let recs: Vec<TermRecord> = (1..=20).map(|i| rec(&format!("t{i:02}"), i, 0)).collect();
        let out = rank(recs.iter().collect(), Some("t01"), 5);
        assert_eq!(terms(&out), vec!["t01", "t20", "t19", "t18", "t17"]);
    }

    #[test]
    fn boost_noop_cases() {
        let recs = [rec("current", 3, 3), rec("cursor", 2, 2), rec("curly", 1, 1)];
        let plain = rank(recs.iter().collect(), None, 5);

        assert_eq!(rank(recs.iter().collect(), Some("current"), 5), plain);
        assert_eq!(rank(recs.iter().collect(), Some("dog"), 5), plain);
    }

    #[test]
    fn boost_with_limit_one() {
        let recs = [rec("a", 3, 0), rec("b", 1, 0)];
        let out = rank(recs.iter().collect(), Some("b"), 1);
        assert_eq!(terms(&out), vec!["b"]);
    }

    #[test]
    fn empty_inputs() {
        assert!(rank(Vec::new(), Some("x"), 5).is_empty());
        let recs = [rec("a", 1, 0)];
        assert!(rank(recs.iter().collect(), None, 0).is_empty());
    }
}
