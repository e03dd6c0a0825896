use serde::{Deserialize, Serialize};

/// Characters used for emphasis markup that never belong in a dish name.
pub const EMPHASIS_CHARS: &[char] = &['*', '_', '`'];

/// Maximum number of candidates offered to the roulette.
pub const SHORTLIST_SIZE: usize = 3;

/// One recommended menu item with a short justification
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub reason: String,
}

impl Candidate {
    /// Build a candidate from raw text, trimming both fields and stripping
    /// emphasis markup from the name.
    ///
    /// Returns `None` when either field is empty after cleaning.
    pub fn parse(name: &str, reason: &str) -> Option<Self> {
        let name: String = name
            .chars()
            .filter(|c| !EMPHASIS_CHARS.contains(c))
            .collect();
        let name = name.trim();
        let reason = reason.trim();

        if name.is_empty() || reason.is_empty() {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            reason: reason.to_string(),
        })
    }
}

/// Non-empty ordered shortlist handed to the selection engine
///
/// Holds between 1 and [`SHORTLIST_SIZE`] candidates. The generative strategy
/// only ever produces full sets; the tabular strategy may produce fewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Candidate>", into = "Vec<Candidate>")]
pub struct CandidateSet(Vec<Candidate>);

impl CandidateSet {
    /// Wrap the first [`SHORTLIST_SIZE`] candidates; `None` if empty.
    pub fn new(mut candidates: Vec<Candidate>) -> Option<Self> {
        if candidates.is_empty() {
            return None;
        }
        candidates.truncate(SHORTLIST_SIZE);
        Some(Self(candidates))
    }

    pub fn as_slice(&self) -> &[Candidate] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.0.len() == SHORTLIST_SIZE
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.0.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|c| c.name.as_str()).collect()
    }
}

impl TryFrom<Vec<Candidate>> for CandidateSet {
    type Error = &'static str;

    fn try_from(candidates: Vec<Candidate>) -> Result<Self, Self::Error> {
        Self::new(candidates).ok_or("candidate set cannot be empty")
    }
}

impl From<CandidateSet> for Vec<Candidate> {
    fn from(set: CandidateSet) -> Self {
        set.0
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Display label for a rank position ("1st place", ...)
pub fn rank_label(index: usize) -> &'static str {
    match index {
        0 => "1st place",
        1 => "2nd place",
        2 => "3rd place",
        _ => "runner-up",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_emphasis_and_whitespace() {
        let candidate = Candidate::parse("  **김치찌개** ", " 든든해요 ").unwrap();
        assert_eq!(candidate.name, "김치찌개");
        assert_eq!(candidate.reason, "든든해요");
    }

    #[test]
    fn test_parse_rejects_empty_fields() {
        assert!(Candidate::parse("***", "reason").is_none());
        assert!(Candidate::parse("name", "   ").is_none());
    }

    #[test]
    fn test_reason_keeps_markup() {
        let candidate = Candidate::parse("초밥", "*신선*해요").unwrap();
        assert_eq!(candidate.reason, "*신선*해요");
    }

    #[test]
    fn test_set_truncates_to_shortlist() {
        let candidates: Vec<Candidate> = (0..5)
            .map(|i| Candidate::parse(&format!("menu{i}"), "why").unwrap())
            .collect();
        let set = CandidateSet::new(candidates).unwrap();
        assert_eq!(set.len(), SHORTLIST_SIZE);
        assert!(set.is_full());
        assert_eq!(set.names(), vec!["menu0", "menu1", "menu2"]);
    }

    #[test]
    fn test_set_rejects_empty() {
        assert!(CandidateSet::new(Vec::new()).is_none());
        let json = "[]";
        assert!(serde_json::from_str::<CandidateSet>(json).is_err());
    }

    #[test]
    fn test_rank_labels() {
        assert_eq!(rank_label(0), "1st place");
        assert_eq!(rank_label(1), "2nd place");
        assert_eq!(rank_label(2), "3rd place");
    }
}
