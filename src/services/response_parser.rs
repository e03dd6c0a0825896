//! Strict parser for the model's delimited candidate list.
//!
//! Grammar:
//!
//! ```text
//! response := record (RECORD_SEP record)*
//! record   := name ':' reason        -- split on the first ':' only
//! ```
//!
//! Records are separated by newlines or `|`. Records without a field
//! delimiter, or with an empty name or reason after cleaning, are dropped.
//! Anything short of a full shortlist is rejected as a whole.

use tracing::debug;

use crate::domain::errors::GenerationError;
use crate::domain::models::{Candidate, CandidateSet, SHORTLIST_SIZE};

/// Record delimiter requested in the prompt.
pub const RECORD_DELIMITER: char = '\n';

/// Alternative record delimiter accepted on input.
pub const INLINE_RECORD_DELIMITER: char = '|';

/// Separates a name from its reason.
pub const FIELD_DELIMITER: char = ':';

/// Parse every well-formed record, in order.
pub fn parse_records(response: &str) -> Vec<Candidate> {
    response
        .split([RECORD_DELIMITER, INLINE_RECORD_DELIMITER])
        .filter_map(|record| {
            let (name, reason) = record.split_once(FIELD_DELIMITER)?;
            Candidate::parse(name, reason)
        })
        .collect()
}

/// Parse a response into a full shortlist or fail.
pub fn parse_candidates(response: &str) -> Result<CandidateSet, GenerationError> {
    let records = parse_records(response);
    let found = records.len();
    debug!(found, "parsed candidate records");

    if found < SHORTLIST_SIZE {
        return Err(GenerationError::Malformed {
            found,
            expected: SHORTLIST_SIZE,
        });
    }

    CandidateSet::new(records).ok_or(GenerationError::Malformed {
        found,
        expected: SHORTLIST_SIZE,
    })
}
