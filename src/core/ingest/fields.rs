//! Line splitting and field validation

use crate::domain::{LineError, LineErrorKind, Record};

/// Number of comma-separated fields a line must carry
pub const EXPECTED_FIELDS: usize = 4;

/// Splits a raw line on `,`
///
/// No quoting or escaping. Trailing empty fields are discarded, and a line
/// without any comma is a single field, so `"a,b,"` has two fields, `""` has
/// one and `",,,"` has none.
pub fn split_fields(line: &str) -> Vec<&str> {
    if !line.contains(',') {
        return vec![line];
    }

    split_dropping_trailing_empty(line, ',')
}

fn split_dropping_trailing_empty(raw: &str, separator: char) -> Vec<&str> {
    let mut parts: Vec<&str> = raw.split(separator).collect();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }
    parts
}

/// Splits a name field into exactly a first and last name
///
/// Tokens are separated by single spaces. Trailing spaces are ignored, the
/// same way trailing empty fields are dropped from a line.
pub fn split_name(raw: &str) -> Option<(&str, &str)> {
    let tokens = split_dropping_trailing_empty(raw, ' ');
    match tokens.as_slice() {
        [first, last] if !first.is_empty() && !last.is_empty() => Some((*first, *last)),
        _ => None,
    }
}

/// Parses a version made only of ASCII digits
///
/// Empty strings and values that overflow `u64` are rejected.
pub fn parse_version(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Validates a four-field line and builds its record
///
/// Every field is checked, so a line can produce several errors. When
/// `strict` is set, empty user id, name and company values are errors too.
pub fn validate_fields(
    line: usize,
    fields: [&str; EXPECTED_FIELDS],
    strict: bool,
) -> Result<Record, Vec<LineError>> {
    let [user_id, name, version, company] = fields;
    let mut errors = Vec::new();

    if strict && user_id.is_empty() {
        errors.push(LineError::new(line, LineErrorKind::MissingUserId));
    }

    let parsed_name = if strict && name.is_empty() {
        errors.push(LineError::new(line, LineErrorKind::MissingName));
        None
    } else {
        let parsed = split_name(name);
        if parsed.is_none() {
            errors.push(LineError::new(line, LineErrorKind::MalformedName));
        }
        parsed
    };

    let parsed_version = parse_version(version);
    if parsed_version.is_none() {
        errors.push(LineError::new(line, LineErrorKind::InvalidVersion));
    }

    if strict && company.is_empty() {
        errors.push(LineError::new(line, LineErrorKind::MissingCompany));
    }

    match (parsed_name, parsed_version) {
        (Some((first_name, last_name)), Some(version)) if errors.is_empty() => Ok(Record::new(
            user_id, first_name, last_name, version, company,
        )),
        _ => Err(errors),
    }
}
