//! Enrollment record model

/// One accepted enrollment line
///
/// A plain value holder: the ingestion engine decides whether raw fields are
/// acceptable before building one. Identity for deduplication is the pair
/// (`company`, `user_id`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub version: u64,
    pub company: String,
}

impl Record {
    /// Creates a new record
    pub fn new(
        user_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        version: u64,
        company: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            version,
            company: company.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let record = Record::new("1", "John", "Doe", 3, "Acme");
        assert_eq!(record.user_id, "1");
        assert_eq!(record.first_name, "John");
        assert_eq!(record.last_name, "Doe");
        assert_eq!(record.version, 3);
        assert_eq!(record.company, "Acme");
    }
}
