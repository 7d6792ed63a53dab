//! ID types used by the audit pipeline.

use crate::{define_id, IdError};

// =============================================================================
// Audit Records
// =============================================================================

define_id!(AuditLogId, "alog");

// =============================================================================
// Project Scope
// =============================================================================

/// Identifier of the project (tenant) that owns an audited resource.
///
/// Zero is accepted; only negative values are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProjectId(i64);

impl ProjectId {
    /// Validates and wraps a raw project ID.
    pub fn new(id: i64) -> Result<Self, IdError> {
        if id < 0 {
            return Err(IdError::NegativeProjectId(id));
        }
        Ok(Self(id))
    }

    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for ProjectId {
    type Error = IdError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<ProjectId> for i64 {
    fn from(id: ProjectId) -> Self {
        id.0
    }
}

impl serde::Serialize for ProjectId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for ProjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = i64::deserialize(deserializer)?;
        Self::new(id).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_audit_log_id_roundtrip() {
        let id = AuditLogId::generate();
        let parsed: AuditLogId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
        assert!(id.to_string().starts_with("alog_"));
    }

    #[test]
    fn test_audit_log_id_invalid_prefix() {
        let err = "evt_01HV4Z2WQXKJNM8GPQY6VBKC3D"
            .parse::<AuditLogId>()
            .unwrap_err();
        assert!(matches!(err, IdError::InvalidPrefix { expected: "alog", .. }));
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_audit_log_id_missing_separator() {
        let err = "alog01HV4Z2WQXKJNM8GPQY6VBKC3D"
            .parse::<AuditLogId>()
            .unwrap_err();
        assert_eq!(err, IdError::MissingSeparator);
    }

    #[test]
    fn test_audit_log_id_empty() {
        assert_eq!("".parse::<AuditLogId>().unwrap_err(), IdError::Empty);
    }

    #[test]
    fn test_audit_log_id_invalid_ulid() {
        let err = "alog_not-a-ulid".parse::<AuditLogId>().unwrap_err();
        assert!(matches!(err, IdError::InvalidUlid(_)));
    }

    #[test]
    fn test_audit_log_id_json_is_string() {
        let id = AuditLogId::generate();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
        let parsed: AuditLogId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_audit_log_ids_sort_by_creation() {
        let first = AuditLogId::generate();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = AuditLogId::generate();
        assert!(first < second);
    }

    #[test]
    fn test_project_id_zero_is_valid() {
        assert_eq!(ProjectId::new(0).unwrap().value(), 0);
    }

    #[test]
    fn test_project_id_negative_rejected() {
        let err = ProjectId::new(-1).unwrap_err();
        assert_eq!(err, IdError::NegativeProjectId(-1));
        assert!(!err.is_parse_error());
    }

    #[test]
    fn test_project_id_json_is_bare_integer() {
        let id = ProjectId::new(42).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        assert_eq!(serde_json::from_str::<ProjectId>("42").unwrap(), id);
    }

    #[test]
    fn test_project_id_deserialize_rejects_negative() {
        let err = serde_json::from_str::<ProjectId>("-7").unwrap_err();
        assert!(err.to_string().contains("non-negative"));
    }

    proptest! {
        #[test]
        fn prop_project_id_accepts_exactly_non_negative(raw in any::<i64>()) {
            prop_assert_eq!(ProjectId::new(raw).is_ok(), raw >= 0);
        }
    }
}
