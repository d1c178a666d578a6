//! # Identity Newtypes
//!
//! Domain-primitive newtypes for identifiers throughout the PAS Stack.
//! Each identifier is a distinct type — you cannot pass a [`TenantId`]
//! where a [`CenterId`] is expected.
//!
//! ## Validation
//!
//! String-based identifiers ([`ComplaintNumber`], [`OffenseCode`]) validate
//! format at construction time. UUID-based identifiers ([`TenantId`],
//! [`CenterId`], [`EmployeeId`], [`CommitteeId`], [`ComplaintId`]) are
//! always valid by construction.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

// ---------------------------------------------------------------------------
// UUID-based identifiers (always valid by construction)
// ---------------------------------------------------------------------------

/// A unique identifier for a tenant — an administration running its own
/// partition of the platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TenantId(Uuid);

impl TenantId {
    /// Create a new random tenant identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a tenant identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TenantId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TenantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unique identifier for a center — a regional or departmental office
/// within a tenant's organization structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CenterId(Uuid);

impl CenterId {
    /// Create a new random center identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a center identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CenterId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CenterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unique identifier for an employee record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    /// Create a new random employee identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an employee identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unique identifier for a discipline committee, at center or HQ level.
///
/// The engine treats committee identifiers as opaque — membership and
/// routing are resolved by the committee service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommitteeId(Uuid);

impl CommitteeId {
    /// Create a new random committee identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a committee identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CommitteeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CommitteeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unique identifier for a disciplinary complaint case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComplaintId(Uuid);

impl ComplaintId {
    /// Create a new random complaint identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a complaint identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ComplaintId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "case:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// String-based identifiers (validated at construction)
// ---------------------------------------------------------------------------

/// A human-facing complaint case reference (e.g., "DC-1404-0231").
///
/// # Validation
///
/// Must be a non-empty string. No further format restrictions are imposed
/// because numbering schemes vary across tenants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComplaintNumber(String);

impl ComplaintNumber {
    /// Create a complaint number from a string, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidComplaintNumber`] if the string is
    /// empty or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(ValidationError::InvalidComplaintNumber(s));
        }
        Ok(Self(s))
    }

    /// Access the complaint number string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ComplaintNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An offense catalog code (e.g., "A30-07" for unauthorized absence).
///
/// The offense catalog itself is maintained by the lookup-table CRUD layer;
/// the engine only needs the code to correlate repeat offenses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OffenseCode(String);

impl OffenseCode {
    /// Create an offense code from a string, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidOffenseCode`] if the string is
    /// empty or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(ValidationError::InvalidOffenseCode(s));
        }
        Ok(Self(s))
    }

    /// Access the offense code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OffenseCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_ids_are_unique() {
        assert_ne!(ComplaintId::new(), ComplaintId::new());
        assert_ne!(EmployeeId::new(), EmployeeId::new());
    }

    #[test]
    fn uuid_id_from_uuid_roundtrip() {
        let raw = Uuid::new_v4();
        let id = CommitteeId::from_uuid(raw);
        assert_eq!(*id.as_uuid(), raw);
    }

    #[test]
    fn uuid_id_default_is_random() {
        assert_ne!(TenantId::default(), TenantId::default());
    }

    #[test]
    fn complaint_id_display_prefix() {
        let id = ComplaintId::new();
        assert!(format!("{id}").starts_with("case:"));
    }

    #[test]
    fn complaint_number_accepts_case_reference() {
        let number = ComplaintNumber::new("DC-1404-0231").unwrap();
        assert_eq!(number.as_str(), "DC-1404-0231");
        assert_eq!(format!("{number}"), "DC-1404-0231");
    }

    #[test]
    fn complaint_number_rejects_empty() {
        assert!(ComplaintNumber::new("").is_err());
        assert!(ComplaintNumber::new("   ").is_err());
    }

    #[test]
    fn offense_code_rejects_empty() {
        assert!(OffenseCode::new("").is_err());
        assert!(OffenseCode::new(" \t").is_err());
    }

    #[test]
    fn offense_code_display() {
        let code = OffenseCode::new("A30-07").unwrap();
        assert_eq!(format!("{code}"), "A30-07");
    }

    #[test]
    fn identifier_serde_roundtrip() {
        let id = ComplaintId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: ComplaintId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
