// Shared type definitions
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::utils::{validate_email, validate_password};

/// Longest accepted issue description.
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Note attached automatically when an admin marks an issue resolved.
pub const RESOLUTION_NOTE: &str = "Marked as resolved by admin";

/// Category tags offered in the complaint form, with display labels.
/// `other` switches the form to a free-text category field.
pub const CATEGORY_OPTIONS: &[(&str, &str)] = &[
    ("hostel_issues", "Hostel Issues"),
    ("classroom_issues", "Classroom Issues"),
    ("laboratory_issues", "Laboratory Issues"),
    ("it_support", "IT Support"),
    ("library_issues", "Library Issues"),
    ("campus_infrastructure", "Campus Infrastructure"),
    ("campus_safety", "Campus Safety & Security"),
    ("other", "Other"),
];

// User types

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student,
    Staff,
    Officer,
    DepartmentOfficer,
    Admin,
}

impl UserRole {
    /// Roles allowed to load and manage the admin dashboard. This is a
    /// display-time check; the backend enforces authorization itself.
    pub fn can_manage(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::DepartmentOfficer)
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Staff => "staff",
            UserRole::Officer => "officer",
            UserRole::DepartmentOfficer => "department officer",
            UserRole::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub role: UserRole,
}

/// Staff record as returned by `GET /users?role=officer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Officer {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub is_active: bool,
}

// Complaint types

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplaintStatus {
    Submitted,
    #[serde(rename = "in-progress")]
    InProgress,
    Resolved,
    Closed,
}

impl ComplaintStatus {
    pub const ALL: [ComplaintStatus; 4] = [
        ComplaintStatus::Submitted,
        ComplaintStatus::InProgress,
        ComplaintStatus::Resolved,
        ComplaintStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Submitted => "submitted",
            ComplaintStatus::InProgress => "in-progress",
            ComplaintStatus::Resolved => "resolved",
            ComplaintStatus::Closed => "closed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComplaintStatus::Submitted => "Submitted",
            ComplaintStatus::InProgress => "In Progress",
            ComplaintStatus::Resolved => "Resolved",
            ComplaintStatus::Closed => "Closed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IssueLocation {
    #[default]
    Classroom,
    Hostel,
    Laboratory,
    Library,
    #[serde(rename = "Common Area")]
    CommonArea,
    Other,
}

impl IssueLocation {
    pub const ALL: [IssueLocation; 6] = [
        IssueLocation::Classroom,
        IssueLocation::Hostel,
        IssueLocation::Laboratory,
        IssueLocation::Library,
        IssueLocation::CommonArea,
        IssueLocation::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueLocation::Classroom => "Classroom",
            IssueLocation::Hostel => "Hostel",
            IssueLocation::Laboratory => "Laboratory",
            IssueLocation::Library => "Library",
            IssueLocation::CommonArea => "Common Area",
            IssueLocation::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

/// Complaint record as returned by `GET /complaints`. Field names follow the
/// backend wire format, which mixes snake_case and camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: String,
    pub complaint_id: String,
    pub category: String,
    pub description: String,
    pub priority: Priority,
    pub status: ComplaintStatus,
    #[serde(default)]
    pub building_name: Option<String>,
    #[serde(rename = "issueLocation", default)]
    pub issue_location: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Complaint {
    /// Location shown in the dashboard table: building first, then the
    /// location type, then a placeholder.
    pub fn display_location(&self) -> String {
        self.building_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.issue_location.as_deref())
            .unwrap_or("N/A")
            .to_string()
    }
}

// Aggregate statistics

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityCounts {
    pub low: u32,
    pub medium: u32,
    pub high: u32,
}

/// Shape of `GET /complaints/stats/overview`. `Default` is the zeroed shape
/// substituted when the dashboard load fails.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemStats {
    pub total: u32,
    pub submitted: u32,
    pub in_progress: u32,
    pub resolved: u32,
    pub closed: u32,
    pub by_priority: PriorityCounts,
    pub by_category: BTreeMap<String, u32>,
}

/// Everything the admin dashboard displays, replaced wholesale on every
/// load. The client never patches this locally; mutations trigger a reload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub stats: SystemStats,
    pub officers: Vec<Officer>,
    pub complaints: Vec<Complaint>,
    pub degraded: bool,
}

impl DashboardSnapshot {
    /// Combines the three concurrent load results. Any failure zeroes the
    /// stats and marks the snapshot degraded; list portions that did load
    /// are kept so the page still renders something useful.
    pub fn from_parts<E>(
        stats: Result<SystemStats, E>,
        officers: Result<Vec<Officer>, E>,
        complaints: Result<Vec<Complaint>, E>,
    ) -> Self {
        let degraded = stats.is_err() || officers.is_err() || complaints.is_err();
        DashboardSnapshot {
            stats: if degraded {
                SystemStats::default()
            } else {
                stats.unwrap_or_default()
            },
            officers: officers.unwrap_or_default(),
            complaints: complaints.unwrap_or_default(),
            degraded,
        }
    }
}

/// View-side complaint list predicate; never sent to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComplaintFilter {
    pub status: Option<ComplaintStatus>,
    pub priority: Option<Priority>,
}

impl ComplaintFilter {
    pub fn matches(&self, complaint: &Complaint) -> bool {
        self.status.map_or(true, |s| complaint.status == s)
            && self.priority.map_or(true, |p| complaint.priority == p)
    }
}

// Request payloads

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComplaintRequest {
    pub category: String,
    pub description: String,
    pub priority: Priority,
    pub student_id: String,
    pub department: String,
    pub building_name: String,
    pub room_number: String,
    pub issue_location: IssueLocation,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    pub status: ComplaintStatus,
    pub resolution_description: String,
}

/// Builds the status-change payload, attaching the canned resolution note
/// when the transition target is `resolved`.
pub fn status_update_payload(status: ComplaintStatus) -> StatusUpdateRequest {
    StatusUpdateRequest {
        status,
        resolution_description: if status == ComplaintStatus::Resolved {
            RESOLUTION_NOTE.to_string()
        } else {
            String::new()
        },
    }
}

// Form drafts

/// Registration form state. Converted to a request only by `validate`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub role: String,
}

impl RegisterDraft {
    /// Checks email format, password length, password equality, then the
    /// remaining required fields, in that order. An `Err` means no network
    /// call is made.
    pub fn validate(&self) -> Result<RegisterRequest, String> {
        if !validate_email(&self.email) {
            return Err("Invalid email address".to_string());
        }
        if !validate_password(&self.password) {
            return Err("Password must be at least 8 characters".to_string());
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match".to_string());
        }
        if self.first_name.trim().is_empty()
            || self.last_name.trim().is_empty()
            || self.username.trim().is_empty()
        {
            return Err("Please fill in all required fields".to_string());
        }
        Ok(RegisterRequest {
            username: Some(self.username.clone()),
            email: self.email.clone(),
            password: self.password.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone: self.phone.clone(),
            role: if self.role.is_empty() {
                "student".to_string()
            } else {
                self.role.clone()
            },
        })
    }
}

/// Issue report form state, shared by the standalone page and the inline
/// dashboard form.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplaintDraft {
    pub category: String,
    pub custom_category: String,
    pub description: String,
    pub priority: Priority,
    pub student_id: String,
    pub department: String,
    pub building_name: String,
    pub room_number: String,
    pub issue_location: IssueLocation,
    pub image_url: String,
}

impl Default for ComplaintDraft {
    fn default() -> Self {
        ComplaintDraft {
            category: "classroom_issues".to_string(),
            custom_category: String::new(),
            description: String::new(),
            priority: Priority::Medium,
            student_id: String::new(),
            department: String::new(),
            building_name: String::new(),
            room_number: String::new(),
            issue_location: IssueLocation::Classroom,
            image_url: String::new(),
        }
    }
}

impl ComplaintDraft {
    /// Required fields: category, description, student id (the location type
    /// always carries a value). When the category is `other`, the free-text
    /// field is required and becomes the transmitted category.
    pub fn validate(&self) -> Result<CreateComplaintRequest, String> {
        if self.category.is_empty()
            || self.description.trim().is_empty()
            || self.student_id.trim().is_empty()
        {
            return Err("Please fill all required fields".to_string());
        }
        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(format!(
                "Description must be at most {} characters",
                MAX_DESCRIPTION_LEN
            ));
        }
        let category = if self.category == "other" {
            let custom = self.custom_category.trim();
            if custom.is_empty() {
                return Err("Please specify the category".to_string());
            }
            custom.to_string()
        } else {
            self.category.clone()
        };
        Ok(CreateComplaintRequest {
            category,
            description: self.description.clone(),
            priority: self.priority,
            student_id: self.student_id.clone(),
            department: self.department.clone(),
            building_name: self.building_name.clone(),
            room_number: self.room_number.clone(),
            issue_location: self.issue_location,
            image_url: if self.image_url.is_empty() {
                None
            } else {
                Some(self.image_url.clone())
            },
        })
    }
}

/// Staff registration form state (admin dashboard, officers tab).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfficerDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub department: String,
    pub phone: String,
}

impl OfficerDraft {
    pub fn validate(&self) -> Result<RegisterRequest, String> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err("First and last name are required".to_string());
        }
        if !validate_email(&self.email) {
            return Err("Invalid email address".to_string());
        }
        if !validate_password(&self.password) {
            return Err("Password must be at least 8 characters".to_string());
        }
        Ok(RegisterRequest {
            username: None,
            email: self.email.clone(),
            password: self.password.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone: self.phone.clone(),
            role: "officer".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complaint(status: ComplaintStatus, priority: Priority) -> Complaint {
        Complaint {
            id: "65a1".to_string(),
            complaint_id: "CMP-2024-001".to_string(),
            category: "classroom_issues".to_string(),
            description: "Projector is broken".to_string(),
            priority,
            status,
            building_name: None,
            issue_location: Some("Classroom".to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn register_rejects_bad_email() {
        let draft = RegisterDraft {
            email: "not-an-email".to_string(),
            password: "Abc12345!".to_string(),
            confirm_password: "Abc12345!".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.validate().unwrap_err(), "Invalid email address");
    }

    #[test]
    fn register_rejects_short_password() {
        let draft = RegisterDraft {
            email: "a@college.edu".to_string(),
            password: "Abc123!".to_string(),
            confirm_password: "Abc123!".to_string(),
            ..Default::default()
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn register_rejects_mismatched_passwords() {
        let draft = RegisterDraft {
            email: "a@college.edu".to_string(),
            password: "Abc12345!".to_string(),
            confirm_password: "Abc12345?".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.validate().unwrap_err(), "Passwords do not match");
    }

    #[test]
    fn register_rejects_blank_names() {
        let draft = RegisterDraft {
            username: "jdoe".to_string(),
            email: "jdoe@college.edu".to_string(),
            password: "Abc12345!".to_string(),
            confirm_password: "Abc12345!".to_string(),
            ..Default::default()
        };
        assert_eq!(
            draft.validate().unwrap_err(),
            "Please fill in all required fields"
        );
    }

    #[test]
    fn register_accepts_valid_draft_and_defaults_role() {
        let draft = RegisterDraft {
            username: "jdoe".to_string(),
            email: "jdoe@college.edu".to_string(),
            password: "Abc12345!".to_string(),
            confirm_password: "Abc12345!".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            ..Default::default()
        };
        let req = draft.validate().unwrap();
        assert_eq!(req.role, "student");
        assert_eq!(req.username.as_deref(), Some("jdoe"));
    }

    #[test]
    fn complaint_requires_description_and_student_id() {
        let draft = ComplaintDraft {
            student_id: "STU-1".to_string(),
            ..Default::default()
        };
        assert!(draft.validate().is_err());

        let draft = ComplaintDraft {
            description: "Broken window".to_string(),
            ..Default::default()
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn complaint_other_category_requires_custom_text() {
        let mut draft = ComplaintDraft {
            category: "other".to_string(),
            description: "Vending machine ate my coins".to_string(),
            student_id: "STU-1".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.validate().unwrap_err(), "Please specify the category");

        draft.custom_category = "vending machines".to_string();
        let req = draft.validate().unwrap();
        assert_eq!(req.category, "vending machines");
    }

    #[test]
    fn complaint_empty_image_becomes_none() {
        let mut draft = ComplaintDraft {
            description: "Leaky tap".to_string(),
            student_id: "STU-1".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.validate().unwrap().image_url, None);

        draft.image_url = "data:image/png;base64,AAAA".to_string();
        assert_eq!(
            draft.validate().unwrap().image_url.as_deref(),
            Some("data:image/png;base64,AAAA")
        );
    }

    #[test]
    fn complaint_rejects_overlong_description() {
        let draft = ComplaintDraft {
            description: "x".repeat(MAX_DESCRIPTION_LEN + 1),
            student_id: "STU-1".to_string(),
            ..Default::default()
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn officer_draft_forces_officer_role() {
        let draft = OfficerDraft {
            first_name: "Rita".to_string(),
            last_name: "Verma".to_string(),
            email: "rita@college.edu".to_string(),
            password: "Abc12345!".to_string(),
            department: "IT Support".to_string(),
            ..Default::default()
        };
        let req = draft.validate().unwrap();
        assert_eq!(req.role, "officer");
        assert_eq!(req.username, None);
    }

    #[test]
    fn resolution_note_only_on_resolved() {
        let payload = status_update_payload(ComplaintStatus::Resolved);
        assert_eq!(payload.resolution_description, RESOLUTION_NOTE);
        assert!(!payload.resolution_description.is_empty());

        let payload = status_update_payload(ComplaintStatus::Closed);
        assert!(payload.resolution_description.is_empty());
    }

    #[test]
    fn status_serializes_with_dash() {
        let json = serde_json::to_string(&ComplaintStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let back: ComplaintStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(back, ComplaintStatus::InProgress);
    }

    #[test]
    fn filter_matches_status_and_priority_independently() {
        let c = complaint(ComplaintStatus::Submitted, Priority::High);

        assert!(ComplaintFilter::default().matches(&c));
        assert!(ComplaintFilter {
            status: Some(ComplaintStatus::Submitted),
            priority: None,
        }
        .matches(&c));
        assert!(!ComplaintFilter {
            status: Some(ComplaintStatus::Resolved),
            priority: None,
        }
        .matches(&c));
        assert!(!ComplaintFilter {
            status: Some(ComplaintStatus::Submitted),
            priority: Some(Priority::Low),
        }
        .matches(&c));
    }

    #[test]
    fn snapshot_zeroes_stats_when_any_load_fails() {
        let stats = SystemStats {
            total: 12,
            submitted: 4,
            ..Default::default()
        };
        let complaints = vec![complaint(ComplaintStatus::Submitted, Priority::Low)];

        let snap = DashboardSnapshot::from_parts::<&str>(
            Ok(stats.clone()),
            Err("network down"),
            Ok(complaints.clone()),
        );
        assert!(snap.degraded);
        assert_eq!(snap.stats, SystemStats::default());
        assert!(snap.officers.is_empty());
        assert_eq!(snap.complaints, complaints);

        let snap = DashboardSnapshot::from_parts::<&str>(Ok(stats.clone()), Ok(vec![]), Ok(complaints));
        assert!(!snap.degraded);
        assert_eq!(snap.stats, stats);
    }

    #[test]
    fn stats_deserialize_from_wire_shape() {
        let json = r#"{
            "total": 10,
            "submitted": 3,
            "inProgress": 2,
            "resolved": 4,
            "closed": 1,
            "byPriority": { "low": 2, "medium": 5, "high": 3 },
            "byCategory": { "hostel_issues": 6, "it_support": 4 }
        }"#;
        let stats: SystemStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.in_progress, 2);
        assert_eq!(stats.by_priority.high, 3);
        assert_eq!(stats.by_category.get("it_support"), Some(&4));
    }

    #[test]
    fn complaint_deserializes_mixed_case_fields() {
        let json = r#"{
            "id": "65a1",
            "complaint_id": "CMP-2024-007",
            "category": "it_support",
            "description": "WiFi down in Block A",
            "priority": "high",
            "status": "submitted",
            "building_name": "Block A",
            "issueLocation": "Hostel",
            "created_at": "2024-03-05T10:30:00Z"
        }"#;
        let c: Complaint = serde_json::from_str(json).unwrap();
        assert_eq!(c.complaint_id, "CMP-2024-007");
        assert_eq!(c.issue_location.as_deref(), Some("Hostel"));
        assert_eq!(c.display_location(), "Block A");
    }

    #[test]
    fn display_location_falls_back() {
        let mut c = complaint(ComplaintStatus::Submitted, Priority::Low);
        assert_eq!(c.display_location(), "Classroom");
        c.issue_location = None;
        assert_eq!(c.display_location(), "N/A");
        c.building_name = Some("Library Annex".to_string());
        assert_eq!(c.display_location(), "Library Annex");
    }

    #[test]
    fn create_complaint_request_uses_camel_case() {
        let req = CreateComplaintRequest {
            category: "it_support".to_string(),
            description: "d".to_string(),
            priority: Priority::Low,
            student_id: "STU-1".to_string(),
            department: String::new(),
            building_name: String::new(),
            room_number: String::new(),
            issue_location: IssueLocation::CommonArea,
            image_url: None,
        };
        let v: serde_json::Value = serde_json::to_value(&req).unwrap();
        assert_eq!(v["studentId"], "STU-1");
        assert_eq!(v["issueLocation"], "Common Area");
        assert_eq!(v["imageUrl"], serde_json::Value::Null);
    }
}
