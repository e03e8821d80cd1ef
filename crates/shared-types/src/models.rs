use serde::{Deserialize, Serialize};
use std::fmt;

/// Staff role controlling which dashboards a user may open.
///
/// - `Admin`: practice administrators (user and doctor management).
/// - `Doctor`: clinicians (appointments, patient notes).
/// - `Staff`: front-desk staff (enquiries, bookings).
/// - `User`: authenticated account with no privileged role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Doctor,
    Staff,
    #[default]
    User,
}

impl UserRole {
    /// Every role, in display order.
    pub const ALL: [UserRole; 4] = [
        UserRole::Admin,
        UserRole::Doctor,
        UserRole::Staff,
        UserRole::User,
    ];

    /// Parse a stored role string. Unknown values fall back to `User`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "admin" => UserRole::Admin,
            "doctor" => UserRole::Doctor,
            "staff" => UserRole::Staff,
            _ => UserRole::User,
        }
    }

    /// Lowercase string for database / JWT storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Doctor => "doctor",
            UserRole::Staff => "staff",
            UserRole::User => "user",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Doctor => "Doctor",
            UserRole::Staff => "Staff",
            UserRole::User => "User",
        }
    }

    /// Path of the role's own dashboard, if it has one beyond `/dashboard`.
    pub fn home_path(&self) -> Option<&'static str> {
        match self {
            UserRole::Admin => Some("/admin/dashboard"),
            UserRole::Doctor => Some("/doctor/dashboard"),
            UserRole::Staff => Some("/staff/dashboard"),
            UserRole::User => None,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated user info (safe to send to client).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// Register request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct RegisterRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 6, message = "Password must be at least 6 characters"))
    )]
    pub password: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 100, message = "Full name must be 1-100 characters"))
    )]
    pub full_name: String,
    pub role: UserRole,
}

/// Where a patient enquiry is in the front-desk workflow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EnquiryStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl EnquiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnquiryStatus::Pending => "pending",
            EnquiryStatus::InProgress => "in-progress",
            EnquiryStatus::Completed => "completed",
        }
    }

    /// Parse a stored status. Unknown values read as `Pending`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim() {
            "in-progress" => EnquiryStatus::InProgress,
            "completed" => EnquiryStatus::Completed,
            _ => EnquiryStatus::Pending,
        }
    }
}

/// Patient enquiry submitted through the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct EnquiryCreate {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))
    )]
    pub patient_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub patient_email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 10, max = 15, message = "Phone number must be 10-15 characters"))
    )]
    pub patient_phone: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 200, message = "Subject must be 1-200 characters"))
    )]
    pub subject: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Message is required"))
    )]
    pub message: String,
}

/// Stored enquiry as returned to staff.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Enquiry {
    pub id: i64,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub status: EnquiryStatus,
    /// RFC 3339 timestamp.
    pub created_at: String,
}
