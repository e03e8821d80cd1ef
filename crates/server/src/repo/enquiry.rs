use chrono::{DateTime, Utc};
use shared_types::{AppError, Enquiry, EnquiryCreate, EnquiryStatus};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EnquiryRow {
    pub id: i64,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl EnquiryRow {
    pub fn to_enquiry(&self) -> Enquiry {
        Enquiry {
            id: self.id,
            patient_name: self.patient_name.clone(),
            patient_email: self.patient_email.clone(),
            patient_phone: self.patient_phone.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
            status: EnquiryStatus::from_str_or_default(&self.status),
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

const ENQUIRY_COLUMNS: &str =
    "id, patient_name, patient_email, patient_phone, subject, message, status, created_at";

/// Parse an enquiry id taken from a URL or request body.
pub fn parse_id(raw: &str) -> Result<i64, AppError> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::bad_request("Invalid enquiry ID format")),
    }
}

/// Store a new enquiry. Status always starts as `pending`.
pub async fn create(pool: &Pool<Postgres>, new: &EnquiryCreate) -> Result<EnquiryRow, AppError> {
    sqlx::query_as::<_, EnquiryRow>(&format!(
        r#"
        INSERT INTO enquiries (patient_name, patient_email, patient_phone, subject, message, status)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING {ENQUIRY_COLUMNS}
        "#
    ))
    .bind(&new.patient_name)
    .bind(&new.patient_email)
    .bind(&new.patient_phone)
    .bind(&new.subject)
    .bind(&new.message)
    .bind(EnquiryStatus::Pending.as_str())
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Every enquiry, newest first.
pub async fn list(pool: &Pool<Postgres>) -> Result<Vec<EnquiryRow>, AppError> {
    sqlx::query_as::<_, EnquiryRow>(&format!(
        "SELECT {ENQUIRY_COLUMNS} FROM enquiries ORDER BY created_at DESC, id DESC"
    ))
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

pub async fn find_by_id(pool: &Pool<Postgres>, id: i64) -> Result<Option<EnquiryRow>, AppError> {
    sqlx::query_as::<_, EnquiryRow>(&format!(
        "SELECT {ENQUIRY_COLUMNS} FROM enquiries WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared_types::AppErrorKind;

    #[test]
    fn parse_id_accepts_positive_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id(" 7 ").unwrap(), 7);
    }

    #[test]
    fn parse_id_rejects_malformed_ids() {
        for raw in ["", "abc", "0", "-3", "65f1c0ffee", "1.5"] {
            let err = parse_id(raw).unwrap_err();
            assert_eq!(err.kind, AppErrorKind::BadRequest, "{raw:?}");
            assert_eq!(err.message, "Invalid enquiry ID format");
        }
    }

    #[test]
    fn row_converts_status_and_timestamp() {
        let row = EnquiryRow {
            id: 5,
            patient_name: "Sam Patel".into(),
            patient_email: "sam@example.test".into(),
            patient_phone: "07700900123".into(),
            subject: "Appointment".into(),
            message: "Need a morning slot".into(),
            status: "in-progress".into(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        };
        let enquiry = row.to_enquiry();
        assert_eq!(enquiry.status, EnquiryStatus::InProgress);
        assert_eq!(enquiry.created_at, "2024-03-01T09:30:00+00:00");
    }
}
