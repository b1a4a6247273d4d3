use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone)]
pub struct Member {
    pub national_id: String,
    pub given_names: String,
    pub surnames: String,
    pub phone: String,
    pub email: String,
    pub active: bool,
    pub membership: Option<Membership>,
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_names, self.surnames)
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.active { "active" } else { "inactive" };
        write!(
            f,
            "{} - {} ({}, {}, {})",
            self.national_id,
            self.full_name(),
            self.phone,
            self.email,
            status
        )
    }
}

/// Partial update for a member. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct MemberUpdate {
    pub given_names: Option<String>,
    pub surnames: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl MemberUpdate {
    pub fn is_empty(&self) -> bool {
        self.given_names.is_none()
            && self.surnames.is_none()
            && self.phone.is_none()
            && self.email.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct Membership {
    pub plan: String,
    pub duration_days: i64,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
}

impl fmt::Display for Membership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} until {})",
            self.plan,
            self.starts_on.format("%d/%m/%Y"),
            self.ends_on.format("%d/%m/%Y")
        )
    }
}

#[derive(Debug, Clone)]
pub struct GymClass {
    pub id: u32,
    pub class_type: String,
    pub instructor: Instructor,
    pub capacity: u32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// National ids in enrollment order.
    pub enrolled: Vec<String>,
}

impl GymClass {
    pub fn is_full(&self) -> bool {
        self.enrolled.len() as u32 >= self.capacity
    }

    pub fn has_enrolled(&self, national_id: &str) -> bool {
        self.enrolled.iter().any(|id| id == national_id)
    }
}

impl fmt::Display for GymClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} with {} on {} at {} ({}/{})",
            self.id,
            self.class_type,
            self.instructor.name,
            self.date.format("%d/%m/%Y"),
            self.time.format("%H:%M"),
            self.enrolled.len(),
            self.capacity
        )
    }
}

#[derive(Debug, Clone)]
pub struct AttendanceRecord {
    pub national_id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// Static reference data describing who leads a class type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instructor {
    pub id: u32,
    pub name: String,
    pub specialty: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub query_date: NaiveDate,
    pub total_members: usize,
    pub active_members: usize,
    pub inactive_members: usize,
    pub attendance_today: usize,
    pub classes_today: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memberships: Option<MembershipTotals>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MembershipTotals {
    pub total: usize,
    pub active: usize,
    pub expired: usize,
}
