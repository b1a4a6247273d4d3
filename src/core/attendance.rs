use crate::domain::model::{AttendanceRecord, Member};
use chrono::{Local, NaiveDate, NaiveTime};

/// Append-only attendance log in check-in order.
#[derive(Debug, Default)]
pub struct AttendanceRepo {
    records: Vec<AttendanceRecord>,
}

impl AttendanceRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: AttendanceRecord) -> &AttendanceRecord {
        self.records.push(record);
        self.records.last().expect("just pushed")
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttendanceRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub struct AttendanceService {
    repo: AttendanceRepo,
}

impl AttendanceService {
    pub fn new(repo: AttendanceRepo) -> Self {
        Self { repo }
    }

    /// Check-in stamped with the current date and time. Duplicate same-day
    /// check-ins are allowed.
    pub fn record(&mut self, member: &Member) -> &AttendanceRecord {
        let now = Local::now();
        self.record_at(&member.national_id, now.date_naive(), now.time())
    }

    pub fn record_at(
        &mut self,
        national_id: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> &AttendanceRecord {
        tracing::info!("Attendance for member {} on {}", national_id, date);
        self.repo.append(AttendanceRecord {
            national_id: national_id.to_string(),
            date,
            time,
        })
    }

    pub fn for_day(&self, date: NaiveDate) -> Vec<&AttendanceRecord> {
        self.repo.iter().filter(|r| r.date == date).collect()
    }

    pub fn history_for(&self, national_id: &str) -> Vec<&AttendanceRecord> {
        self.repo
            .iter()
            .filter(|r| r.national_id == national_id)
            .collect()
    }

    pub fn repo(&self) -> &AttendanceRepo {
        &self.repo
    }
}
