use crate::core::attendance::AttendanceRepo;
use crate::core::classes::ClassRepo;
use crate::core::members::MemberRepo;
use crate::core::memberships::MembershipService;
use crate::domain::model::{MembershipTotals, ReportSummary};
use chrono::NaiveDate;

/// Read-only aggregation over the repositories. Membership totals are only
/// produced when a membership service is supplied.
pub struct ReportGenerator<'a> {
    members: &'a MemberRepo,
    attendance: &'a AttendanceRepo,
    classes: &'a ClassRepo,
    memberships: Option<&'a MembershipService>,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(
        members: &'a MemberRepo,
        attendance: &'a AttendanceRepo,
        classes: &'a ClassRepo,
        memberships: Option<&'a MembershipService>,
    ) -> Self {
        Self {
            members,
            attendance,
            classes,
            memberships,
        }
    }

    pub fn summary(&self, as_of: NaiveDate) -> ReportSummary {
        let total_members = self.members.len();
        let active_members = self.members.iter().filter(|m| m.active).count();

        let memberships = self.memberships.map(|service| {
            let owned: Vec<_> = self
                .members
                .iter()
                .filter_map(|m| m.membership.as_ref())
                .collect();
            let active = owned
                .iter()
                .filter(|m| service.is_active(m, as_of))
                .count();
            MembershipTotals {
                total: owned.len(),
                active,
                expired: owned.len() - active,
            }
        });

        ReportSummary {
            query_date: as_of,
            total_members,
            active_members,
            inactive_members: total_members - active_members,
            attendance_today: self.attendance.iter().filter(|r| r.date == as_of).count(),
            classes_today: self.classes.iter().filter(|c| c.date == as_of).count(),
            memberships,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_on_empty_repositories() {
        let members = MemberRepo::new();
        let attendance = AttendanceRepo::new();
        let classes = ClassRepo::new();

        let generator = ReportGenerator::new(&members, &attendance, &classes, None);
        let summary = generator.summary(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        assert_eq!(summary.total_members, 0);
        assert_eq!(summary.active_members, 0);
        assert_eq!(summary.inactive_members, 0);
        assert_eq!(summary.attendance_today, 0);
        assert_eq!(summary.classes_today, 0);
        assert!(summary.memberships.is_none());
    }

    #[test]
    fn test_summary_without_membership_service_omits_totals() {
        let members = MemberRepo::new();
        let attendance = AttendanceRepo::new();
        let classes = ClassRepo::new();

        let generator = ReportGenerator::new(&members, &attendance, &classes, None);
        let summary = generator.summary(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("memberships").is_none());
    }
}
