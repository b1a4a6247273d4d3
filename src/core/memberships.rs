use crate::domain::model::Membership;
use crate::utils::error::{GymError, Result};
use chrono::{Duration, Local, NaiveDate};

/// Creates and renews memberships. Holds no state of its own; memberships
/// live inside the owning `Member`.
#[derive(Debug, Default)]
pub struct MembershipService;

impl MembershipService {
    pub fn new() -> Self {
        Self
    }

    /// New membership starting today.
    pub fn create(&self, plan: &str, duration_days: i64) -> Result<Membership> {
        self.create_from(plan, duration_days, Local::now().date_naive())
    }

    pub fn create_from(
        &self,
        plan: &str,
        duration_days: i64,
        starts_on: NaiveDate,
    ) -> Result<Membership> {
        if duration_days <= 0 {
            return Err(GymError::InvalidArgument {
                field: "duration_days".to_string(),
                value: duration_days.to_string(),
                reason: "Duration must be a positive number of days".to_string(),
            });
        }
        Ok(Membership {
            plan: plan.to_string(),
            duration_days,
            starts_on,
            ends_on: starts_on + Duration::days(duration_days),
        })
    }

    /// Extends the membership by its original duration, counted from the
    /// current end date. Same-day renewals therefore still push the end
    /// date forward.
    pub fn renew(&self, membership: &mut Membership) {
        membership.ends_on += Duration::days(membership.duration_days);
        tracing::info!(
            "Renewed membership '{}' until {}",
            membership.plan,
            membership.ends_on
        );
    }

    pub fn is_active(&self, membership: &Membership, as_of: NaiveDate) -> bool {
        as_of <= membership.ends_on
    }
}
