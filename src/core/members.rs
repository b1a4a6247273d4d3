use crate::domain::model::{Member, MemberUpdate, Membership};
use crate::utils::error::{GymError, Result};

/// Canonical member collection, insertion-ordered and keyed by national id.
#[derive(Debug, Default)]
pub struct MemberRepo {
    members: Vec<Member>,
}

impl MemberRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, member: Member) -> Result<&Member> {
        if self.get(&member.national_id).is_some() {
            return Err(GymError::DuplicateKey {
                entity: "member",
                key: member.national_id,
            });
        }
        self.members.push(member);
        Ok(self.members.last().expect("just pushed"))
    }

    pub fn get(&self, national_id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.national_id == national_id)
    }

    pub fn get_mut(&mut self, national_id: &str) -> Option<&mut Member> {
        self.members
            .iter_mut()
            .find(|m| m.national_id == national_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

pub struct MemberService {
    repo: MemberRepo,
}

impl MemberService {
    pub fn new(repo: MemberRepo) -> Self {
        Self { repo }
    }

    pub fn register(
        &mut self,
        national_id: &str,
        given_names: &str,
        surnames: &str,
        phone: &str,
        email: &str,
    ) -> Result<&Member> {
        let member = Member {
            national_id: national_id.to_string(),
            given_names: given_names.to_string(),
            surnames: surnames.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            active: true,
            membership: None,
        };
        let member = self.repo.insert(member)?;
        tracing::info!("Registered member {}", member.national_id);
        Ok(member)
    }

    /// Applies only the supplied, non-empty fields; the rest keep their values.
    pub fn edit(&mut self, national_id: &str, update: MemberUpdate) -> Result<()> {
        let member = self
            .repo
            .get_mut(national_id)
            .ok_or_else(|| GymError::NotFound {
                entity: "member",
                key: national_id.to_string(),
            })?;

        if let Some(given_names) = update.given_names.filter(|v| !v.trim().is_empty()) {
            member.given_names = given_names;
        }
        if let Some(surnames) = update.surnames.filter(|v| !v.trim().is_empty()) {
            member.surnames = surnames;
        }
        if let Some(phone) = update.phone.filter(|v| !v.trim().is_empty()) {
            member.phone = phone;
        }
        if let Some(email) = update.email.filter(|v| !v.trim().is_empty()) {
            member.email = email;
        }

        tracing::debug!("Updated member {}", national_id);
        Ok(())
    }

    pub fn find_by_national_id(&self, national_id: &str) -> Option<&Member> {
        self.repo.get(national_id)
    }

    pub fn find_by_national_id_mut(&mut self, national_id: &str) -> Option<&mut Member> {
        self.repo.get_mut(national_id)
    }

    pub fn list_active(&self) -> Vec<&Member> {
        self.repo.iter().filter(|m| m.active).collect()
    }

    pub fn activate(&mut self, national_id: &str) -> Result<()> {
        self.set_active(national_id, true)
    }

    pub fn deactivate(&mut self, national_id: &str) -> Result<()> {
        self.set_active(national_id, false)
    }

    fn set_active(&mut self, national_id: &str, active: bool) -> Result<()> {
        let member = self
            .repo
            .get_mut(national_id)
            .ok_or_else(|| GymError::NotFound {
                entity: "member",
                key: national_id.to_string(),
            })?;
        member.active = active;
        tracing::info!(
            "Member {} is now {}",
            national_id,
            if active { "active" } else { "inactive" }
        );
        Ok(())
    }

    /// Replaces the member's current membership unconditionally.
    pub fn assign_membership(&mut self, national_id: &str, membership: Membership) -> Result<()> {
        let member = self
            .repo
            .get_mut(national_id)
            .ok_or_else(|| GymError::NotFound {
                entity: "member",
                key: national_id.to_string(),
            })?;
        member.membership = Some(membership);
        tracing::info!("Assigned membership to member {}", national_id);
        Ok(())
    }

    pub fn repo(&self) -> &MemberRepo {
        &self.repo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_with_ana() -> MemberService {
        let mut service = MemberService::new(MemberRepo::new());
        service
            .register("12345678", "Ana", "Gomez", "555-1111", "a@x.com")
            .unwrap();
        service
    }

    #[test]
    fn test_register_defaults() {
        let service = service_with_ana();
        let member = service.find_by_national_id("12345678").unwrap();

        assert!(member.active);
        assert!(member.membership.is_none());
        assert_eq!(member.full_name(), "Ana Gomez");
    }

    #[test]
    fn test_register_duplicate_national_id() {
        let mut service = service_with_ana();
        let result = service.register("12345678", "Ana Maria", "Gomez", "555-2222", "b@x.com");

        assert!(matches!(result, Err(GymError::DuplicateKey { .. })));
        assert_eq!(service.repo().len(), 1);
    }

    #[test]
    fn test_edit_applies_only_supplied_fields() {
        let mut service = service_with_ana();
        service
            .edit(
                "12345678",
                MemberUpdate {
                    phone: Some("555-9999".to_string()),
                    email: Some("  ".to_string()), // whitespace-only is skipped
                    ..Default::default()
                },
            )
            .unwrap();

        let member = service.find_by_national_id("12345678").unwrap();
        assert_eq!(member.phone, "555-9999");
        assert_eq!(member.email, "a@x.com");
        assert_eq!(member.given_names, "Ana");
    }

    #[test]
    fn test_edit_unknown_member() {
        let mut service = service_with_ana();
        let result = service.edit("00000000", MemberUpdate::default());
        assert!(matches!(result, Err(GymError::NotFound { .. })));
    }

    #[test]
    fn test_activate_deactivate_cycle() {
        let mut service = service_with_ana();

        service.deactivate("12345678").unwrap();
        assert!(service.list_active().is_empty());

        // Idempotent
        service.deactivate("12345678").unwrap();
        assert!(service.list_active().is_empty());

        service.activate("12345678").unwrap();
        let active = service.list_active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].national_id, "12345678");
    }

    #[test]
    fn test_list_active_preserves_insertion_order() {
        let mut service = service_with_ana();
        service
            .register("87654321", "Luis", "Diaz", "555-2222", "l@x.com")
            .unwrap();
        service
            .register("11112222", "Eva", "Ruiz", "555-3333", "e@x.com")
            .unwrap();
        service.deactivate("87654321").unwrap();

        let ids: Vec<&str> = service
            .list_active()
            .iter()
            .map(|m| m.national_id.as_str())
            .collect();
        assert_eq!(ids, vec!["12345678", "11112222"]);
    }

    #[test]
    fn test_assign_membership_replaces_previous() {
        use chrono::NaiveDate;

        let mut service = service_with_ana();
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let first = Membership {
            plan: "90 days".to_string(),
            duration_days: 90,
            starts_on: start,
            ends_on: start + chrono::Duration::days(90),
        };
        let second = Membership {
            plan: "365 days".to_string(),
            duration_days: 365,
            starts_on: start,
            ends_on: start + chrono::Duration::days(365),
        };

        service.assign_membership("12345678", first).unwrap();
        service.assign_membership("12345678", second).unwrap();

        let member = service.find_by_national_id("12345678").unwrap();
        assert_eq!(member.membership.as_ref().unwrap().plan, "365 days");
    }
}
