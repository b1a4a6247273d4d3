use crate::domain::model::{GymClass, Instructor, Member};
use crate::utils::error::{GymError, Result};
use chrono::{NaiveDate, NaiveTime};

/// Canonical class collection. Ids are sequential, assigned on insert.
#[derive(Debug)]
pub struct ClassRepo {
    classes: Vec<GymClass>,
    next_id: u32,
}

impl Default for ClassRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassRepo {
    pub fn new() -> Self {
        Self {
            classes: Vec::new(),
            next_id: 1,
        }
    }

    fn take_next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn get(&self, class_id: u32) -> Option<&GymClass> {
        self.classes.iter().find(|c| c.id == class_id)
    }

    pub fn get_mut(&mut self, class_id: u32) -> Option<&mut GymClass> {
        self.classes.iter_mut().find(|c| c.id == class_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GymClass> {
        self.classes.iter()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

pub struct ClassService {
    repo: ClassRepo,
    class_types: Vec<String>,
}

impl ClassService {
    pub fn new(repo: ClassRepo) -> Self {
        Self {
            repo,
            class_types: Vec::new(),
        }
    }

    /// Adds a class type for the selection menu. No-op if already known.
    pub fn register_class_type(&mut self, label: &str) {
        if !self.class_types.iter().any(|t| t == label) {
            self.class_types.push(label.to_string());
        }
    }

    pub fn class_types(&self) -> &[String] {
        &self.class_types
    }

    pub fn create(
        &mut self,
        class_type: &str,
        instructor: Instructor,
        capacity: u32,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<&GymClass> {
        if capacity == 0 {
            return Err(GymError::InvalidArgument {
                field: "capacity".to_string(),
                value: capacity.to_string(),
                reason: "Capacity must be at least 1".to_string(),
            });
        }
        let id = self.repo.take_next_id();
        self.repo.classes.push(GymClass {
            id,
            class_type: class_type.to_string(),
            instructor,
            capacity,
            date,
            time,
            enrolled: Vec::new(),
        });
        let class = self.repo.classes.last().expect("just pushed");
        tracing::info!("Created class #{} ({})", class.id, class.class_type);
        Ok(class)
    }

    pub fn classes_today(&self, today: NaiveDate) -> Vec<&GymClass> {
        self.repo.iter().filter(|c| c.date == today).collect()
    }

    pub fn enroll(&mut self, class_id: u32, member: &Member) -> Result<()> {
        let class = self.repo.get_mut(class_id).ok_or(GymError::NotFound {
            entity: "class",
            key: class_id.to_string(),
        })?;
        if class.has_enrolled(&member.national_id) {
            return Err(GymError::DuplicateEnrollment {
                class_id,
                national_id: member.national_id.clone(),
            });
        }
        if class.is_full() {
            return Err(GymError::CapacityExceeded {
                class_id,
                capacity: class.capacity,
            });
        }
        class.enrolled.push(member.national_id.clone());
        tracing::info!("Enrolled member {} in class #{}", member.national_id, class_id);
        Ok(())
    }

    pub fn find_by_id(&self, class_id: u32) -> Option<&GymClass> {
        self.repo.get(class_id)
    }

    pub fn repo(&self) -> &ClassRepo {
        &self.repo
    }
}
