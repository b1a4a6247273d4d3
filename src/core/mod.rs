pub mod attendance;
pub mod classes;
pub mod members;
pub mod memberships;
pub mod reports;

pub use crate::domain::model::{
    AttendanceRecord, GymClass, Instructor, Member, MemberUpdate, Membership, MembershipTotals,
    ReportSummary,
};
pub use crate::utils::error::Result;
