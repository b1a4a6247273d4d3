pub mod config;
pub mod core;
pub mod domain;
pub mod menu;
pub mod utils;

pub use config::{roster::RosterConfig, CliConfig};
pub use core::attendance::{AttendanceRepo, AttendanceService};
pub use core::classes::{ClassRepo, ClassService};
pub use core::members::{MemberRepo, MemberService};
pub use core::memberships::MembershipService;
pub use core::reports::ReportGenerator;
pub use menu::Menu;
pub use utils::error::{GymError, Result};
