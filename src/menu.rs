//! Interactive text menu. Collects validated input from stdin, calls into
//! the services, and prints whatever comes back. Errors are printed and the
//! user is re-prompted; nothing here terminates the process except the main
//! menu's quit option.

use crate::config::roster::RosterConfig;
use crate::config::CliConfig;
use crate::core::attendance::{AttendanceRepo, AttendanceService};
use crate::core::classes::{ClassRepo, ClassService};
use crate::core::members::{MemberRepo, MemberService};
use crate::core::memberships::MembershipService;
use crate::core::reports::ReportGenerator;
use crate::domain::model::{MemberUpdate, ReportSummary};
use crate::utils::error::Result;
use crate::utils::{formatters, validation};
use chrono::Local;
use std::io::{self, Write};

pub struct Menu {
    members: MemberService,
    memberships: MembershipService,
    classes: ClassService,
    attendance: AttendanceService,
    roster: RosterConfig,
    export_path: Option<String>,
}

impl Menu {
    pub fn new(config: &CliConfig) -> Result<Self> {
        let roster = match &config.roster_file {
            Some(path) => RosterConfig::from_file(path)?,
            None => RosterConfig::seed(),
        };

        let mut classes = ClassService::new(ClassRepo::new());
        for instructor in roster.instructors() {
            classes.register_class_type(&instructor.specialty);
        }

        Ok(Self {
            members: MemberService::new(MemberRepo::new()),
            memberships: MembershipService::new(),
            classes,
            attendance: AttendanceService::new(AttendanceRepo::new()),
            roster,
            export_path: config.report_export.clone(),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            println!(
                "\n=============================================\n\
                 GYM MANAGEMENT SYSTEM\n\
                 =============================================\n\
                 1. Members\n\
                 2. Memberships\n\
                 3. Attendance\n\
                 4. Classes\n\
                 5. Reports\n\
                 6. Quit\n\
                 ============================================="
            );
            match read_line("Select an option: ").as_str() {
                "1" => self.members_menu(),
                "2" => self.memberships_menu(),
                "3" => self.attendance_menu(),
                "4" => self.classes_menu(),
                "5" => self.reports_menu(),
                "6" => {
                    tracing::info!("Exiting");
                    return Ok(());
                }
                _ => println!("Invalid option."),
            }
        }
    }

    // ------------------------------------------------------------------
    // Members

    fn members_menu(&mut self) {
        loop {
            println!(
                "\n------------- MEMBERS -------------\n\
                 1. Register new member\n\
                 2. Edit member\n\
                 3. Find member by national id\n\
                 4. List active members\n\
                 5. Activate / deactivate member\n\
                 6. Back\n\
                 -----------------------------------"
            );
            match read_line("Select an option: ").as_str() {
                "1" => {
                    let national_id = prompt_validated("National id: ", |v| {
                        validation::validate_national_id(v)
                    });
                    let given_names =
                        prompt_validated("Given names: ", |v| validation::validate_name("given_names", v));
                    let surnames =
                        prompt_validated("Surnames: ", |v| validation::validate_name("surnames", v));
                    let phone = prompt_validated("Phone: ", |v| validation::validate_phone(v));
                    let email = prompt_validated("Email: ", |v| validation::validate_email(v));

                    match self
                        .members
                        .register(&national_id, &given_names, &surnames, &phone, &email)
                    {
                        Ok(member) => println!("Member registered: {}", member),
                        Err(e) => println!("{}", e),
                    }
                }
                "2" => {
                    let national_id = prompt_validated("National id: ", |v| {
                        validation::validate_national_id(v)
                    });
                    if self.members.find_by_national_id(&national_id).is_none() {
                        println!("Member not found.");
                        continue;
                    }
                    let update = MemberUpdate {
                        given_names: optional_field("New given names: "),
                        surnames: optional_field("New surnames: "),
                        phone: optional_field("New phone: "),
                        email: optional_field("New email: "),
                    };
                    match self.members.edit(&national_id, update) {
                        Ok(()) => println!("Member updated."),
                        Err(e) => println!("{}", e),
                    }
                }
                "3" => {
                    let national_id = prompt_validated("National id: ", |v| {
                        validation::validate_national_id(v)
                    });
                    match self.members.find_by_national_id(&national_id) {
                        Some(member) => println!("{}", member),
                        None => println!("Member not found."),
                    }
                }
                "4" => {
                    let active = self.members.list_active();
                    if active.is_empty() {
                        println!("No active members.");
                    } else {
                        let lines: Vec<String> = active.iter().map(|m| m.to_string()).collect();
                        println!("{}", formatters::numbered_list(&lines));
                    }
                }
                "5" => {
                    let national_id = prompt_validated("National id: ", |v| {
                        validation::validate_national_id(v)
                    });
                    let currently_active = match self.members.find_by_national_id(&national_id) {
                        Some(member) => member.active,
                        None => {
                            println!("Member not found.");
                            continue;
                        }
                    };
                    let result = if currently_active {
                        self.members.deactivate(&national_id)
                    } else {
                        self.members.activate(&national_id)
                    };
                    match result {
                        Ok(()) => println!("Status updated."),
                        Err(e) => println!("{}", e),
                    }
                }
                "6" => break,
                _ => println!("Invalid option."),
            }
        }
    }

    // ------------------------------------------------------------------
    // Memberships

    fn memberships_menu(&mut self) {
        loop {
            println!(
                "\n----------- MEMBERSHIPS -----------\n\
                 1. Assign membership\n\
                 2. Renew membership\n\
                 3. Show status\n\
                 4. Back\n\
                 -----------------------------------"
            );
            let option = read_line("Select an option: ");
            if option == "4" {
                break;
            }
            if !matches!(option.as_str(), "1" | "2" | "3") {
                println!("Invalid option.");
                continue;
            }

            let national_id =
                prompt_validated("National id: ", |v| validation::validate_national_id(v));
            if self.members.find_by_national_id(&national_id).is_none() {
                println!("Member not found.");
                continue;
            }

            match option.as_str() {
                "1" => {
                    let days = match read_line("Plan 1) 90 days  2) 180 days  3) 365 days: ").as_str()
                    {
                        "1" => 90,
                        "2" => 180,
                        "3" => 365,
                        _ => {
                            println!("Invalid option.");
                            continue;
                        }
                    };
                    let membership = match self.memberships.create(&format!("{} days", days), days)
                    {
                        Ok(membership) => membership,
                        Err(e) => {
                            println!("{}", e);
                            continue;
                        }
                    };
                    let ends_on = membership.ends_on;
                    match self.members.assign_membership(&national_id, membership) {
                        Ok(()) => {
                            println!("Membership assigned until {}", formatters::format_date(ends_on))
                        }
                        Err(e) => println!("{}", e),
                    }
                }
                "2" => {
                    let membership = self
                        .members
                        .find_by_national_id_mut(&national_id)
                        .and_then(|m| m.membership.as_mut());
                    match membership {
                        Some(membership) => {
                            self.memberships.renew(membership);
                            println!(
                                "Membership renewed until {}",
                                formatters::format_date(membership.ends_on)
                            );
                        }
                        None => println!("No membership."),
                    }
                }
                "3" => {
                    let membership = self
                        .members
                        .find_by_national_id(&national_id)
                        .and_then(|m| m.membership.as_ref());
                    match membership {
                        Some(membership) => {
                            let today = Local::now().date_naive();
                            let status = if self.memberships.is_active(membership, today) {
                                "active"
                            } else {
                                "expired"
                            };
                            println!("{} [{}]", membership, status);
                        }
                        None => println!("No membership."),
                    }
                }
                _ => unreachable!(),
            }
        }
    }

    // ------------------------------------------------------------------
    // Attendance

    fn attendance_menu(&mut self) {
        loop {
            println!(
                "\n----------- ATTENDANCE -----------\n\
                 1. Record attendance\n\
                 2. History by member\n\
                 3. Today's attendance\n\
                 4. Back\n\
                 ----------------------------------"
            );
            match read_line("Select an option: ").as_str() {
                "1" => {
                    let national_id =
                        prompt_validated("National id: ", |v| validation::validate_national_id(v));
                    match self.members.find_by_national_id(&national_id) {
                        Some(member) => {
                            let member = member.clone();
                            self.attendance.record(&member);
                            println!("Attendance recorded.");
                        }
                        None => println!("Member not found."),
                    }
                }
                "2" => {
                    let national_id =
                        prompt_validated("National id: ", |v| validation::validate_national_id(v));
                    if self.members.find_by_national_id(&national_id).is_none() {
                        println!("Member not found.");
                        continue;
                    }
                    let history = self.attendance.history_for(&national_id);
                    if history.is_empty() {
                        println!("No attendance records.");
                    } else {
                        let lines: Vec<String> = history
                            .iter()
                            .map(|r| {
                                format!(
                                    "{} {}",
                                    formatters::format_date(r.date),
                                    formatters::format_time(r.time)
                                )
                            })
                            .collect();
                        println!("{}", formatters::numbered_list(&lines));
                    }
                }
                "3" => {
                    let today = Local::now().date_naive();
                    let records = self.attendance.for_day(today);
                    if records.is_empty() {
                        println!("No attendance today.");
                    } else {
                        let lines: Vec<String> = records
                            .iter()
                            .map(|r| {
                                let name = self
                                    .members
                                    .find_by_national_id(&r.national_id)
                                    .map(|m| m.full_name())
                                    .unwrap_or_else(|| r.national_id.clone());
                                format!("{} {}", name, formatters::format_time(r.time))
                            })
                            .collect();
                        println!("{}", formatters::numbered_list(&lines));
                    }
                }
                "4" => break,
                _ => println!("Invalid option."),
            }
        }
    }

    // ------------------------------------------------------------------
    // Classes

    fn classes_menu(&mut self) {
        loop {
            println!(
                "\n-------------- CLASSES --------------\n\
                 1. Create class\n\
                 2. Today's classes\n\
                 3. Enroll member\n\
                 4. Show enrolled\n\
                 5. Back\n\
                 -------------------------------------"
            );
            match read_line("Select an option: ").as_str() {
                "1" => {
                    let types = self.classes.class_types().to_vec();
                    if types.is_empty() {
                        println!("No class types registered.");
                        continue;
                    }
                    println!("{}", formatters::numbered_list(&types));
                    let class_type = match read_line("Select a type: ")
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| n.checked_sub(1))
                        .and_then(|i| types.get(i))
                    {
                        Some(class_type) => class_type.clone(),
                        None => {
                            println!("Invalid option.");
                            continue;
                        }
                    };
                    let date = prompt_parsed("Date (YYYY-MM-DD): ", |v| {
                        validation::parse_date("date", v)
                    });
                    let time =
                        prompt_parsed("Time (HH:MM): ", |v| validation::parse_time("time", v));
                    let capacity = prompt_parsed("Capacity: ", |v| {
                        validation::parse_capacity("capacity", v)
                    });
                    let instructor = self.roster.instructor_for(&class_type);
                    match self
                        .classes
                        .create(&class_type, instructor, capacity, date, time)
                    {
                        Ok(class) => println!("Class created: {}", class),
                        Err(e) => println!("{}", e),
                    }
                }
                "2" => {
                    let today = Local::now().date_naive();
                    let classes = self.classes.classes_today(today);
                    if classes.is_empty() {
                        println!("No classes today.");
                    } else {
                        let lines: Vec<String> = classes.iter().map(|c| c.to_string()).collect();
                        println!("{}", formatters::numbered_list(&lines));
                    }
                }
                "3" => {
                    let class_id = prompt_parsed("Class id: ", parse_class_id);
                    let national_id =
                        prompt_validated("National id: ", |v| validation::validate_national_id(v));
                    let member = match self.members.find_by_national_id(&national_id) {
                        Some(member) => member.clone(),
                        None => {
                            println!("Member not found.");
                            continue;
                        }
                    };
                    match self.classes.enroll(class_id, &member) {
                        Ok(()) => println!("Member enrolled."),
                        Err(e) => println!("{}", e),
                    }
                }
                "4" => {
                    let class_id = prompt_parsed("Class id: ", parse_class_id);
                    match self.classes.find_by_id(class_id) {
                        Some(class) if !class.enrolled.is_empty() => {
                            let lines: Vec<String> = class
                                .enrolled
                                .iter()
                                .map(|id| {
                                    self.members
                                        .find_by_national_id(id)
                                        .map(|m| m.full_name())
                                        .unwrap_or_else(|| id.clone())
                                })
                                .collect();
                            println!("{}", formatters::numbered_list(&lines));
                        }
                        Some(_) => println!("No enrolled members."),
                        None => println!("Class not found."),
                    }
                }
                "5" => break,
                _ => println!("Invalid option."),
            }
        }
    }

    // ------------------------------------------------------------------
    // Reports

    fn reports_menu(&mut self) {
        loop {
            println!(
                "\n-------------- REPORTS --------------\n\
                 1. Summary\n\
                 2. Back\n\
                 -------------------------------------"
            );
            match read_line("Select an option: ").as_str() {
                "1" => {
                    let generator = ReportGenerator::new(
                        self.members.repo(),
                        self.attendance.repo(),
                        self.classes.repo(),
                        Some(&self.memberships),
                    );
                    let summary = generator.summary(Local::now().date_naive());
                    print_summary(&summary);

                    if let Some(path) = &self.export_path {
                        match export_summary(&summary, path) {
                            Ok(()) => println!("Summary exported to {}", path),
                            Err(e) => println!("{}", e),
                        }
                    }
                }
                "2" => break,
                _ => println!("Invalid option."),
            }
        }
    }
}

fn print_summary(summary: &ReportSummary) {
    println!("\n=== GYM SUMMARY ===");
    println!("Date: {}", formatters::format_date(summary.query_date));
    println!("Total members: {}", summary.total_members);
    println!("  - Active:    {}", summary.active_members);
    println!("  - Inactive:  {}", summary.inactive_members);
    println!("Attendance today: {}", summary.attendance_today);
    println!("Classes today:    {}", summary.classes_today);
    if let Some(totals) = &summary.memberships {
        println!("Total memberships: {}", totals.total);
        println!("  - Active:        {}", totals.active);
        println!("  - Expired:       {}", totals.expired);
    }
    println!("===================");
}

fn export_summary(summary: &ReportSummary, path: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json)?;
    tracing::info!("Summary report written to {}", path);
    Ok(())
}

fn parse_class_id(value: &str) -> Result<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| crate::utils::error::GymError::InvalidArgument {
            field: "class_id".to_string(),
            value: value.to_string(),
            reason: "Expected a numeric class id".to_string(),
        })
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(_) => line.trim().to_string(),
        Err(_) => String::new(),
    }
}

/// Keeps asking until the validator accepts the input.
fn prompt_validated<F>(prompt: &str, validate: F) -> String
where
    F: Fn(&str) -> Result<()>,
{
    loop {
        let value = read_line(prompt);
        match validate(&value) {
            Ok(()) => return value,
            Err(e) => println!("{}", e),
        }
    }
}

/// Keeps asking until the input parses.
fn prompt_parsed<T, F>(prompt: &str, parse: F) -> T
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        match parse(&read_line(prompt)) {
            Ok(value) => return value,
            Err(e) => println!("{}", e),
        }
    }
}

/// Empty input means "leave unchanged".
fn optional_field(prompt: &str) -> Option<String> {
    let value = read_line(prompt);
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
