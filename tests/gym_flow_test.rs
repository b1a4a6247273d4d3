use chrono::{Duration, Local, NaiveDate, NaiveTime};
use gym_manager::{
    AttendanceRepo, AttendanceService, ClassRepo, ClassService, GymError, MemberRepo,
    MemberService, MembershipService, ReportGenerator, RosterConfig,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_register_and_assign_membership() {
    let mut members = MemberService::new(MemberRepo::new());
    let memberships = MembershipService::new();

    let member = members
        .register("12345678", "Ana", "Gomez", "555-1111", "a@x.com")
        .unwrap();
    assert!(member.active);
    assert!(member.membership.is_none());

    let membership = memberships.create("90 days", 90).unwrap();
    members.assign_membership("12345678", membership).unwrap();

    let today = Local::now().date_naive();
    let stored = members
        .find_by_national_id("12345678")
        .and_then(|m| m.membership.as_ref())
        .unwrap();
    assert_eq!(stored.ends_on, today + Duration::days(90));
}

#[test]
fn test_duplicate_registration_keeps_repo_size() {
    let mut members = MemberService::new(MemberRepo::new());
    members
        .register("12345678", "Ana", "Gomez", "555-1111", "a@x.com")
        .unwrap();

    let result = members.register("12345678", "Otra", "Persona", "555-2222", "o@x.com");
    assert!(matches!(result, Err(GymError::DuplicateKey { .. })));
    assert_eq!(members.repo().len(), 1);
}

#[test]
fn test_class_capacity_one_scenario() {
    let mut members = MemberService::new(MemberRepo::new());
    let mut classes = ClassService::new(ClassRepo::new());
    let roster = RosterConfig::seed();
    let class_day = date(2024, 1, 1);

    members
        .register("11111111", "Ana", "Gomez", "555-1111", "a@x.com")
        .unwrap();
    members
        .register("22222222", "Luis", "Diaz", "555-2222", "l@x.com")
        .unwrap();

    classes.register_class_type("Spinning");
    let class_id = classes
        .create(
            "Spinning",
            roster.instructor_for("Spinning"),
            1,
            class_day,
            time(9, 0),
        )
        .unwrap()
        .id;

    let ana = members.find_by_national_id("11111111").unwrap().clone();
    let luis = members.find_by_national_id("22222222").unwrap().clone();

    classes.enroll(class_id, &ana).unwrap();
    assert!(matches!(
        classes.enroll(class_id, &luis),
        Err(GymError::CapacityExceeded { .. })
    ));

    let today_classes = classes.classes_today(class_day);
    assert_eq!(today_classes.len(), 1);
    assert_eq!(today_classes[0].id, class_id);
}

#[test]
fn test_full_day_summary() {
    let mut members = MemberService::new(MemberRepo::new());
    let memberships = MembershipService::new();
    let mut classes = ClassService::new(ClassRepo::new());
    let mut attendance = AttendanceService::new(AttendanceRepo::new());
    let roster = RosterConfig::seed();
    let as_of = date(2024, 6, 15);

    for (id, given, sur) in [
        ("11111111", "Ana", "Gomez"),
        ("22222222", "Luis", "Diaz"),
        ("33333333", "Eva", "Ruiz"),
    ] {
        members
            .register(id, given, sur, "555-0000", "m@x.com")
            .unwrap();
    }
    members.deactivate("33333333").unwrap();

    // Ana's membership is current as of the query date, Luis's has expired
    let current = memberships
        .create_from("90 days", 90, as_of - Duration::days(10))
        .unwrap();
    members.assign_membership("11111111", current).unwrap();
    let expired = memberships
        .create_from("90 days", 90, as_of - Duration::days(200))
        .unwrap();
    members.assign_membership("22222222", expired).unwrap();

    classes.register_class_type("Yoga");
    classes
        .create("Yoga", roster.instructor_for("Yoga"), 10, as_of, time(9, 0))
        .unwrap();
    classes
        .create(
            "Yoga",
            roster.instructor_for("Yoga"),
            10,
            as_of + Duration::days(1),
            time(9, 0),
        )
        .unwrap();

    attendance.record_at("11111111", as_of, time(8, 0));
    attendance.record_at("11111111", as_of, time(18, 0));
    attendance.record_at("22222222", as_of - Duration::days(1), time(8, 0));

    let generator = ReportGenerator::new(
        members.repo(),
        attendance.repo(),
        classes.repo(),
        Some(&memberships),
    );
    let summary = generator.summary(as_of);

    assert_eq!(summary.query_date, as_of);
    assert_eq!(summary.total_members, 3);
    assert_eq!(summary.active_members, 2);
    assert_eq!(summary.inactive_members, 1);
    assert_eq!(summary.attendance_today, 2);
    assert_eq!(summary.classes_today, 1);

    let totals = summary.memberships.unwrap();
    assert_eq!(totals.total, 2);
    assert_eq!(totals.active, 1);
    assert_eq!(totals.expired, 1);
}

#[test]
fn test_renewal_extends_stored_membership() {
    let mut members = MemberService::new(MemberRepo::new());
    let memberships = MembershipService::new();

    members
        .register("12345678", "Ana", "Gomez", "555-1111", "a@x.com")
        .unwrap();
    let membership = memberships
        .create_from("180 days", 180, date(2024, 1, 1))
        .unwrap();
    members.assign_membership("12345678", membership).unwrap();

    let member = members.find_by_national_id_mut("12345678").unwrap();
    let stored = member.membership.as_mut().unwrap();
    let before = stored.ends_on;
    memberships.renew(stored);

    let after = members
        .find_by_national_id("12345678")
        .and_then(|m| m.membership.as_ref())
        .unwrap()
        .ends_on;
    assert!(after > before);
    assert_eq!(after, date(2024, 1, 1) + Duration::days(360));
}

#[test]
fn test_summary_export_shape() {
    let members = MemberRepo::new();
    let attendance = AttendanceRepo::new();
    let classes = ClassRepo::new();
    let memberships = MembershipService::new();

    let generator =
        ReportGenerator::new(&members, &attendance, &classes, Some(&memberships));
    let summary = generator.summary(date(2024, 1, 1));

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["total_members"], 0);
    assert_eq!(json["query_date"], "2024-01-01");
    assert_eq!(json["memberships"]["total"], 0);
    assert_eq!(json["memberships"]["active"], 0);
}
