#![forbid(unsafe_code)]
use garde::{
    JsonStorage, Month, Person, PersonName, PlanOptions, Planner, Roster, Storage,
    WeekendNeedPolicy,
};

fn sample_roster() -> Roster {
    Roster::new(vec![
        Person::new("alice", true).with_duties_last_month(6),
        Person::new("boris", true),
        Person::new("carl", false).with_duties_last_month(8),
        Person::new("dora", false),
    ])
}

fn plan_month(roster: Roster, year: i32, month: u32) -> garde::MonthPlan {
    Planner::new(roster, Month::new(year, month).unwrap(), PlanOptions::default())
        .unwrap()
        .plan()
        .unwrap()
}

#[test]
fn seed_reflects_this_months_counts() {
    let plan = plan_month(sample_roster(), 2027, 2);
    let seed = plan.rollover_seed();

    // Ordre du roster conservé, disponibilités remises à zéro.
    let names: Vec<&str> = seed.people.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["alice", "boris", "carl", "dora"]);
    for p in &seed.people {
        assert_eq!(p.duties_last_month, plan.quota(&p.name).assigned);
        assert!(p.unavailable_dates.is_empty());
        assert!(p.preassigned_dates.is_empty());
        // Politique par défaut : besoin de week-ends recalculé.
        assert_eq!(p.needs_weekends, plan.quota(&p.name).weekends == 0);
    }
}

#[test]
fn carry_policy_keeps_weekend_need() {
    let options = PlanOptions { weekend_policy: WeekendNeedPolicy::Carry, ..PlanOptions::default() };
    let plan = Planner::new(sample_roster(), Month::new(2027, 2).unwrap(), options)
        .unwrap()
        .plan()
        .unwrap();
    let seed = plan.rollover_seed();

    assert!(seed.find_person("alice").unwrap().needs_weekends);
    assert!(seed.find_person("boris").unwrap().needs_weekends);
    assert!(!seed.find_person("carl").unwrap().needs_weekends);
}

#[test]
fn seed_is_a_valid_next_month_input() {
    let plan = plan_month(sample_roster(), 2027, 2);
    let expected: Vec<u32> = plan.summary().iter().map(|s| s.assigned).collect();

    let next = plan_month(plan.rollover_seed(), 2027, 3);
    let carried: Vec<u32> = next
        .roster()
        .people
        .iter()
        .map(|p| p.duties_last_month)
        .collect();
    assert_eq!(carried, expected);
}

#[test]
fn storage_roundtrip_is_lossless_and_month_keyed() {
    let plan = plan_month(sample_roster(), 2027, 2);
    let seed = plan.rollover_seed();
    let next_month = plan.month().next();

    let dir = tempfile::tempdir().unwrap();
    let storage = JsonStorage::open(dir.path()).unwrap();
    storage.save(next_month, &seed).unwrap();

    assert!(dir.path().join("March_2027_data.json").exists());
    let loaded = storage.load(next_month).unwrap();
    assert_eq!(loaded, seed);
}
