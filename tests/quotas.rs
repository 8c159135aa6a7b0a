#![forbid(unsafe_code)]
use garde::{Month, Person, PersonName, PlanOptions, Planner, Roster};

fn plan_month(roster: Roster, year: i32, month: u32) -> garde::MonthPlan {
    Planner::new(roster, Month::new(year, month).unwrap(), PlanOptions::default())
        .unwrap()
        .plan()
        .unwrap()
}

fn target(plan: &garde::MonthPlan, name: &str) -> u32 {
    plan.quota(&PersonName::new(name)).target_duties
}

#[test]
fn last_month_load_shifts_quotas() {
    // Janvier 2027 : 31 jours, 4 personnes -> base 7, reste 3.
    let roster = Roster::new(vec![
        Person::new("alice", false).with_duties_last_month(10),
        Person::new("boris", false).with_duties_last_month(8),
        Person::new("carl", false).with_duties_last_month(2),
        Person::new("dora", false),
    ]);
    let plan = plan_month(roster, 2027, 1);

    // Le reste va aux plus chargés du mois dernier, puis ceux au-dessus de
    // la base perdent un jour (plancher : la base).
    assert_eq!(target(&plan, "alice"), 7);
    assert_eq!(target(&plan, "boris"), 7);
    assert_eq!(target(&plan, "carl"), 8);
    assert_eq!(target(&plan, "dora"), 7);
}

#[test]
fn quota_monotonic_in_last_month_duties() {
    let roster = Roster::new(vec![
        Person::new("heavy", false).with_duties_last_month(20),
        Person::new("light", false),
    ]);
    let plan = plan_month(roster, 2027, 3);
    assert!(target(&plan, "heavy") <= target(&plan, "light"));
}

#[test]
fn weekend_need_raises_minimum_target() {
    // Juin 2027 : 30 jours, 20 personnes -> base 1, reste 10.
    let mut people: Vec<Person> = (0..20).map(|i| Person::new(format!("p{i:02}"), false)).collect();
    people[15].needs_weekends = true;
    let plan = plan_month(Roster::new(people), 2027, 6);

    // Les 10 premiers (ordre du roster, tous à égalité) prennent le reste.
    assert_eq!(target(&plan, "p00"), 2);
    assert_eq!(target(&plan, "p12"), 1);
    // p15 visait 1, relevé à 2 parce qu'il prend des week-ends.
    assert_eq!(target(&plan, "p15"), 2);
    assert_eq!(plan.quota(&PersonName::new("p15")).target_weekends, 2);
    assert_eq!(plan.quota(&PersonName::new("p00")).target_weekends, 0);
}

#[test]
fn lone_weekend_person_absorbs_saturdays_sundays_stay_open() {
    let mut people: Vec<Person> = (0..20).map(|i| Person::new(format!("p{i:02}"), false)).collect();
    people[15].needs_weekends = true;
    let plan = plan_month(Roster::new(people), 2027, 6);

    // p15 enchaîne les samedis (2 stricts puis relâchement) ; les dimanches,
    // adjacents, restent non pourvus.
    let unfilled = plan.unassigned_dates();
    let sundays: Vec<u32> = vec![6, 13, 20, 27];
    assert_eq!(
        unfilled
            .iter()
            .map(|d| chrono::Datelike::day(d))
            .collect::<Vec<_>>(),
        sundays
    );
    assert_eq!(plan.quota(&PersonName::new("p15")).weekends, 4);
}
