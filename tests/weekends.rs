#![forbid(unsafe_code)]
use chrono::NaiveDate;
use garde::{Month, Person, PersonName, PlanOptions, Planner, Roster};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn plan_month(roster: Roster, year: i32, month: u32) -> garde::MonthPlan {
    Planner::new(roster, Month::new(year, month).unwrap(), PlanOptions::default())
        .unwrap()
        .plan()
        .unwrap()
}

#[test]
fn fully_unavailable_weekend_person_ends_at_zero() {
    // Février 2027 : week-ends les 6,7,13,14,20,21,27,28.
    let weekend_days: Vec<NaiveDate> =
        [6, 7, 13, 14, 20, 21, 27, 28].iter().map(|&x| d(2027, 2, x)).collect();
    let roster = Roster::new(vec![
        Person::new("alice", true).unavailable_on(weekend_days),
        Person::new("boris", true),
        Person::new("carl", false),
    ]);
    let plan = plan_month(roster, 2027, 2);

    // 0 ou 2 : indisponible partout, alice retombe à 0, sans erreur.
    let alice = plan.quota(&PersonName::new("alice"));
    assert_eq!(alice.weekends, 0);
    assert!(alice.assigned > 0, "alice garde des jours de semaine");
}

#[test]
fn repair_swaps_weekend_from_overloaded_holder() {
    // Janvier 2027 : samedis 2,9,16,23,30 ; dimanches 3,10,17,24,31.
    //
    // alice ne peut prendre que les 2 et 9 ; wanda que les 3 et 10 ; boris
    // est libre partout. boris, à 0 week-end le 9, passe devant alice qui en
    // a déjà un, puis le relâchement le pousse à 4. La réparation rend le 9
    // à alice.
    let alice_unavailable: Vec<NaiveDate> =
        [3, 8, 10, 16, 17, 23, 24, 30, 31].iter().map(|&x| d(2027, 1, x)).collect();
    let wanda_unavailable: Vec<NaiveDate> =
        [2, 9, 16, 17, 23, 24, 30, 31].iter().map(|&x| d(2027, 1, x)).collect();
    let roster = Roster::new(vec![
        Person::new("alice", true).unavailable_on(alice_unavailable),
        Person::new("wanda", true).unavailable_on(wanda_unavailable),
        Person::new("boris", true),
        Person::new("carl", false),
        Person::new("dora", false),
    ]);
    let plan = plan_month(roster, 2027, 1);

    assert_eq!(plan.assignee(d(2027, 1, 9)).map(|n| n.as_str()), Some("alice"));
    assert_eq!(plan.quota(&PersonName::new("alice")).weekends, 2);
    assert_eq!(plan.quota(&PersonName::new("wanda")).weekends, 2);
    assert_eq!(plan.quota(&PersonName::new("boris")).weekends, 3);
    assert!(plan.single_weekend_people().is_empty());

    // Les dimanches voisins des samedis de boris restent non pourvus.
    assert_eq!(plan.unassigned_dates(), vec![d(2027, 1, 17), d(2027, 1, 24), d(2027, 1, 31)]);
}

#[test]
fn unrepairable_single_weekend_is_tolerated() {
    // alice n'a qu'une seule fenêtre de week-end : rien à réparer, elle
    // reste à 1 (dernier recours assumé).
    let alice_unavailable: Vec<NaiveDate> =
        [3, 9, 10, 16, 17, 23, 24, 30, 31].iter().map(|&x| d(2027, 1, x)).collect();
    let roster = Roster::new(vec![
        Person::new("alice", true).unavailable_on(alice_unavailable),
        Person::new("boris", true),
        Person::new("carl", false),
    ]);
    let plan = plan_month(roster, 2027, 1);

    assert_eq!(plan.quota(&PersonName::new("alice")).weekends, 1);
    assert_eq!(
        plan.single_weekend_people(),
        vec![&PersonName::new("alice")]
    );
}
