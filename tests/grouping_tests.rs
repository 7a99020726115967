use roster_prep::roster::{ColumnMap, PlayerRecord, RosterGrouper, RosterSizeWarning};
use roster_prep::testing_utils::TestDataBuilder;

fn separate_columns() -> ColumnMap {
    ColumnMap::from_headers(&TestDataBuilder::separate_headers(), "test input").unwrap()
}

/// 14 rows split 8/6 over two spellings of each team
#[test]
fn test_two_teams_with_undersized_roster() {
    let mut rows = Vec::new();
    for n in 1..=8 {
        let team = if n % 2 == 0 { "12u red" } else { "12U RED" };
        rows.push(TestDataBuilder::raw_row(
            &format!("red{n}"),
            "skater",
            team,
            &n.to_string(),
        ));
    }
    for n in 1..=6 {
        rows.push(TestDataBuilder::raw_row(
            &format!("blue{n}"),
            "skater",
            "10Ublue",
            &format!("#{n}"),
        ));
    }

    let outcome = RosterGrouper::new(7).group_by_team(&rows, &separate_columns());

    assert_eq!(
        outcome.roster.team_names().collect::<Vec<_>>(),
        vec!["12U Red", "10U Blue"]
    );
    assert_eq!(outcome.roster.get("12U Red").unwrap().len(), 8);
    assert_eq!(outcome.roster.get("10U Blue").unwrap().len(), 6);
    assert_eq!(outcome.stats.players, 14);
    assert_eq!(
        outcome.warnings,
        vec![RosterSizeWarning {
            team_name: "10U Blue".to_string(),
            player_count: 6,
            min_roster_size: 7,
        }]
    );

    // Source order is kept inside each bucket
    let red_names: Vec<&str> = outcome
        .roster
        .get("12U Red")
        .unwrap()
        .iter()
        .map(|player| player.first_name.as_str())
        .collect();
    assert_eq!(
        red_names,
        vec!["Red1", "Red2", "Red3", "Red4", "Red5", "Red6", "Red7", "Red8"]
    );
}

#[test]
fn test_default_threshold_flags_small_team_only() {
    let mut rows = TestDataBuilder::team_rows("14u white", 10);
    rows.extend(TestDataBuilder::team_rows("14u black", 4));

    let outcome = RosterGrouper::default().group_by_team(&rows, &separate_columns());

    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].team_name, "14U Black");
    assert_eq!(outcome.warnings[0].player_count, 4);
    assert_eq!(outcome.roster.player_count(), 14);
}

#[test]
fn test_size_warning_never_drops_players() {
    let rows = TestDataBuilder::team_rows("8u green", 2);
    let outcome = RosterGrouper::new(10).group_by_team(&rows, &separate_columns());

    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.roster.get("8U Green").unwrap().len(), 2);
}

#[test]
fn test_realistic_registration_rows() {
    let rows = vec![
        TestDataBuilder::raw_row("TY", "MACCALLUM", "12u red", "#10"),
        TestDataBuilder::raw_row("jp", "o'neil", "12u red", "7"),
        TestDataBuilder::raw_row("mary-kate", "SMITH-JONES", "12u red", "N/A"),
        TestDataBuilder::raw_row("john (jack)", "doe", "13Uaaa", "22"),
        TestDataBuilder::raw_row("bob", "smith iii", "13Uaaa", " 3 "),
    ];

    let outcome = RosterGrouper::new(1).group_by_team(&rows, &separate_columns());

    let red = outcome.roster.get("12U Red").unwrap();
    assert_eq!(red[0], PlayerRecord::new("Ty", "MacCallum", "12U Red", "10"));
    assert_eq!(red[1], PlayerRecord::new("JP", "O'Neil", "12U Red", "7"));
    assert_eq!(red[2], PlayerRecord::new("Mary-Kate", "Smith-Jones", "12U Red", "00"));

    let aaa = outcome.roster.get("13U AAA").unwrap();
    assert_eq!(aaa[0], PlayerRecord::new("John (Jack)", "Doe", "13U AAA", "22"));
    assert_eq!(aaa[1], PlayerRecord::new("Bob", "Smith III", "13U AAA", "3"));

    assert_eq!(outcome.stats.sweater_defaults, 1);
}

#[test]
fn test_combined_name_export() {
    let headers = TestDataBuilder::combined_headers();
    let columns = ColumnMap::from_headers(&headers, "combined").unwrap();
    let rows = vec![
        TestDataBuilder::full_name_row("John Q Doe", "12u red", "5"),
        TestDataBuilder::full_name_row("Sam Smith Jr.", "12u red", "6"),
        TestDataBuilder::full_name_row("aj mccarthy - Goalie", "12u red", "30"),
    ];

    let outcome = RosterGrouper::new(1).group_by_team(&rows, &columns);

    let red = outcome.roster.get("12U Red").unwrap();
    assert_eq!(red[0], PlayerRecord::new("John Q", "Doe", "12U Red", "5"));
    assert_eq!(red[1], PlayerRecord::new("Sam", "Smith Jr.", "12U Red", "6"));
    assert_eq!(red[2], PlayerRecord::new("AJ", "McCarthy", "12U Red", "30"));
}

#[test]
fn test_grouping_is_idempotent_on_its_output() {
    let rows = vec![
        TestDataBuilder::raw_row("aj", "MCDONALD", "12u red", "4"),
        TestDataBuilder::raw_row("ty", "van dyke", "12u red", "#8"),
        TestDataBuilder::raw_row("lee", "smith ii", "10ublue", ""),
    ];
    let first_pass = RosterGrouper::new(1).group_by_team(&rows, &separate_columns());

    let exported: Vec<Vec<String>> = first_pass
        .roster
        .clone()
        .into_players()
        .into_iter()
        .map(|p| TestDataBuilder::raw_row(&p.first_name, &p.last_name, &p.team_name, &p.sweater_number))
        .collect();
    let second_pass = RosterGrouper::new(1).group_by_team(&exported, &separate_columns());

    assert_eq!(first_pass.roster, second_pass.roster);
}
