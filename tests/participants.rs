//! Participants, roster import and teams.

mod common;

use common::Fixture;
use interclass_games::{
    check_class_number, create_participant, create_team, delete_participant, delete_team,
    import_participants, parse_roster, seed_teams, update_participant, update_team, ErrorKind,
    Importance, NewParticipant, NewTeam, ParticipantUpdate, Resource, Store, TeamName, TeamUpdate,
    TournamentError,
};

#[test]
fn class_numbers_follow_year_dash_two_digits() {
    for ok in ["1-01", "2-15", "3-99"] {
        assert_eq!(check_class_number(ok), Ok(()), "{ok}");
    }
    for bad in ["0-01", "4-01", "1-1", "1_01", "1-012", "a-01", ""] {
        assert_eq!(
            check_class_number(bad),
            Err(TournamentError::InvalidClassNumber(bad.to_string())),
            "{bad}"
        );
    }
}

#[test]
fn participant_needs_a_name_and_an_existing_team() {
    let mut fx = Fixture::new();
    let err = create_participant(
        &mut fx.store,
        NewParticipant {
            name: "   ".into(),
            class_number: "1-01".into(),
            team_id: fx.team_a,
        },
    )
    .unwrap_err();
    assert_eq!(err, TournamentError::EmptyName);

    let err = create_participant(
        &mut fx.store,
        NewParticipant {
            name: "Ana".into(),
            class_number: "1-01".into(),
            team_id: uuid::Uuid::new_v4(),
        },
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let ana = create_participant(
        &mut fx.store,
        NewParticipant {
            name: " Ana ".into(),
            class_number: "3-12".into(),
            team_id: fx.team_c,
        },
    )
    .unwrap();
    assert_eq!(ana.name, "Ana");
}

#[test]
fn listed_participants_keep_their_team_and_cannot_be_deleted() {
    let mut fx = Fixture::new();
    fx.register(Importance::Normal);
    let listed = fx.players_a[0];

    let err = update_participant(
        &mut fx.store,
        listed,
        ParticipantUpdate {
            team_id: Some(fx.team_c),
            ..Default::default()
        },
    )
    .unwrap_err();
    assert_eq!(
        err,
        TournamentError::InUse {
            resource: Resource::Participant,
            id: listed
        }
    );
    assert_eq!(err.kind(), ErrorKind::UnprocessableEntity);

    let renamed = update_participant(
        &mut fx.store,
        listed,
        ParticipantUpdate {
            name: Some("Renamed".into()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(renamed.name, "Renamed");
    assert_eq!(renamed.team_id, fx.team_a);

    assert!(delete_participant(&mut fx.store, listed).is_err());
    delete_participant(&mut fx.store, fx.players_c[0]).unwrap();
    assert!(fx.store.participant(fx.players_c[0]).is_err());
}

#[test]
fn roster_import_reads_csv_with_loose_team_names() {
    let mut store = Store::new();
    seed_teams(&mut store);
    let csv = "name,class_number,team\nAna Souza, 1-03 ,blue\nBruno Lima,2-11,WHITE\n";
    let rows = parse_roster(csv.as_bytes()).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].class_number, "1-03");

    let imported = import_participants(&mut store, rows).unwrap();
    assert_eq!(imported.len(), 2);
    assert_eq!(store.participants.len(), 2);
    let white = store.team_by_name(TeamName::White).unwrap().id;
    assert_eq!(imported[1].team_id, white);
}

#[test]
fn roster_import_is_all_or_nothing() {
    let mut store = Store::new();
    seed_teams(&mut store);
    let csv = "name,class_number,team\nAna,1-03,Blue\nBruno,2-11,Red\n";
    let rows = parse_roster(csv.as_bytes()).unwrap();
    let err = import_participants(&mut store, rows).unwrap_err();
    assert_eq!(err, TournamentError::UnknownTeamName("Red".into()));
    assert_eq!(err.kind(), ErrorKind::BadRequest);
    assert!(store.participants.is_empty());

    let csv = "name,class_number,team\nAna,1-03,Blue\nBruno,9-11,Green\n";
    let rows = parse_roster(csv.as_bytes()).unwrap();
    assert!(matches!(
        import_participants(&mut store, rows),
        Err(TournamentError::InvalidClassNumber(_))
    ));
    assert!(store.participants.is_empty());
}

#[test]
fn malformed_roster_is_a_csv_error() {
    let csv = "name,class_number\nAna,1-03\n";
    assert!(parse_roster(csv.as_bytes()).is_err());
}

#[test]
fn seeding_fills_in_missing_teams_once() {
    let mut store = Store::new();
    assert_eq!(seed_teams(&mut store), 5);
    assert_eq!(seed_teams(&mut store), 0);
    for name in TeamName::COMPETING {
        assert!(store.team_by_name(name).is_some(), "{name:?}");
    }
}

#[test]
fn team_names_are_unique() {
    let mut store = Store::new();
    seed_teams(&mut store);
    let err = create_team(&mut store, NewTeam { name: TeamName::Blue }).unwrap_err();
    assert_eq!(err, TournamentError::DuplicateTeam(TeamName::Blue));
    assert_eq!(err.kind(), ErrorKind::Conflict);

    let green = store.team_by_name(TeamName::Green).unwrap().id;
    assert!(update_team(
        &mut store,
        green,
        TeamUpdate {
            name: Some(TeamName::Blue),
            ..Default::default()
        }
    )
    .is_err());

    let scored = update_team(
        &mut store,
        green,
        TeamUpdate {
            points: Some(12),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(scored.points, 12);
    assert_eq!(scored.name, TeamName::Green);
}

#[test]
fn referenced_teams_cannot_be_deleted() {
    let mut fx = Fixture::new();
    let err = delete_team(&mut fx.store, fx.team_a).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnprocessableEntity);

    let purple = fx.store.team_by_name(TeamName::Purple).unwrap().id;
    delete_team(&mut fx.store, purple).unwrap();
    assert!(fx.store.team_by_name(TeamName::Purple).is_none());
}
