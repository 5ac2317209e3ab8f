//! Shared fixtures: a seeded store with one running edition and one futsal event.

#![allow(dead_code)]

use chrono::NaiveDate;
use interclass_games::models::{ParticipantId, SportEventId, TeamId};
use interclass_games::{
    create_edition, create_match, create_participant, create_sport_event, seed_teams,
    update_edition, update_match, update_sport_event, EditionId, EditionUpdate, GameMatch,
    Importance, MatchUpdate, Modality, NewEdition, NewMatch, NewParticipant, NewSportEvent,
    SportEventUpdate, SportRegistry, SportType, Status, Store, TeamName,
};

pub struct Fixture {
    pub store: Store,
    pub sports: SportRegistry,
    pub edition: EditionId,
    pub event: SportEventId,
    pub team_a: TeamId,
    pub team_b: TeamId,
    pub team_c: TeamId,
    pub players_a: Vec<ParticipantId>,
    pub players_b: Vec<ParticipantId>,
    pub players_c: Vec<ParticipantId>,
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn team_id(store: &Store, name: TeamName) -> TeamId {
    store.team_by_name(name).unwrap().id
}

fn add_players(store: &mut Store, team_id: TeamId, year: u32) -> Vec<ParticipantId> {
    (1..=2)
        .map(|n| {
            create_participant(
                store,
                NewParticipant {
                    name: format!("Player {year}-{n}"),
                    class_number: format!("{year}-0{n}"),
                    team_id,
                },
            )
            .unwrap()
            .id
        })
        .collect()
}

impl Fixture {
    /// Edition in progress, FUTSAL/MASCULINE event with 6 total matches, still scheduled.
    pub fn new() -> Self {
        Self::with_total(6)
    }

    pub fn with_total(total_matches: u32) -> Self {
        let mut store = Store::new();
        seed_teams(&mut store);
        let team_a = team_id(&store, TeamName::Blue);
        let team_b = team_id(&store, TeamName::Green);
        let team_c = team_id(&store, TeamName::Orange);
        let players_a = add_players(&mut store, team_a, 1);
        let players_b = add_players(&mut store, team_b, 2);
        let players_c = add_players(&mut store, team_c, 3);

        let edition = create_edition(
            &mut store,
            NewEdition {
                opening_date: date(2026, 3, 1),
                closing_date: date(2026, 6, 30),
            },
        )
        .unwrap()
        .id;
        update_edition(
            &mut store,
            edition,
            EditionUpdate {
                status: Some(Status::InProgress),
                ..Default::default()
            },
        )
        .unwrap();

        let event = create_sport_event(
            &mut store,
            NewSportEvent {
                edition_id: edition,
                sport: SportType::Futsal,
                modality: Modality::Masculine,
                total_matches,
            },
        )
        .unwrap()
        .id;

        Self {
            store,
            sports: SportRegistry::standard(),
            edition,
            event,
            team_a,
            team_b,
            team_c,
            players_a,
            players_b,
            players_c,
        }
    }

    /// Team A against team B with every player of both teams listed.
    pub fn new_match(&self, importance: Importance) -> NewMatch {
        NewMatch {
            sport_event_id: self.event,
            sport: SportType::Futsal,
            modality: Modality::Masculine,
            team_a: self.team_a,
            team_b: self.team_b,
            players: self.players_a.iter().chain(&self.players_b).copied().collect(),
            importance,
            details: None,
        }
    }

    pub fn register(&mut self, importance: Importance) -> GameMatch {
        let new = self.new_match(importance);
        create_match(&mut self.store, &self.sports, new).unwrap()
    }

    pub fn set_event_status(&mut self, status: Status) {
        update_sport_event(
            &mut self.store,
            self.event,
            SportEventUpdate {
                status: Some(status),
                ..Default::default()
            },
        )
        .unwrap();
    }

    pub fn set_match_status(&mut self, id: interclass_games::MatchId, status: Status) -> GameMatch {
        update_match(
            &mut self.store,
            &self.sports,
            id,
            MatchUpdate {
                status: Some(status),
                ..Default::default()
            },
        )
        .unwrap()
    }

    /// Play a match from start to end.
    pub fn play_out(&mut self, id: interclass_games::MatchId) {
        self.set_match_status(id, Status::InProgress);
        self.set_match_status(id, Status::Ended);
    }

    /// Register the two normal matches, start the event and start the first match.
    pub fn running_match(&mut self) -> GameMatch {
        let first = self.register(Importance::Normal);
        self.register(Importance::Normal);
        self.set_event_status(Status::InProgress);
        self.set_match_status(first.id, Status::InProgress)
    }

    pub fn game(&self, id: interclass_games::MatchId) -> GameMatch {
        self.store.game(id).unwrap().clone()
    }
}
