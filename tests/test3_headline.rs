mod common;

use mlb_rss::controller::report::{HEADLINE_ANOMALY, analyze_past_games, make_headline};
use mlb_rss::model::{GameTeam, PastGame, TeamInfo};

use common::{date, final_status, game, postponed_status, schedule, side, suspended_status, utc};

fn followed() -> TeamInfo {
    TeamInfo {
        id: 1,
        name: "Orioles".to_string(),
        abbreviation: "BAL".to_string(),
        team_name: "Orioles".to_string(),
        location_name: "Baltimore".to_string(),
    }
}

/// Past games for 2024-06-14 built from (away, home) sides.
fn past(games: Vec<(GameTeam, GameTeam, bool)>) -> Vec<PastGame> {
    let games = games
        .into_iter()
        .enumerate()
        .map(|(idx, (away, home, postponed))| {
            let status = if postponed {
                postponed_status("Inclement Weather")
            } else {
                final_status()
            };
            game(idx as i64 + 1, utc(2024, 6, 14, 23, 5), away, home, status)
        })
        .collect();
    analyze_past_games(&schedule(vec![(date(2024, 6, 14), games)]), date(2024, 6, 15))
}

#[test]
fn test3_no_games_uses_weekday_and_date() {
    let headline = make_headline(&[], date(2024, 6, 15), &followed());

    assert_eq!(headline, "Baseball report Saturday 2024-06-15");
    assert!(headline.contains("Saturday"));
    assert!(headline.contains("2024-06-15"));
    assert!(!headline.contains(" to "));
}

#[test]
fn test3_single_win() {
    let games = past(vec![(side(2, 3, false), side(1, 5, true), false)]);
    assert_eq!(
        make_headline(&games, date(2024, 6, 15), &followed()),
        "The Orioles win! 5 to 3"
    );
}

#[test]
fn test3_single_loss_leads_with_our_score() {
    let games = past(vec![(side(2, 9, true), side(1, 2, false), false)]);
    assert_eq!(
        make_headline(&games, date(2024, 6, 15), &followed()),
        "The Orioles lose, 2 to 9"
    );
}

#[test]
fn test3_single_tie() {
    let games = past(vec![(side(2, 3, false), side(1, 3, false), false)]);
    assert_eq!(
        make_headline(&games, date(2024, 6, 15), &followed()),
        "The Orioles tie, 3 to 3"
    );
}

#[test]
fn test3_postponed_reason_is_verbatim() {
    let games = past(vec![(side(2, 0, false), side(1, 0, false), true)]);
    let headline = make_headline(&games, date(2024, 6, 15), &followed());

    assert_eq!(headline, "Game was postponed due to Inclement Weather");
    assert!(headline.contains("Inclement Weather"));
}

fn suspended_game(away: GameTeam, home: GameTeam) -> Vec<PastGame> {
    let suspended = game(1, utc(2024, 6, 14, 23, 5), away, home, suspended_status("Suspended: Rain"));
    analyze_past_games(&schedule(vec![(date(2024, 6, 14), vec![suspended])]), date(2024, 6, 15))
}

#[test]
fn test3_suspended_game_is_not_a_loss() {
    // away side leads but nothing is decided yet
    let games = suspended_game(side(2, 3, false), side(1, 2, false));
    let headline = make_headline(&games, date(2024, 6, 15), &followed());

    assert_eq!(headline, "The Orioles game is not final (Suspended: Rain), 2 to 3");
    assert!(!headline.contains("lose"));
}

#[test]
fn test3_suspended_road_game_leads_with_our_score() {
    let games = suspended_game(side(1, 5, false), side(2, 1, false));
    assert_eq!(
        make_headline(&games, date(2024, 6, 15), &followed()),
        "The Orioles game is not final (Suspended: Rain), 5 to 1"
    );
}

#[test]
fn test3_doubleheader_split() {
    let games = past(vec![
        (side(2, 1, false), side(1, 4, true), false),
        (side(2, 6, true), side(1, 2, false), false),
    ]);
    assert_eq!(
        make_headline(&games, date(2024, 6, 15), &followed()),
        "Doubleheader! The Orioles go 1 - 1"
    );
}

#[test]
fn test3_doubleheader_sweep_on_the_road() {
    let games = past(vec![
        (side(1, 4, true), side(2, 1, false), false),
        (side(1, 3, true), side(2, 2, false), false),
    ]);
    assert_eq!(
        make_headline(&games, date(2024, 6, 15), &followed()),
        "Doubleheader! The Orioles go 2 - 0"
    );
}

#[test]
fn test3_doubleheader_postponed_half_counts_for_neither() {
    let games = past(vec![
        (side(2, 0, true), side(1, 1, false), false),
        (side(2, 0, false), side(1, 0, false), true),
    ]);
    assert_eq!(
        make_headline(&games, date(2024, 6, 15), &followed()),
        "Doubleheader! The Orioles go 0 - 1"
    );
}

#[test]
fn test3_more_than_two_games_is_anomaly() {
    let games = past(vec![
        (side(2, 1, false), side(1, 4, true), false),
        (side(2, 6, true), side(1, 2, false), false),
        (side(2, 6, true), side(1, 2, false), false),
    ]);
    assert_eq!(
        make_headline(&games, date(2024, 6, 15), &followed()),
        HEADLINE_ANOMALY
    );
    assert_eq!(HEADLINE_ANOMALY, "error");
}

#[test]
fn test3_doubleheader_suspended_half_counts_for_neither() {
    let mut games = past(vec![(side(2, 1, false), side(1, 4, true), false)]);
    let mut second = suspended_game(side(2, 3, false), side(1, 0, false));
    second[0].game_pk = 2;
    games.append(&mut second);

    assert_eq!(
        make_headline(&games, date(2024, 6, 15), &followed()),
        "Doubleheader! The Orioles go 1 - 0"
    );
}
