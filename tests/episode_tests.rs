//! End-to-end cleaning scenarios driven through the public API.

use serde_json::json;
use tidyroom::actions::{
    check_final_step, empty_wastebin, pick_up_books, pick_up_clothes, place_books_on_shelf,
    put_clothes_in_hamper, NOT_TIDY_MESSAGE, TIDY_MESSAGE,
};
use tidyroom::episode::{Decision, ScriptedOracle};
use tidyroom::room::{coerce, Books, Clothes, Wastebin};
use tidyroom::{EpisodeBuilder, EpisodeOutcome, RoomConfig, RoomState, ToolCall};

#[test]
fn dirty_room_is_cleaned_step_by_step() {
    let start = json!({"clothes": "floor", "books": "scattered", "wastebin": "full"});
    assert_eq!(check_final_step(start.clone()).unwrap(), NOT_TIDY_MESSAGE);

    let state = pick_up_clothes(start).unwrap();
    assert_eq!(
        coerce(state.as_str()).unwrap(),
        RoomState::new(Clothes::Hand, Books::Scattered, Wastebin::Full)
    );

    let state = put_clothes_in_hamper(state).unwrap();
    assert_eq!(coerce(state.as_str()).unwrap().clothes, Clothes::Hamper);

    let state = pick_up_books(state).unwrap();
    assert_eq!(coerce(state.as_str()).unwrap().books, Books::Hand);

    let state = place_books_on_shelf(state).unwrap();
    assert_eq!(coerce(state.as_str()).unwrap().books, Books::Shelf);

    let state = empty_wastebin(state).unwrap();
    assert_eq!(coerce(state.as_str()).unwrap(), RoomState::tidy());

    assert_eq!(check_final_step(state).unwrap(), TIDY_MESSAGE);
}

#[test]
fn scripted_episode_reaches_the_goal() {
    let mut episode = EpisodeBuilder::new().build().unwrap();
    let mut oracle = ScriptedOracle::chained(&[
        "pick_up_clothes",
        "put_clothes_in_hamper",
        "pick_up_books",
        "place_books_on_shelf",
        "empty_wastebin",
        "check_final_step",
    ]);

    let outcome = episode.run(&mut oracle);

    assert!(outcome.is_clean());
    assert_eq!(outcome.steps(), 6);
    assert_eq!(
        episode.history().actions(),
        vec![
            "pick_up_clothes",
            "put_clothes_in_hamper",
            "pick_up_books",
            "place_books_on_shelf",
            "empty_wastebin",
        ]
    );
    assert_eq!(episode.history().get_path().len(), 6);
}

#[test]
fn oracle_recovers_from_a_bad_tool_call() {
    let mut episode = EpisodeBuilder::new().build().unwrap();
    let mut oracle = ScriptedOracle::new(vec![
        Decision::Invoke(ToolCall::new("mop_floor", RoomState::dirty())),
        Decision::Invoke(ToolCall::new(
            "empty_wastebin",
            "{'clothes': 'floor', 'books': 'scattered', 'wastebin': 'full'}",
        )),
        Decision::Finish("done".to_string()),
    ]);

    let outcome = episode.run(&mut oracle);

    assert_eq!(outcome.steps(), 2);
    assert!(!outcome.is_clean());
    assert!(oracle.observations()[1].starts_with("Unknown action 'mop_floor'"));
    assert_eq!(episode.current_state().wastebin, Wastebin::Empty);
}

#[test]
fn default_budget_matches_ten_steps() {
    let mut episode = EpisodeBuilder::new().build().unwrap();
    let mut stubborn =
        |_: &str| Decision::Invoke(ToolCall::new("pick_up_books", RoomState::dirty()));

    let outcome = episode.run(&mut stubborn);

    assert!(matches!(
        outcome,
        EpisodeOutcome::BudgetExhausted { steps: 10, .. }
    ));
}

#[test]
fn strict_config_rejects_skipped_steps() {
    let config = RoomConfig::from_json(r#"{"mode": "strict"}"#).unwrap();
    let mut episode = EpisodeBuilder::new().config(config).build().unwrap();
    let mut oracle = ScriptedOracle::chained(&["put_clothes_in_hamper", "pick_up_clothes"]);

    let outcome = episode.run(&mut oracle);

    assert_eq!(outcome.steps(), 2);
    assert_eq!(episode.history().actions(), vec!["pick_up_clothes"]);
    assert_eq!(episode.current_state().clothes, Clothes::Hand);
}
