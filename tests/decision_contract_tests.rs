//! Decision/phase contract.
//!
//! Every phase accepts only its own decisions. Anything else is rejected
//! with a `RulesError` and leaves the game exactly as it was.

use party_board::board::TileId;
use party_board::core::{BoardLayout, Decision, GameConfig, GameState, PlayerId, RulesError, SetupError};
use party_board::effects::ShopItem;
use party_board::rules::{Phase, TurnEngine};
use party_board::ConfigError;

fn island() -> GameState {
    let config = GameConfig::new(3).with_board(BoardLayout::StarlightIsland);
    GameState::new(config, 64).unwrap()
}

fn all_decisions() -> Vec<Decision> {
    vec![
        Decision::Roll,
        Decision::ChooseBranch(TileId::new(7)),
        Decision::BuyStar,
        Decision::DeclineStar,
        Decision::BuyItem(ShopItem::Shield),
        Decision::LeaveShop,
        Decision::FinishMinigame(vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]),
    ]
}

/// Apply every decision the phase does not list as legal and check each
/// one bounces off.
fn assert_rejects_illegal(state: &GameState) {
    let legal = TurnEngine::legal_decisions(state);
    for decision in all_decisions() {
        let accepted_kind = legal.iter().any(|d| d.name() == decision.name())
            || matches!((&state.phase, &decision), (Phase::Minigame { .. }, Decision::FinishMinigame(_)));
        if accepted_kind {
            continue;
        }

        let mut copy = state.clone();
        let err = TurnEngine::apply(&mut copy, decision.clone()).unwrap_err();
        assert!(
            matches!(err, RulesError::WrongPhase { .. } | RulesError::GameOver),
            "{decision:?} in {:?} gave {err:?}",
            state.phase
        );
        assert_eq!(copy.phase, state.phase);
        assert_eq!(copy.history, state.history);
        assert_eq!(copy.players, state.players);
    }
}

#[test]
fn test_setup_rejects_bad_player_counts() {
    for count in [0, 1, 5] {
        let result = GameState::new(GameConfig::new(count), 1);
        assert_eq!(result.unwrap_err(), SetupError::Config(ConfigError::PlayerCount(count)));
    }
}

#[test]
fn test_setup_rejects_zero_rounds() {
    let result = GameState::new(GameConfig::new(2).with_rounds(0), 1);
    assert_eq!(result.unwrap_err(), SetupError::Config(ConfigError::ZeroRounds));
}

#[test]
fn test_waiting_accepts_only_roll() {
    let state = island();
    assert_eq!(TurnEngine::legal_decisions(&state), vec![Decision::Roll]);
    assert_rejects_illegal(&state);
}

#[test]
fn test_automatic_phases_reject_everything() {
    let mut state = island();
    TurnEngine::apply(&mut state, Decision::Roll).unwrap();
    assert!(matches!(state.phase, Phase::Rolling { .. }));
    assert!(TurnEngine::legal_decisions(&state).is_empty());
    assert_rejects_illegal(&state);

    TurnEngine::advance(&mut state).unwrap();
    assert_eq!(state.phase, Phase::Moving);
    assert_rejects_illegal(&state);
}

#[test]
fn test_decision_phases_cannot_advance() {
    let mut state = island();
    assert_eq!(
        TurnEngine::advance(&mut state),
        Err(RulesError::AwaitingDecision { phase: "Waiting" })
    );
    assert_eq!(TurnEngine::run_until_blocked(&mut state), 0);

    state.current_mut().position = TileId::new(6);
    state.moves_left = 3;
    state.phase = Phase::Moving;
    TurnEngine::run_until_blocked(&mut state);

    assert!(state.pending_branch_choice().is_some());
    assert_eq!(
        TurnEngine::advance(&mut state),
        Err(RulesError::AwaitingDecision { phase: "BranchChoice" })
    );
    assert_rejects_illegal(&state);
}

#[test]
fn test_star_decision_contract() {
    let mut state = island();
    state.current_mut().coins = 25;
    state.current_mut().position = TileId::new(9);
    state.moves_left = 1;
    state.phase = Phase::Moving;
    TurnEngine::run_until_blocked(&mut state);

    assert_eq!(
        TurnEngine::legal_decisions(&state),
        vec![Decision::BuyStar, Decision::DeclineStar]
    );
    assert_rejects_illegal(&state);
}

#[test]
fn test_shop_contract() {
    let mut state = island();
    state.current_mut().coins = 3;
    state.current_mut().position = TileId::new(7);
    state.moves_left = 1;
    state.phase = Phase::Moving;
    TurnEngine::run_until_blocked(&mut state);

    assert_eq!(
        TurnEngine::legal_decisions(&state),
        vec![Decision::BuyItem(ShopItem::Shield), Decision::LeaveShop]
    );
    assert_rejects_illegal(&state);

    let before = state.clone();
    assert_eq!(
        TurnEngine::apply(&mut state, Decision::BuyItem(ShopItem::DoubleDice)),
        Err(RulesError::ItemNotOffered(ShopItem::DoubleDice))
    );
    assert_eq!(state.players, before.players);

    TurnEngine::apply(&mut state, Decision::LeaveShop).unwrap();
    assert_eq!(state.players[PlayerId::new(0)].coins, 3);
    assert_eq!(state.current_player, PlayerId::new(1));
}

#[test]
fn test_shop_unaffordable_ends_turn() {
    let mut state = island();
    state.current_mut().coins = 2;
    state.current_mut().position = TileId::new(7);
    state.moves_left = 1;
    state.phase = Phase::Moving;
    TurnEngine::run_until_blocked(&mut state);

    assert_eq!(state.phase, Phase::Waiting);
    assert_eq!(state.current_player, PlayerId::new(1));
}

#[test]
fn test_minigame_ranking_must_be_permutation() {
    let mut state = island();
    state.current_player = PlayerId::new(2);
    state.current_mut().position = TileId::new(0);
    state.moves_left = 1;
    state.phase = Phase::Moving;
    TurnEngine::run_until_blocked(&mut state);
    assert!(matches!(state.phase, Phase::Minigame { .. }));
    assert_rejects_illegal(&state);

    let before = state.clone();
    for ranking in [
        vec![],
        vec![PlayerId::new(0), PlayerId::new(1)],
        vec![PlayerId::new(0), PlayerId::new(0), PlayerId::new(1)],
        vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(3)],
    ] {
        assert_eq!(
            TurnEngine::apply(&mut state, Decision::FinishMinigame(ranking)),
            Err(RulesError::InvalidRanking)
        );
        assert_eq!(state.players, before.players);
        assert_eq!(state.phase, before.phase);
        assert_eq!(state.round, 1);
    }

    TurnEngine::apply(
        &mut state,
        Decision::FinishMinigame(vec![PlayerId::new(2), PlayerId::new(1), PlayerId::new(0)]),
    )
    .unwrap();
    assert_eq!(state.round, 2);
}

#[test]
fn test_game_over_rejects_everything() {
    let config = GameConfig::new(2).with_rounds(1).with_board(BoardLayout::StarlightIsland);
    let mut state = GameState::new(config, 5).unwrap();
    state.current_player = PlayerId::new(1);
    state.moves_left = 1;
    state.phase = Phase::Moving;
    TurnEngine::run_until_blocked(&mut state);
    TurnEngine::apply(&mut state, Decision::FinishMinigame(vec![PlayerId::new(0), PlayerId::new(1)])).unwrap();

    assert!(state.is_game_over());
    assert!(TurnEngine::legal_decisions(&state).is_empty());
    for decision in all_decisions() {
        assert_eq!(TurnEngine::apply(&mut state, decision), Err(RulesError::GameOver));
    }
    assert_eq!(TurnEngine::advance(&mut state), Err(RulesError::GameOver));
}
