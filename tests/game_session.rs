//! Game session and arena behaviour

use tictactoe::{
    Error,
    agents::{MinimaxAgent, RandomAgent},
    arena::{play_game, play_series},
    tictactoe::{Game, GameOutcome, GameStatus, Mark},
};

#[test]
fn human_game_runs_to_a_draw() {
    let mut game = Game::new();
    // X O X
    // X O O
    // O X X
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        game.mark(index).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Draw);
    assert!(matches!(game.mark(0), Err(Error::GameOver)));
}

#[test]
fn computer_blocks_an_open_threat() {
    let mut game = Game::against_computer(Mark::O);
    game.mark(0).unwrap();
    let first_reply = game.history()[1];

    // Threaten whichever line through the corner is still open
    let threat = if first_reply == 1 { 3 } else { 1 };
    game.mark(threat).unwrap();

    let block = if threat == 1 { 2 } else { 6 };
    assert_eq!(game.history()[3], block);
}

#[test]
fn computer_versus_computer_is_a_draw() {
    let mut game = Game::new();
    while game.computer_move().is_some() {}
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.history().len(), 9);
}

#[test]
fn computer_never_loses_as_x() {
    let mut game = Game::against_computer(Mark::X);
    // Keep answering in the first empty cell
    while game.status() == GameStatus::Running {
        let index = game
            .position()
            .empty_cells()
            .next()
            .expect("running game has an empty cell");
        game.mark(index).unwrap();
    }
    assert_ne!(game.status(), GameStatus::Won(Mark::O));
}

#[test]
fn minimax_holds_random_agents_over_many_games() {
    let result = play_series(&mut MinimaxAgent, &mut RandomAgent::new(Some(99)), 30).unwrap();
    assert_eq!(result.o_wins, 0);
    assert_eq!(result.games, 30);
    assert_eq!(result.x_wins + result.draws, 30);

    let result = play_series(&mut RandomAgent::new(Some(100)), &mut MinimaxAgent, 30).unwrap();
    assert_eq!(result.x_wins, 0);
}

#[test]
fn single_game_between_minimax_agents() {
    assert_eq!(
        play_game(&mut MinimaxAgent, &mut MinimaxAgent).unwrap(),
        GameOutcome::Draw
    );
}
