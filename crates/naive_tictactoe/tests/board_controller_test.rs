//! Tests for the board controller through the public API.

use naive_tictactoe::{
    Board, BoardController, GameConfig, Highlight, Outcome, Player, Position, Square, Surface,
    rules,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

/// Surface that mirrors what a DOM container would hold.
#[derive(Debug, Default)]
struct Tiles {
    ids: Vec<String>,
    content: Vec<String>,
    classes: Vec<Vec<&'static str>>,
}

impl Surface for Tiles {
    fn clear(&mut self) {
        self.ids.clear();
        self.content.clear();
        self.classes.clear();
    }

    fn add_tile(&mut self, position: Position) {
        self.ids.push(position.tile_id());
        self.content.push(String::new());
        self.classes.push(vec!["tile"]);
    }

    fn show_marker(&mut self, position: Position, marker: &str) {
        self.content[position.to_index()] = marker.to_string();
    }

    fn highlight(&mut self, position: Position, highlight: Highlight) {
        self.classes[position.to_index()].push(highlight.class_name());
    }
}

fn start(seed: u64, config: GameConfig) -> BoardController<Tiles, StdRng> {
    let mut controller = BoardController::new(Tiles::default(), StdRng::seed_from_u64(seed), config);
    controller.run();
    controller
}

fn play_out(controller: &mut BoardController<Tiles, StdRng>) -> Outcome {
    loop {
        let next = Position::open_cells(controller.board())[0];
        if let Some(outcome) = controller.mark_tile(next, Player::Human) {
            return outcome;
        }
    }
}

#[test]
fn test_tiles_have_ids_in_board_order() {
    let controller = start(0, GameConfig::default());
    let expected: Vec<String> = (0..9).map(|i| format!("tile-{}", i)).collect();
    assert_eq!(controller.surface().ids, expected);
}

#[test]
fn test_markers_come_from_config() {
    let mut controller = start(11, GameConfig::new("🐱", "🤖"));
    controller.mark_tile(Position::Center, Player::Human);

    let surface = controller.surface();
    assert_eq!(surface.content[4], "🐱");
    let computer_tiles: Vec<usize> = (0..9).filter(|i| surface.content[*i] == "🤖").collect();
    assert_eq!(computer_tiles.len(), 1);
    assert_ne!(computer_tiles[0], 4);
}

#[test]
fn test_reply_lands_on_an_open_tile() {
    for seed in 0..50 {
        let mut controller = start(seed, GameConfig::default());
        controller.mark_tile(Position::Center, Player::Human);

        let computer: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|p| controller.board().get(*p) == Square::Occupied(Player::Computer))
            .collect();
        assert_eq!(computer.len(), 1);
        assert_ne!(computer[0], Position::Center);
        assert!(!controller.finished());
    }
}

#[test]
fn test_every_tile_is_eventually_chosen() {
    let mut seen = [false; 9];
    for seed in 0..200 {
        let mut controller = start(seed, GameConfig::default());
        controller.mark_tile(Position::Center, Player::Human);
        for pos in Position::ALL {
            if controller.board().get(pos) == Square::Occupied(Player::Computer) {
                seen[pos.to_index()] = true;
            }
        }
    }
    assert!(!seen[4]);
    assert!(seen.iter().enumerate().all(|(i, s)| i == 4 || *s));
}

#[test]
fn test_outcome_matches_board_and_highlights() {
    for seed in 0..100 {
        let mut controller = start(seed, GameConfig::default());
        let outcome = play_out(&mut controller);
        let board = controller.board();
        let classes = &controller.surface().classes;

        match outcome {
            Outcome::HumanWon => {
                let line = rules::winning_line(board, Player::Human).unwrap();
                for pos in line {
                    assert_eq!(classes[pos.to_index()], vec!["tile", "won"]);
                }
            }
            Outcome::HumanLost => {
                assert!(rules::winning_line(board, Player::Human).is_none());
                let line = rules::winning_line(board, Player::Computer).unwrap();
                for pos in line {
                    assert_eq!(classes[pos.to_index()], vec!["tile", "lost"]);
                }
            }
            Outcome::Draw => {
                assert!(rules::is_draw(board));
                assert!(classes.iter().all(|c| c == &vec!["tile", "lost"]));
            }
        }
    }
}

#[test]
fn test_finished_round_is_frozen_until_restart() {
    let mut controller = start(5, GameConfig::default());
    play_out(&mut controller);
    let frozen = controller.board().clone();

    for pos in Position::ALL {
        assert_eq!(controller.mark_tile(pos, Player::Human), None);
        assert_eq!(controller.mark_tile(pos, Player::Computer), None);
    }
    assert_eq!(controller.board(), &frozen);

    controller.restart();
    assert!(!controller.finished());
    assert_eq!(controller.board(), &Board::new());
    assert!(controller.surface().content.iter().all(String::is_empty));
    assert_eq!(controller.surface().ids.len(), 9);
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.toml");
    std::fs::write(
        &path,
        "marker_user = \"A\"\nmarker_computer = \"B\"\nrestart_delay_ms = 250\n",
    )
    .unwrap();

    let config = GameConfig::from_file(&path).unwrap();
    assert_eq!(
        config,
        GameConfig::new("A", "B").with_restart_delay(Duration::from_millis(250))
    );
}

#[test]
fn test_missing_config_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("nope.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
