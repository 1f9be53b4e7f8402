use tui_bowling::core::Game;
use tui_bowling::term::{encode_full_into, GameView};

#[test]
fn term_view_shows_scorecard_lines() {
    let mut game = Game::new();
    game.bowl(10).unwrap().bowl(4).unwrap().bowl(2).unwrap();

    let lines = GameView::new(false).render(&game.snapshot(), None);
    assert!(lines.contains(&"|X|4,2|".to_string()));
    assert!(lines.contains(&"| 16| 22|".to_string()));
    assert!(lines.contains(&"Score: 22".to_string()));
}

#[test]
fn term_view_tracks_ball_in_frame() {
    let mut game = Game::new();
    game.bowl(3).unwrap();

    let lines = GameView::new(false).render(&game.snapshot(), None);
    assert!(lines.contains(&"Frame 1  Ball 2  Pins standing 7".to_string()));
}

#[test]
fn term_view_final_frame_bonus_ball() {
    let mut game = Game::new();
    for _ in 0..18 {
        game.bowl(0).unwrap();
    }
    game.bowl(10).unwrap().bowl(10).unwrap();

    let lines = GameView::new(false).render(&game.snapshot(), None);
    assert!(lines.contains(&"Frame 10  Ball 3  Pins standing 10".to_string()));
}

#[test]
fn term_view_full_redraw_encodes_every_line() {
    let game = Game::new();
    let lines = GameView::default().render(&game.snapshot(), Some("hello"));

    let mut out = Vec::new();
    encode_full_into(&lines, &mut out).unwrap();
    let text = String::from_utf8_lossy(&out);
    for line in &lines {
        assert!(text.contains(line.as_str()));
    }
}
