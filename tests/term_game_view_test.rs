use tui_2048::core::{Board, GameSnapshot, GameState};
use tui_2048::term::{tile_style, AnchorY, FrameBuffer, GameView, Viewport};

fn text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap: GameSnapshot = GameSnapshot::default();
    let view = GameView::default();

    // 4 tiles of 6 cols + 5 gaps = 29 wide, 4 tiles of 3 rows + 5 gaps = 17 tall,
    // plus the border => 31x19
    let fb = view.render(&snap, Viewport::new(31, 19));

    assert_eq!(fb.get(0, 0).unwrap().ch, '╭');
    assert_eq!(fb.get(30, 0).unwrap().ch, '╮');
    assert_eq!(fb.get(0, 18).unwrap().ch, '╰');
    assert_eq!(fb.get(30, 18).unwrap().ch, '╯');
}

#[test]
fn term_view_centers_tile_value() {
    let mut snap: GameSnapshot = GameSnapshot::default();
    snap.board[0][0] = 2048;
    snap.board[3][3] = 8;

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(31, 19));

    // Tile (0,0) spans x 2..8, y 2..5; the value sits on the middle row.
    let middle: String = (2..8).map(|x| fb.get(x, 3).unwrap().ch).collect();
    assert_eq!(middle, " 2048 ");
    assert_eq!(fb.get(2, 2).unwrap().style, tile_style(2048));

    // Tile (3,3) starts at x = 2 + 3*7 = 23, y = 2 + 3*4 = 14.
    let middle: String = (23..29).map(|x| fb.get(x, 15).unwrap().ch).collect();
    assert_eq!(middle, "  8   ");
}

#[test]
fn term_view_draws_empty_slots() {
    let snap: GameSnapshot = GameSnapshot::default();
    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(31, 19));
    assert_eq!(fb.get(10, 7).unwrap().style, tile_style(0));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameState::<4>::new(1).snapshot();
    snap.score = 1234;
    snap.high_score = 5678;

    let view = GameView::default();
    let all = text(&view.render(&snap, Viewport::new(60, 19)));
    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("BEST"));
    assert!(all.contains("5678"));

    // No room for a panel at the exact frame width.
    let all = text(&view.render(&snap, Viewport::new(31, 19)));
    assert!(!all.contains("SCORE"));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let board = Board::from_rows([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ]);
    let snap = GameState::from_board(board, 0, 1).snapshot();
    assert!(snap.game_over);

    let all = text(&GameView::default().render(&snap, Viewport::new(40, 24)));
    assert!(all.contains("GAME OVER"));
    assert!(all.contains("r: restart"));
}

#[test]
fn term_view_handles_tiny_viewport() {
    let snap: GameSnapshot = GameSnapshot::default();
    let fb = GameView::default().render(&snap, Viewport::new(5, 3));
    assert_eq!((fb.width(), fb.height()), (5, 3));
}

#[test]
fn term_view_supports_other_sizes() {
    let snap: GameSnapshot<3> = GameSnapshot::default();
    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(24, 20));
    // 3 tiles of 6 + 4 gaps + border = 24 wide.
    assert_eq!(fb.get(23, 0).unwrap().ch, '╮');
}
