//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{format_u32, Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::Tile;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const FRAME_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_BG: Rgb = Rgb::new(205, 193, 180);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// A lightweight terminal renderer for the tile grid.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    /// Spacing between tiles (and around the outer ones).
    gap: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 6 columns fit a 6-digit tile; 2:1 width keeps tiles roughly square.
        Self {
            cell_w: 6,
            cell_h: 3,
            gap: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Where the board frame lands inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16, gap: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            gap,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer frame (border included) for an `n x n` board.
    pub fn frame_rect(&self, n: usize, viewport: Viewport) -> FrameRect {
        let n = n as u16;
        let w = self.gap + n * (self.cell_w + self.gap) + 2;
        let h = self.gap + n * (self.cell_h + self.gap) + 2;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        FrameRect { x, y, w, h }
    }

    /// Top-left terminal cell of tile `(row, col)`.
    pub fn tile_origin(&self, frame: FrameRect, row: usize, col: usize) -> (u16, u16) {
        let x = frame.x + 1 + self.gap + (col as u16) * (self.cell_w + self.gap);
        let y = frame.y + 1 + self.gap + (row as u16) * (self.cell_h + self.gap);
        (x, y)
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport when needed.
    pub fn render_into<const N: usize>(
        &self,
        snap: &GameSnapshot<N>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let frame = self.frame_rect(N, viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w.saturating_sub(2),
            frame.h.saturating_sub(2),
            ' ',
            CellStyle::new(DARK_TEXT, FRAME_BG),
        );
        self.draw_border(fb, frame, border);

        for (row, tiles) in snap.board.iter().enumerate() {
            for (col, &tile) in tiles.iter().enumerate() {
                let (x, y) = self.tile_origin(frame, row, col);
                self.draw_tile(fb, x, y, tile);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            self.draw_overlay(fb, frame, "GAME OVER", "r: restart");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<const N: usize>(&self, snap: &GameSnapshot<N>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: FrameRect, style: CellStyle) {
        let FrameRect { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '╭', style);
        fb.put_char(x + w - 1, y, '╮', style);
        fb.put_char(x, y + h - 1, '╰', style);
        fb.put_char(x + w - 1, y + h - 1, '╯', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, x: u16, y: u16, tile: Tile) {
        let style = tile_style(tile);
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', style);
        if tile == 0 {
            return;
        }

        let mut digits = [0u8; 10];
        let len = format_u32(tile, &mut digits);
        let text = std::str::from_utf8(&digits[..len]).unwrap_or_default();
        fb.put_str_centered(x, y + self.cell_h / 2, self.cell_w, text, style);
    }

    fn draw_side_panel<const N: usize>(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot<N>,
        viewport: Viewport,
        frame: FrameRect,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = value.dim();

        let mut y = frame.y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("BEST", snap.high_score),
            ("MOVES", snap.moves),
            ("MAX", snap.max_tile),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y = y.saturating_add(3);
        }

        for line in ["arrows/hjkl/wasd", "r restart", "q quit"] {
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, frame: FrameRect, title: &str, sub: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let text_w = title.chars().count().max(sub.chars().count()) as u16 + 4;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);

        fb.fill_rect(x, mid_y.saturating_sub(1), text_w, 4, ' ', style);
        fb.put_str_centered(x, mid_y, text_w, title, style);
        fb.put_str_centered(x, mid_y + 1, text_w, sub, CellStyle { bold: false, ..style });
    }
}

/// Colors for a tile value (classic palette; 0 is the empty slot).
pub fn tile_style(tile: Tile) -> CellStyle {
    let (bg, fg) = match tile {
        0 => (EMPTY_BG, EMPTY_BG),
        2 => (Rgb::new(238, 228, 218), DARK_TEXT),
        4 => (Rgb::new(237, 224, 200), DARK_TEXT),
        8 => (Rgb::new(242, 177, 121), LIGHT_TEXT),
        16 => (Rgb::new(245, 149, 99), LIGHT_TEXT),
        32 => (Rgb::new(246, 124, 95), LIGHT_TEXT),
        64 => (Rgb::new(246, 94, 59), LIGHT_TEXT),
        128 => (Rgb::new(237, 207, 114), LIGHT_TEXT),
        256 => (Rgb::new(237, 204, 97), LIGHT_TEXT),
        512 => (Rgb::new(237, 200, 80), LIGHT_TEXT),
        1024 => (Rgb::new(237, 197, 63), LIGHT_TEXT),
        2048 => (Rgb::new(237, 194, 46), LIGHT_TEXT),
        _ => (Rgb::new(60, 58, 50), LIGHT_TEXT),
    };
    CellStyle::new(fg, bg).bold()
}
