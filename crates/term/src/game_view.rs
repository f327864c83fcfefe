//! GameView: paints a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-testable. Layout: the bordered
//! board in the middle, a side panel to its right with the next-piece
//! preview, score, level, and key help, and a centered overlay banner when
//! the game is paused or over.

use gridfall_core::catalog;
use gridfall_core::snapshot::GameSnapshot;
use gridfall_types::{PieceKind, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

use crate::fb::{CellStyle, FrameBuffer};

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

/// A lightweight terminal view for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

const PANEL_GAP: u16 = 3;
/// Side panel footprint in terminal columns, for centering the whole layout.
const PANEL_W: u16 = PANEL_GAP + 14;

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Allocation-free hot path: callers reuse the framebuffer across frames
    /// and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(25, 25, 35),
            bold: false,
            dim: false,
        };
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells, range-checked through the color index.
        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                if let Some(kind) = PieceKind::from_color_index(snap.board[y][x]) {
                    self.draw_board_cell(fb, start_x, start_y, x as i8, y as i8, kind);
                }
            }
        }

        // Active piece; cells above the visible grid are clipped.
        for &(x, y) in &snap.active_cells {
            if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                self.draw_board_cell(fb, start_x, start_y, x, y, snap.active_kind);
            }
        }

        self.draw_side_panel(fb, snap, start_x + frame_w + PANEL_GAP, start_y);

        if snap.game_over {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        } else if snap.paused {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: i8,
        y: i8,
        kind: PieceKind,
    ) {
        let color = catalog::color(kind);
        let style = CellStyle::new(Rgb::new(0, 0, 0), color);
        let px = start_x + 1 + (x as u16) * self.cell_w;
        let py = start_y + 1 + (y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
        if w < 2 || h < 2 {
            return;
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let label = CellStyle {
            fg: Rgb::new(180, 180, 180),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let text = CellStyle::default();
        let help = CellStyle {
            fg: Rgb::new(120, 120, 120),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: true,
        };

        fb.put_str(x, y, "NEXT", label);
        // Preview box: 4x4 board cells, shape drawn at a one-cell inset.
        let box_w = 4 * self.cell_w + 2;
        let box_h = 4 * self.cell_h + 2;
        let border = CellStyle::new(Rgb::new(120, 120, 120), Rgb::new(0, 0, 0));
        self.draw_border(fb, x, y + 1, box_w, box_h, border);
        let color = catalog::color(snap.next_kind);
        let style = CellStyle::new(Rgb::new(0, 0, 0), color);
        for (ox, oy) in catalog::shape(snap.next_kind) {
            let px = x + 1 + (ox as u16) * self.cell_w;
            let py = y + 2 + (oy as u16) * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        }

        let mut line = y + 1 + box_h + 1;
        fb.put_str(x, line, "SCORE", label);
        fb.put_str(x + 6, line, &snap.score.to_string(), text);
        line += 2;
        fb.put_str(x, line, "LEVEL", label);
        fb.put_str(x + 6, line, &snap.level.to_string(), text);

        line += 3;
        for help_line in [
            "←/→  move",
            " ↓   drop",
            " ↑   rotate",
            " p   pause",
            " n   new game",
            " q   quit",
        ] {
            fb.put_str(x, line, help_line, help);
            line += 1;
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let banner_w = (text.chars().count() as u16) + 4;
        let banner_h = 3;
        let x = start_x + frame_w.saturating_sub(banner_w) / 2;
        let y = start_y + frame_h.saturating_sub(banner_h) / 2;

        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(40, 40, 40),
            bold: true,
            dim: false,
        };
        fb.fill_rect(x, y, banner_w, banner_h, ' ', style);
        self.draw_border(fb, x, y, banner_w, banner_h, style);
        fb.put_str(x + 2, y + 1, text, style);
    }
}
