//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{shape_by_id, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Gem, GRID_SIZE};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const INVALID_FG: Rgb = Rgb::new(220, 60, 60);

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

/// Front-end state drawn on top of the snapshot: the drag cursor, the hover
/// preview of the selected piece and a one-line status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudView<'a> {
    /// Anchor cell (row, col) the cursor points at
    pub cursor: Option<(i32, i32)>,
    pub selected_slot: Option<usize>,
    /// On-grid cells the selected piece would cover
    pub preview_cells: &'a [(i32, i32)],
    pub preview_valid: bool,
    pub status: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the puzzle grid and hand.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Width and height of the bordered grid in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (GRID_SIZE as u16) * self.cell_w + 2,
            (GRID_SIZE as u16) * self.cell_h + 2,
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_hud(snap, None, viewport, fb);
    }

    pub fn render_into_with_hud(
        &self,
        snap: &GameSnapshot,
        hud: Option<&HudView<'_>>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let bg = CellStyle::new(Rgb::new(80, 80, 90), BOARD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            bg,
        );
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..GRID_SIZE as usize {
            for col in 0..GRID_SIZE as usize {
                match snap.gem_at(row, col) {
                    Some(gem) => self.draw_gem_cell(fb, start_x, start_y, row as i32, col as i32, gem),
                    None => self.draw_empty_cell(fb, start_x, start_y, row as i32, col as i32),
                }
            }
        }

        if let Some(hud) = hud {
            self.draw_hud_on_grid(fb, snap, hud, start_x, start_y);
        }

        self.draw_side_panel(fb, snap, hud, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }

        if let Some(hud) = hud.filter(|h| !h.status.is_empty()) {
            let y = viewport.height.saturating_sub(1);
            let style = CellStyle::new(Rgb::new(230, 230, 160), PANEL_BG);
            fb.put_str(0, y, hud.status, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_with_hud(
        &self,
        snap: &GameSnapshot,
        hud: Option<&HudView<'_>>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_hud(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_hud_on_grid(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        start_x: u16,
        start_y: u16,
    ) {
        let gem = hud
            .selected_slot
            .and_then(|slot| snap.hand.get(slot).copied().flatten())
            .map(|piece| piece.gem);

        if !hud.preview_cells.is_empty() {
            let fg = match (hud.preview_valid, gem) {
                (true, Some(gem)) => Rgb::from_hex(gem.rgb()),
                _ => INVALID_FG,
            };
            let style = CellStyle::new(fg, BOARD_BG);
            for &(row, col) in hud.preview_cells {
                self.fill_cell_rect(fb, start_x, start_y, row, col, '░', style);
            }
        } else if let Some((row, col)) = hud.cursor {
            let style = CellStyle::new(Rgb::new(200, 200, 200), BOARD_BG).dim();
            self.fill_cell_rect(fb, start_x, start_y, row, col, '▒', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, row: i32, col: i32) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
        self.fill_cell_rect(fb, start_x, start_y, row, col, '·', style);
    }

    fn draw_gem_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: i32,
        col: i32,
        gem: Gem,
    ) {
        let style = CellStyle::new(Rgb::from_hex(gem.rgb()), BOARD_BG).bold();
        self.fill_cell_rect(fb, start_x, start_y, row, col, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: i32,
        col: i32,
        ch: char,
        style: CellStyle,
    ) {
        let size = GRID_SIZE as i32;
        if row < 0 || col < 0 || row >= size || col >= size {
            return;
        }
        let px = start_x + 1 + (col as u16) * self.cell_w;
        let py = start_y + 1 + (row as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: Option<&HudView<'_>>,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("BEST ", snap.high_score),
            ("COMBO", snap.combo),
            ("LINES", snap.lines),
        ] {
            let x = fb.put_str(panel_x, y, name, label);
            fb.put_u32(x + 1, y, v, value);
            y = y.saturating_add(1);
        }

        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "HAND", label);
        y = y.saturating_add(1);

        let selected = hud.and_then(|h| h.selected_slot);
        for (slot, piece) in snap.hand.iter().copied().enumerate() {
            if y >= viewport.height {
                break;
            }
            let marker = if selected == Some(slot) { '>' } else { ' ' };
            fb.put_char(panel_x, y, marker, label);
            fb.put_u32(panel_x + 1, y, slot as u32 + 1, label);

            let shape = piece.and_then(|p| shape_by_id(p.shape_id));
            let (Some(piece), Some(shape)) = (piece, shape) else {
                fb.put_str(panel_x + 3, y, "-", value.dim());
                y = y.saturating_add(2);
                continue;
            };

            let style = CellStyle::new(Rgb::from_hex(piece.gem.rgb()), PANEL_BG).bold();
            for (dr, dc) in shape.cells() {
                let x = panel_x + 3 + (dc as u16) * 2;
                let py = y + dr as u16;
                fb.put_str(x, py, "██", style);
            }
            y = y.saturating_add(shape.rows() as u16 + 1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
