//! BoardView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout: status line over a centered 3x3 lattice, the move-history list to
//! the right of the grid when the terminal is wide enough, and a key-help
//! line along the bottom. Winning cells get a yellow background, matching
//! the highlight of the original web board.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use tui_tictactoe_core::GameSnapshot;
use tui_tictactoe_types::{row_col, SortOrder, GRID_SIDE};

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

/// A lightweight terminal renderer for the game screen.
pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for BoardView {
    fn default() -> Self {
        // 5x3 cells keep the marks roughly square in typical terminal fonts.
        Self {
            cell_w: 5,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

const HELP_TEXT: &str = "arrows move | enter play | 1-9 cell | [/] jump | t sort | r restart | q quit";

impl BoardView {
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

    /// Width of the grid lattice in terminal columns
    pub fn grid_width(&self) -> u16 {
        GRID_SIDE as u16 * (self.cell_w + 1) + 1
    }

    /// Height of the grid lattice in terminal rows
    pub fn grid_height(&self) -> u16 {
        GRID_SIDE as u16 * (self.cell_h + 1) + 1
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let grid_w = self.grid_width();
        let grid_h = self.grid_height();
        // Status line plus one blank row sit above the lattice.
        let frame_h = grid_h + 2;

        let start_x = viewport.width.saturating_sub(grid_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        let grid_y = start_y + 2;

        self.draw_status(fb, snap, start_x, start_y, grid_w);
        self.draw_lattice(fb, start_x, grid_y);
        self.draw_cells(fb, snap, start_x, grid_y);
        self.draw_move_list(fb, snap, viewport, start_x + grid_w + 3, grid_y);
        self.draw_help(fb, viewport, grid_y + grid_h);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_status(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        status_y: u16,
        grid_w: u16,
    ) {
        let status = snap.status_text();
        let style = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let text_w = status.chars().count() as u16;
        let x = start_x + grid_w.saturating_sub(text_w) / 2;
        fb.put_str(x, status_y, &status, style);
    }

    fn draw_lattice(&self, fb: &mut FrameBuffer, start_x: u16, grid_y: u16) {
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };
        let side = GRID_SIDE as u16;
        let step_x = self.cell_w + 1;
        let step_y = self.cell_h + 1;

        // Horizontal lines with junction characters.
        for r in 0..=side {
            let y = grid_y + r * step_y;
            let (left, mid, right) = match r {
                0 => ('┌', '┬', '┐'),
                n if n == side => ('└', '┴', '┘'),
                _ => ('├', '┼', '┤'),
            };
            for x in 0..self.grid_width() {
                let ch = if x == 0 {
                    left
                } else if x == self.grid_width() - 1 {
                    right
                } else if x % step_x == 0 {
                    mid
                } else {
                    '─'
                };
                fb.put_char(start_x + x, y, ch, border);
            }
        }

        // Vertical segments between the horizontal lines.
        for c in 0..=side {
            let x = start_x + c * step_x;
            for y in 0..self.grid_height() {
                if y % step_y != 0 {
                    fb.put_char(x, grid_y + y, '│', border);
                }
            }
        }
    }

    fn draw_cells(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, start_x: u16, grid_y: u16) {
        for (idx, &value) in snap.cells.iter().enumerate() {
            let on_winning_line = snap
                .winning_line
                .is_some_and(|line| line.contains(&idx));

            let bg = if on_winning_line {
                Rgb::new(170, 150, 0)
            } else if snap.cursor == idx && snap.playable() {
                Rgb::new(45, 45, 65)
            } else {
                Rgb::new(0, 0, 0)
            };

            let (x0, y0) = self.cell_origin(start_x, grid_y, idx);
            let blank = CellStyle {
                bg,
                ..CellStyle::default()
            };
            fb.fill_rect(x0, y0, self.cell_w, self.cell_h, ' ', blank);

            let cx = x0 + self.cell_w / 2;
            let cy = y0 + self.cell_h / 2;
            match value {
                1 => fb.put_char(cx, cy, 'X', self.mark_style(Rgb::new(80, 220, 220), bg)),
                2 => fb.put_char(cx, cy, 'O', self.mark_style(Rgb::new(220, 120, 220), bg)),
                _ => {
                    // Dim digit hint: the key that plays this cell.
                    let hint = char::from(b'1' + idx as u8);
                    let style = CellStyle {
                        fg: Rgb::new(90, 90, 100),
                        bg,
                        bold: false,
                        dim: true,
                    };
                    fb.put_char(cx, cy, hint, style);
                }
            }
        }
    }

    fn cell_origin(&self, start_x: u16, grid_y: u16, idx: usize) -> (u16, u16) {
        let (row, col) = row_col(idx);
        let x = start_x + 1 + col as u16 * (self.cell_w + 1);
        let y = grid_y + 1 + row as u16 * (self.cell_h + 1);
        (x, y)
    }

    fn draw_move_list(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        grid_y: u16,
    ) {
        if panel_x + 12 > viewport.width {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let entry = CellStyle::default();
        let current = CellStyle {
            fg: Rgb::new(240, 220, 120),
            bold: true,
            ..CellStyle::default()
        };

        let heading = match snap.sort_order {
            SortOrder::Ascending => "MOVES",
            SortOrder::Descending => "MOVES (REVERSED)",
        };
        fb.put_str(panel_x, grid_y, heading, label);

        for (slot, &move_index) in snap.display_order().iter().enumerate() {
            let y = grid_y + 1 + slot as u16;
            if y >= viewport.height {
                break;
            }
            let style = if move_index == snap.current_move {
                current
            } else {
                entry
            };
            let marker = if move_index == snap.current_move {
                "> "
            } else {
                "  "
            };
            fb.put_str(panel_x, y, marker, style);
            fb.put_str(panel_x + 2, y, &snap.move_description(move_index), style);
        }
    }

    fn mark_style(&self, fg: Rgb, bg: Rgb) -> CellStyle {
        CellStyle {
            fg,
            bg,
            bold: true,
            dim: false,
        }
    }

    fn draw_help(&self, fb: &mut FrameBuffer, viewport: Viewport, grid_bottom: u16) {
        let y = viewport.height.saturating_sub(1);
        if y <= grid_bottom {
            return;
        }
        let style = CellStyle {
            dim: true,
            ..CellStyle::default()
        };
        fb.put_str(1, y, HELP_TEXT, style);
    }
}
