//! Hex grid rendering for the Islands of Hex GUI
//!
//! Cells are drawn as flat-topped hexagons. Column `c` is shifted half a cell
//! up relative to column `c - 1`, which puts every hex-adjacent cell, and
//! only those, edge to edge on screen.

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Shape, Stroke, Vec2};

use crate::board::{Cell, Color, Pos};
use crate::GameModel;

use super::theme::*;

const SQRT_3: f32 = 1.732_050_8;

/// Screen geometry of a hex board
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexLayout {
    /// Screen position of cell (0, 0)
    pub origin: Pos2,
    /// Center-to-vertex distance
    pub radius: f32,
    pub size: usize,
}

impl HexLayout {
    /// Largest layout of a `size x size` board that fits inside `rect`,
    /// centered in it
    pub fn fit(rect: Rect, size: usize) -> Self {
        let n = size.saturating_sub(1) as f32;
        // Width spans 1.5R per column plus one full hex; height spans
        // sqrt(3)R per row plus half of that per column of stagger
        let radius_w = rect.width() / (1.5 * n + 2.0);
        let radius_h = rect.height() / (SQRT_3 * (1.5 * n + 1.0));
        let radius = radius_w.min(radius_h).max(1.0);

        let hex_h = SQRT_3 * radius;
        let board_w = 1.5 * n * radius + 2.0 * radius;
        let board_h = hex_h * (1.5 * n + 1.0);
        let left = rect.center().x - board_w / 2.0;
        let top = rect.center().y - board_h / 2.0;

        Self {
            origin: Pos2::new(left + radius, top + hex_h / 2.0 + n * hex_h / 2.0),
            radius,
            size,
        }
    }

    #[inline]
    fn row_step(&self) -> f32 {
        SQRT_3 * self.radius
    }

    /// Screen center of a cell
    pub fn center(&self, pos: Pos) -> Pos2 {
        let dy = self.row_step();
        Pos2::new(
            self.origin.x + pos.col as f32 * 1.5 * self.radius,
            self.origin.y + pos.row as f32 * dy - pos.col as f32 * dy / 2.0,
        )
    }

    /// Corner points of a cell's hexagon, scaled by `scale`
    pub fn corners(&self, pos: Pos, scale: f32) -> Vec<Pos2> {
        let center = self.center(pos);
        let r = self.radius * scale;
        (0..6)
            .map(|i| {
                let angle = std::f32::consts::FRAC_PI_3 * i as f32;
                center + Vec2::new(r * angle.cos(), r * angle.sin())
            })
            .collect()
    }

    /// Cell whose hexagon contains `point`, if any
    pub fn hit(&self, point: Pos2) -> Option<Pos> {
        let dy = self.row_step();
        let col = ((point.x - self.origin.x) / (1.5 * self.radius)).round();
        let row = ((point.y - self.origin.y + col * dy / 2.0) / dy).round();

        let mut best: Option<(Pos, f32)> = None;
        for dr in -1..=1 {
            for dc in -1..=1 {
                let (r, c) = (row as i32 + dr, col as i32 + dc);
                if !Pos::is_valid(r, c, self.size) {
                    continue;
                }
                let pos = Pos::new(r as usize, c as usize);
                let dist = self.center(pos).distance_sq(point);
                if best.map_or(true, |(_, d)| dist < d) {
                    best = Some((pos, dist));
                }
            }
        }

        let (pos, _) = best?;
        self.contains(pos, point).then_some(pos)
    }

    /// Point-in-hexagon test for a flat-topped hexagon
    fn contains(&self, pos: Pos, point: Pos2) -> bool {
        let d = point - self.center(pos);
        let (x, y) = (d.x.abs(), d.y.abs());
        let half_h = SQRT_3 * self.radius / 2.0;
        y <= half_h && SQRT_3 * x + y <= SQRT_3 * self.radius
    }
}

/// Board view handles rendering and input for the hex grid
#[derive(Default)]
pub struct BoardView;

impl BoardView {
    /// Render the board and return the clicked cell, if any
    pub fn show(
        &self,
        ui: &mut egui::Ui,
        model: &GameModel,
        turn: Color,
        last_move: Option<Pos>,
        winning_island: &[Pos],
        accept_clicks: bool,
    ) -> Option<Pos> {
        let available = ui.available_size();
        let (response, painter) = ui.allocate_painter(available, Sense::click());

        painter.rect_filled(response.rect, CornerRadius::ZERO, SEA_BG);

        let layout = HexLayout::fit(response.rect.shrink(BOARD_MARGIN), model.size());

        self.draw_cells(&painter, &layout, model);

        for pos in winning_island {
            self.draw_highlight(&painter, &layout, *pos);
        }

        if let Some(pos) = last_move {
            let marker = layout.radius * LAST_MOVE_MARKER_RATIO;
            painter.circle_filled(layout.center(pos), marker, LAST_MOVE_MARKER);
        }

        if !accept_clicks {
            return None;
        }

        let pointer = response.hover_pos()?;
        let pos = layout.hit(pointer)?;
        let open = model
            .is_open(pos.row as i32, pos.col as i32)
            .unwrap_or(false);
        if !open {
            return None;
        }

        painter.add(Shape::convex_polygon(
            layout.corners(pos, 0.8),
            hover_preview(turn == Color::White),
            Stroke::NONE,
        ));

        response.clicked().then_some(pos)
    }

    fn draw_cells(&self, painter: &Painter, layout: &HexLayout, model: &GameModel) {
        let board = model.board();
        let stroke = Stroke::new(CELL_BORDER_WIDTH, CELL_BORDER);

        for row in 0..layout.size {
            for col in 0..layout.size {
                let pos = Pos::new(row, col);
                let fill = match board.get(pos) {
                    Cell::Stone(Color::White) => WHITE_STONE,
                    Cell::Stone(Color::Black) => BLACK_STONE,
                    Cell::Empty | Cell::Reserved => EMPTY_CELL,
                };
                painter.add(Shape::convex_polygon(layout.corners(pos, 1.0), fill, stroke));
            }
        }
    }

    fn draw_highlight(&self, painter: &Painter, layout: &HexLayout, pos: Pos) {
        let mut corners = layout.corners(pos, 0.85);
        corners.push(corners[0]);
        painter.add(Shape::line(corners, Stroke::new(3.0, WIN_HIGHLIGHT)));
    }
}
