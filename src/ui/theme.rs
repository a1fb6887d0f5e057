//! Theme constants for the Islands of Hex GUI

use egui::Color32;

// Board colors - sea and sand
pub const SEA_BG: Color32 = Color32::from_rgb(0x33, 0xcc, 0xcc);
pub const EMPTY_CELL: Color32 = Color32::from_rgb(192, 192, 192);
pub const CELL_BORDER: Color32 = Color32::from_rgb(40, 90, 95);
pub const CELL_BORDER_WIDTH: f32 = 1.5;

// Stone colors
pub const BLACK_STONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const WHITE_STONE: Color32 = Color32::from_rgb(250, 250, 252);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);
pub const LAST_MOVE_MARKER_RATIO: f32 = 0.18;

// Functions for colors that can't be const
pub fn hover_preview(white: bool) -> Color32 {
    if white {
        Color32::from_rgba_unmultiplied(250, 250, 252, 140)
    } else {
        Color32::from_rgba_unmultiplied(25, 25, 30, 120)
    }
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timing colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 20.0;
