//! Main application for the Islands of Hex GUI

use std::time::Instant;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::game_state::{GameMode, GameState};
use super::theme::*;
use crate::config::{AppConfig, BOARD_SIZES};
use crate::{Color, Outcome};

/// Main Islands of Hex application
pub struct IslandsApp {
    state: GameState,
    board_view: BoardView,
}

impl IslandsApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self {
            state: GameState::new(config),
            board_view: BoardView,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                    if ui.button("Toggle Simulation (S)").clicked() {
                        self.state.toggle_mode();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Board", |ui| {
                    for size in BOARD_SIZES {
                        if ui.button(format!("{size} x {size}")).clicked() {
                            self.state.set_board_size(size);
                            ui.close_menu();
                        }
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "{} - {}x{}",
                        self.state.mode.label(),
                        self.state.board_size,
                        self.state.board_size
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_timing_card(ui);
                ui.add_space(10.0);

                self.render_settings_card(ui);

                if let Some(outcome) = self.state.controller.outcome() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("⬢⬡").size(20.0).color(SEA_BG));
            ui.add_space(4.0);
            ui.label(RichText::new("ISLANDS OF HEX").size(20.0).strong().color(TEXT_PRIMARY));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.controller.turn();
            let (fill, text_color) = match turn {
                Color::White => (WHITE_STONE, BLACK_STONE),
                Color::Black => (BLACK_STONE, WHITE_STONE),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(40.0, 40.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 18.0, fill);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    &turn.name()[..1],
                    egui::FontId::proportional(18.0),
                    text_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.label(RichText::new(turn.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));
                    let status = if self.state.controller.is_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.is_simulating() {
                        ("Simulating...", TIMER_WARNING)
                    } else {
                        ("To move", TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ISLANDS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let model = self.state.controller.model();
            for (name, score) in [("White", model.white_score()), ("Black", model.black_score())] {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(name).size(14.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(score.to_string()).size(18.0).strong().color(TEXT_PRIMARY));
                    });
                });
            }
        });
    }

    fn render_timing_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("LAST MOVE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let text = match self.state.controller.last_move_time() {
                Some(t) => format!("{:.3} ms", t.as_secs_f64() * 1000.0),
                None => "-".to_string(),
            };
            ui.label(RichText::new(text).size(20.0).color(TEXT_PRIMARY));
            ui.label(
                RichText::new(format!("Move #{}", self.state.controller.move_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_settings_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("BOARD SIZE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let mut size = self.state.board_size;
            ui.horizontal(|ui| {
                for option in BOARD_SIZES {
                    ui.radio_value(&mut size, option, option.to_string());
                }
            });
            if size != self.state.board_size {
                self.state.set_board_size(size);
            }

            ui.add_space(8.0);
            let toggle = match self.state.mode {
                GameMode::TwoPlayer => "New simulated game",
                GameMode::Simulated => "New two-player game",
            };
            if ui.button(toggle).clicked() {
                self.state.toggle_mode();
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: Outcome) {
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    let headline = match outcome {
                        Outcome::Tie => "TIE".to_string(),
                        _ => format!("{} WINS", outcome.label()),
                    };
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);
                    if ui.button("New Game").clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().frame(Frame::new().fill(SEA_BG)).show(ctx, |ui| {
            let clicked = self.board_view.show(
                ui,
                self.state.controller.model(),
                self.state.controller.turn(),
                self.state.controller.last_move(),
                self.state.winning_island(),
                self.state.accepts_clicks(),
            );

            if let Some(pos) = clicked {
                self.state.try_place(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, toggle) = ctx.input(|i| (i.key_pressed(egui::Key::N), i.key_pressed(egui::Key::S)));
        if new_game {
            self.state.reset();
        }
        if toggle {
            self.state.toggle_mode();
        }
    }
}

impl eframe::App for IslandsApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.tick(Instant::now());

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_simulating() {
            ctx.request_repaint_after(self.state.simulation_interval());
        }
    }
}
