use eframe::egui::{
    Align, CentralPanel, Context, Layout, RichText, ScrollArea, SidePanel, TextEdit,
    TopBottomPanel, Ui,
};

use crate::app::App;
use crate::config::{DF, TICKER};
use crate::data::ReadyState;
use crate::models::{ViewQuery, project};
use crate::ui::asset_table::render_asset_table;
use crate::ui::trend_panel::render_trend_panel;
use crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt};
use crate::utils::{current_year, epoch_ms_to_time_string};

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.top_panel_frame();

        TopBottomPanel::top("top_toolbar")
            .frame(frame)
            .resizable(false)
            .show(ctx, |ui| {
                ui.vertical(|ui| {
                    ui.heading(
                        RichText::new(&UI_TEXT.app_title)
                            .strong()
                            .color(UI_CONFIG.colors.heading),
                    );
                    ui.label_subdued(&UI_TEXT.app_subtitle);
                });
                ui.add_space(4.0);
                ui.separator();
                self.render_filter_bar(ui);
            });
    }

    fn render_filter_bar(&mut self, ui: &mut Ui) {
        let before = self.query.clone();

        ui.horizontal(|ui| {
            ui.label(&UI_TEXT.icon_search);
            ui.add(
                TextEdit::singleline(&mut self.query.text)
                    .hint_text(&UI_TEXT.filter_hint)
                    .desired_width(200.0),
            );
            ui.separator();
            ui.add(
                TextEdit::singleline(&mut self.query.min_price)
                    .hint_text(&UI_TEXT.min_price_hint)
                    .desired_width(90.0),
            );
            ui.add(
                TextEdit::singleline(&mut self.query.max_price)
                    .hint_text(&UI_TEXT.max_price_hint)
                    .desired_width(90.0),
            );

            if self.query.is_filtered()
                && ui
                    .button(format!("{} {}", UI_TEXT.icon_close, UI_TEXT.filter_clear))
                    .clicked()
            {
                self.query.clear_filters();
            }

            if let Some(engine) = &self.engine {
                let snapshot = engine.snapshot();
                let shown = project(&snapshot.assets, &self.query).len();
                ui.separator();
                ui.label_subdued(format!(
                    "{} {}/{}",
                    UI_TEXT.filter_showing,
                    shown,
                    snapshot.len()
                ));
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.toggle_value(
                    &mut self.show_trend_panel,
                    format!("{} {}", UI_TEXT.icon_chart, UI_TEXT.trend_heading),
                );
            });
        });

        log_view_change(&before, &self.query);
    }

    pub(crate) fn render_trend_panel(&mut self, ctx: &Context) {
        if !self.show_trend_panel {
            return;
        }
        SidePanel::right("trend_panel")
            .frame(UI_CONFIG.side_panel_frame())
            .default_width(UI_CONFIG.trend_panel_width)
            .resizable(true)
            .show(ctx, |ui| {
                let snapshot = self.engine.as_ref().map(|e| e.snapshot());
                let asset = match (&snapshot, &self.selected) {
                    (Some(s), Some(id)) => s.get(id),
                    _ => None,
                };
                render_trend_panel(ui, asset);
            });
    }

    pub(crate) fn render_ticker_panel(&mut self, ctx: &Context) {
        let panel_frame = UI_CONFIG.bottom_panel_frame();

        // Called before the status panel, so it sits below it.
        TopBottomPanel::bottom("ticker_panel")
            .frame(panel_frame)
            .min_height(TICKER.height)
            .resizable(false)
            .show(ctx, |ui| {
                if let Some(engine) = &self.engine {
                    self.ticker_state.update_data(&engine.snapshot());
                }
                if let Some(symbol) = self.ticker_state.render(ui) {
                    self.select_symbol(&symbol);
                }
            });
    }

    pub(crate) fn render_status_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.bottom_panel_frame();
        TopBottomPanel::bottom("status_panel")
            .frame(frame)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some(engine) = &self.engine {
                        let state = engine.socket_state();
                        let color = match state {
                            ReadyState::Open => UI_CONFIG.colors.change_up,
                            ReadyState::Connecting => UI_CONFIG.colors.warning,
                            ReadyState::Closing | ReadyState::Closed => {
                                UI_CONFIG.colors.change_down
                            }
                        };
                        ui.metric(&UI_TEXT.sb_socket, &state.to_string(), color);
                        ui.separator();
                        ui.metric(
                            &UI_TEXT.sb_ticks,
                            &engine.tick_count().to_string(),
                            UI_CONFIG.colors.label,
                        );
                        ui.separator();
                        let snapshot = engine.snapshot();
                        ui.metric(
                            &UI_TEXT.sb_snapshot,
                            &format!("#{}", snapshot.seq),
                            UI_CONFIG.colors.label,
                        );
                        ui.separator();
                        ui.metric(
                            &UI_TEXT.sb_updated,
                            &epoch_ms_to_time_string(snapshot.taken_at_ms),
                            UI_CONFIG.colors.label,
                        );
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label_subdued(format!("© {} {}", current_year(), UI_TEXT.sb_footer));
                    });
                });
            });
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                let Some(engine) = &self.engine else {
                    return;
                };
                let snapshot = engine.snapshot();
                let rows = project(&snapshot.assets, &self.query);

                if rows.is_empty() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.label(RichText::new(&UI_TEXT.table_empty).color(UI_CONFIG.colors.label));
                    });
                    return;
                }

                let interaction = ScrollArea::horizontal()
                    .show(ui, |ui| {
                        render_asset_table(ui, &rows, &self.query, self.selected.as_ref())
                    })
                    .inner;

                if let Some(column) = interaction.sort_clicked {
                    let before = self.query.clone();
                    self.query.toggle_sort(column);
                    log_view_change(&before, &self.query);
                }
                if let Some(id) = interaction.row_clicked {
                    self.selected = Some(id);
                    self.show_trend_panel = true;
                }
            });
    }
}

fn log_view_change(_before: &ViewQuery, _after: &ViewQuery) {
    #[cfg(debug_assertions)]
    if DF.log_view_changes && _before != _after {
        log::info!("View query changed: {:?}", _after);
    }
}
