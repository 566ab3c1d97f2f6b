use {
    crate::{
        app::ConnectingState,
        data::ReadyState,
        ui::{UI_CONFIG, UI_TEXT},
        utils::format_duration,
    },
    eframe::egui::{CentralPanel, Context, RichText},
};

pub(crate) fn render_connecting(ctx: &Context, state: &ConnectingState) {
    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.heading(
                    RichText::new(&UI_TEXT.app_title)
                        .size(24.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.label(RichText::new(&UI_TEXT.app_subtitle).italics());
                ui.add_space(30.0);

                if let Some(err) = &state.error {
                    ui.heading(
                        RichText::new(format!("⚠ {}", UI_TEXT.cs_engine_failed))
                            .color(UI_CONFIG.colors.change_down),
                    );
                    ui.add_space(6.0);
                    ui.label(RichText::new(err).color(UI_CONFIG.colors.change_down));
                    return;
                }

                ui.spinner();
                ui.add_space(12.0);
                ui.heading(&UI_TEXT.cs_title);
                ui.add_space(6.0);
                ui.label(
                    RichText::new(format!(
                        "{} {} {} ({}, {})",
                        UI_TEXT.icon_plug,
                        UI_TEXT.cs_connecting_to,
                        state.url,
                        state.socket_state.unwrap_or(ReadyState::Connecting),
                        format_duration(state.waited_ms),
                    ))
                    .color(UI_CONFIG.colors.label),
                );
            });
        });
}
