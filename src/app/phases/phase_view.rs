use eframe::egui::Context;

use crate::app::App;
use crate::app::state::AppState;

/// One screen of the app. Each frame the current phase runs and returns the
/// phase for the next frame.
pub(crate) trait PhaseView {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState;
}
