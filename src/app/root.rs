use {
    eframe::{
        Frame, Storage,
        egui::{Context, Key, Visuals},
    },
    serde::{Deserialize, Serialize},
    std::{mem, time::Duration},
};

use crate::{
    Cli,
    app::{AppState, ConnectingState, PhaseView, RunningState},
    config::DF,
    data::ReadyState,
    domain::AssetId,
    engine::{EngineOptions, MarketEngine},
    models::ViewQuery,
    ui::{TickerState, UI_CONFIG, render_connecting},
    utils::AppInstant,
};

// Repaint cadence while waiting for the socket to open.
const CONNECTING_REPAINT: Duration = Duration::from_millis(50);

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) query: ViewQuery, // persists across sessions.
    pub(crate) selected: Option<AssetId>,
    pub(crate) show_trend_panel: bool,
    #[serde(skip)]
    pub(crate) engine: Option<MarketEngine>,
    #[serde(skip)]
    options: EngineOptions,
    #[serde(skip)]
    startup_error: Option<String>,
    #[serde(skip)]
    started_at: Option<AppInstant>,
    #[serde(skip)]
    state: AppState,
    #[serde(skip)]
    pub(crate) ticker_state: TickerState,
}

impl Default for App {
    fn default() -> Self {
        Self {
            query: ViewQuery::default(),
            selected: None,
            show_trend_panel: true,
            engine: None,
            options: EngineOptions::default(),
            startup_error: None,
            started_at: None,
            state: AppState::default(),
            ticker_state: TickerState::default(),
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        #[cfg(debug_assertions)]
        if DF.log_view_changes {
            log::info!("Restored view query: {:?}", app.query);
        }

        app.options = args.engine_options();
        app.state = AppState::Connecting(ConnectingState::default());
        app.start_engine();
        app
    }

    fn start_engine(&mut self) {
        let now = AppInstant::now();
        self.started_at = Some(now);
        match MarketEngine::new(self.options, now) {
            Ok(engine) => {
                self.engine = Some(engine);
                self.startup_error = None;
            }
            Err(e) => {
                log::error!("Failed to start market engine: {:#}", e);
                self.engine = None;
                self.startup_error = Some(format!("{:#}", e));
            }
        }
    }

    pub(crate) fn tick_connecting_state(
        &mut self,
        ctx: &Context,
        state: &mut ConnectingState,
    ) -> AppState {
        let now = AppInstant::now();

        let Some(engine) = &mut self.engine else {
            state.error = self.startup_error.clone();
            render_connecting(ctx, state);
            return AppState::Connecting(state.clone());
        };

        engine.update(now);
        state.url = engine.socket_url().to_string();
        state.socket_state = Some(engine.socket_state());
        state.waited_ms = self
            .started_at
            .map(|t| now.saturating_duration_since(t).as_millis() as i64)
            .unwrap_or_default();

        if engine.socket_state() == ReadyState::Open {
            log::info!("Market socket open after {} ms", state.waited_ms);
            ctx.request_repaint();
            return AppState::Running(RunningState);
        }

        render_connecting(ctx, state);
        ctx.request_repaint_after(CONNECTING_REPAINT);
        AppState::Connecting(state.clone())
    }

    /// RUNNING PHASE MAIN LOOP
    pub(crate) fn tick_running_state(&mut self, ctx: &Context) {
        let now = AppInstant::now();

        if let Some(e) = &mut self.engine {
            crate::trace_time!("Engine update", 1_000, {
                e.update(now);
            });
            // Keeps the feed ticking with no input events.
            ctx.request_repaint_after(e.next_wakeup(now));
        }

        self.ensure_valid_selection();
        self.handle_global_shortcuts(ctx);
        self.render_top_panel(ctx);
        self.render_ticker_panel(ctx);
        self.render_status_panel(ctx);
        self.render_trend_panel(ctx);
        self.render_central_panel(ctx);
    }

    /// Select by ticker symbol (ticker clicks).
    pub(crate) fn select_symbol(&mut self, symbol: &str) {
        let Some(engine) = &self.engine else {
            return;
        };
        if let Some(asset) = engine.snapshot().by_symbol(symbol) {
            self.selected = Some(asset.id.clone());
            self.show_trend_panel = true;
        }
    }

    // A persisted selection may name an asset that is no longer listed.
    fn ensure_valid_selection(&mut self) {
        let (Some(engine), Some(id)) = (&self.engine, &self.selected) else {
            return;
        };
        if engine.snapshot().get(id).is_none() {
            log::warn!("Dropping selection of unknown asset {}", id);
            self.selected = None;
        }
    }

    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            // Typing in the filter bar
            return;
        }

        ctx.input(|i| {
            if i.key_pressed(Key::Escape) {
                self.selected = None;
            }
            if i.key_pressed(Key::T) {
                self.show_trend_panel = !self.show_trend_panel;
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Connecting(mut s) => s.tick(self, ctx),
            AppState::Running(mut s) => s.tick(self, ctx),
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        #[cfg(debug_assertions)]
        if DF.log_view_changes {
            log::info!("SAVE [App]: query = {:?}", self.query);
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.selection.bg_fill = UI_CONFIG.colors.selected_row;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
