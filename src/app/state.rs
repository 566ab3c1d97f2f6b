use crate::data::ReadyState;

#[derive(Clone, Default)]
pub(crate) struct ConnectingState {
    pub(crate) url: String,
    pub(crate) socket_state: Option<ReadyState>,
    pub(crate) waited_ms: i64,
    /// Set when the engine could not be built; the phase never advances.
    pub(crate) error: Option<String>,
}

#[derive(Clone)]
pub(crate) struct RunningState;

pub(crate) enum AppState {
    Connecting(ConnectingState),
    Running(RunningState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Connecting(ConnectingState::default())
    }
}
