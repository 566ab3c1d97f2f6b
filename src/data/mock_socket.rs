use {
    crate::{
        config::{DF, FEED},
        utils::AppInstant,
    },
    anyhow::{Result, bail},
    std::{collections::VecDeque, fmt, time::Duration},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Connecting,
    Open,
    Closing,
    Closed,
}

impl fmt::Display for ReadyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReadyState::Connecting => "CONNECTING",
            ReadyState::Open => "OPEN",
            ReadyState::Closing => "CLOSING",
            ReadyState::Closed => "CLOSED",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocketEvent {
    Opened,
    Message(String),
    Closed,
}

/// Local stand-in for a market WebSocket. Nothing leaves the process:
/// it opens after a fixed delay, hands over an initial payload, and echoes
/// whatever is sent to it. Time is passed in so the stub is driven by the
/// caller's frame loop (no threads, works the same on wasm32).
pub struct MockSocket {
    url: String,
    state: ReadyState,
    opens_at: AppInstant,
    initial_payload: Option<String>,
    pending: VecDeque<(AppInstant, String)>,
    echo_delay: Duration,
}

impl MockSocket {
    pub fn connect(
        url: impl Into<String>,
        initial_payload: Option<String>,
        now: AppInstant,
    ) -> Self {
        let url = url.into();
        #[cfg(debug_assertions)]
        if DF.log_socket_events {
            log::info!("Mock socket connecting to {}", url);
        }
        Self {
            url,
            state: ReadyState::Connecting,
            opens_at: now + Duration::from_millis(FEED.socket.open_delay_ms),
            initial_payload,
            pending: VecDeque::new(),
            echo_delay: Duration::from_millis(FEED.socket.echo_delay_ms),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn ready_state(&self) -> ReadyState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ReadyState::Open
    }

    /// Time until `poll` has something to report, if anything is scheduled.
    pub fn due_in(&self, now: AppInstant) -> Option<Duration> {
        match self.state {
            ReadyState::Connecting => Some(self.opens_at.saturating_duration_since(now)),
            ReadyState::Open => self
                .pending
                .front()
                .map(|(due, _)| due.saturating_duration_since(now)),
            ReadyState::Closing => Some(Duration::ZERO),
            ReadyState::Closed => None,
        }
    }

    /// Queue `data` to be echoed back. Only valid while open.
    pub fn send(&mut self, data: String, now: AppInstant) -> Result<()> {
        if self.state != ReadyState::Open {
            bail!("Cannot send on {}: socket is {}", self.url, self.state);
        }
        self.pending.push_back((now + self.echo_delay, data));
        Ok(())
    }

    /// Drain every event that is due at `now`, in delivery order.
    pub fn poll(&mut self, now: AppInstant) -> Vec<SocketEvent> {
        let mut events = Vec::new();

        if self.state == ReadyState::Connecting && now >= self.opens_at {
            self.state = ReadyState::Open;
            events.push(SocketEvent::Opened);
            if let Some(payload) = self.initial_payload.take() {
                events.push(SocketEvent::Message(payload));
            }
        }

        if self.state == ReadyState::Open {
            while self.pending.front().is_some_and(|(due, _)| *due <= now) {
                if let Some((_, data)) = self.pending.pop_front() {
                    events.push(SocketEvent::Message(data));
                }
            }
        }

        if self.state == ReadyState::Closing {
            self.state = ReadyState::Closed;
            events.push(SocketEvent::Closed);
        }

        #[cfg(debug_assertions)]
        if DF.log_socket_events {
            for event in &events {
                match event {
                    SocketEvent::Message(data) => {
                        log::info!("Mock socket message ({} bytes)", data.len())
                    }
                    other => log::info!("Mock socket {:?} ({})", other, self.url),
                }
            }
        }

        events
    }

    /// Undelivered messages are dropped. Calling it twice is harmless.
    pub fn close(&mut self) {
        if matches!(self.state, ReadyState::Closing | ReadyState::Closed) {
            return;
        }
        self.state = ReadyState::Closing;
        self.pending.clear();
        self.initial_payload = None;
    }
}
