use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;

/// What the prompt produced: the trimmed field text, or `None` for "no change".
pub(crate) type PromptResolution = Option<String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PromptPhase {
    Open,
    Resolved(PromptResolution),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PromptSignal {
    Confirm(String),
    Cancel,
    Key { key: String, value: String },
    WindowDestroyed,
}

/// Maps a prompt signal to its resolution. Keys other than Enter/Escape
/// do not resolve the prompt.
pub(crate) fn resolution_for_signal(signal: PromptSignal) -> Option<PromptResolution> {
    match signal {
        PromptSignal::Confirm(value) => Some(Some(value.trim().to_string())),
        PromptSignal::Cancel | PromptSignal::WindowDestroyed => Some(None),
        PromptSignal::Key { key, value } => match key.as_str() {
            "Enter" => Some(Some(value.trim().to_string())),
            "Escape" => Some(None),
            _ => None,
        },
    }
}

#[derive(Debug)]
struct SessionInner {
    phase: PromptPhase,
    sender: Option<oneshot::Sender<PromptResolution>>,
}

#[derive(Debug)]
pub(crate) struct UrlPromptSession {
    inner: Mutex<SessionInner>,
}

impl UrlPromptSession {
    pub(crate) fn open() -> (Arc<Self>, oneshot::Receiver<PromptResolution>) {
        let (sender, receiver) = oneshot::channel();
        let session = Arc::new(Self {
            inner: Mutex::new(SessionInner {
                phase: PromptPhase::Open,
                sender: Some(sender),
            }),
        });
        (session, receiver)
    }

    pub(crate) fn phase(&self) -> PromptPhase {
        self.inner
            .lock()
            .map(|guard| guard.phase.clone())
            .unwrap_or(PromptPhase::Resolved(None))
    }

    pub(crate) fn is_open(&self) -> bool {
        self.phase() == PromptPhase::Open
    }

    /// Moves `Open -> Resolved` and delivers the resolution to the waiter.
    /// Returns false when the session was already resolved.
    pub(crate) fn resolve(&self, resolution: PromptResolution) -> bool {
        let Ok(mut guard) = self.inner.lock() else {
            return false;
        };
        if guard.phase != PromptPhase::Open {
            return false;
        }

        guard.phase = PromptPhase::Resolved(resolution.clone());
        if let Some(sender) = guard.sender.take() {
            // The waiter may already be gone; the phase still records the outcome.
            let _ = sender.send(resolution);
        }
        true
    }

    pub(crate) fn handle_signal(&self, signal: PromptSignal) -> bool {
        match resolution_for_signal(signal) {
            Some(resolution) => self.resolve(resolution),
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UrlChangeDecision {
    Unchanged,
    Navigate(String),
}

pub(crate) fn decide_url_change(current_url: &str, resolution: PromptResolution) -> UrlChangeDecision {
    match resolution {
        Some(url) if !url.is_empty() && url != current_url => UrlChangeDecision::Navigate(url),
        _ => UrlChangeDecision::Unchanged,
    }
}
