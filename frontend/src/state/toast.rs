use leptos::*;

pub const TOAST_TIMEOUT_MS: u64 = 4_000;
const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => {
                "bg-status-success-bg text-status-success-text border-status-success-border"
            }
            ToastKind::Error => "bg-status-error-bg text-status-error-text border-status-error-border",
            ToastKind::Info => "bg-surface-elevated text-fg border-border",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Queue of transient notifications. Newest last; the oldest is dropped
/// once the queue is full.
#[derive(Clone, Copy)]
pub struct ToastState {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(1),
        }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    pub fn push(&self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let message = message.into();
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        match kind {
            ToastKind::Error => log::warn!("toast: {}", message),
            _ => log::debug!("toast: {}", message),
        }
        self.toasts.update(|list| {
            list.push(Toast { id, kind, message });
            if list.len() > MAX_TOASTS {
                let overflow = list.len() - MAX_TOASTS;
                list.drain(..overflow);
            }
        });
        self.schedule_dismiss(id);
        id
    }

    pub fn push_success(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    pub fn push_error(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    pub fn push_info(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Info, message)
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|toast| toast.id != id));
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let state = *self;
        set_timeout(
            move || state.dismiss(id),
            std::time::Duration::from_millis(TOAST_TIMEOUT_MS),
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toasts() -> ToastState {
    let state = ToastState::new();
    provide_context(state);
    state
}

pub fn use_toasts() -> ToastState {
    use_context::<ToastState>().unwrap_or_default()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn push_and_dismiss_toasts() {
        with_runtime(|| {
            let toasts = ToastState::new();
            let first = toasts.push_success("Saved");
            let second = toasts.push_error("Failed");
            assert_eq!(toasts.toasts().get().len(), 2);
            assert_ne!(first, second);

            toasts.dismiss(first);
            let remaining = toasts.toasts().get();
            assert_eq!(remaining.len(), 1);
            assert_eq!(remaining[0].kind, ToastKind::Error);
        });
    }

    #[test]
    fn queue_drops_oldest_when_full() {
        with_runtime(|| {
            let toasts = ToastState::new();
            for n in 0..7 {
                toasts.push_info(format!("toast {}", n));
            }
            let list = toasts.toasts().get();
            assert_eq!(list.len(), MAX_TOASTS);
            assert_eq!(list[0].message, "toast 2");
        });
    }

    #[test]
    fn use_toasts_shares_provided_state() {
        with_runtime(|| {
            let provided = provide_toasts();
            provided.push_info("hello");
            assert_eq!(use_toasts().toasts().get().len(), 1);
        });
    }
}
