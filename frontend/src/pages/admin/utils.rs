use leptos::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
    }
}

pub fn bump(reload: RwSignal<u32>) {
    reload.update(|value| *value = value.wrapping_add(1));
}

/// Parses an optional whole-number input; blank is `None`.
pub fn parse_optional_id(raw: &str) -> Result<Option<i64>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| format!("'{}' is not a valid id.", trimmed))
}

#[component]
pub fn MessageBanner(messages: RwSignal<MessageState>) -> impl IntoView {
    use crate::components::layout::{ErrorMessage, SuccessMessage};
    view! {
        {move || messages.with(|state| state.error.clone()).map(|message| view! { <ErrorMessage message=message /> })}
        {move || messages.with(|state| state.success.clone()).map(|message| view! { <SuccessMessage message=message /> })}
    }
}
