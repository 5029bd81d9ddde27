//! Transient feedback regions.
//!
//! `show` replaces the region's message and schedules an automatic clear.
//! The pending clear is scoped to the region: showing a new message drops
//! the previous `Timeout`, which cancels it, so the last call wins without
//! a stale flash.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Auto-clear delay. Uniform for both kinds, for determinism.
pub const CLEAR_DELAY_MS: u32 = 5_000;

/// Visual kind of a feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Error,
    Success,
}

impl FeedbackKind {
    /// CSS class applied to the region's alert.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Error => "alert alert-error",
            Self::Success => "alert alert-success",
        }
    }
}

/// A message currently shown in a feedback region.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackMessage {
    pub kind: FeedbackKind,
    pub text: String,
}

/// Handle to one feedback region: its current message and the scoped
/// auto-clear timer.
#[derive(Clone)]
pub struct FeedbackHandle {
    message: UseStateHandle<Option<FeedbackMessage>>,
    timer: Rc<RefCell<Option<Timeout>>>,
}

impl FeedbackHandle {
    /// Replace the region's message and (re)schedule its auto-clear.
    pub fn show(&self, kind: FeedbackKind, text: impl Into<String>) {
        self.message.set(Some(FeedbackMessage {
            kind,
            text: text.into(),
        }));
        let message = self.message.clone();
        let clear = Timeout::new(CLEAR_DELAY_MS, move || message.set(None));
        // Dropping the previous Timeout cancels its pending clear.
        *self.timer.borrow_mut() = Some(clear);
    }

    /// The message currently shown, if any.
    #[must_use]
    pub fn current(&self) -> Option<FeedbackMessage> {
        (*self.message).clone()
    }
}

/// Hook binding one feedback region to component state.
#[hook]
pub fn use_feedback() -> FeedbackHandle {
    let message = use_state(|| None::<FeedbackMessage>);
    let timer = use_mut_ref(|| None::<Timeout>);
    FeedbackHandle { message, timer }
}

/// Props of the [`Feedback`] region component.
#[derive(Properties, PartialEq)]
pub struct FeedbackProps {
    /// The message to render, if any.
    pub message: Option<FeedbackMessage>,
}

/// Renders a feedback region's current message, styled per kind.
#[function_component(Feedback)]
pub fn feedback(props: &FeedbackProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div class={message.kind.css_class()} role="alert">
                <span>{ message.text.clone() }</span>
            </div>
        },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests kind-to-class styling
    #[test]
    fn test_kind_css_classes() {
        assert_eq!(FeedbackKind::Error.css_class(), "alert alert-error");
        assert_eq!(FeedbackKind::Success.css_class(), "alert alert-success");
    }

    /// Tests the uniform auto-clear delay
    #[test]
    fn test_clear_delay_is_uniform() {
        assert_eq!(CLEAR_DELAY_MS, 5_000);
    }
}
