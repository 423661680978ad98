//! `window.confirm` / `window.alert` backed prompts.

use classroom_core::Interaction;

#[derive(Clone, Copy, Default)]
pub struct BrowserInteraction;

impl Interaction for BrowserInteraction {
    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }

    fn notify(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            drop(window.alert_with_message(message));
        }
    }
}
