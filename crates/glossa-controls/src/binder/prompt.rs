#![forbid(unsafe_code)]

use glossa_runtime::TranslationStore;

use super::{ControlBinder, bind_live};
use crate::capability::Control;

/// Binds the placeholder of a text input under `key.prompt`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptBinder;

impl ControlBinder for PromptBinder {
    fn name(&self) -> &'static str {
        "prompt"
    }

    fn supports(&self, control: &dyn Control) -> bool {
        control.as_prompt().is_some()
    }

    fn bind(&self, control: &dyn Control, key: &str, store: &TranslationStore) {
        if let Some(holder) = control.as_prompt() {
            bind_live(holder.prompt_property(), &format!("{key}.prompt"), store);
        }
    }
}
