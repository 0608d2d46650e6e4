#![forbid(unsafe_code)]

use glossa_runtime::TranslationStore;

use super::{ControlBinder, bind_live};
use crate::capability::Control;

/// Binds the primary text of any text-holding control under `key`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabeledBinder;

impl ControlBinder for LabeledBinder {
    fn name(&self) -> &'static str {
        "labeled"
    }

    fn supports(&self, control: &dyn Control) -> bool {
        control.as_text().is_some()
    }

    fn bind(&self, control: &dyn Control, key: &str, store: &TranslationStore) {
        if let Some(holder) = control.as_text() {
            bind_live(holder.text_property(), key, store);
        }
    }
}
