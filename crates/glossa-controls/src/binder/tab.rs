#![forbid(unsafe_code)]

use glossa_runtime::TranslationStore;
use tracing::debug;

use super::{ControlBinder, bind_live};
use crate::capability::{Control, TextHolder};
use crate::widgets::Tooltip;

/// Binds a tab's label under `key` and its tooltip under `key.tooltip`.
///
/// A tab without a tooltip gets an empty one, so a catalog can add hints
/// the layout never declared.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabBinder;

impl ControlBinder for TabBinder {
    fn name(&self) -> &'static str {
        "tab"
    }

    fn supports(&self, control: &dyn Control) -> bool {
        control.as_text().is_some() && control.as_tooltip().is_some()
    }

    fn bind(&self, control: &dyn Control, key: &str, store: &TranslationStore) {
        let (Some(text), Some(tooltips)) = (control.as_text(), control.as_tooltip()) else {
            return;
        };
        bind_live(text.text_property(), key, store);

        let tooltip = tooltips.tooltip().unwrap_or_else(|| {
            debug!(key, "tab has no tooltip, creating one");
            let tooltip = Tooltip::default();
            tooltips.set_tooltip(tooltip.clone());
            tooltip
        });
        bind_live(tooltip.text_property(), &format!("{key}.tooltip"), store);
    }
}
