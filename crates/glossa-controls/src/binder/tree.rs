#![forbid(unsafe_code)]

use glossa_runtime::TranslationStore;
use tracing::debug;

use super::{ControlBinder, bind_live};
use crate::capability::Control;
use crate::widgets::TreeItem;

/// Binds every node of a string tree.
///
/// The root is index 0 under `key`, and each child appends its position:
/// root `key.0`, its second child `key.0.1`, that child's first child
/// `key.0.1.0`. Node values are bound live.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBinder;

impl ControlBinder for TreeBinder {
    fn name(&self) -> &'static str {
        "tree"
    }

    fn supports(&self, control: &dyn Control) -> bool {
        control.as_tree().is_some()
    }

    fn bind(&self, control: &dyn Control, key: &str, store: &TranslationStore) {
        let Some(tree) = control.as_tree() else {
            return;
        };
        let Some(root) = tree.string_root() else {
            debug!(key, "tree has no string root, skipping");
            return;
        };
        bind_node(&root, &format!("{key}.0"), store);
    }
}

fn bind_node(node: &TreeItem<String>, key: &str, store: &TranslationStore) {
    bind_live(node.value_property(), key, store);
    for (index, child) in node.children().iter().enumerate() {
        bind_node(child, &format!("{key}.{index}"), store);
    }
}
