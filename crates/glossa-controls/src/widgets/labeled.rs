#![forbid(unsafe_code)]

//! Controls whose only localized content is one text.

use glossa_runtime::{Property, StringProperty};

use crate::capability::{Control, TextHolder};

macro_rules! labeled_control {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            id: Option<String>,
            text: StringProperty,
        }

        impl $name {
            #[must_use]
            pub fn new(text: impl Into<String>) -> Self {
                Self {
                    id: None,
                    text: StringProperty::new(text.into()),
                }
            }

            #[must_use]
            pub fn with_id(mut self, id: impl Into<String>) -> Self {
                self.id = Some(id.into());
                self
            }

            #[must_use]
            pub fn text(&self) -> String {
                self.text.get()
            }

            pub fn set_text(&self, text: impl Into<String>) {
                self.text.set(text.into());
            }
        }

        impl TextHolder for $name {
            fn text_property(&self) -> &StringProperty {
                &self.text
            }
        }

        impl Control for $name {
            fn kind(&self) -> &'static str {
                stringify!($name)
            }

            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }

            fn as_text(&self) -> Option<&dyn TextHolder> {
                Some(self)
            }
        }
    };
}

labeled_control!(
    /// Static text.
    Label
);

labeled_control!(
    /// Push button.
    Button
);

labeled_control!(
    /// Link-styled text.
    Hyperlink
);

labeled_control!(
    /// Collapsible section header.
    TitledPane
);

labeled_control!(
    /// Popup hint attached to another control.
    Tooltip
);

/// Toggle with a text label.
#[derive(Debug, Clone, Default)]
pub struct CheckBox {
    id: Option<String>,
    text: StringProperty,
    selected: Property<bool>,
}

impl CheckBox {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: StringProperty::new(text.into()),
            selected: Property::new(false),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.text.get()
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected.get()
    }

    pub fn set_selected(&self, selected: bool) {
        self.selected.set(selected);
    }
}

impl TextHolder for CheckBox {
    fn text_property(&self) -> &StringProperty {
        &self.text
    }
}

impl Control for CheckBox {
    fn kind(&self) -> &'static str {
        "CheckBox"
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn as_text(&self) -> Option<&dyn TextHolder> {
        Some(self)
    }
}

/// One option of a group; `group` names the set it is exclusive within.
#[derive(Debug, Clone, Default)]
pub struct RadioButton {
    id: Option<String>,
    group: Option<String>,
    text: StringProperty,
    selected: Property<bool>,
}

impl RadioButton {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            group: None,
            text: StringProperty::new(text.into()),
            selected: Property::new(false),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    #[must_use]
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.text.get()
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected.get()
    }

    pub fn set_selected(&self, selected: bool) {
        self.selected.set(selected);
    }
}

impl TextHolder for RadioButton {
    fn text_property(&self) -> &StringProperty {
        &self.text
    }
}

impl Control for RadioButton {
    fn kind(&self) -> &'static str {
        "RadioButton"
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn as_text(&self) -> Option<&dyn TextHolder> {
        Some(self)
    }
}
