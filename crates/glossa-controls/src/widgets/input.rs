#![forbid(unsafe_code)]

//! Text inputs. Their text is user content; only the placeholder is
//! localized.

use glossa_runtime::StringProperty;

use crate::capability::{Control, PromptHolder};

/// Single-line text input.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    id: Option<String>,
    text: StringProperty,
    prompt: StringProperty,
}

/// Multi-line text input.
#[derive(Debug, Clone, Default)]
pub struct TextArea {
    id: Option<String>,
    text: StringProperty,
    prompt: StringProperty,
    wrap: bool,
}

impl TextField {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the placeholder shown while the field is empty.
    #[must_use]
    pub fn with_prompt(self, prompt: impl Into<String>) -> Self {
        self.prompt.set(prompt.into());
        self
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.text.get()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.text.set(text.into());
    }

    #[must_use]
    pub fn prompt(&self) -> String {
        self.prompt.get()
    }
}

impl TextArea {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_prompt(self, prompt: impl Into<String>) -> Self {
        self.prompt.set(prompt.into());
        self
    }

    #[must_use]
    pub fn wrapping(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    #[must_use]
    pub fn wraps(&self) -> bool {
        self.wrap
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.text.get()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.text.set(text.into());
    }

    #[must_use]
    pub fn prompt(&self) -> String {
        self.prompt.get()
    }
}

impl PromptHolder for TextField {
    fn prompt_property(&self) -> &StringProperty {
        &self.prompt
    }
}

impl PromptHolder for TextArea {
    fn prompt_property(&self) -> &StringProperty {
        &self.prompt
    }
}

impl Control for TextField {
    fn kind(&self) -> &'static str {
        "TextField"
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn as_prompt(&self) -> Option<&dyn PromptHolder> {
        Some(self)
    }
}

impl Control for TextArea {
    fn kind(&self) -> &'static str {
        "TextArea"
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn as_prompt(&self) -> Option<&dyn PromptHolder> {
        Some(self)
    }
}
