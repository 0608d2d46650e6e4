#![forbid(unsafe_code)]

//! Collection controls backed by an [`ItemList`].
//!
//! All three are generic over the element type. Only `String` collections
//! are localized: [`IndexedStringList::string_items`] returns `None` for any
//! other element type.

use std::any::Any;
use std::fmt;

use glossa_runtime::{Property, StringProperty};

use crate::capability::{Control, IndexedStringList};
use crate::item_list::ItemList;

fn as_string_items<T: 'static>(items: &ItemList<T>) -> Option<ItemList<String>> {
    (items as &dyn Any).downcast_ref::<ItemList<String>>().cloned()
}

/// Drop-down selection from a fixed set of choices.
pub struct ChoiceBox<T> {
    id: Option<String>,
    items: ItemList<T>,
    selected: Property<Option<usize>>,
}

/// Drop-down selection with a placeholder.
pub struct ComboBox<T> {
    id: Option<String>,
    items: ItemList<T>,
    selected: Property<Option<usize>>,
    prompt: StringProperty,
}

/// Scrollable list of elements.
pub struct ListView<T> {
    id: Option<String>,
    items: ItemList<T>,
    selected: Property<Option<usize>>,
}

macro_rules! collection_common {
    ($name:ident) => {
        impl<T: Clone + PartialEq + 'static> $name<T> {
            #[must_use]
            pub fn with_id(mut self, id: impl Into<String>) -> Self {
                self.id = Some(id.into());
                self
            }

            /// The shared element list.
            #[must_use]
            pub fn items(&self) -> &ItemList<T> {
                &self.items
            }

            /// Select `index`, or clear the selection with `None`.
            /// Out-of-range indices clear it too.
            pub fn select(&self, index: Option<usize>) {
                self.selected.set(index.filter(|&i| i < self.items.len()));
            }

            #[must_use]
            pub fn selected_index(&self) -> Option<usize> {
                self.selected.get()
            }

            #[must_use]
            pub fn selected_item(&self) -> Option<T> {
                self.selected.get().and_then(|i| self.items.get(i))
            }
        }

        impl<T: fmt::Debug> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("id", &self.id)
                    .field("items", &self.items)
                    .finish_non_exhaustive()
            }
        }

        impl<T: Clone + PartialEq + 'static> Control for $name<T> {
            fn kind(&self) -> &'static str {
                stringify!($name)
            }

            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }

            fn as_indexed(&self) -> Option<&dyn IndexedStringList> {
                Some(self)
            }
        }
    };
}

collection_common!(ChoiceBox);
collection_common!(ComboBox);
collection_common!(ListView);

impl<T: Clone + PartialEq + 'static> ChoiceBox<T> {
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self {
            id: None,
            items: ItemList::new(items),
            selected: Property::new(None),
        }
    }
}

impl<T: Clone + PartialEq + 'static> ComboBox<T> {
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self {
            id: None,
            items: ItemList::new(items),
            selected: Property::new(None),
            prompt: StringProperty::default(),
        }
    }

    /// Set the placeholder shown while nothing is selected.
    #[must_use]
    pub fn with_prompt(self, prompt: impl Into<String>) -> Self {
        self.prompt.set(prompt.into());
        self
    }

    #[must_use]
    pub fn prompt(&self) -> String {
        self.prompt.get()
    }
}

impl<T: Clone + PartialEq + 'static> ListView<T> {
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self {
            id: None,
            items: ItemList::new(items),
            selected: Property::new(None),
        }
    }
}

impl<T> Clone for ChoiceBox<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            items: self.items.clone(),
            selected: self.selected.clone(),
        }
    }
}

impl<T> Clone for ComboBox<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            items: self.items.clone(),
            selected: self.selected.clone(),
            prompt: self.prompt.clone(),
        }
    }
}

impl<T> Clone for ListView<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            items: self.items.clone(),
            selected: self.selected.clone(),
        }
    }
}

impl<T: Clone + PartialEq + 'static> IndexedStringList for ChoiceBox<T> {
    fn string_items(&self) -> Option<ItemList<String>> {
        as_string_items(&self.items)
    }
}

impl<T: Clone + PartialEq + 'static> IndexedStringList for ComboBox<T> {
    fn string_items(&self) -> Option<ItemList<String>> {
        as_string_items(&self.items)
    }

    fn prompt_property(&self) -> Option<&StringProperty> {
        Some(&self.prompt)
    }
}

impl<T: Clone + PartialEq + 'static> IndexedStringList for ListView<T> {
    fn string_items(&self) -> Option<ItemList<String>> {
        as_string_items(&self.items)
    }
}
