#![forbid(unsafe_code)]

//! Reference controls.
//!
//! A minimal widget set implementing the capability traits. Each control is
//! a cheap handle: clones share the same properties, so a control can be
//! stored in a view struct and bound from there.

pub mod collection;
pub mod input;
pub mod labeled;
pub mod menu;
pub mod tab;
pub mod tree;

pub use collection::{ChoiceBox, ComboBox, ListView};
pub use input::{TextArea, TextField};
pub use labeled::{Button, CheckBox, Hyperlink, Label, RadioButton, TitledPane, Tooltip};
pub use menu::{ContextMenu, Menu, MenuItem};
pub use tab::Tab;
pub use tree::{TreeItem, TreeView};
