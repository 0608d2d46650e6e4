#![forbid(unsafe_code)]

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use glossa_runtime::Property;

use crate::capability::{Control, StringTree};

/// A node of a [`TreeView`]. Clones share the node.
pub struct TreeItem<T> {
    value: Property<T>,
    children: Rc<RefCell<Vec<TreeItem<T>>>>,
}

impl<T> Clone for TreeItem<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            children: Rc::clone(&self.children),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for TreeItem<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeItem")
            .field("value", &self.value)
            .field("children", &self.children.borrow())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> TreeItem<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value: Property::new(value),
            children: Rc::default(),
        }
    }

    /// Append `child` and return the node.
    #[must_use]
    pub fn child(self, child: TreeItem<T>) -> Self {
        self.add_child(child);
        self
    }

    pub fn add_child(&self, child: TreeItem<T>) {
        self.children.borrow_mut().push(child);
    }

    #[must_use]
    pub fn children(&self) -> Vec<TreeItem<T>> {
        self.children.borrow().clone()
    }

    #[must_use]
    pub fn value(&self) -> T {
        self.value.get()
    }

    pub fn set_value(&self, value: T) {
        self.value.set(value);
    }

    /// The node's value slot.
    #[must_use]
    pub fn value_property(&self) -> &Property<T> {
        &self.value
    }
}

/// Hierarchical view with a single root node.
pub struct TreeView<T> {
    id: Option<String>,
    root: Rc<RefCell<Option<TreeItem<T>>>>,
}

impl<T> Clone for TreeView<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            root: Rc::clone(&self.root),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for TreeView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeView")
            .field("id", &self.id)
            .field("root", &self.root.borrow())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Default for TreeView<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone + PartialEq + 'static> TreeView<T> {
    #[must_use]
    pub fn new(root: TreeItem<T>) -> Self {
        Self {
            id: None,
            root: Rc::new(RefCell::new(Some(root))),
        }
    }

    /// A tree without a root node.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            id: None,
            root: Rc::new(RefCell::new(None)),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn root(&self) -> Option<TreeItem<T>> {
        self.root.borrow().clone()
    }

    pub fn set_root(&self, root: Option<TreeItem<T>>) {
        *self.root.borrow_mut() = root;
    }
}

impl<T: Clone + PartialEq + 'static> StringTree for TreeView<T> {
    fn string_root(&self) -> Option<TreeItem<String>> {
        let slot = self.root.borrow();
        let root: &dyn Any = slot.as_ref()?;
        root.downcast_ref::<TreeItem<String>>().cloned()
    }
}

impl<T: Clone + PartialEq + 'static> Control for TreeView<T> {
    fn kind(&self) -> &'static str {
        "TreeView"
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn as_tree(&self) -> Option<&dyn StringTree> {
        Some(self)
    }
}
