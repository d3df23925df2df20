use crate::types::controls::Widget;
use std::cell::{Cell, RefCell};

/// The part of a player's UI auxiliary widgets are attached to.
pub trait ControlSurface {
    fn has_child(&self, id: &str) -> bool;
    fn add_child(&self, widget: Widget);
    /// Detaches the widget together with its click handler.
    fn remove_child(&self, id: &str) -> Option<Widget>;
}

/// Ordered in-memory [`ControlSurface`].
#[derive(Default, Debug)]
pub struct ControlBar {
    children: RefCell<Vec<Widget>>,
    mutations: Cell<usize>,
}

impl ControlBar {
    pub fn child_ids(&self) -> Vec<&'static str> {
        self.children.borrow().iter().map(Widget::id).collect()
    }
    pub fn class_name(&self, id: &str) -> Option<String> {
        self.children
            .borrow()
            .iter()
            .find(|widget| widget.id() == id)
            .map(|widget| widget.class_name().to_owned())
    }
    /// Number of adds and removes applied so far.
    pub fn mutations(&self) -> usize {
        self.mutations.get()
    }
    /// Returns `false` when no widget with a click handler has this id.
    pub fn click(&self, id: &str) -> bool {
        let handler = self
            .children
            .borrow()
            .iter()
            .find(|widget| widget.id() == id)
            .and_then(Widget::click_handler);
        match handler {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

impl ControlSurface for ControlBar {
    fn has_child(&self, id: &str) -> bool {
        self.children.borrow().iter().any(|widget| widget.id() == id)
    }
    fn add_child(&self, widget: Widget) {
        self.children.borrow_mut().push(widget);
        self.mutations.set(self.mutations.get() + 1);
    }
    fn remove_child(&self, id: &str) -> Option<Widget> {
        let mut children = self.children.borrow_mut();
        let position = children.iter().position(|widget| widget.id() == id)?;
        self.mutations.set(self.mutations.get() + 1);
        Some(children.remove(position))
    }
}
