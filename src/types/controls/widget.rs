use crate::constants::BUTTON_CSS_CLASS;
use std::fmt;
use std::rc::Rc;

pub type ClickHandler = Rc<dyn Fn()>;

/// Who receives the action wired to a widget's click.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ActionTarget {
    /// Sent to the host through the outward action channel.
    Outward,
    /// Dispatched to the component's own action handlers.
    Component,
}

/// Static description of an auxiliary control-bar button.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WidgetDescriptor {
    pub id: &'static str,
    pub css_class: &'static str,
    pub action: &'static str,
    pub target: ActionTarget,
}

/// A button living on a [`ControlSurface`].
///
/// [`ControlSurface`]: crate::types::controls::ControlSurface
pub struct Widget {
    id: &'static str,
    class_name: String,
    on_click: Option<ClickHandler>,
}

impl Widget {
    pub fn create(descriptor: &WidgetDescriptor) -> Self {
        Widget {
            id: descriptor.id,
            class_name: format!("{} {}", descriptor.css_class, BUTTON_CSS_CLASS),
            on_click: None,
        }
    }
    pub fn on_click(mut self, handler: ClickHandler) -> Self {
        self.on_click = Some(handler);
        self
    }
    pub fn id(&self) -> &'static str {
        self.id
    }
    pub fn class_name(&self) -> &str {
        &self.class_name
    }
    pub fn click_handler(&self) -> Option<ClickHandler> {
        self.on_click.clone()
    }
}

impl fmt::Debug for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Widget")
            .field("id", &self.id)
            .field("class_name", &self.class_name)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}
