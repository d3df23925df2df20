use crate::types::controls::{ClickHandler, ControlSurface, Widget, WidgetDescriptor};
use tracing::debug;

/// An auxiliary widget and its enabling condition for the current pass.
///
/// `None` marks an always-on widget: it is created the first time it is
/// found missing and never removed afterwards.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct OverlayWidget {
    pub descriptor: WidgetDescriptor,
    pub condition: Option<bool>,
}

impl OverlayWidget {
    pub fn always(descriptor: WidgetDescriptor) -> Self {
        OverlayWidget {
            descriptor,
            condition: None,
        }
    }
    pub fn when(descriptor: WidgetDescriptor, condition: bool) -> Self {
        OverlayWidget {
            descriptor,
            condition: Some(condition),
        }
    }
}

/// Mutations applied by one reconciliation pass.
#[derive(Default, Clone, PartialEq, Eq, Debug)]
pub struct Reconciliation {
    pub added: Vec<&'static str>,
    pub removed: Vec<&'static str>,
}

impl Reconciliation {
    pub fn is_noop(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Brings `surface` in line with `widgets`, in order.
///
/// A widget is added when it should be present and is not, removed when its
/// condition is false and it is present, and left alone otherwise, so
/// repeated passes with the same inputs change nothing. `wire` builds the
/// click handler of every widget that gets created.
pub fn reconcile<W>(
    surface: &dyn ControlSurface,
    widgets: &[OverlayWidget],
    wire: W,
) -> Reconciliation
where
    W: Fn(&WidgetDescriptor) -> ClickHandler,
{
    widgets
        .iter()
        .fold(Reconciliation::default(), |mut reconciliation, widget| {
            let id = widget.descriptor.id;
            let present = surface.has_child(id);
            match (widget.condition.unwrap_or(true), present) {
                (true, false) => {
                    let handler = wire(&widget.descriptor);
                    surface.add_child(Widget::create(&widget.descriptor).on_click(handler));
                    debug!(widget = id, "control bar widget added");
                    reconciliation.added.push(id);
                }
                (false, true) => {
                    surface.remove_child(id);
                    debug!(widget = id, "control bar widget removed");
                    reconciliation.removed.push(id);
                }
                _ => {}
            };
            reconciliation
        })
}
