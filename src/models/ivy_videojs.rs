use crate::constants::READY_ACTION;
use crate::models::player_component::PlayerComponent;
use crate::runtime::msg::{Action, ActionContext, ActionSink};
use crate::runtime::RenderLoop;
use crate::types::config::PlayerConfig;
use crate::types::player::PlayerHandle;
use crate::types::PropertyValue;
use derive_more::Deref;
use tracing::debug;

/// High-level player component.
///
/// Re-sends every action of the wrapped [`PlayerComponent`] to `sink`. On
/// `ready` it first binds each of the configured attribute bindings, so a
/// consumer receiving `ready` already has a player mirroring the attributes.
#[derive(Deref)]
pub struct IvyVideojs<P: PlayerHandle> {
    component: PlayerComponent<P>,
}

impl<P: PlayerHandle> IvyVideojs<P> {
    pub fn new<S: ActionSink<P> + 'static>(
        config: &PlayerConfig,
        render_loop: RenderLoop,
        sink: S,
    ) -> Self {
        let bindings = config.player_attribute_bindings.to_owned();
        let component = PlayerComponent::new(config, render_loop, move |action: Action<P>| {
            if action.name == READY_ACTION {
                if let Some(context) = &action.context {
                    setup_player_attribute_bindings(&bindings, context);
                };
            };
            sink.send_action(action);
        });
        IvyVideojs { component }
    }
    pub fn component(&self) -> &PlayerComponent<P> {
        &self.component
    }
    pub fn set(&self, property: &str, value: impl Into<PropertyValue>) -> bool {
        self.component.attrs().set(property, value)
    }
}

fn setup_player_attribute_bindings<P: PlayerHandle>(
    bindings: &[String],
    context: &ActionContext<P>,
) -> usize {
    let bound = bindings
        .iter()
        .filter(|property| {
            context
                .component
                .bind_property_to_player(&context.player, property, None)
        })
        .count();
    debug!(bound, "player attribute bindings set up");
    bound
}
