use crate::models::player_component::PlayerComponent;
use crate::types::player::PlayerHandle;
use crate::types::PropertyValue;
use derivative::Derivative;
use std::rc::Rc;

/// Player and component an outward action originates from.
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct ActionContext<P: PlayerHandle> {
    pub player: Rc<P>,
    pub component: PlayerComponent<P>,
}

/// Fire-and-forget notification sent to the host.
///
/// Proxied player events and `ready` carry a context; actions fired by the
/// control-bar widgets do not.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""))]
pub struct Action<P: PlayerHandle> {
    pub name: String,
    #[derivative(Debug = "ignore")]
    pub context: Option<ActionContext<P>>,
    pub args: Vec<PropertyValue>,
}

impl<P: PlayerHandle> Action<P> {
    pub fn new(name: impl Into<String>) -> Self {
        Action {
            name: name.into(),
            context: None,
            args: vec![],
        }
    }
    pub fn with_context(
        name: impl Into<String>,
        player: Rc<P>,
        component: PlayerComponent<P>,
        args: Vec<PropertyValue>,
    ) -> Self {
        Action {
            name: name.into(),
            context: Some(ActionContext { player, component }),
            args,
        }
    }
}
