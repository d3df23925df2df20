use crate::types::PropertyValue;
use thiserror::Error;

#[derive(Clone, PartialEq, Debug, Error)]
pub enum PlayerError {
    /// The value given to a property accessor has the wrong shape.
    #[error("Player property `{property}` cannot be set to {value}: {reason}")]
    InvalidValue {
        property: String,
        value: PropertyValue,
        reason: String,
    },
}
