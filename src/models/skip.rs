use crate::constants::CURRENT_TIME_PROPERTY;
use crate::types::player::AccessorTable;
use crate::types::PropertyValue;
use serde_json::Number;
use tracing::{trace, warn};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SkipDirection {
    Forward,
    Backward,
}

/// Moves the playback position by `seconds` and returns the new position.
///
/// No clamping happens here; the player enforces media bounds if it wants
/// to. Returns `None` when the player has no readable numeric position.
pub fn skip<P>(
    player: &P,
    accessors: &AccessorTable<P>,
    seconds: f64,
    direction: SkipDirection,
) -> Option<f64> {
    let accessor = match accessors.get(CURRENT_TIME_PROPERTY) {
        Some(accessor) => accessor,
        None => {
            trace!("player does not support currentTime, skipping");
            return None;
        }
    };
    let current_time = accessor.read(player).as_f64()?;
    let next_time = match direction {
        SkipDirection::Forward => current_time + seconds,
        SkipDirection::Backward => current_time - seconds,
    };
    let value = match Number::from_f64(next_time) {
        Some(number) => PropertyValue::Number(number),
        None => {
            warn!(next_time, "skip target is not a finite position");
            return None;
        }
    };
    match accessor.write(player, value) {
        Ok(()) => Some(next_time),
        Err(error) => {
            warn!(%error, "player rejected skip");
            None
        }
    }
}
