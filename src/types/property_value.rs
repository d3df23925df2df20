/// Value exchanged between component attributes, player accessors and
/// event arguments.
pub type PropertyValue = serde_json::Value;

/// Equality used before writing to the player.
///
/// Numbers compare by their numeric value so that `10` and `10.0` are the
/// same timestamp; everything else uses structural equality.
pub fn values_equal(a: &PropertyValue, b: &PropertyValue) -> bool {
    match (a, b) {
        (PropertyValue::Number(a), PropertyValue::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => a == b,
        },
        _ => a == b,
    }
}

/// Truthiness of an attribute used as a flag.
pub fn is_truthy(value: &PropertyValue) -> bool {
    match value {
        PropertyValue::Null => false,
        PropertyValue::Bool(value) => *value,
        PropertyValue::Number(value) => value.as_f64().map_or(true, |value| value != 0.0),
        PropertyValue::String(value) => !value.is_empty(),
        PropertyValue::Array(_) | PropertyValue::Object(_) => true,
    }
}
