use crate::types::player::PlayerError;
use crate::types::PropertyValue;
use itertools::Itertools;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

type ReadFn<P> = Box<dyn Fn(&P) -> PropertyValue>;
type WriteFn<P> = Box<dyn Fn(&P, PropertyValue) -> Result<(), PlayerError>>;

/// Read/write pair for a single player property.
pub struct Accessor<P> {
    read: ReadFn<P>,
    write: WriteFn<P>,
}

impl<P> Accessor<P> {
    pub fn new<R, W>(read: R, write: W) -> Self
    where
        R: Fn(&P) -> PropertyValue + 'static,
        W: Fn(&P, PropertyValue) -> Result<(), PlayerError> + 'static,
    {
        Accessor {
            read: Box::new(read),
            write: Box::new(write),
        }
    }
    /// Builds an accessor over a concrete Rust type.
    ///
    /// Values are converted through serde, so a write whose value does not
    /// deserialize into `T` fails with [`PlayerError::InvalidValue`] and the
    /// player is left untouched.
    pub fn typed<T, R, W>(property: &str, read: R, write: W) -> Self
    where
        T: Serialize + DeserializeOwned,
        R: Fn(&P) -> T + 'static,
        W: Fn(&P, T) + 'static,
    {
        let property = property.to_owned();
        Accessor::new(
            move |player| serde_json::to_value(read(player)).unwrap_or(PropertyValue::Null),
            move |player, value| {
                let typed = serde_json::from_value::<T>(value.to_owned()).map_err(|error| {
                    PlayerError::InvalidValue {
                        property: property.to_owned(),
                        value,
                        reason: error.to_string(),
                    }
                })?;
                write(player, typed);
                Ok(())
            },
        )
    }
    pub fn read(&self, player: &P) -> PropertyValue {
        (self.read)(player)
    }
    pub fn write(&self, player: &P, value: PropertyValue) -> Result<(), PlayerError> {
        (self.write)(player, value)
    }
}

/// The properties a player exposes, keyed by name.
///
/// Built once per player. A name missing from the table is an unsupported
/// property, which callers treat as a no-op.
pub struct AccessorTable<P> {
    accessors: HashMap<String, Accessor<P>>,
}

impl<P> Default for AccessorTable<P> {
    fn default() -> Self {
        AccessorTable {
            accessors: HashMap::new(),
        }
    }
}

impl<P> AccessorTable<P> {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with(mut self, property: impl Into<String>, accessor: Accessor<P>) -> Self {
        self.insert(property, accessor);
        self
    }
    pub fn with_typed<T, R, W>(self, property: &str, read: R, write: W) -> Self
    where
        T: Serialize + DeserializeOwned,
        R: Fn(&P) -> T + 'static,
        W: Fn(&P, T) + 'static,
    {
        self.with(property, Accessor::typed(property, read, write))
    }
    pub fn insert(&mut self, property: impl Into<String>, accessor: Accessor<P>) {
        self.accessors.insert(property.into(), accessor);
    }
    pub fn get(&self, property: &str) -> Option<&Accessor<P>> {
        self.accessors.get(property)
    }
    pub fn contains(&self, property: &str) -> bool {
        self.accessors.contains_key(property)
    }
    pub fn len(&self) -> usize {
        self.accessors.len()
    }
    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.accessors.keys().map(String::as_str).sorted()
    }
}

impl<P> fmt::Debug for AccessorTable<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessorTable")
            .field("properties", &self.properties().collect::<Vec<_>>())
            .finish()
    }
}
