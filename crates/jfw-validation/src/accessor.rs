// File: src/accessor.rs
// Purpose: Explicit property registry replacing reflective getter lookup

use crate::error::{ConfigurationError, InvocationError, ValidationError};
use crate::value::PropertyValue;
use std::collections::HashMap;
use std::fmt;

/// Error type a fallible getter may return
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

type Getter<T> = Box<dyn Fn(&T) -> Result<Option<PropertyValue>, BoxError> + Send + Sync>;

/// Named getters for the readable properties of `T`
///
/// A getter returns `Ok(None)` for an absent (null) value. A getter that
/// returns `Err` surfaces as an [`InvocationError`] carrying the original
/// error as its source.
pub struct PropertyMap<T> {
    type_name: String,
    getters: HashMap<String, Getter<T>>,
    names: Vec<String>,
}

impl<T: 'static> PropertyMap<T> {
    /// Create an empty map named after `T`
    pub fn new() -> Self {
        Self::named(std::any::type_name::<T>())
    }

    /// Create an empty map with an explicit type name (used in error messages)
    pub fn named(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            getters: HashMap::new(),
            names: Vec::new(),
        }
    }

    /// Register an infallible getter
    pub fn property<V, F>(self, name: impl Into<String>, getter: F) -> Self
    where
        V: Into<PropertyValue>,
        F: Fn(&T) -> Option<V> + Send + Sync + 'static,
    {
        self.insert(
            name.into(),
            Box::new(move |instance: &T| -> Result<Option<PropertyValue>, BoxError> {
                Ok(getter(instance).map(Into::into))
            }),
        )
    }

    /// Register a getter that can fail
    pub fn try_property<V, E, F>(self, name: impl Into<String>, getter: F) -> Self
    where
        V: Into<PropertyValue>,
        E: Into<BoxError>,
        F: Fn(&T) -> Result<Option<V>, E> + Send + Sync + 'static,
    {
        self.insert(
            name.into(),
            Box::new(move |instance: &T| -> Result<Option<PropertyValue>, BoxError> {
                getter(instance)
                    .map(|value| value.map(Into::into))
                    .map_err(Into::into)
            }),
        )
    }

    fn insert(mut self, name: String, getter: Getter<T>) -> Self {
        if self.getters.insert(name.clone(), getter).is_none() {
            self.names.push(name);
        }
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Property names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.getters.contains_key(name)
    }

    /// Verify that `name` is a readable property
    pub fn check(&self, name: &str) -> Result<(), ConfigurationError> {
        self.getter(name).map(|_| ())
    }

    fn getter(&self, name: &str) -> Result<&Getter<T>, ConfigurationError> {
        if name.is_empty() {
            return Err(ConfigurationError::EmptyPropertyName {
                type_name: self.type_name.clone(),
            });
        }

        self.getters
            .get(name)
            .ok_or_else(|| ConfigurationError::UnknownProperty {
                property: name.to_string(),
                type_name: self.type_name.clone(),
            })
    }

    /// Read a property from `instance`
    pub fn get(&self, instance: &T, name: &str) -> Result<Option<PropertyValue>, ValidationError> {
        let getter = self.getter(name)?;

        getter(instance).map_err(|source| {
            InvocationError {
                property: name.to_string(),
                type_name: self.type_name.clone(),
                source,
            }
            .into()
        })
    }
}

impl<T: 'static> Default for PropertyMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for PropertyMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyMap")
            .field("type_name", &self.type_name)
            .field("names", &self.names)
            .finish()
    }
}
