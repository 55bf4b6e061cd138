//! Form schema and form state shared by every resource screen.

use crate::domain::entities::EntityId;
use crate::domain::errors::FormError;
use crate::domain::resource::ResourceKind;

/// Input kind of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// E-mail address (free text, no format check).
    Email,
    /// Calendar date in `YYYY-MM-DD` form.
    Date,
    /// Whole number sent as an integer.
    Number,
    /// Identifier selected from another resource's list.
    Reference(ResourceKind),
}

impl FieldKind {
    /// Returns the resource a reference field selects from.
    #[must_use]
    pub const fn referenced_kind(self) -> Option<ResourceKind> {
        match self {
            Self::Reference(kind) => Some(kind),
            _ => None,
        }
    }
}

/// Declarative description of one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire name of the field.
    pub key: &'static str,
    /// Label shown above the input.
    pub label: &'static str,
    /// Input kind.
    pub kind: FieldKind,
    /// Whether a blank value blocks submission.
    pub required: bool,
}

impl FieldSpec {
    /// Creates a required field.
    #[must_use]
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: true,
        }
    }

    /// Marks the field optional.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// Current text of every field of a resource form.
///
/// Values are kept in schema order. Reference fields hold the selected
/// identifier as text, or an empty string when nothing is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: &'static [FieldSpec],
    values: Vec<String>,
}

impl FormState {
    /// Creates a form with all fields empty.
    #[must_use]
    pub fn new(fields: &'static [FieldSpec]) -> Self {
        Self {
            fields,
            values: vec![String::new(); fields.len()],
        }
    }

    /// Creates a form from `(key, value)` pairs.
    ///
    /// Unknown keys are ignored in release builds and assert in debug builds.
    #[must_use]
    pub fn with_values<K, V>(fields: &'static [FieldSpec], values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::new(fields);
        for (key, value) in values {
            let key = key.as_ref();
            let result = form.set(key, value);
            debug_assert!(result.is_ok(), "unknown form key '{key}'");
        }
        form
    }

    /// Returns the field schema.
    #[must_use]
    pub const fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the schema has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns whether every field is blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.values.iter().all(|v| v.trim().is_empty())
    }

    fn index_of(&self, key: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.key == key)
    }

    /// Returns the value of a field, or an empty string for unknown keys.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.index_of(key)
            .and_then(|i| self.values.get(i))
            .map_or("", String::as_str)
    }

    /// Sets the value of a field.
    ///
    /// # Errors
    /// Returns error if the key is not part of the schema.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), FormError> {
        let index = self.index_of(key).ok_or_else(|| FormError::UnknownField {
            field: key.to_string(),
        })?;
        self.values[index] = value.into();
        Ok(())
    }

    /// Returns the value at a schema position.
    #[must_use]
    pub fn value_at(&self, index: usize) -> &str {
        self.values.get(index).map_or("", String::as_str)
    }

    /// Sets the value at a schema position. Out of range positions are ignored.
    pub fn set_at(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = value.into();
        }
    }

    /// Resets every field to an empty string.
    pub fn clear(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
    }

    /// Checks every field flagged as required.
    ///
    /// # Errors
    /// Returns the first required field that is blank.
    pub fn check_required(&self) -> Result<(), FormError> {
        self.fields
            .iter()
            .zip(&self.values)
            .find(|(field, value)| field.required && value.trim().is_empty())
            .map_or(Ok(()), |(field, _)| Err(FormError::missing(field.key)))
    }

    /// Returns the trimmed text of a field, failing when blank.
    ///
    /// # Errors
    /// Returns error if the field is empty.
    pub fn text(&self, key: &'static str) -> Result<String, FormError> {
        let value = self.get(key).trim();
        if value.is_empty() {
            Err(FormError::missing(key))
        } else {
            Ok(value.to_string())
        }
    }

    /// Parses a whole-number field.
    ///
    /// # Errors
    /// Returns error if the field is empty or not an integer.
    pub fn number(&self, key: &'static str) -> Result<i32, FormError> {
        let value = self.text(key)?;
        value
            .parse()
            .map_err(|_| FormError::invalid_number(key, value))
    }

    /// Parses a reference field into the selected identifier.
    ///
    /// # Errors
    /// Returns error if nothing is selected or the value is not an identifier.
    pub fn reference(&self, key: &'static str) -> Result<EntityId, FormError> {
        let value = self.text(key)?;
        EntityId::parse(&value).ok_or_else(|| FormError::invalid_reference(key, value))
    }
}

/// Truncates a backend date-time (`2024-01-10T09:30:00`) to its date part.
#[must_use]
pub fn date_prefix(value: &str) -> &str {
    value.split('T').next().unwrap_or(value)
}
