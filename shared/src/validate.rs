//! Synchronous form validation.
//!
//! A [`FormValidator`] is an ordered list of fields, each with an ordered list
//! of [`Rule`]s. Validation reports the first failing rule of every field, in
//! field order, and an invalid form never reaches the `send` callback of
//! [`FormValidator::submit`].

use std::collections::{BTreeMap, BTreeSet};

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

pub type FieldName = &'static str;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Text must not be empty.
    Required(&'static str),
    /// Text must have at least this many characters.
    MinLength(usize, &'static str),
    /// Text must be one of the listed values.
    OneOf(&'static [&'static str], &'static str),
    /// A file must be attached.
    FileRequired(&'static str),
}

impl Rule {
    fn check(&self, field: &str, values: &FormValues) -> Option<&'static str> {
        match *self {
            Rule::Required(message) => values.text(field).is_empty().then_some(message),
            Rule::MinLength(min, message) => (values.text(field).chars().count() < min).then_some(message),
            Rule::OneOf(allowed, message) => (!allowed.contains(&values.text(field))).then_some(message),
            Rule::FileRequired(message) => (!values.has_file(field)).then_some(message),
        }
    }
}

/// Snapshot of a form's inputs at submit time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    texts: BTreeMap<String, String>,
    files: BTreeSet<String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, field: &str, value: impl Into<String>) -> Self {
        self.set_text(field, value);
        self
    }

    pub fn with_file(mut self, field: &str, present: bool) -> Self {
        self.set_file(field, present);
        self
    }

    pub fn set_text(&mut self, field: &str, value: impl Into<String>) {
        self.texts.insert(field.to_string(), value.into());
    }

    pub fn set_file(&mut self, field: &str, present: bool) {
        if present {
            self.files.insert(field.to_string());
        } else {
            self.files.remove(field);
        }
    }

    pub fn text(&self, field: &str) -> &str {
        self.texts.get(field).map(String::as_str).unwrap_or_default()
    }

    pub fn has_file(&self, field: &str) -> bool {
        self.files.contains(field)
    }
}

/// Field name to message, kept in the validator's field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(FieldName, &'static str)>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|(name, _)| *name == field).map(|(_, message)| *message)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &'static str)> + '_ {
        self.0.iter().copied()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    fields: Vec<(FieldName, Vec<Rule>)>,
}

impl FormValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: FieldName, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.push((name, rules.into_iter().collect()));
        self
    }

    pub fn validate(&self, values: &FormValues) -> Result<(), FieldErrors> {
        let errors: Vec<_> = self.fields.iter()
            .filter_map(|(name, rules)| {
                rules.iter().find_map(|rule| rule.check(name, values)).map(|message| (*name, message))
            })
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(FieldErrors(errors))
        }
    }

    /// Runs `send` only when every field passes.
    pub fn submit<R>(&self, values: &FormValues, send: impl FnOnce() -> R) -> Result<R, FieldErrors> {
        self.validate(values).map(|_| send())
    }
}
