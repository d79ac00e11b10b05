use futures_signals::signal::{Mutable, Signal};

use shared::validate::{FieldErrors, FieldName, FormValidator, FormValues};

use crate::utils::{get_input_file, get_input_value, set_input_value};

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Inline errors of one form. Values live in the DOM and are read on submit.
#[derive(Clone, Default)]
pub struct FormState {
    pub errors: Mutable<FieldErrors>,
    pub pending: Mutable<bool>,
}

impl FormState {
    pub fn error_signal(&self, field: FieldName) -> impl Signal<Item = Option<String>> {
        self.errors.signal_ref(move |errors| errors.get(field).map(str::to_string))
    }

    /// Validates the current inputs. Errors are shown and `None` returned when
    /// anything fails, nothing should be sent in that case.
    pub fn check(&self, validator: &FormValidator, texts: &[FieldName], files: &[FieldName]) -> Option<FormValues> {
        let mut values = FormValues::new();
        for field in texts {
            values.set_text(field, get_input_value(field));
        }
        for field in files {
            values.set_file(field, get_input_file(field).is_some());
        }
        self.submit(validator, &values)
    }

    /// Publishes the outcome of validating `values`; the values come back
    /// only when the form may be sent.
    pub fn submit(&self, validator: &FormValidator, values: &FormValues) -> Option<FormValues> {
        match validator.submit(values, || values.clone()) {
            Ok(values) => {
                self.errors.set(FieldErrors::default());
                Some(values)
            }
            Err(errors) => {
                let fields: Vec<_> = errors.iter().map(|(name, _)| name).collect();
                log::info!("form invalid: {fields:?}");
                self.errors.set(errors);
                None
            }
        }
    }

    pub fn reset(&self, fields: &[FieldName]) {
        for field in fields {
            set_input_value(field, "");
        }
        self.errors.set(FieldErrors::default());
    }
}
