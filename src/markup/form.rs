// SPDX-License-Identifier: MPL-2.0
//! Live form model embedded in dialog markup.
//!
//! The presenter owns the widgets, but field values live here so that code
//! outside the presenter can read them synchronously when the user confirms.

use super::date_range::{DateRangePicker, PickerError};
use chrono::NaiveDate;
use std::fmt::Write as _;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Date restrictions placed on a field by an attached picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateConstraint {
    pub min: Option<NaiveDate>,
    pub format: &'static str,
}

/// A single text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    placeholder: String,
    required: bool,
    value: String,
    date: Option<DateConstraint>,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            placeholder: String::new(),
            required: false,
            value: String::new(),
            date: None,
        }
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn placeholder_text(&self) -> &str {
        &self.placeholder
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    #[must_use]
    pub fn date_constraint(&self) -> Option<DateConstraint> {
        self.date
    }

    pub(crate) fn constrain_date(&mut self, constraint: DateConstraint) {
        self.date = Some(constraint);
    }
}

/// A form: an ordered set of named fields plus any attached picker.
#[derive(Debug, Clone)]
pub struct Form {
    id: String,
    group_id: Option<String>,
    fields: Vec<Field>,
    picker: Option<DateRangePicker>,
}

impl Form {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            group_id: None,
            fields: Vec::new(),
            picker: None,
        }
    }

    /// Id of the row wrapping the fields; pickers attach to it.
    #[must_use]
    pub fn group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub(crate) fn fields_mut(&mut self) -> &mut [Field] {
        &mut self.fields
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Current value of `name`, or an empty string for unknown fields.
    pub fn value(&self, name: &str) -> String {
        self.get(name).map(|f| f.value.clone()).unwrap_or_default()
    }

    pub fn picker(&self) -> Option<&DateRangePicker> {
        self.picker.as_ref()
    }

    pub(crate) fn set_picker(&mut self, picker: DateRangePicker) {
        self.picker = Some(picker);
    }

    /// Applies raw keyboard input to a field, routing it through the
    /// attached picker when the field belongs to one.
    pub fn input(&mut self, name: &str, text: &str) -> Result<(), PickerError> {
        if let Some(picker) = self.picker.clone() {
            if picker.controls(name) {
                return picker.enter_text(self, name, text);
            }
        }
        match self.get_mut(name) {
            Some(field) => {
                field.set_value(text);
                Ok(())
            }
            None => Err(PickerError::MissingField(name.to_string())),
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<form id=\"{}\" action=\"\" method=\"post\" novalidate class=\"needs-validation\">",
            self.id
        );
        match &self.group_id {
            Some(group) => {
                let _ = write!(out, "<div class=\"form-row\" id=\"{group}\">");
            }
            None => out.push_str("<div class=\"form-row\">"),
        }
        for field in &self.fields {
            let required = if field.required { "required " } else { "" };
            let _ = write!(
                out,
                "<div class=\"col\"><input {required}class=\"form-control\" type=\"text\" name=\"{name}\" id=\"{name}\" placeholder=\"{placeholder}\" value=\"{value}\"></div>",
                name = field.name,
                placeholder = field.placeholder,
                value = field.value,
            );
        }
        out.push_str("</div></form>");
        out
    }
}

/// Shared, live handle to a [`Form`].
///
/// Cloning shares the same form; the presenter and the dialog's caller
/// each keep one.
#[derive(Debug, Clone)]
pub struct FormHandle(Arc<Mutex<Form>>);

impl FormHandle {
    pub fn new(form: Form) -> Self {
        Self(Arc::new(Mutex::new(form)))
    }

    fn lock(&self) -> MutexGuard<'_, Form> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with the form locked.
    pub fn with<R>(&self, f: impl FnOnce(&mut Form) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn id(&self) -> String {
        self.lock().id.clone()
    }

    pub fn value(&self, name: &str) -> String {
        self.lock().value(name)
    }

    pub fn input(&self, name: &str, text: &str) -> Result<(), PickerError> {
        self.lock().input(name, text)
    }

    pub fn snapshot(&self) -> Form {
        self.lock().clone()
    }

    pub fn to_html(&self) -> String {
        self.lock().to_html()
    }

    /// Whether both handles point at the same live form.
    #[must_use]
    pub fn same_form(&self, other: &FormHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Form {
        Form::new("check-availability-form")
            .group("reservation-dates-modal")
            .field(Field::new("start").placeholder("Arrival").required())
            .field(Field::new("end").placeholder("Departure").required())
    }

    #[test]
    fn input_without_picker_sets_raw_value() {
        let mut form = sample();
        form.input("start", "tomorrow").expect("known field");
        assert_eq!(form.value("start"), "tomorrow");
    }

    #[test]
    fn input_to_unknown_field_is_rejected() {
        let mut form = sample();
        assert_eq!(
            form.input("nope", "x"),
            Err(PickerError::MissingField("nope".to_string()))
        );
    }

    #[test]
    fn handle_clones_share_the_live_form() {
        let handle = FormHandle::new(sample());
        let other = handle.clone();
        other.input("end", "2024-06-03").expect("end");
        assert_eq!(handle.value("end"), "2024-06-03");
        assert!(handle.same_form(&other));
    }

    #[test]
    fn html_marks_required_inputs() {
        let html = sample().to_html();
        assert!(html.contains("id=\"check-availability-form\""));
        assert!(html.contains("id=\"reservation-dates-modal\""));
        assert!(html.contains("<input required class=\"form-control\" type=\"text\" name=\"start\""));
        assert!(html.contains("placeholder=\"Departure\""));
    }
}
