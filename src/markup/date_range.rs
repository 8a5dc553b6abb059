// SPDX-License-Identifier: MPL-2.0
//! Date-range picker bound to two inputs of a live form.
//!
//! Only the contract the booking dialogs rely on lives here: a minimum
//! selectable date, a fixed `yyyy-mm-dd` output format, and keeping the
//! arrival on or before the departure. Calendar rendering belongs to the
//! presenter.

use super::form::{DateConstraint, Form, FormHandle};
use chrono::{Local, NaiveDate};
use std::fmt;

/// `chrono` pattern for `yyyy-mm-dd`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerOptions {
    /// Earliest selectable date, inclusive.
    pub min_date: Option<NaiveDate>,
    /// Open the calendar as soon as either input gains focus.
    pub show_on_focus: bool,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            min_date: None,
            show_on_focus: true,
        }
    }
}

impl PickerOptions {
    /// Options used by the booking dialogs: nothing before today.
    #[must_use]
    pub fn from_today() -> Self {
        Self {
            min_date: Some(Local::now().date_naive()),
            show_on_focus: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    MissingField(String),
    BeforeMinimum { field: String, min: NaiveDate },
    EndBeforeStart,
}

impl fmt::Display for PickerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickerError::MissingField(name) => write!(f, "no field named `{name}`"),
            PickerError::BeforeMinimum { field, min } => {
                write!(f, "{field} must be on or after {}", min.format(DATE_FORMAT))
            }
            PickerError::EndBeforeStart => write!(f, "departure is before arrival"),
        }
    }
}

impl std::error::Error for PickerError {}

/// A range picker controlling a start and an end field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangePicker {
    start: String,
    end: String,
    options: PickerOptions,
}

impl DateRangePicker {
    /// Binds a picker to `start` and `end` in `form`.
    pub fn attach(
        form: &mut Form,
        start: &str,
        end: &str,
        options: PickerOptions,
    ) -> Result<Self, PickerError> {
        for name in [start, end] {
            if form.get(name).is_none() {
                return Err(PickerError::MissingField(name.to_string()));
            }
        }

        let constraint = DateConstraint {
            min: options.min_date,
            format: DATE_FORMAT,
        };
        for field in form.fields_mut() {
            if field.name() == start || field.name() == end {
                field.constrain_date(constraint);
            }
        }

        let picker = Self {
            start: start.to_string(),
            end: end.to_string(),
            options,
        };
        form.set_picker(picker.clone());
        tracing::debug!(form = form.id(), start, end, "date range picker attached");
        Ok(picker)
    }

    /// [`attach`](Self::attach) against a shared form.
    pub fn attach_to(
        form: &FormHandle,
        start: &str,
        end: &str,
        options: PickerOptions,
    ) -> Result<Self, PickerError> {
        form.with(|form| Self::attach(form, start, end, options))
    }

    #[must_use]
    pub fn options(&self) -> PickerOptions {
        self.options
    }

    #[must_use]
    pub fn controls(&self, name: &str) -> bool {
        name == self.start || name == self.end
    }

    /// Typed input. Text that is not yet a full date is kept as typed.
    pub fn enter_text(&self, form: &mut Form, name: &str, text: &str) -> Result<(), PickerError> {
        let field = form
            .get_mut(name)
            .ok_or_else(|| PickerError::MissingField(name.to_string()))?;
        field.set_value(text);

        match parse_date(text) {
            Some(date) => self.apply(form, name, date),
            None => Ok(()),
        }
    }

    /// Calendar selection.
    pub fn pick(&self, form: &mut Form, name: &str, date: NaiveDate) -> Result<(), PickerError> {
        let field = form
            .get_mut(name)
            .ok_or_else(|| PickerError::MissingField(name.to_string()))?;
        field.set_value(date.format(DATE_FORMAT).to_string());
        self.apply(form, name, date)
    }

    fn apply(&self, form: &mut Form, name: &str, date: NaiveDate) -> Result<(), PickerError> {
        if let Some(min) = self.options.min_date {
            if date < min {
                if let Some(field) = form.get_mut(name) {
                    field.clear();
                }
                return Err(PickerError::BeforeMinimum {
                    field: name.to_string(),
                    min,
                });
            }
        }

        if name == self.start {
            let end = form.get(&self.end).and_then(|f| parse_date(f.value()));
            if end.is_some_and(|end| end < date) {
                if let Some(field) = form.get_mut(&self.end) {
                    field.clear();
                }
            }
            return Ok(());
        }

        let start = form.get(&self.start).and_then(|f| parse_date(f.value()));
        if start.is_some_and(|start| date < start) {
            if let Some(field) = form.get_mut(&self.end) {
                field.clear();
            }
            return Err(PickerError::EndBeforeStart);
        }
        Ok(())
    }
}

/// Parses a `yyyy-mm-dd` date.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::form::Field;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).expect("valid test date")
    }

    fn form() -> Form {
        Form::new("f")
            .field(Field::new("start").required())
            .field(Field::new("end").required())
    }

    fn attached(min: &str) -> (Form, DateRangePicker) {
        let mut form = form();
        let options = PickerOptions {
            min_date: Some(date(min)),
            show_on_focus: true,
        };
        let picker = DateRangePicker::attach(&mut form, "start", "end", options).expect("attach");
        (form, picker)
    }

    #[test]
    fn attach_requires_both_fields() {
        let mut form = Form::new("f").field(Field::new("start"));
        let err = DateRangePicker::attach(&mut form, "start", "end", PickerOptions::default());
        assert_eq!(err, Err(PickerError::MissingField("end".to_string())));
    }

    #[test]
    fn attach_constrains_fields_and_registers_on_form() {
        let (form, _) = attached("2024-06-01");
        let constraint = form.get("start").and_then(Field::date_constraint);
        assert_eq!(constraint.and_then(|c| c.min), Some(date("2024-06-01")));
        assert_eq!(constraint.map(|c| c.format), Some(DATE_FORMAT));
        assert!(form.picker().is_some());
    }

    #[test]
    fn pick_formats_as_iso_date() {
        let (mut form, picker) = attached("2024-06-01");
        picker.pick(&mut form, "start", date("2024-06-02")).expect("pick");
        assert_eq!(form.value("start"), "2024-06-02");
    }

    #[test]
    fn dates_before_minimum_are_rejected() {
        let (mut form, picker) = attached("2024-06-01");
        let err = picker.pick(&mut form, "start", date("2024-05-31"));
        assert!(matches!(err, Err(PickerError::BeforeMinimum { .. })));
        assert_eq!(form.value("start"), "");
    }

    #[test]
    fn moving_start_past_end_clears_end() {
        let (mut form, picker) = attached("2024-06-01");
        picker.pick(&mut form, "start", date("2024-06-01")).expect("start");
        picker.pick(&mut form, "end", date("2024-06-03")).expect("end");
        picker.pick(&mut form, "start", date("2024-06-05")).expect("start again");
        assert_eq!(form.value("end"), "");
    }

    #[test]
    fn end_before_start_is_rejected() {
        let (mut form, picker) = attached("2024-06-01");
        picker.pick(&mut form, "start", date("2024-06-04")).expect("start");
        let err = picker.pick(&mut form, "end", date("2024-06-02"));
        assert_eq!(err, Err(PickerError::EndBeforeStart));
        assert_eq!(form.value("end"), "");
    }

    #[test]
    fn partial_text_is_kept_as_typed() {
        let (mut form, _) = attached("2024-06-01");
        form.input("start", "2024-0").expect("typing");
        assert_eq!(form.value("start"), "2024-0");
    }

    #[test]
    fn typed_full_date_goes_through_range_rules() {
        let (mut form, _) = attached("2024-06-01");
        let err = form.input("start", "2024-01-01");
        assert!(matches!(err, Err(PickerError::BeforeMinimum { .. })));
    }
}
