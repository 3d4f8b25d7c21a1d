//! Props form binder
//!
//! Keeps a local edit buffer for the active component's schema. Every edit
//! recomputes the full candidate snapshot and validates every field; the
//! candidate is handed upward only when no field reports an error, so the
//! preview never sees a partially invalid snapshot.
//!
//! [`PropsBinder`] adds the propagation timing on top: text edits are held
//! in a [`Debouncer`] so a burst of keystrokes reaches the store once,
//! while discrete controls (switches, selects, chips) propagate at once.

use crate::debounce::{Debouncer, Ticket};
use crate::schema::{FieldError, FieldInput, FieldKind, PropValue, PropsFieldSchema};
use crate::snapshot::PropsSnapshot;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

/// Edit that could not be applied to the buffer at all
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("'{0}' is not a field of this form")]
    UnknownField(String),
}

/// Result of an edit
#[derive(Clone, Debug, PartialEq)]
pub enum FormOutcome {
    /// Every field is valid; this is the snapshot to propagate
    Valid(PropsSnapshot),
    /// At least one field is invalid; nothing may be propagated
    Invalid(BTreeMap<String, FieldError>),
}

impl FormOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, FormOutcome::Valid(_))
    }
}

/// Read-only view of one field for rendering a control
#[derive(Clone, Debug, PartialEq)]
pub struct FieldView<'a> {
    pub schema: &'a PropsFieldSchema,
    pub value: &'a PropValue,
    pub error: Option<&'a FieldError>,
}

/// Edit buffer bound to one component's schema
#[derive(Clone, Debug, PartialEq)]
pub struct PropsForm {
    schema: Vec<PropsFieldSchema>,
    buffer: Vec<PropValue>,
    errors: BTreeMap<String, FieldError>,
}

impl PropsForm {
    /// Seed the buffer from `current`, using defaults for missing fields.
    /// Keys of `current` outside the schema are ignored.
    pub fn new(schema: &[PropsFieldSchema], current: &PropsSnapshot) -> Self {
        let buffer = schema
            .iter()
            .map(|field| match current.get(&field.name) {
                Some(value) if value.fits(field.kind) => value.clone(),
                _ => field.default_value(),
            })
            .collect();
        let mut form = Self {
            schema: schema.to_vec(),
            buffer,
            errors: BTreeMap::new(),
        };
        form.errors = form.collect_errors();
        form
    }

    /// Whether the schema has no fields ("no props available")
    pub fn is_empty(&self) -> bool {
        self.schema.is_empty()
    }

    pub fn schema(&self) -> &[PropsFieldSchema] {
        &self.schema
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldView<'_>> {
        self.schema
            .iter()
            .zip(&self.buffer)
            .map(|(schema, value)| FieldView {
                schema,
                value,
                error: self.errors.get(&schema.name),
            })
    }

    pub fn value(&self, field: &str) -> Option<&PropValue> {
        self.index_of(field).map(|i| &self.buffer[i])
    }

    pub fn error(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &BTreeMap<String, FieldError> {
        &self.errors
    }

    /// Apply one control change and recompute the whole candidate.
    ///
    /// Input that cannot be coerced to the field's kind is kept out of the
    /// buffer and reported as that field's error.
    pub fn edit(&mut self, field: &str, input: FieldInput) -> Result<FormOutcome, FormError> {
        let index = self
            .index_of(field)
            .ok_or_else(|| FormError::UnknownField(field.to_string()))?;

        let coerced = self.schema[index].coerce(input);
        self.errors = match coerced {
            Ok(value) => {
                self.buffer[index] = value;
                self.collect_errors()
            }
            Err(e) => {
                let mut errors = self.collect_errors();
                errors.insert(field.to_string(), e);
                errors
            }
        };

        let outcome = self.outcome();
        debug!(field, valid = outcome.is_valid(), "Props form edit");
        Ok(outcome)
    }

    /// Current outcome without editing anything
    pub fn outcome(&self) -> FormOutcome {
        if self.errors.is_empty() {
            FormOutcome::Valid(self.candidate())
        } else {
            FormOutcome::Invalid(self.errors.clone())
        }
    }

    /// Snapshot built from the buffer, valid or not
    pub fn candidate(&self) -> PropsSnapshot {
        self.schema
            .iter()
            .zip(&self.buffer)
            .map(|(field, value)| (field.name.clone(), value.clone()))
            .collect()
    }

    /// Reset the buffer to schema defaults
    pub fn reset(&mut self) -> FormOutcome {
        self.buffer = self.schema.iter().map(|f| f.default_value()).collect();
        self.errors = self.collect_errors();
        self.outcome()
    }

    fn collect_errors(&self) -> BTreeMap<String, FieldError> {
        self.schema
            .iter()
            .zip(&self.buffer)
            .filter_map(|(field, value)| {
                field
                    .validate(value)
                    .err()
                    .map(|e| (field.name.clone(), e))
            })
            .collect()
    }

    fn index_of(&self, field: &str) -> Option<usize> {
        self.schema.iter().position(|f| f.name == field)
    }
}

/// What the caller should do with the store after a binder edit
#[derive(Clone, Debug, PartialEq)]
pub enum Propagation {
    /// Propose this snapshot now
    Now(PropsSnapshot),
    /// A valid snapshot is pending; start a timer and `fire` this ticket
    Deferred(Ticket),
    /// Nothing to propose; any pending snapshot was dropped
    Withheld,
}

/// A [`PropsForm`] whose valid snapshots leave through a debouncer.
///
/// The caller owns the timer: on `Deferred(ticket)` it waits out the quiet
/// period and then calls `fire(ticket)`. Only the latest ticket yields a
/// snapshot, so rapid edits collapse into one proposal.
#[derive(Debug)]
pub struct PropsBinder {
    form: PropsForm,
    pending: Debouncer<PropsSnapshot>,
}

impl PropsBinder {
    pub fn new(schema: &[PropsFieldSchema], current: &PropsSnapshot) -> Self {
        Self {
            form: PropsForm::new(schema, current),
            pending: Debouncer::new(),
        }
    }

    pub fn form(&self) -> &PropsForm {
        &self.form
    }

    /// Validate the edit right away; decide when its snapshot may propagate.
    ///
    /// Text fields are deferred. Other kinds flush immediately, carrying any
    /// pending text edit along since the candidate is always the full buffer.
    /// An invalid form drops whatever was pending.
    pub fn edit(&mut self, field: &str, input: FieldInput) -> Result<Propagation, FormError> {
        let kind = self
            .form
            .schema()
            .iter()
            .find(|f| f.name == field)
            .map(|f| f.kind);
        let outcome = self.form.edit(field, input)?;
        Ok(match outcome {
            FormOutcome::Valid(snapshot) if kind == Some(FieldKind::String) => {
                Propagation::Deferred(self.pending.schedule(snapshot))
            }
            FormOutcome::Valid(snapshot) => {
                self.pending.cancel();
                Propagation::Now(snapshot)
            }
            FormOutcome::Invalid(_) => {
                self.pending.cancel();
                Propagation::Withheld
            }
        })
    }

    /// Snapshot for an elapsed timer, if `ticket` is still the latest
    pub fn fire(&mut self, ticket: Ticket) -> Option<PropsSnapshot> {
        self.pending.fire(ticket)
    }

    /// Deliver the pending snapshot now (e.g. the field lost focus)
    pub fn flush(&mut self) -> Option<PropsSnapshot> {
        self.pending.flush()
    }

    /// Drop the pending snapshot
    pub fn cancel(&mut self) {
        self.pending.cancel();
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_pending()
    }

    /// Reset to schema defaults, dropping any pending edit
    pub fn reset(&mut self) -> Propagation {
        self.pending.cancel();
        match self.form.reset() {
            FormOutcome::Valid(snapshot) => Propagation::Now(snapshot),
            FormOutcome::Invalid(_) => Propagation::Withheld,
        }
    }
}
