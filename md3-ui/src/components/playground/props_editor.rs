//! Auto-generated props form
//!
//! One control per schema field: a select for `select`, a switch for
//! `boolean`, a chip paired with a switch for `toggle-chip` and a text field
//! for `string`. The panel owns the form buffer and its propagation timer:
//! every change is validated at once, text edits reach `on_propose` after
//! `debounce_ms` of quiet (or on blur), and the timer dies with the panel.

use crate::components::icons::InfoIcon;
use crate::components::{Chip, Select, Switch, TextField};
use crate::hooks::use_timer_slot;
use md3_common::form::{FieldView, Propagation, PropsBinder};
use md3_common::preview::{ChipVariant, Color, Size};
use md3_common::schema::{FieldInput, FieldKind, PropsFieldSchema};
use md3_common::snapshot::PropsSnapshot;
use dioxus::prelude::*;
use tracing::warn;

#[component]
pub fn PropsEditorView(
    /// Schema of the selected component
    schema: Vec<PropsFieldSchema>,
    /// Props currently accepted by the store
    current: PropsSnapshot,
    /// Quiet period before a text edit is proposed
    debounce_ms: u64,
    /// Receives valid snapshots only
    on_propose: EventHandler<PropsSnapshot>,
) -> Element {
    let mut binder = use_signal({
        let schema = schema.clone();
        let current = current.clone();
        move || PropsBinder::new(&schema, &current)
    });
    let timer = use_timer_slot();

    // Rebuild only when the store moved somewhere the buffer is not
    use_effect(use_reactive!(|(schema, current)| {
        let stale = {
            let binder = binder.peek();
            binder.form().schema() != schema.as_slice() || binder.form().candidate() != current
        };
        if stale {
            binder.set(PropsBinder::new(&schema, &current));
        }
    }));

    let propagate = use_callback(move |step: Propagation| match step {
        Propagation::Now(snapshot) => {
            timer.cancel();
            on_propose.call(snapshot);
        }
        Propagation::Deferred(ticket) => timer.start(debounce_ms, move || async move {
            let fired = binder.write().fire(ticket);
            if let Some(snapshot) = fired {
                on_propose.call(snapshot);
            }
        }),
        Propagation::Withheld => timer.cancel(),
    });
    let on_edit = use_callback(move |(field, input): (String, FieldInput)| {
        let step = binder.write().edit(&field, input);
        match step {
            Ok(step) => propagate.call(step),
            Err(e) => warn!("Ignoring edit: {e}"),
        }
    });
    let on_commit = use_callback(move |_: ()| {
        let flushed = binder.write().flush();
        if let Some(snapshot) = flushed {
            propagate.call(Propagation::Now(snapshot));
        }
    });

    let binder_ref = binder.read();
    let form = binder_ref.form();
    if form.is_empty() {
        return rsx! {
            div { class: "flex items-center gap-2 text-sm text-gray-400 py-6",
                InfoIcon {}
                "No props available for this component"
            }
        };
    }

    let invalid = form.errors().len();
    let fields: Vec<OwnedField> = form.fields().map(OwnedField::from).collect();
    drop(binder_ref);

    rsx! {
        div { class: "flex flex-col gap-4",
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                for field in fields {
                    FieldControl {
                        key: "{field.name}",
                        field,
                        on_edit,
                        on_commit,
                    }
                }
            }
            div { class: "flex items-center justify-between text-xs",
                if invalid > 0 {
                    span { class: "text-red-400",
                        "{invalid} invalid field(s); the preview keeps the last valid props"
                    }
                } else {
                    span { class: "text-gray-500", "All props valid" }
                }
                button {
                    r#type: "button",
                    class: "text-gray-400 hover:text-white underline",
                    onclick: move |_| {
                        let step = binder.write().reset();
                        propagate.call(step);
                    },
                    "Reset to defaults"
                }
            }
        }
    }
}

/// Owned copy of a [`FieldView`] so it can be passed as a prop
#[derive(Clone, Debug, PartialEq)]
struct OwnedField {
    name: String,
    label: String,
    kind: FieldKind,
    options: Vec<md3_common::schema::SelectOption>,
    text: String,
    on: bool,
    error: Option<String>,
    doc: Option<String>,
}

impl From<FieldView<'_>> for OwnedField {
    fn from(view: FieldView<'_>) -> Self {
        Self {
            name: view.schema.name.clone(),
            label: view.schema.label.clone(),
            kind: view.schema.kind,
            options: view.schema.options.clone(),
            text: view.value.as_str().unwrap_or_default().to_string(),
            on: view.value.as_bool().unwrap_or(false),
            error: view.error.map(|e| e.to_string()),
            doc: view.schema.doc.clone(),
        }
    }
}

#[component]
fn FieldControl(
    field: OwnedField,
    on_edit: EventHandler<(String, FieldInput)>,
    /// The text field lost focus
    on_commit: EventHandler<()>,
) -> Element {
    let name = field.name.clone();
    let has_error = field.error.is_some();

    let control = match field.kind {
        FieldKind::Select => rsx! {
            div { class: "flex flex-col gap-1",
                label { class: "text-xs text-gray-400", r#for: "prop-{field.name}", "{field.label}" }
                Select {
                    id: format!("prop-{}", field.name),
                    value: field.text.clone(),
                    options: field.options.clone(),
                    error: has_error,
                    onchange: move |value: String| on_edit.call((name.clone(), FieldInput::Text(value))),
                }
            }
        },
        FieldKind::Boolean => rsx! {
            Switch {
                checked: field.on,
                size: Size::Small,
                label: field.label.clone(),
                onchange: move |on: bool| on_edit.call((name.clone(), FieldInput::Toggle(on))),
            }
        },
        FieldKind::ToggleChip => rsx! {
            div { class: "flex items-center gap-3",
                Chip {
                    label: field.label.clone(),
                    variant: ChipVariant::Outlined,
                    size: Size::Small,
                    color: Color::Primary,
                    selected: field.on,
                }
                Switch {
                    checked: field.on,
                    size: Size::Small,
                    onchange: move |on: bool| on_edit.call((name.clone(), FieldInput::Toggle(on))),
                }
            }
        },
        FieldKind::String => rsx! {
            TextField {
                id: format!("prop-{}", field.name),
                label: field.label.clone(),
                value: field.text.clone(),
                size: Size::Small,
                error: has_error,
                oninput: move |value: String| on_edit.call((name.clone(), FieldInput::Text(value))),
                onblur: move |_| on_commit.call(()),
            }
        },
    };

    rsx! {
        div { class: "flex flex-col gap-1", title: field.doc.clone().unwrap_or_default(),
            {control}
            if let Some(error) = &field.error {
                p { class: "text-xs text-red-400", role: "alert", "{error}" }
            } else if let Some(doc) = &field.doc {
                p { class: "text-xs text-gray-500", "{doc}" }
            }
        }
    }
}
