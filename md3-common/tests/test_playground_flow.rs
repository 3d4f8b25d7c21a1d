//! End-to-end flows through the coordinator, form and renderer, the way the
//! playground UI drives them.

use md3_common::preview::{ButtonVariant, Size};
use md3_common::{
    CategoryFilter, ComponentRegistry, FieldError, FieldInput, FormOutcome, PlaygroundEvent,
    Propagation, PreviewNode, PreviewRenderer, PropValue, PropsBinder, PropsForm, PropsSnapshot,
    ViewCoordinator,
};
use std::sync::Arc;

const FOUR_COMPONENTS: &str = r#"
components:
  - id: button
    name: Button
    category: atomic
    description: Clickable action
    props:
      - name: variant
        kind: select
        label: Variant
        options:
          - { value: contained, label: Contained }
          - { value: outlined, label: Outlined }
          - { value: text, label: Text }
        default: contained
      - name: disabled
        kind: boolean
        label: Disabled
  - id: typography
    name: Typography
    category: atomic
    description: Text styles
  - id: chip
    name: Chip
    category: atomic
    description: Compact element for tags
  - id: textfield
    name: TextField
    category: atomic
    description: Single line text input
    props:
      - name: label
        kind: string
        label: Label
        default: Label
        rule: { required: true, max_length: 10 }
      - name: helper_text
        kind: string
        label: Helper text
"#;

fn coordinator() -> ViewCoordinator {
    let registry = ComponentRegistry::from_yaml(FOUR_COMPONENTS).unwrap();
    ViewCoordinator::new(Arc::new(registry))
}

/// Feed a form edit through to the coordinator the way the props panel does
fn edit(
    coordinator: &mut ViewCoordinator,
    form: &mut PropsForm,
    field: &str,
    input: FieldInput,
) -> FormOutcome {
    let outcome = form.edit(field, input).unwrap();
    if let FormOutcome::Valid(snapshot) = &outcome {
        coordinator
            .apply(PlaygroundEvent::ProposeProps(snapshot.clone()))
            .unwrap();
    }
    outcome
}

#[test]
fn test_select_edit_and_render_button() {
    let mut coordinator = coordinator();
    let renderer = PreviewRenderer::builtin();

    coordinator
        .apply(PlaygroundEvent::Select("button".into()))
        .unwrap();
    assert_eq!(
        coordinator.state().props(),
        &PropsSnapshot::new()
            .with("variant", "contained")
            .with("disabled", false)
    );

    let mut form = PropsForm::new(coordinator.active_schema(), coordinator.state().props());
    let outcome = edit(
        &mut coordinator,
        &mut form,
        "disabled",
        FieldInput::Toggle(true),
    );
    assert!(outcome.is_valid());
    assert_eq!(
        coordinator.state().props(),
        &PropsSnapshot::new()
            .with("variant", "contained")
            .with("disabled", true)
    );

    let Some(Ok(PreviewNode::Button(button))) = coordinator.preview(&renderer) else {
        panic!("Expected a rendered button");
    };
    assert!(button.disabled);
    assert_eq!(button.variant, ButtonVariant::Contained);
    assert_eq!(button.size, Size::Medium);
}

#[test]
fn test_selecting_twice_clears_selection() {
    let mut coordinator = coordinator();
    coordinator
        .apply(PlaygroundEvent::ToggleSelect("chip".into()))
        .unwrap();
    coordinator
        .apply(PlaygroundEvent::ToggleSelect("chip".into()))
        .unwrap();
    assert_eq!(coordinator.state().selected(), None);
    assert!(coordinator.state().props().is_empty());
}

#[test]
fn test_unknown_ids_degrade_to_placeholders() {
    let mut coordinator = coordinator();
    let renderer = PreviewRenderer::builtin();
    for id in ["slider", "", "button "] {
        assert!(coordinator.registry().schema_for(id).is_empty());
        assert_eq!(
            renderer.render(id, &PropsSnapshot::new()),
            Ok(PreviewNode::Placeholder {
                component_id: id.to_string()
            })
        );
    }

    coordinator
        .apply(PlaygroundEvent::Select("slider".into()))
        .unwrap();
    assert!(coordinator.state().code().contains("slider"));
}

#[test]
fn test_component_without_schema_has_empty_form() {
    let mut coordinator = coordinator();
    coordinator
        .apply(PlaygroundEvent::Select("typography".into()))
        .unwrap();
    let form = PropsForm::new(coordinator.active_schema(), coordinator.state().props());
    assert!(form.is_empty());
    assert_eq!(form.fields().count(), 0);
    assert_eq!(form.outcome(), FormOutcome::Valid(PropsSnapshot::new()));
}

#[test]
fn test_one_invalid_field_leaves_store_unchanged() {
    let mut coordinator = coordinator();
    coordinator
        .apply(PlaygroundEvent::Select("textfield".into()))
        .unwrap();
    let before = coordinator.state().props().clone();

    let mut form = PropsForm::new(coordinator.active_schema(), coordinator.state().props());
    let outcome = edit(
        &mut coordinator,
        &mut form,
        "label",
        FieldInput::Text("Much too long for this".into()),
    );
    let FormOutcome::Invalid(errors) = outcome else {
        panic!("Expected invalid outcome");
    };
    assert!(matches!(
        errors.get("label"),
        Some(FieldError::TooLong { max: 10, .. })
    ));
    assert_eq!(coordinator.state().props(), &before);

    // A valid edit elsewhere still cannot propagate while label is invalid
    edit(
        &mut coordinator,
        &mut form,
        "helper_text",
        FieldInput::Text("Shown below".into()),
    );
    assert_eq!(coordinator.state().props(), &before);

    edit(
        &mut coordinator,
        &mut form,
        "label",
        FieldInput::Text("Name".into()),
    );
    assert_eq!(
        coordinator.state().props().get("helper_text"),
        Some(&PropValue::from("Shown below"))
    );
}

#[test]
fn test_valid_snapshots_only_carry_schema_keys() {
    let mut coordinator = coordinator();
    coordinator
        .apply(PlaygroundEvent::Select("button".into()))
        .unwrap();
    let stale = PropsSnapshot::new().with("elevation", "2").with("disabled", true);
    let mut form = PropsForm::new(coordinator.active_schema(), &stale);
    let FormOutcome::Valid(snapshot) = form.edit("variant", FieldInput::Text("text".into())).unwrap()
    else {
        panic!("Expected valid outcome");
    };
    let schema_keys: Vec<_> = coordinator
        .active_schema()
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert!(snapshot.keys().all(|k| schema_keys.contains(&k)));
    assert_eq!(snapshot.get_bool("disabled"), Some(true));
}

#[test]
fn test_proposing_same_props_twice_is_idempotent() {
    let mut coordinator = coordinator();
    coordinator
        .apply(PlaygroundEvent::Select("button".into()))
        .unwrap();
    let props = coordinator.state().props().clone().with("variant", "outlined");

    coordinator
        .apply(PlaygroundEvent::ProposeProps(props.clone()))
        .unwrap();
    let once = coordinator.clone();
    coordinator
        .apply(PlaygroundEvent::ProposeProps(props))
        .unwrap();
    assert_eq!(coordinator, once);
}

#[test]
fn test_search_chip_over_four_components() {
    let coordinator = coordinator();
    let hits = coordinator.filter("chip", CategoryFilter::All);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "chip");

    let hits = coordinator.filter("CHIP", CategoryFilter::All);
    assert_eq!(hits.len(), 1);
}

#[test]
fn test_builtin_catalog_previews_with_defaults() {
    let registry = ComponentRegistry::builtin().unwrap();
    let renderer = PreviewRenderer::builtin();
    for component in registry.list_all() {
        let props = PropsSnapshot::defaults_for(registry.schema_for(&component.id));
        let node = renderer.render(&component.id, &props).unwrap();
        assert_eq!(
            node.is_placeholder(),
            !renderer.has_preview(&component.id),
            "{}",
            component.id
        );
    }
}

#[test]
fn test_typing_burst_reaches_store_once() {
    let mut coordinator = coordinator();
    coordinator
        .apply(PlaygroundEvent::Select("textfield".into()))
        .unwrap();
    let mut binder = PropsBinder::new(coordinator.active_schema(), coordinator.state().props());

    // Each keystroke restarts the quiet period; keep every ticket's timer
    let mut timers = Vec::new();
    for text in ["S", "Sa", "Sav", "Save"] {
        match binder.edit("label", FieldInput::Text(text.into())).unwrap() {
            Propagation::Deferred(ticket) => timers.push(ticket),
            other => panic!("Expected Deferred, got {other:?}"),
        }
        // Nothing reaches the store while typing
        assert_eq!(coordinator.state().props().get_str("label"), Some("Label"));
    }

    let mut writes = 0;
    for ticket in timers {
        if let Some(snapshot) = binder.fire(ticket) {
            coordinator
                .apply(PlaygroundEvent::ProposeProps(snapshot))
                .unwrap();
            writes += 1;
        }
    }
    assert_eq!(writes, 1);
    assert_eq!(coordinator.state().props().get_str("label"), Some("Save"));
}
