use fittrack::core::layout::{WidgetLayout, validate_widgets};
use fittrack::errors::AppError;
use fittrack::models::widget::{
    WidgetConfig, WidgetDescriptor, WidgetPatch, WidgetSize, WidgetType, default_widgets,
};
use fittrack::storage::keys;
use fittrack::storage::kv::{KvStore, MemoryStore, read_json};

fn positions(widgets: &[WidgetDescriptor]) -> Vec<u32> {
    widgets.iter().map(|w| w.position).collect()
}

fn ids(widgets: &[WidgetDescriptor]) -> Vec<String> {
    widgets.iter().map(|w| w.id.clone()).collect()
}

fn stored(store: &MemoryStore) -> Vec<WidgetDescriptor> {
    read_json(store, keys::WIDGETS)
        .expect("readable")
        .expect("present")
}

#[test]
fn test_empty_store_is_seeded_with_defaults() {
    let mut store = MemoryStore::new();
    {
        let layout = WidgetLayout::initialize(&mut store);
        let all = layout.list_all();
        assert_eq!(all.len(), 10);
        assert_eq!(positions(&all), (0..10).collect::<Vec<u32>>());
        assert_eq!(
            ids(&layout.list_enabled()),
            [
                "workout",
                "workout-session",
                "hydration",
                "meditation",
                "fasting",
                "goals",
                "quote"
            ]
        );
    }
    assert_eq!(stored(&store), default_widgets());
}

#[test]
fn test_default_widget_sizes_and_titles() {
    let defaults = default_widgets();
    let workout = defaults.iter().find(|w| w.id == "workout").unwrap();
    assert_eq!(workout.size, WidgetSize::Large);
    assert_eq!(workout.kind, WidgetType::Workout);

    let quote = defaults.iter().find(|w| w.id == "quote").unwrap();
    assert_eq!(quote.title, "Daily Quote");
    assert_eq!(quote.size, WidgetSize::Small);

    let timer = defaults.iter().find(|w| w.id == "timer").unwrap();
    assert!(!timer.enabled);
    assert_eq!(timer.config, Some(WidgetConfig::Timer { rest_seconds: 90 }));
}

#[test]
fn test_reorder_keeps_positions_dense() {
    let ids: Vec<String> = default_widgets().into_iter().map(|w| w.id).collect();

    for id in &ids {
        for target in 0..10u32 {
            let mut store = MemoryStore::new();
            let mut layout = WidgetLayout::initialize(&mut store);
            layout.reorder_widget(id, target).unwrap();

            let all = layout.list_all();
            assert_eq!(positions(&all), (0..10).collect::<Vec<u32>>());
            assert_eq!(layout.get(id).unwrap().position, target);
            assert!(validate_widgets(&all).is_ok());
        }
    }
}

#[test]
fn test_reorder_moves_widget_up_and_down() {
    let mut store = MemoryStore::new();
    let mut layout = WidgetLayout::initialize(&mut store);

    layout.reorder_widget("quote", 1).unwrap();
    assert_eq!(
        &ids(&layout.list_all())[..4],
        ["workout", "quote", "workout-session", "hydration"]
    );

    layout.reorder_widget("workout", 9).unwrap();
    let all = ids(&layout.list_all());
    assert_eq!(all[0], "quote");
    assert_eq!(all[9], "workout");
}

#[test]
fn test_reorder_to_same_position_is_noop() {
    let mut store = MemoryStore::new();
    let mut layout = WidgetLayout::initialize(&mut store);
    let before = layout.list_all();

    layout.reorder_widget("goals", 5).unwrap();
    assert_eq!(layout.list_all(), before);
}

#[test]
fn test_reorder_out_of_range_is_rejected() {
    let mut store = MemoryStore::new();
    let mut layout = WidgetLayout::initialize(&mut store);
    let before = layout.list_all();

    let err = layout.reorder_widget("quote", 10).unwrap_err();
    assert!(matches!(
        err,
        AppError::InvalidPosition {
            position: 10,
            max: 9
        }
    ));
    assert_eq!(layout.list_all(), before);
}

#[test]
fn test_unknown_widget_is_reported() {
    let mut store = MemoryStore::new();
    let mut layout = WidgetLayout::initialize(&mut store);

    assert!(matches!(
        layout.toggle_widget("missing"),
        Err(AppError::WidgetNotFound(id)) if id == "missing"
    ));
    assert!(matches!(
        layout.reorder_widget("missing", 0),
        Err(AppError::WidgetNotFound(_))
    ));
}

#[test]
fn test_toggle_twice_restores_state() {
    let mut store = MemoryStore::new();
    let mut layout = WidgetLayout::initialize(&mut store);
    let before = layout.list_all();

    assert!(!layout.toggle_widget("quote").unwrap());
    assert!(!layout.list_enabled().iter().any(|w| w.id == "quote"));
    assert!(layout.toggle_widget("quote").unwrap());
    assert_eq!(layout.list_all(), before);
}

#[test]
fn test_changes_survive_reload() {
    let mut store = MemoryStore::new();
    let expected = {
        let mut layout = WidgetLayout::initialize(&mut store);
        layout.reorder_widget("fasting", 0).unwrap();
        layout.toggle_widget("cardio").unwrap();
        layout
            .update_widget(
                "hydration",
                WidgetPatch {
                    title: Some("Water".into()),
                    config: Some(WidgetConfig::Hydration { goal_oz: 80.0 }),
                    ..WidgetPatch::default()
                },
            )
            .unwrap();
        layout.list_all()
    };

    let reloaded = WidgetLayout::initialize(&mut store);
    assert_eq!(reloaded.list_all(), expected);
    assert_eq!(reloaded.get("hydration").unwrap().title, "Water");
}

#[test]
fn test_update_rejects_mismatched_config() {
    let mut store = MemoryStore::new();
    let mut layout = WidgetLayout::initialize(&mut store);

    let err = layout
        .update_widget(
            "quote",
            WidgetPatch {
                config: Some(WidgetConfig::Hydration { goal_oz: 10.0 }),
                ..WidgetPatch::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidWidgetConfig(_)));
    assert_eq!(layout.get("quote").unwrap().config, None);
}

#[test]
fn test_malformed_stored_layout_falls_back_to_defaults() {
    let mut store = MemoryStore::with_values([(keys::WIDGETS, "{ definitely not json")]);
    {
        let layout = WidgetLayout::initialize(&mut store);
        assert_eq!(layout.list_all(), default_widgets());
    }
    assert_eq!(stored(&store), default_widgets());
    assert!(
        store
            .audit_entries()
            .iter()
            .any(|e| e.operation == "widget" && e.target == "reset")
    );
}

#[test]
fn test_invalid_stored_layout_falls_back_to_defaults() {
    let mut widgets = default_widgets();
    widgets[1].id = widgets[0].id.clone();
    let raw = serde_json::to_string(&widgets).unwrap();

    let mut store = MemoryStore::with_values([(keys::WIDGETS, raw)]);
    let layout = WidgetLayout::initialize(&mut store);
    assert_eq!(layout.list_all(), default_widgets());
}

#[test]
fn test_gap_in_positions_is_invalid() {
    let mut widgets = default_widgets();
    widgets[9].position = 12;
    assert!(validate_widgets(&widgets).is_err());
    assert!(validate_widgets(&[]).is_err());
}

#[test]
fn test_read_only_store_keeps_layout_in_memory() {
    let mut store = MemoryStore::read_only();
    {
        let mut layout = WidgetLayout::initialize(&mut store);
        layout.reorder_widget("goals", 0).unwrap();
        assert_eq!(layout.get("goals").unwrap().position, 0);
        assert!(layout.toggle_widget("timer").unwrap());
    }

    assert_eq!(store.get(keys::WIDGETS).unwrap(), None);
    assert!(
        store
            .audit_entries()
            .iter()
            .any(|e| e.operation == "storage_error" && e.target == keys::WIDGETS)
    );
}

#[test]
fn test_reset_discards_customizations() {
    let mut store = MemoryStore::new();
    let mut layout = WidgetLayout::initialize(&mut store);
    layout.reorder_widget("quote", 0).unwrap();
    layout.toggle_widget("workout").unwrap();

    layout.reset_to_defaults();
    assert_eq!(layout.list_all(), default_widgets());
}

#[test]
fn test_descriptor_json_shape() {
    let widget = default_widgets().into_iter().find(|w| w.id == "timer").unwrap();
    let value = serde_json::to_value(&widget).unwrap();

    assert_eq!(value["type"], "timer");
    assert_eq!(value["size"], "small");
    assert_eq!(value["config"]["kind"], "timer");
    assert_eq!(value["config"]["rest_seconds"], 90);

    let session = default_widgets()
        .into_iter()
        .find(|w| w.id == "workout-session")
        .unwrap();
    let value = serde_json::to_value(&session).unwrap();
    assert_eq!(value["type"], "workout-session");
    assert!(value.get("config").is_none());
}
