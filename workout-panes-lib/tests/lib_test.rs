use anyhow::Result;
use workout_panes_lib::{
    load_config_util, save_config_util, Activation, AppService, Config, ConfigError,
    CoordinatorState, CreationDialog, Difficulty, Host, IconCatalog, IconId, LayoutCoordinator,
    PanelHost, PanelKind, PresentationMode, RecordStore, SelectionEvent, Slot, ValidationError,
    WorkoutRecord,
};

// Helper function to create a test service with the sample records
fn create_test_service() -> AppService {
    AppService::with_config(Config::default(), "test_config.toml".into())
}

// Fresh start in the given mode, with the deferred mounts already applied
fn start(mode: PresentationMode) -> (AppService, LayoutCoordinator, PanelHost) {
    let service = create_test_service();
    let mut coordinator = service.coordinator();
    let mut host = PanelHost::new(mode);
    let activation = Activation::fresh(&host);
    coordinator.activate(&mut host, activation);
    host.execute_pending();
    (service, coordinator, host)
}

fn rotate(coordinator: &mut LayoutCoordinator, host: &mut PanelHost, mode: PresentationMode) {
    host.reconfigure(mode);
    let activation = Activation::recreated(&*host);
    coordinator.activate(host, activation);
}

fn select_row(coordinator: &mut LayoutCoordinator, host: &mut PanelHost, index: usize) {
    let event = coordinator
        .list_panel(&*host)
        .and_then(|list| list.select_at(index))
        .expect("list panel with a row at index");
    coordinator.on_select(host, event);
    host.execute_pending();
}

fn kind_in(host: &PanelHost, slot: Slot) -> Option<PanelKind> {
    host.panel_in(slot).map(|m| m.kind())
}

fn detail_id_in(host: &PanelHost, slot: Slot) -> Option<i64> {
    host.panel_in(slot).and_then(|m| m.panel.bound_record_id())
}

fn record(id: i64) -> WorkoutRecord {
    WorkoutRecord::new(
        id,
        format!("Workout {}", id),
        "desc",
        "10 minutes",
        Difficulty::Low,
        IconId::new("today"),
    )
}

// --- RecordStore ---

#[test]
fn test_next_id_on_empty_store_is_one() {
    let store = RecordStore::new();
    assert_eq!(store.next_id(), 1);
    assert!(store.find_by_id(1).is_none());
}

#[test]
fn test_next_id_is_max_plus_one() {
    let mut store = RecordStore::new();
    store.add(record(3));
    assert_eq!(store.next_id(), 4);
    store.add(record(7));
    store.add(record(5)); // Out of order ids are trusted as-is
    assert_eq!(store.next_id(), 8);
    assert_eq!(store.len(), 3);
    assert_eq!(store.find_by_id(5).map(|r| r.name.as_str()), Some("Workout 5"));
}

#[test]
fn test_sample_store_contents() {
    let store = RecordStore::with_samples();
    assert_eq!(store.len(), 4);
    assert_eq!(store.first_id(), Some(1));
    assert_eq!(store.next_id(), 5);
    let yoga = store.find_by_id(3).expect("sample record 3");
    assert_eq!(yoga.name, "Relaxing Yoga");
    assert_eq!(yoga.difficulty, Difficulty::Low);
}

#[test]
fn test_list_panel_refresh_notification() {
    let service = create_test_service();
    let mut list = workout_panes_lib::ListPanel::new(service.store());
    assert!(list.take_refresh()); // First render after mount
    assert!(!list.take_refresh());

    service.store().borrow_mut().add(record(10));
    assert!(list.take_refresh());
    assert!(!list.take_refresh());
    assert_eq!(list.len(), 5);
    assert_eq!(list.rows().last().map(|r| r.record_id), Some(10));
}

#[test]
fn test_store_survives_across_coordinators() {
    let service = create_test_service();
    service.store().borrow_mut().add(record(5));
    // Every coordinator built from the service shares the same records
    let coordinator = service.coordinator();
    assert_eq!(coordinator.store().borrow().len(), 5);
}

// --- IconCatalog ---

#[test]
fn test_icon_catalog_is_fixed() {
    let icons = IconCatalog::all();
    assert_eq!(icons.len(), 12);
    assert_eq!(icons, IconCatalog::all()); // Same order every call
    assert_eq!(icons[0].label, "Cardio/Running");
}

#[test]
fn test_icon_lookup_falls_back_to_first() {
    let first = IconCatalog::all()[0].clone();
    assert_eq!(IconCatalog::find_by_id(&IconId::new("no-such-icon")), first);
    assert_eq!(IconCatalog::find_by_id(&IconId::new("")), first);
    assert_eq!(IconCatalog::default_icon(), first);

    let yoga = IconCatalog::find_by_id(&IconId::new("gallery"));
    assert_eq!(yoga.label, "Yoga/Stretching");
}

// --- DetailPanel ---

#[test]
fn test_detail_view_lines() {
    let service = create_test_service();
    let detail = workout_panes_lib::DetailPanel::new(1, service.store());
    let view = detail.view().expect("record 1 exists");
    assert_eq!(view.name, "Intense Cardio");
    assert_eq!(view.duration_line, "Duration: 45 minutes");
    assert_eq!(view.difficulty_line, "Difficulty: High");
    assert_eq!(view.icon.icon_id, IconId::new("directions"));
}

#[test]
fn test_detail_for_missing_record_renders_nothing() {
    let service = create_test_service();
    let detail = workout_panes_lib::DetailPanel::new(99, service.store());
    assert!(detail.record().is_none());
    assert!(detail.view().is_none());
}

// --- LayoutCoordinator ---

#[test]
fn test_fresh_start_single_pane_shows_list_only() {
    let (_service, coordinator, host) = start(PresentationMode::SinglePane);
    assert_eq!(coordinator.state(), CoordinatorState::SinglePaneActive);
    assert_eq!(kind_in(&host, Slot::Primary), Some(PanelKind::List));
    assert!(host.panel_in(Slot::Secondary).is_none());
    assert_eq!(host.history_depth(), 0);
}

#[test]
fn test_fresh_start_dual_pane_shows_first_record() {
    let (_service, coordinator, host) = start(PresentationMode::DualPane);
    assert_eq!(coordinator.state(), CoordinatorState::DualPaneActive);
    assert_eq!(kind_in(&host, Slot::Primary), Some(PanelKind::List));
    assert_eq!(detail_id_in(&host, Slot::Secondary), Some(1));
}

#[test]
fn test_fresh_start_mounts_are_deferred() {
    let service = create_test_service();
    let mut coordinator = service.coordinator();
    let mut host = PanelHost::new(PresentationMode::DualPane);
    let activation = Activation::fresh(&host);
    coordinator.activate(&mut host, activation);
    assert!(host.mounted().is_empty());
    assert_eq!(host.pending_len(), 2);
    host.execute_pending();
    assert_eq!(host.mounted().len(), 2);
}

#[test]
fn test_single_pane_select_and_back() {
    let (_service, mut coordinator, mut host) = start(PresentationMode::SinglePane);
    let list_id = host.panel_in(Slot::Primary).map(|m| m.id);

    select_row(&mut coordinator, &mut host, 0);
    assert_eq!(detail_id_in(&host, Slot::Primary), Some(1));
    assert_eq!(host.mounted().len(), 1);
    assert_eq!(host.history_depth(), 1);

    assert!(coordinator.on_back(&mut host));
    assert_eq!(kind_in(&host, Slot::Primary), Some(PanelKind::List));
    assert_eq!(host.panel_in(Slot::Primary).map(|m| m.id), list_id);
    assert_eq!(host.history_depth(), 0);

    // Nothing left to go back to
    assert!(!coordinator.on_back(&mut host));
    assert_eq!(kind_in(&host, Slot::Primary), Some(PanelKind::List));
}

#[test]
fn test_dual_pane_select_replaces_only_detail() {
    let (_service, mut coordinator, mut host) = start(PresentationMode::DualPane);
    let list_id = host.panel_in(Slot::Primary).map(|m| m.id);
    let old_detail_id = host.panel_in(Slot::Secondary).map(|m| m.id);

    coordinator.on_select(&mut host, SelectionEvent { record_id: 2 });
    host.execute_pending();

    assert_eq!(host.panel_in(Slot::Primary).map(|m| m.id), list_id);
    assert_eq!(detail_id_in(&host, Slot::Secondary), Some(2));
    assert_ne!(host.panel_in(Slot::Secondary).map(|m| m.id), old_detail_id);
    assert_eq!(host.history_depth(), 0);
}

#[test]
fn test_rotate_into_dual_pane_resets_detail_to_first_record() {
    let (_service, mut coordinator, mut host) = start(PresentationMode::SinglePane);
    select_row(&mut coordinator, &mut host, 2); // Relaxing Yoga, id 3
    assert_eq!(detail_id_in(&host, Slot::Primary), Some(3));

    rotate(&mut coordinator, &mut host, PresentationMode::DualPane);
    assert_eq!(coordinator.state(), CoordinatorState::DualPaneActive);
    assert_eq!(kind_in(&host, Slot::Primary), Some(PanelKind::List));
    assert_eq!(detail_id_in(&host, Slot::Secondary), Some(1));
    assert_eq!(host.mounted().len(), 2);
    assert_eq!(host.history_depth(), 0);
    assert_eq!(host.pending_len(), 0);
}

#[test]
fn test_rotation_round_trip_keeps_viewed_detail() {
    let (_service, mut coordinator, mut host) = start(PresentationMode::SinglePane);
    select_row(&mut coordinator, &mut host, 2);

    rotate(&mut coordinator, &mut host, PresentationMode::DualPane);
    coordinator.on_select(&mut host, SelectionEvent { record_id: 3 });
    host.execute_pending();

    rotate(&mut coordinator, &mut host, PresentationMode::SinglePane);
    assert_eq!(coordinator.state(), CoordinatorState::SinglePaneActive);
    assert_eq!(detail_id_in(&host, Slot::Primary), Some(3));
    assert!(host.panel_in(Slot::Secondary).is_none());
    assert_eq!(host.mounted().len(), 1);
}

#[test]
fn test_rotation_round_trip_without_reselecting_lands_on_first_record() {
    let (_service, mut coordinator, mut host) = start(PresentationMode::SinglePane);
    select_row(&mut coordinator, &mut host, 2);

    rotate(&mut coordinator, &mut host, PresentationMode::DualPane);
    rotate(&mut coordinator, &mut host, PresentationMode::SinglePane);
    assert_eq!(detail_id_in(&host, Slot::Primary), Some(1));
}

#[test]
fn test_rotate_into_single_pane_flushes_pending_first() {
    let service = create_test_service();
    let mut coordinator = service.coordinator();
    let mut host = PanelHost::new(PresentationMode::DualPane);
    let activation = Activation::fresh(&host);
    coordinator.activate(&mut host, activation);
    // Rotated before the deferred mounts ran: the detail mount finds no
    // secondary container and is dropped, the list lands in primary.
    rotate(&mut coordinator, &mut host, PresentationMode::SinglePane);

    assert_eq!(host.pending_len(), 0);
    assert_eq!(host.mounted().len(), 1);
    assert_eq!(kind_in(&host, Slot::Primary), Some(PanelKind::List));
}

#[test]
fn test_single_pane_recreation_keeps_existing_list() {
    let (_service, mut coordinator, mut host) = start(PresentationMode::SinglePane);
    let list_id = host.panel_in(Slot::Primary).map(|m| m.id);

    rotate(&mut coordinator, &mut host, PresentationMode::SinglePane);
    assert_eq!(host.panel_in(Slot::Primary).map(|m| m.id), list_id);
    assert_eq!(host.mounted().len(), 1);
}

#[test]
fn test_single_pane_recreation_keeps_detail_and_history() {
    let (_service, mut coordinator, mut host) = start(PresentationMode::SinglePane);
    select_row(&mut coordinator, &mut host, 1);
    let detail_id = host.panel_in(Slot::Primary).map(|m| m.id);

    rotate(&mut coordinator, &mut host, PresentationMode::SinglePane);
    assert_eq!(host.panel_in(Slot::Primary).map(|m| m.id), detail_id);
    assert_eq!(host.history_depth(), 1);
    assert!(coordinator.on_back(&mut host));
    assert_eq!(kind_in(&host, Slot::Primary), Some(PanelKind::List));
}

#[test]
fn test_recreation_with_empty_registry_mounts_list() {
    let service = create_test_service();
    let mut coordinator = service.coordinator();
    let mut host = PanelHost::new(PresentationMode::SinglePane);

    let activation = Activation::recreated(&host);
    coordinator.activate(&mut host, activation);
    assert_eq!(coordinator.state(), CoordinatorState::SinglePaneActive);
    assert_eq!(kind_in(&host, Slot::Primary), Some(PanelKind::List));
}

#[test]
fn test_missing_container_is_a_no_op() {
    let service = create_test_service();
    let mut coordinator = service.coordinator();
    let mut host = PanelHost::with_containers(&[]);

    let activation = Activation::fresh(&host);
    coordinator.activate(&mut host, activation);
    host.execute_pending();
    assert!(host.mounted().is_empty());
    assert_eq!(coordinator.state(), CoordinatorState::SinglePaneActive);

    coordinator.on_select(&mut host, SelectionEvent { record_id: 1 });
    host.execute_pending();
    assert!(host.mounted().is_empty());
}

#[test]
fn test_selection_before_activation_is_ignored() {
    let service = create_test_service();
    let mut coordinator = service.coordinator();
    let mut host = PanelHost::new(PresentationMode::SinglePane);

    coordinator.on_select(&mut host, SelectionEvent { record_id: 1 });
    host.execute_pending();
    assert!(host.mounted().is_empty());
    assert_eq!(coordinator.state(), CoordinatorState::Uninitialized);
}

#[test]
fn test_dual_pane_on_empty_store_binds_fallback_id() {
    let service = AppService::with_config(
        Config {
            seed_sample_records: false,
            ..Default::default()
        },
        "test_config.toml".into(),
    );
    let mut coordinator = service.coordinator();
    let mut host = PanelHost::new(PresentationMode::DualPane);
    let activation = Activation::fresh(&host);
    coordinator.activate(&mut host, activation);
    host.execute_pending();

    let detail = host
        .panel_in(Slot::Secondary)
        .and_then(|m| m.panel.as_detail())
        .expect("detail panel mounted");
    assert_eq!(detail.record_id(), workout_panes_lib::FALLBACK_RECORD_ID);
    assert!(detail.view().is_none());
}

// --- CreationDialog ---

#[test]
fn test_submit_with_empty_name_fails() {
    let (service, coordinator, host) = start(PresentationMode::SinglePane);
    let list = coordinator.list_panel(&host).expect("list mounted");

    let mut dialog = CreationDialog::new();
    dialog.description = "x".into();
    dialog.duration = "y".into();

    let result = dialog.submit(list);
    assert_eq!(result, Err(ValidationError::MissingName));
    assert_eq!(result.unwrap_err().field(), workout_panes_lib::DialogField::Name);
    assert!(dialog.is_open());
    assert_eq!(service.store().borrow().len(), 4);
}

#[test]
fn test_validation_reports_first_empty_field() {
    let mut dialog = CreationDialog::new();
    assert_eq!(dialog.validate(), Err(ValidationError::MissingName));

    dialog.name = "Run".into();
    dialog.duration = "   ".into();
    assert_eq!(dialog.validate(), Err(ValidationError::MissingDescription));

    dialog.description = "Easy run".into();
    assert_eq!(dialog.validate(), Err(ValidationError::MissingDuration));

    dialog.duration = "20 minutes".into();
    assert_eq!(dialog.validate(), Ok(()));
    assert_eq!(
        ValidationError::MissingDuration.to_string(),
        "Duration is required"
    );
}

#[test]
fn test_submit_valid_uses_default_icon_and_next_id() -> Result<()> {
    let (service, coordinator, host) = start(PresentationMode::DualPane);
    let list = coordinator.list_panel(&host).expect("list mounted");
    let old_next = service.store().borrow().next_id();

    let mut dialog = CreationDialog::new();
    dialog.name = "  Morning Run ".into();
    dialog.description = "Easy pace".into();
    dialog.duration = "30 minutes".into();
    dialog.set_difficulty(Difficulty::Medium);

    let created = dialog.submit(list)?;
    assert_eq!(created.id, old_next);
    assert_eq!(created.name, "Morning Run");
    assert_eq!(created.icon_id, IconCatalog::all()[0].icon_id);
    assert_eq!(created.difficulty, Difficulty::Medium);
    assert!(!dialog.is_open());

    let store = service.store();
    let store = store.borrow();
    assert_eq!(store.len(), 5);
    assert_eq!(store.find_by_id(old_next), Some(&created));
    Ok(())
}

#[test]
fn test_icon_picker_selection() -> Result<()> {
    let (_service, coordinator, host) = start(PresentationMode::SinglePane);
    let list = coordinator.list_panel(&host).expect("list mounted");

    let mut dialog = CreationDialog::new();
    dialog.cycle_icon(false); // Wraps to the last icon
    assert_eq!(dialog.selected_icon_index(), 11);
    dialog.cycle_icon(true);
    assert_eq!(dialog.selected_icon_index(), 0);
    dialog.select_icon(4);
    dialog.name = "Stretch".into();
    dialog.description = "Cool down".into();
    dialog.duration = "10 minutes".into();

    let created = dialog.submit(list)?;
    assert_eq!(created.icon_id, IconId::new("gallery"));

    let mut out_of_range = CreationDialog::new();
    out_of_range.select_icon(40);
    assert_eq!(out_of_range.selected_icon(), IconCatalog::default_icon());
    Ok(())
}

#[test]
fn test_difficulty_cycles_and_parses() -> Result<()> {
    let mut dialog = CreationDialog::new();
    assert_eq!(dialog.difficulty(), Difficulty::Low);
    dialog.cycle_difficulty(true);
    assert_eq!(dialog.difficulty(), Difficulty::Medium);
    dialog.cycle_difficulty(false);
    dialog.cycle_difficulty(false);
    assert_eq!(dialog.difficulty(), Difficulty::High);

    assert_eq!(Difficulty::try_from(" medium ")?, Difficulty::Medium);
    assert!(Difficulty::try_from("extreme").is_err());
    Ok(())
}

#[test]
fn test_dismiss_discards_fields() {
    let service = create_test_service();
    let mut dialog = CreationDialog::new();
    dialog.name = "Half typed".into();
    dialog.select_icon(3);
    dialog.dismiss();

    assert!(!dialog.is_open());
    assert!(dialog.name.is_empty());
    assert_eq!(dialog.selected_icon_index(), 0);
    assert_eq!(service.store().borrow().len(), 4);
}

#[test]
fn test_created_record_refreshes_list_and_is_selectable() -> Result<()> {
    let (service, mut coordinator, mut host) = start(PresentationMode::SinglePane);
    if let Some(list) = host
        .panel_in_mut(Slot::Primary)
        .and_then(|m| m.panel.as_list_mut())
    {
        assert!(list.take_refresh());
    }

    let mut dialog = CreationDialog::new();
    dialog.name = "Swim".into();
    dialog.description = "Laps".into();
    dialog.duration = "40 minutes".into();
    let list = coordinator.list_panel(&host).expect("list mounted");
    let created = dialog.submit(list)?;

    let refreshed = host
        .panel_in_mut(Slot::Primary)
        .and_then(|m| m.panel.as_list_mut())
        .map(|list| list.take_refresh());
    assert_eq!(refreshed, Some(true));

    select_row(&mut coordinator, &mut host, 4);
    assert_eq!(detail_id_in(&host, Slot::Primary), Some(created.id));
    assert_eq!(service.store().borrow().len(), 5);
    Ok(())
}

#[test]
fn test_no_list_panel_while_detail_fills_single_pane() {
    let (_service, mut coordinator, mut host) = start(PresentationMode::SinglePane);
    select_row(&mut coordinator, &mut host, 0);
    assert!(coordinator.list_panel(&host).is_none());
}

// --- Config ---

#[test]
fn test_load_config_writes_defaults() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.toml");

    let config = load_config_util(&path)?;
    assert_eq!(config, Config::default());
    assert!(path.exists());
    Ok(())
}

#[test]
fn test_config_round_trip_and_partial_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.toml");

    let config = Config {
        dual_pane_min_width: 80,
        seed_sample_records: false,
        log_file: Some(dir.path().join("wp.log")),
        ..Default::default()
    };
    save_config_util(&path, &config)?;
    assert_eq!(load_config_util(&path)?, config);

    std::fs::write(&path, "dual_pane_min_width = 120\n")?;
    let partial = load_config_util(&path)?;
    assert_eq!(partial.dual_pane_min_width, 120);
    assert!(partial.seed_sample_records);
    assert_eq!(partial.theme.header_color, "Green");
    Ok(())
}

#[test]
fn test_config_rejects_unknown_color() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[theme]\nheader_color = \"Chartreuse\"\n")?;

    match load_config_util(&path) {
        Err(ConfigError::InvalidColor(name)) => assert_eq!(name, "Chartreuse"),
        other => panic!("expected InvalidColor, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_mode_for_width() {
    let service = create_test_service();
    assert_eq!(service.mode_for_width(99), PresentationMode::SinglePane);
    assert_eq!(service.mode_for_width(100), PresentationMode::DualPane);
    assert_eq!(
        PresentationMode::detect(&PanelHost::new(PresentationMode::DualPane)),
        PresentationMode::DualPane
    );
}
