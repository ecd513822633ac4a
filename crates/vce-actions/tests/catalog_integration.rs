//! Integration tests for the binds-file-to-catalog pipeline.
//!
//! These tests exercise the whole path through the public API: locate the
//! newest binds file in a directory, read it, synthesize actions, look them
//! up by name, and execute them against the mock executor.

use std::path::Path;

use vce_actions::infrastructure::bindings_file::{load_catalog, locate};
use vce_actions::infrastructure::config::BindingsSettings;
use vce_actions::infrastructure::press_emulation::mock::MockPressExecutor;
use vce_actions::{ActionCatalog, LookupError, BINDINGS_FILE_ENV};
use vce_core::BindingDevice;

const OLD_BINDS: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<Root PresetName="Custom" MajorVersion="4" MinorVersion="0">
	<PrimaryFire>
		<Primary Device="Keyboard" Key="Key_F" />
		<Secondary Device="{NoDevice}" Key="" />
	</PrimaryFire>
</Root>"#;

const NEW_BINDS: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<Root PresetName="Custom" MajorVersion="4" MinorVersion="10">
	<PrimaryFire>
		<Primary Device="Keyboard" Key="Key_Space" />
		<Secondary Device="Mouse" Key="Mouse_1" />
	</PrimaryFire>
	<DeployHeatSink>
		<Primary Device="ThrustMasterHOTAS4" Key="Joy_3" />
		<Secondary Device="Mouse" Key="Mouse_1" />
	</DeployHeatSink>
	<GalaxyMapOpen>
		<Primary Device="ThrustMasterHOTAS4" Key="Joy_POV1Up" />
		<Secondary Device="{NoDevice}" Key="" />
	</GalaxyMapOpen>
	<HyperSuperCombination>
		<Primary Device="Keyboard" Key="Key_Yen" />
		<Secondary Device="{NoDevice}" Key="" />
	</HyperSuperCombination>
	<UseBoostJuice>
		<Primary Device="Keyboard" Key="Key_Tab" />
		<Secondary Device="{NoDevice}" Key="" />
	</UseBoostJuice>
</Root>"#;

fn bindings_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "Custom.4.0.binds", OLD_BINDS);
    write(dir.path(), "Custom.4.10.binds", NEW_BINDS);
    write(dir.path(), "StartPreset.4.start", "Custom\nCustom\nCustom\nCustom");
    dir
}

fn write(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).expect("write fixture");
}

fn scan(dir: &Path) -> BindingsSettings {
    BindingsSettings {
        file: None,
        directory: Some(dir.to_path_buf()),
    }
}

#[test]
fn test_locate_prefers_minor_version_ten_over_zero() {
    let dir = bindings_dir();

    let path = locate(&scan(dir.path())).expect("locate");

    assert_eq!(path.file_name().unwrap(), "Custom.4.10.binds");
}

#[test]
fn test_primary_fire_bound_to_space_from_newest_file() {
    let dir = bindings_dir();

    let catalog = load_catalog(&scan(dir.path()));

    let action = catalog.lookup("PrimaryFireAction").expect("PrimaryFireAction");
    assert_eq!(action.device(), BindingDevice::Keyboard);
    assert_eq!(action.key(), "Space");
    assert_eq!(action.fqn(), "voice_commander_elite.actions.PrimaryFireAction");
}

#[test]
fn test_heat_sink_uses_mouse_secondary() {
    let dir = bindings_dir();

    let catalog = load_catalog(&scan(dir.path()));

    let action = catalog.lookup("DeployHeatSinkAction").expect("DeployHeatSinkAction");
    assert_eq!(action.device(), BindingDevice::Mouse);
    assert_eq!(action.key(), "LButton");
}

#[test]
fn test_joystick_only_command_is_misconfigured() {
    let dir = bindings_dir();

    let catalog = load_catalog(&scan(dir.path()));

    match catalog.lookup("GalaxyMapOpenAction") {
        Err(LookupError::MisconfiguredBinding { command }) => assert_eq!(command, "GalaxyMapOpen"),
        other => panic!("expected MisconfiguredBinding, got {other:?}"),
    }
}

#[test]
fn test_made_up_action_is_unknown() {
    let dir = bindings_dir();

    let catalog = load_catalog(&scan(dir.path()));

    assert!(matches!(
        catalog.lookup("TotallyMadeUpAction"),
        Err(LookupError::UnknownAction(_))
    ));
}

#[test]
fn test_unsupported_key_is_skipped_without_blocking_others() {
    let dir = bindings_dir();

    let catalog = load_catalog(&scan(dir.path()));

    let names: Vec<&str> = catalog.names().collect();
    assert_eq!(
        names,
        ["DeployHeatSinkAction", "PrimaryFireAction", "UseBoostJuiceAction"]
    );
    assert!(matches!(
        catalog.lookup("HyperSuperCombinationAction"),
        Err(LookupError::MisconfiguredBinding { .. })
    ));
}

#[test]
fn test_explicit_file_overrides_directory_scan() {
    let dir = bindings_dir();
    let settings = BindingsSettings {
        file: Some(dir.path().join("Custom.4.0.binds")),
        directory: Some(dir.path().to_path_buf()),
    };

    let catalog = load_catalog(&settings);

    assert_eq!(catalog.lookup("PrimaryFireAction").unwrap().key(), "f");
}

#[test]
fn test_missing_explicit_file_defers_failure_to_lookup() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = BindingsSettings {
        file: Some(dir.path().join("Custom.9.9.binds")),
        directory: None,
    };

    let catalog = load_catalog(&settings);

    assert!(catalog.is_empty());
    let err = catalog.lookup("PrimaryFireAction").unwrap_err();
    assert!(matches!(err, LookupError::BindingsUnavailable { .. }));
    assert!(err.to_string().contains(BINDINGS_FILE_ENV));
}

#[test]
fn test_rebuilding_catalog_is_idempotent() {
    let dir = bindings_dir();

    let first = load_catalog(&scan(dir.path()));
    let second = load_catalog(&scan(dir.path()));

    assert_eq!(first, second);
    let keys: Vec<&str> = first.iter().map(|a| a.key()).collect();
    let again: Vec<&str> = second.iter().map(|a| a.key()).collect();
    assert_eq!(keys, again);
}

#[test]
fn test_looked_up_actions_execute_against_mock() {
    let dir = bindings_dir();
    let catalog: ActionCatalog = load_catalog(&scan(dir.path()));
    let executor = MockPressExecutor::new();

    catalog
        .lookup("UseBoostJuiceAction")
        .expect("boost")
        .execute(&executor)
        .expect("execute boost");
    catalog
        .lookup("DeployHeatSinkAction")
        .expect("heat sink")
        .execute(&executor)
        .expect("execute heat sink");

    assert_eq!(*executor.key_downs.lock().unwrap(), ["Tab"]);
    assert_eq!(*executor.key_ups.lock().unwrap(), ["Tab"]);
    assert_eq!(
        *executor.mouse_buttons.lock().unwrap(),
        [("LButton".to_string(), true), ("LButton".to_string(), false)]
    );
}
