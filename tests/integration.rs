// SPDX-License-Identifier: MPL-2.0
use iced_snack::config::{self, Config};
use iced_snack::error::Error;
use iced_snack::ui::notifications::item::Message as ItemMessage;
use iced_snack::ui::notifications::position::{SNACK_HEIGHT, STACK_GUTTER};
use iced_snack::ui::notifications::{
    AnchorOrigin, Direction, Horizontal, Manager, Snack, SnackKey, SnackMessage, Variant, Vertical,
};
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[derive(Debug, Clone, PartialEq)]
enum HostMessage {
    Undo(SnackKey),
}

fn manager() -> Manager<HostMessage> {
    let mut manager = Manager::new();
    manager.props_mut().auto_hide_duration = Some(Duration::from_secs(5));
    manager.props_mut().transition_duration = Duration::from_millis(200);
    manager
}

#[test]
fn snack_times_out_and_leaves_after_exit_slide() {
    let start = Instant::now();
    let mut manager = manager();
    let key = manager.push(Snack::success("Saved")).expect("valid snack");

    manager.update(SnackMessage::Tick(start + Duration::from_secs(2)));
    assert!(manager.get(key).expect("on screen").is_open());

    manager.update(SnackMessage::Tick(start + Duration::from_secs(6)));
    assert!(!manager.get(key).expect("sliding out").is_open());

    manager.update(SnackMessage::Tick(start + Duration::from_secs(7)));
    assert!(manager.get(key).is_none());
    assert!(!manager.has_snacks());
}

#[test]
fn clickaway_is_ignored_but_escape_closes() {
    let mut manager = manager();
    let key = manager.push(Snack::info("Synced")).expect("valid snack");

    manager.update(SnackMessage::PointerPressed);
    assert!(manager.get(key).expect("on screen").is_open());

    manager.update(SnackMessage::EscapePressed);
    assert!(!manager.get(key).expect("sliding out").is_open());
}

#[test]
fn full_stack_dismisses_oldest_and_queues_newest() {
    let start = Instant::now();
    let mut manager = manager();
    manager.set_max_snack(2);

    let first = manager.push(Snack::new("first")).expect("valid snack");
    let second = manager.push(Snack::new("second")).expect("valid snack");
    let third = manager.push(Snack::new("third")).expect("valid snack");

    assert_eq!(manager.active_count(), 2);
    assert_eq!(manager.queued_count(), 1);
    assert!(!manager.get(first).expect("sliding out").is_open());

    manager.update(SnackMessage::Tick(start + Duration::from_secs(1)));
    assert!(manager.get(first).is_none());
    assert_eq!(manager.level_of(second), Some(0));
    assert_eq!(manager.level_of(third), Some(1));
    assert_eq!(manager.queued_count(), 0);
}

#[test]
fn action_click_returns_host_message() {
    let mut manager = manager();
    let key = manager
        .push(
            Snack::new("Item deleted")
                .with_action("UNDO")
                .on_click_action(HostMessage::Undo),
        )
        .expect("valid snack");

    let host = manager.update(SnackMessage::Item(ItemMessage::ActionPressed(key)));
    assert_eq!(host, Some(HostMessage::Undo(key)));
    assert!(manager.get(key).expect("still on screen").is_open());
}

#[test]
fn action_click_without_handler_closes() {
    let mut manager = manager();
    let key = manager
        .push(Snack::new("Done").with_action("OK"))
        .expect("valid snack");

    let host = manager.update(SnackMessage::Item(ItemMessage::ActionPressed(key)));
    assert_eq!(host, None);
    assert!(!manager.get(key).expect("sliding out").is_open());
}

#[test]
fn prevent_duplicate_rejects_same_message() {
    let mut manager = manager();
    manager.set_prevent_duplicate(true);

    manager.push(Snack::new("Saved")).expect("valid snack");
    match manager.push(Snack::new("Saved")) {
        Err(Error::DuplicateSnack(message)) => assert_eq!(message, "Saved"),
        other => panic!("expected DuplicateSnack, got {:?}", other),
    }
}

#[test]
fn stacked_snacks_never_overlap() {
    let mut manager = manager();
    for i in 0..3 {
        manager
            .push(Snack::new(format!("snack {i}")).with_variant(Variant::ALL[i]))
            .expect("valid snack");
    }

    let rendered = manager.render();
    assert_eq!(rendered.len(), 3);
    for pair in rendered.windows(2) {
        let gap = pair[1].placement.offset.distance - pair[0].placement.offset.distance;
        assert_eq!(gap, SNACK_HEIGHT + STACK_GUTTER);
    }
}

#[test]
fn config_on_disk_drives_manager() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut saved = Config::default();
    saved.placement.anchor_origin = Some(AnchorOrigin::new(Vertical::Top, Horizontal::Center));
    saved.stack.max_snack = Some(1);
    saved.appearance.hide_icon_variant = Some(true);
    config::save_with_override(&saved, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, saved);

    let mut manager: Manager<HostMessage> = Manager::from_config(&loaded);
    manager.push(Snack::warning("first")).expect("valid snack");
    manager.push(Snack::warning("second")).expect("valid snack");
    assert_eq!(manager.active_count(), 1);
    assert_eq!(manager.queued_count(), 1);

    let rendered = manager.render();
    assert_eq!(rendered[0].icon, None);
    assert_eq!(rendered[0].placement.direction, Direction::Down);
    assert_eq!(rendered[0].placement.anchor, AnchorOrigin::new(Vertical::Top, Horizontal::Center));

    dir.close().expect("Failed to close temporary directory");
}
