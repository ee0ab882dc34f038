use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use waypick_core::command::{InputEvent, Modifiers};
use waypick_core::protocol::{ComputedStyle, Element, PageInfo, PageSnapshot, Rect};
use waypick_engine::config::WaypickConfig;
use waypick_engine::host::{HostError, PanelSurface};
use waypick_engine::picker::Disposition;
use waypick_engine::session::SessionManager;
use waypick_engine::storage::{FileStore, MemoryStore};
use waypick_engine::store::DEFAULT_STORAGE_KEY;

#[derive(Debug, Default)]
struct PanelState {
    path: String,
    removed: usize,
    fail_remove: bool,
}

/// Panel whose state outlives the boxed surface handed to the session.
struct SharedPanel {
    state: Rc<RefCell<PanelState>>,
    kinds: Vec<String>,
    kind_index: usize,
}

impl SharedPanel {
    fn new() -> (Self, Rc<RefCell<PanelState>>) {
        let state = Rc::new(RefCell::new(PanelState::default()));
        let panel = Self {
            state: Rc::clone(&state),
            kinds: vec!["click".to_string()],
            kind_index: 0,
        };
        (panel, state)
    }

    fn failing() -> (Self, Rc<RefCell<PanelState>>) {
        let (panel, state) = Self::new();
        state.borrow_mut().fail_remove = true;
        (panel, state)
    }
}

impl PanelSurface for SharedPanel {
    fn path_value(&self) -> String {
        self.state.borrow().path.clone()
    }
    fn set_path_value(&mut self, value: &str) {
        self.state.borrow_mut().path = value.to_string();
    }
    fn kind_count(&self) -> usize {
        self.kinds.len()
    }
    fn kind_index(&self) -> usize {
        self.kind_index
    }
    fn set_kind_index(&mut self, index: usize) {
        self.kind_index = index;
    }
    fn kind_value(&self) -> String {
        self.kinds.get(self.kind_index).cloned().unwrap_or_default()
    }
    fn highlight(&mut self, _rect: &Rect, _duration: Duration) {}
    fn remove(&mut self) -> Result<(), HostError> {
        let mut state = self.state.borrow_mut();
        if state.fail_remove {
            return Err(HostError("panel already detached".into()));
        }
        state.removed += 1;
        Ok(())
    }
}

fn page_with_button() -> PageSnapshot {
    PageSnapshot {
        page: PageInfo {
            route: "/settings".into(),
        },
        elements: vec![Element {
            id: 1,
            element_type: "button".into(),
            text: Some("Settings".into()),
            raw_text: None,
            value: None,
            rect: Rect {
                x: 0.0,
                y: 0.0,
                width: 60.0,
                height: 20.0,
            },
            style: ComputedStyle::default(),
            attributes: HashMap::new(),
            children: Vec::new(),
        }],
    }
}

#[test]
fn test_install_seeds_panel_path_from_persisted_state() {
    let backing = MemoryStore::with_entry(
        DEFAULT_STORAGE_KEY,
        r#"{"path":"Personal > Add","actions":[]}"#,
    );
    let (panel, state) = SharedPanel::new();
    let mut manager = SessionManager::new();
    manager.install(Box::new(panel), backing, &WaypickConfig::default());

    assert_eq!(state.borrow().path, "Personal > Add");
}

#[test]
fn test_reinstall_tears_down_previous_session() {
    let mut manager = SessionManager::new();
    let config = WaypickConfig::default();

    let (first, first_state) = SharedPanel::new();
    manager.install(Box::new(first), MemoryStore::new(), &config);
    assert!(manager.is_installed());

    let (second, second_state) = SharedPanel::new();
    manager.install(Box::new(second), MemoryStore::new(), &config);

    // Exactly one live session: the first panel is gone, the second is not.
    assert!(manager.is_installed());
    assert_eq!(first_state.borrow().removed, 1);
    assert_eq!(second_state.borrow().removed, 0);
}

#[test]
fn test_reinstall_swallows_stale_teardown_failure() {
    let mut manager = SessionManager::new();
    let config = WaypickConfig::default();

    let (broken, _) = SharedPanel::failing();
    manager.install(Box::new(broken), MemoryStore::new(), &config);

    let (replacement, state) = SharedPanel::new();
    let session = manager.install(Box::new(replacement), MemoryStore::new(), &config);

    // The broken teardown must not block the new session.
    let disposition = session.dispatch(
        &page_with_button(),
        &InputEvent::Click {
            target: 1,
            modifiers: Modifiers::CTRL,
        },
    );
    assert_eq!(disposition, Disposition::Consumed);
    assert_eq!(state.borrow().path, "Settings");
}

#[test]
fn test_teardown_is_idempotent() {
    let mut manager = SessionManager::new();
    let (panel, state) = SharedPanel::new();
    let session = manager.install(Box::new(panel), MemoryStore::new(), &WaypickConfig::default());

    session.teardown().unwrap();
    session.teardown().unwrap();
    assert_eq!(state.borrow().removed, 1);
}

#[test]
fn test_dispatch_after_teardown_is_inert() {
    let mut manager = SessionManager::new();
    let (panel, state) = SharedPanel::new();
    let session = manager.install(Box::new(panel), MemoryStore::new(), &WaypickConfig::default());

    session.teardown().unwrap();
    let disposition = session.dispatch(
        &page_with_button(),
        &InputEvent::Click {
            target: 1,
            modifiers: Modifiers::CTRL,
        },
    );

    assert_eq!(disposition, Disposition::PassThrough);
    assert_eq!(state.borrow().path, "");
    assert!(!session.is_live());
}

#[test]
fn test_manager_teardown_clears_slot() {
    let mut manager = SessionManager::new();
    let (panel, state) = SharedPanel::new();
    manager.install(Box::new(panel), MemoryStore::new(), &WaypickConfig::default());

    manager.teardown();
    assert!(!manager.is_installed());
    assert_eq!(state.borrow().removed, 1);

    // A second teardown of an empty slot is fine.
    manager.teardown();
    assert_eq!(state.borrow().removed, 1);
}

#[test]
fn test_operator_path_edit_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let config = WaypickConfig::default();
    let mut manager = SessionManager::new();

    let (panel, state) = SharedPanel::new();
    let session = manager.install(
        Box::new(panel),
        FileStore::new(dir.path().to_path_buf()),
        &config,
    );
    session.path_edited("Personal > Add");

    assert_eq!(state.borrow().path, "Personal > Add");
    assert_eq!(session.store().path(), "Personal > Add");
    manager.teardown();

    // The edit reaches the backing store, so the next session sees it.
    let (next, next_state) = SharedPanel::new();
    manager.install(
        Box::new(next),
        FileStore::new(dir.path().to_path_buf()),
        &config,
    );
    assert_eq!(next_state.borrow().path, "Personal > Add");
}

#[test]
fn test_path_edit_after_teardown_is_inert() {
    let mut manager = SessionManager::new();
    let (panel, state) = SharedPanel::new();
    let session = manager.install(Box::new(panel), MemoryStore::new(), &WaypickConfig::default());

    session.teardown().unwrap();
    session.path_edited("Personal");

    assert_eq!(state.borrow().path, "");
    assert_eq!(session.store().path(), "");
}

#[test]
fn test_session_records_through_dispatch() {
    let mut manager = SessionManager::new();
    let (panel, state) = SharedPanel::new();
    let session = manager.install(Box::new(panel), MemoryStore::new(), &WaypickConfig::default());

    // Operator edits the path field directly.
    state.borrow_mut().path = "Personal".to_string();
    let disposition = session.dispatch(
        &page_with_button(),
        &InputEvent::Click {
            target: 1,
            modifiers: Modifiers::ALT,
        },
    );

    assert_eq!(disposition, Disposition::Consumed);
    assert_eq!(session.store().records().len(), 1);
    assert_eq!(session.store().records()[0].id, "personal:settings");
}
