//! Task List Flow Tests
//!
//! Drives several items against one shared editor slot the way a mounted
//! task list does.

use chrono::Utc;
use taskflow_core::{
    Accordion, DomainError, EditorSlot, Feed, ItemMachine, ItemPhase, Liveness, Page, Task,
};

fn task(id: u64, title: &str) -> Task {
    Task::new(id, title)
}

/// Minimal stand-in for a mounted item: a machine plus its liveness flag
struct Mounted {
    machine: ItemMachine,
    owner: Liveness,
}

impl Mounted {
    fn new(id: u64) -> Self {
        Self {
            machine: ItemMachine::new(id),
            owner: Liveness::new(),
        }
    }

    fn unmount(self, slot: &mut EditorSlot) {
        self.owner.end();
        slot.release(self.machine.task_id());
    }
}

#[test]
fn test_editing_b_discards_a_without_saving() {
    let mut slot = EditorSlot::new();
    let a = task(1, "A");
    let b = task(2, "B");
    let item_a = ItemMachine::new(1);
    let item_b = ItemMachine::new(2);

    item_a.request_edit(&mut slot, &a, &Utc);
    slot.draft_mut(1).unwrap().title = "A draft".into();
    let evicted = item_b.request_edit(&mut slot, &b, &Utc);

    assert_eq!(evicted.map(|d| d.title).as_deref(), Some("A draft"));
    assert_eq!(item_a.phase(&slot), ItemPhase::Viewing);
    assert_eq!(item_b.phase(&slot), ItemPhase::Editing);

    // re-entering A starts from the persisted title, not the evicted draft
    item_a.request_edit(&mut slot, &a, &Utc);
    assert_eq!(slot.draft().unwrap().title, "A");
}

#[test]
fn test_whitespace_title_never_reaches_update() {
    let mut slot = EditorSlot::new();
    let a = task(1, "A");
    let mut item = ItemMachine::new(1);
    let mut updates: Vec<Task> = Vec::new();

    item.request_edit(&mut slot, &a, &Utc);
    slot.draft_mut(1).unwrap().title = " \t ".into();
    match item.save(&mut slot, &a) {
        Ok(updated) => updates.push(updated),
        Err(err) => assert_eq!(err.to_string(), "Title cannot be empty"),
    }

    assert!(updates.is_empty());
    assert_eq!(item.phase(&slot), ItemPhase::Editing);
}

#[test]
fn test_toggle_sends_exactly_one_inverted_update() {
    let slot = EditorSlot::new();
    let done = Task {
        is_completed: true,
        ..task(1, "A")
    };
    let mut mounted = Mounted::new(1);
    let mut updates = Vec::new();

    let pending = mounted
        .machine
        .begin_toggle(&slot, &done, &mounted.owner)
        .expect("toggle starts from Viewing");
    assert!(mounted.machine.begin_toggle(&slot, &done, &mounted.owner).is_none());

    // timer fires
    if let Some(updated) = pending.commit() {
        mounted.machine.finish_toggle();
        updates.push(updated);
    }

    assert_eq!(updates.len(), 1);
    assert!(!updates[0].is_completed);
    assert_eq!(mounted.machine.phase(&slot), ItemPhase::Viewing);
}

#[test]
fn test_toggle_after_unmount_fires_nothing() {
    let mut slot = EditorSlot::new();
    let a = task(1, "A");
    let mut mounted = Mounted::new(1);

    let pending = mounted.machine.begin_toggle(&slot, &a, &mounted.owner).unwrap();
    mounted.unmount(&mut slot);

    assert!(pending.commit().is_none());
}

#[test]
fn test_collapsing_accordion_discards_edit() {
    let mut slot = EditorSlot::new();
    let mut accordion = Accordion::new();
    let done = Task {
        is_completed: true,
        ..task(9, "Old")
    };

    assert!(accordion.toggle());
    let mounted = Mounted::new(9);
    mounted.machine.request_edit(&mut slot, &done, &Utc);
    slot.draft_mut(9).unwrap().title = "half typed".into();

    // collapse unmounts the list
    assert!(!accordion.toggle());
    mounted.unmount(&mut slot);

    // expanding mounts fresh items
    assert!(accordion.toggle());
    let remounted = Mounted::new(9);
    assert_eq!(remounted.machine.phase(&slot), ItemPhase::Viewing);
    assert!(slot.draft().is_none());
}

#[test]
fn test_save_after_eviction_is_rejected() {
    let mut slot = EditorSlot::new();
    let a = task(1, "A");
    let mut item_a = ItemMachine::new(1);
    let item_b = ItemMachine::new(2);

    item_a.request_edit(&mut slot, &a, &Utc);
    item_b.request_edit(&mut slot, &task(2, "B"), &Utc);
    assert_eq!(item_a.save(&mut slot, &a), Err(DomainError::NotEditing(1)));
}

#[test]
fn test_load_more_appends_in_server_order() {
    let mut feed: Feed<Task> = Feed::new();
    let first = feed.begin_refresh();
    feed.complete(
        first,
        Page {
            data: vec![task(3, "c"), task(1, "a")],
            next_page: Some(2),
        },
    );
    let before: Vec<u64> = feed.items().iter().map(|t| t.id).collect();

    let next = feed.next_request().unwrap();
    feed.complete(
        next,
        Page {
            data: vec![task(1, "a again"), task(2, "b")],
            next_page: None,
        },
    );

    let after: Vec<u64> = feed.items().iter().map(|t| t.id).collect();
    assert_eq!(&after[..before.len()], &before[..]);
    assert_eq!(after, vec![3, 1, 1, 2]);
}

#[test]
fn test_reload_after_mutation_keeps_later_pages() {
    let mut feed: Feed<Task> = Feed::new();
    let first = feed.begin_refresh();
    feed.complete(
        first,
        Page {
            data: vec![task(1, "a"), task(2, "b")],
            next_page: Some(2),
        },
    );
    let next = feed.next_request().unwrap();
    feed.complete(
        next,
        Page {
            data: vec![task(3, "c"), task(4, "d")],
            next_page: Some(3),
        },
    );

    // an edit lands optimistically, then every loaded page is fetched again
    feed.replace(task(3, "c edited"));
    let batch = feed.begin_refresh_all();
    assert_eq!(feed.items().len(), 4);
    let pages = batch
        .iter()
        .map(|request| Page {
            data: if request.page == 1 {
                vec![task(1, "a"), task(2, "b")]
            } else {
                vec![task(3, "c edited"), task(4, "d")]
            },
            next_page: Some(request.page + 1),
        })
        .collect();
    assert!(feed.complete_refresh(&batch, pages));

    let ids: Vec<u64> = feed.items().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(feed.find(3).unwrap().title, "c edited");
    assert_eq!(feed.next_request().map(|r| r.page), Some(3));
}
