//! Behaviour of the seeded shelf as seen from outside the crate.

use std::sync::mpsc;

use bookshelf_core::{search, seed, Book, BookId, BookStore, ReadingStatus, StatusController};

fn seeded() -> (BookStore, mpsc::Receiver<bookshelf_core::Notification>) {
    let (tx, rx) = mpsc::channel();
    (BookStore::seeded(tx), rx)
}

#[test]
fn test_set_status_touches_exactly_one_record() {
    for book in seed::books() {
        for status in ReadingStatus::ALL {
            let (mut store, _rx) = seeded();
            let before = store.all().to_vec();
            let after = store.set_status(&book.id, status).to_vec();

            assert_eq!(after.len(), before.len());
            let matching: Vec<&Book> = after.iter().filter(|b| b.id == book.id).collect();
            assert_eq!(matching.len(), 1);
            assert_eq!(matching[0].status, status);
            for (old, new) in before.iter().zip(&after) {
                if old.id != book.id {
                    assert_eq!(old, new);
                }
            }
        }
    }
}

#[test]
fn test_set_status_is_idempotent() {
    let (mut once, _rx1) = seeded();
    let (mut twice, _rx2) = seeded();
    let id = BookId::from("5");

    once.set_status(&id, ReadingStatus::NotStarted);
    twice.set_status(&id, ReadingStatus::NotStarted);
    twice.set_status(&id, ReadingStatus::NotStarted);

    assert_eq!(once.all(), twice.all());
}

#[test]
fn test_unknown_id_returns_equal_list() {
    let (mut store, rx) = seeded();
    let before = store.all().to_vec();
    let after = store.set_status(&BookId::from("nonexistent"), ReadingStatus::Completed);
    assert_eq!(after, before.as_slice());
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_homegoing_completed_scenario() {
    let (mut store, rx) = seeded();
    let before = store.all().to_vec();
    let homegoing = &before[1];
    assert_eq!(homegoing.id.as_str(), "2");
    assert_eq!(homegoing.title, "Homegoing");
    assert_eq!(homegoing.author, "Yaa Gyasi");
    assert_eq!(homegoing.status, ReadingStatus::Reading);

    let after = store.set_status(&BookId::from("2"), ReadingStatus::Completed);
    assert_eq!(after.len(), 10);
    assert_eq!(after[1].status, ReadingStatus::Completed);
    let unchanged = before
        .iter()
        .zip(after)
        .filter(|(old, new)| old == new)
        .count();
    assert_eq!(unchanged, 9);

    let event = rx.try_recv().unwrap();
    assert_eq!(event.kind(), "status-updated");
}

#[test]
fn test_every_transition_is_allowed() {
    let (mut store, rx) = seeded();
    let id = BookId::from("3");
    let mut controller = StatusController::new(&mut store);
    for from in ReadingStatus::ALL {
        for to in ReadingStatus::ALL {
            controller.set(&id, from);
            let books = controller.set(&id, to);
            assert_eq!(books[2].status, to);
        }
    }
    assert_eq!(rx.try_iter().count(), 18);
}

#[test]
fn test_filter_empty_query() {
    let books = seed::books();
    let found: Vec<Book> = search::filter(&books, "").into_iter().cloned().collect();
    assert_eq!(found, books);
}

#[test]
fn test_filter_results_are_ordered_subset() {
    let books = seed::books();
    for query in ["a", "ON", "the", "ku", "zzz", "S."] {
        let found = search::filter(&books, query);
        let needle = query.to_lowercase();

        let mut last_index = None;
        for book in &found {
            let index = books.iter().position(|b| b.id == book.id).unwrap();
            assert!(last_index.map_or(true, |last| index > last), "order kept");
            last_index = Some(index);
            assert!(
                book.title.to_lowercase().contains(&needle)
                    || book.author.to_lowercase().contains(&needle)
            );
        }
    }
}

#[test]
fn test_filter_didion_scenario() {
    let books = seed::books();
    let found = search::filter(&books, "didion");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Slouching Towards Bethlehem");
    assert_eq!(found[0].author, "Joan Didion");
}

#[test]
fn test_note_lookup_scenario() {
    let notes = seed::notes();
    let munnu = notes.note_for("Munnu").unwrap();
    assert!(munnu.starts_with("The black and white artwork"));
    assert!(notes.note_for("Unknown Title").is_none());
}

#[test]
fn test_filter_then_update_through_store() {
    let (mut store, _rx) = seeded();
    let id = search::filter(store.all(), "kawaguchi")[0].id.clone();
    store.set_status(&id, ReadingStatus::Reading);
    assert_eq!(store.get(&id).map(|b| b.status), Some(ReadingStatus::Reading));
}
