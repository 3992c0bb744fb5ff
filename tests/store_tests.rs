use lotoforge::error::LotoError;
use lotoforge::loader::parse_draws_str;
use lotoforge::store::DrawStore;
use std::fs;
use std::sync::Arc;
use std::thread;

mod common;
use common::{draw, sample_history, SAMPLE_SNAPSHOT};

#[test]
fn test_missing_snapshot_opens_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = DrawStore::open(dir.path().join("absent.json")).unwrap();
    assert!(store.snapshot().is_empty());
}

#[test]
fn test_open_sorts_and_exposes_latest() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("loto7.json");
    fs::write(&path, SAMPLE_SNAPSHOT).unwrap();

    let store = DrawStore::open(&path).unwrap();
    let dataset = store.snapshot();
    assert_eq!(dataset.len(), 6);
    assert_eq!(dataset.draws()[0].id(), "draw #1");
    assert_eq!(dataset.latest().unwrap().id(), "draw #6");
}

#[test]
fn test_corrupt_snapshot_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("loto7.json");
    fs::write(&path, r#"{"draws": [{"id": "x"}]}"#).unwrap();
    assert!(matches!(DrawStore::open(&path), Err(LotoError::Validation(_))));
}

#[test]
fn test_add_draw_persists_and_rejects_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("loto7.json");
    let store = DrawStore::open(&path).unwrap();

    store.add_draw(draw(1, "2024-01-05", common::EXAMPLE_MAIN, common::EXAMPLE_BONUS)).unwrap();
    let next = store
        .add_draw(draw(2, "2024-01-12", [2, 9, 15, 20, 26, 31, 36], [5, 17]))
        .unwrap();
    assert_eq!(next.latest().unwrap().id(), "draw #2");

    let dup = store.add_draw(draw(2, "2024-01-19", [3, 8, 11, 19, 24, 30, 37], [6, 22]));
    assert!(matches!(dup, Err(LotoError::DuplicateDraw(_))));
    assert_eq!(store.snapshot().len(), 2);

    // newest first on disk
    let on_disk = parse_draws_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk[0].id(), "draw #2");
    assert_eq!(DrawStore::open(&path).unwrap().snapshot().len(), 2);
}

#[test]
fn test_replace_swaps_whole_dataset() {
    let store = DrawStore::in_memory(sample_history());
    let before = store.snapshot();

    store
        .replace(vec![draw(99, "2025-01-03", [1, 2, 3, 4, 5, 6, 7], [8, 9])])
        .unwrap();

    // old handle still sees the complete old set
    assert_eq!(before.len(), 6);
    let after = store.snapshot();
    assert_eq!(after.len(), 1);
    assert_eq!(after.latest().unwrap().id(), "draw #99");
}

#[test]
fn test_readers_never_see_partial_dataset() {
    let store = Arc::new(DrawStore::in_memory(sample_history()));
    let small = vec![draw(99, "2025-01-03", [1, 2, 3, 4, 5, 6, 7], [8, 9])];

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for i in 0..200 {
                let next = if i % 2 == 0 { small.clone() } else { sample_history() };
                store.replace(next).unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..500 {
                    let len = store.snapshot().len();
                    assert!(len == 1 || len == 6, "saw {} draws", len);
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for r in readers {
        r.join().unwrap();
    }
}

#[test]
fn test_save_writes_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("loto7.json");
    fs::write(&path, SAMPLE_SNAPSHOT).unwrap();
    let store = DrawStore::open(&path).unwrap();
    fs::remove_file(&path).unwrap();

    store.save().unwrap();
    assert_eq!(parse_draws_str(&fs::read_to_string(&path).unwrap()).unwrap().len(), 6);
}
