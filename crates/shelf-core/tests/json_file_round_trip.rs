use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use shelf_core::{JsonFileStore, Ledger, LedgerError, LedgerStore};

struct TempFile {
    path: PathBuf,
}

impl TempFile {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be available")
            .as_nanos();
        let filename = format!("{}_{}_{}.json", prefix, std::process::id(), nanos);
        let path = std::env::temp_dir().join(filename);
        Self { path }
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[test]
fn test_state_survives_reopen() {
    let temp = TempFile::new("shelf_reopen");

    {
        let mut ledger =
            Ledger::open(JsonFileStore::new(&temp.path)).expect("open should succeed");
        ledger.add_book("Dune", "Herbert").expect("add should succeed");
        ledger.add_book("1984", "Orwell").expect("add should succeed");
        ledger.borrow(1, "Alice").expect("borrow should succeed");
    }

    let ledger = Ledger::open(JsonFileStore::new(&temp.path)).expect("reopen should succeed");
    let available: Vec<_> = ledger.available().iter().map(|b| b.id).collect();
    assert_eq!(available, vec![2]);
    let loan = ledger.loans().next().expect("one loan");
    assert_eq!(loan.id(), 1);
    assert_eq!(loan.borrower, "Alice");
}

#[test]
fn test_save_of_load_is_idempotent() {
    let temp = TempFile::new("shelf_idempotent");
    let mut store = JsonFileStore::new(&temp.path);

    {
        let mut ledger = Ledger::open(store.clone()).expect("open should succeed");
        ledger.add_book("Dune", "Herbert").expect("add should succeed");
        ledger.add_book("1984", "Orwell").expect("add should succeed");
        ledger.add_book("Emma", "Austen").expect("add should succeed");
        ledger.borrow(3, "Carol").expect("borrow should succeed");
        ledger.borrow(1, "Alice").expect("borrow should succeed");
    }
    let first = fs::read(&temp.path).expect("read should succeed");

    let state = store.load().expect("load should succeed");
    store.save(&state).expect("save should succeed");
    let second = fs::read(&temp.path).expect("read should succeed");

    let state = store.load().expect("load should succeed");
    store.save(&state).expect("save should succeed");
    let third = fs::read(&temp.path).expect("read should succeed");

    assert_eq!(first, second);
    assert_eq!(second, third);

    let text = String::from_utf8(third).expect("utf-8 document");
    let carol = text.find("\"3\"").expect("loan 3 present");
    let alice = text.find("\"1\": {").expect("loan 1 present");
    assert!(carol < alice, "loans keep insertion order on disk");
}

#[test]
fn test_reads_legacy_document() {
    let temp = TempFile::new("shelf_legacy");
    let document = r#"{
    "books": [
        {
            "id": 2,
            "title": "1984",
            "author": "Orwell"
        }
    ],
    "borrowed_books": {
        "1": {
            "book": {
                "id": 1,
                "title": "Dune",
                "author": "Herbert"
            },
            "user": "Alice"
        }
    }
}"#;
    fs::write(&temp.path, document).expect("write should succeed");

    let mut ledger = Ledger::open(JsonFileStore::new(&temp.path)).expect("open should succeed");
    assert!(matches!(
        ledger.return_book(1, "Bob"),
        Err(LedgerError::NotBorrowedByUser { .. })
    ));
    ledger.return_book(1, "Alice").expect("return should succeed");
    let titles: Vec<_> = ledger.available().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["1984", "Dune"]);

    assert_eq!(ledger.add_book("Emma", "Austen").expect("add").id, 3);
}

#[test]
fn test_corrupt_file_fails_to_open() {
    let temp = TempFile::new("shelf_corrupt");
    fs::write(&temp.path, "[1, 2, 3]").expect("write should succeed");

    let result = Ledger::open(JsonFileStore::new(&temp.path));
    assert!(matches!(result, Err(LedgerError::Corrupt(_))));

    // The corrupt file is left alone for the user to inspect.
    assert_eq!(
        fs::read_to_string(&temp.path).expect("read should succeed"),
        "[1, 2, 3]"
    );
}
