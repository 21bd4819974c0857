use speculate2::speculate;
use todo_api::models::*;
use todo_api::store::*;
use tokio_test::block_on;

fn sample_todos() -> Vec<Todo> {
    vec![
        Todo::new(1, "buy milk", false),
        Todo::new(2, "walk dog", true),
        Todo::new(7, "  file taxes  ", false),
    ]
}

speculate! {
    describe "json file store" {
        before {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let path = dir.path().join("todos.json");
            let store = JsonFileStore::new(&path);
        }

        describe "load_all" {
            it "creates the file with an empty array when missing" {
                assert!(!path.exists());

                let todos = block_on(store.load_all()).expect("Load failed");

                assert!(todos.is_empty());
                assert!(path.exists());
                let content = std::fs::read_to_string(&path).expect("Read failed");
                assert_eq!(content.trim(), "[]");
            }

            it "creates missing parent directories" {
                let nested = JsonFileStore::new(dir.path().join("a/b/todos.json"));

                let todos = block_on(nested.load_all()).expect("Load failed");

                assert!(todos.is_empty());
                assert!(nested.path().exists());
            }

            it "reads todos written by hand" {
                std::fs::write(&path, r#"[
  {
    "id": 3,
    "title": "hand written",
    "completed": true,
    "createTime": "2024-05-01T12:30:00.000Z"
  }
]"#).expect("Write failed");

                let todos = block_on(store.load_all()).expect("Load failed");

                assert_eq!(todos.len(), 1);
                assert_eq!(todos[0].id, 3);
                assert_eq!(todos[0].title, "hand written");
                assert!(todos[0].completed);
            }

            it "saves loaded timestamps back byte for byte" {
                let original = r#"[
  {
    "id": 1,
    "title": "from another writer",
    "completed": false,
    "createTime": "2024-05-01T12:30:00.000Z"
  },
  {
    "id": 2,
    "title": "with offset",
    "completed": true,
    "createTime": "2024-05-01T14:30:00.000+02:00"
  }
]"#;
                std::fs::write(&path, original).expect("Write failed");

                let todos = block_on(store.load_all()).expect("Load failed");
                block_on(store.save_all(&todos)).expect("Save failed");

                let content = std::fs::read_to_string(&path).expect("Read failed");
                assert_eq!(content, original);
            }

            it "fails with a read error on unparsable content" {
                std::fs::write(&path, "not json at all").expect("Write failed");

                let err = block_on(store.load_all()).expect_err("Load should fail");

                assert!(err.is_read());
                assert!(matches!(err, StoreError::Parse { .. }));
            }

            it "fails with a read error when the path is a directory" {
                let as_dir = JsonFileStore::new(dir.path());

                let err = block_on(as_dir.load_all()).expect_err("Load should fail");

                assert!(err.is_read());
            }
        }

        describe "save_all" {
            it "round-trips the collection in order" {
                let todos = sample_todos();

                block_on(store.save_all(&todos)).expect("Save failed");
                let loaded = block_on(store.load_all()).expect("Load failed");

                assert_eq!(loaded, todos);
            }

            it "writes pretty-printed json with two-space indentation" {
                block_on(store.save_all(&sample_todos())).expect("Save failed");

                let content = std::fs::read_to_string(&path).expect("Read failed");
                assert!(content.starts_with("[\n  {\n    \"id\": 1,"));
                assert!(content.contains("\"createTime\""));
            }

            it "overwrites the previous contents in full" {
                block_on(store.save_all(&sample_todos())).expect("Save failed");
                block_on(store.save_all(&[])).expect("Save failed");

                let loaded = block_on(store.load_all()).expect("Load failed");
                assert!(loaded.is_empty());
            }

            it "fails with a write error when the target is a directory" {
                let as_dir = JsonFileStore::new(dir.path());

                let err = block_on(as_dir.save_all(&sample_todos())).expect_err("Save should fail");

                assert!(matches!(err, StoreError::Write { .. }));
                assert!(!err.is_read());
            }
        }
    }

    describe "memory store" {
        it "starts empty" {
            let store = MemoryStore::new();
            assert!(block_on(store.load_all()).expect("Load failed").is_empty());
        }

        it "returns what was saved" {
            let store = MemoryStore::new();
            let todos = sample_todos();

            block_on(store.save_all(&todos)).expect("Save failed");

            assert_eq!(block_on(store.load_all()).expect("Load failed"), todos);
        }

        it "shares state between clones" {
            let store = MemoryStore::with_todos(sample_todos());
            let other = store.clone();

            block_on(other.save_all(&[])).expect("Save failed");

            assert!(block_on(store.load_all()).expect("Load failed").is_empty());
        }
    }

    describe "next_id" {
        it "is 1 for an empty collection" {
            assert_eq!(next_id(&[]).expect("Id available"), 1);
        }

        it "is one past the maximum id" {
            assert_eq!(next_id(&sample_todos()).expect("Id available"), 8);
        }

        it "fails rather than repeat the largest possible id" {
            let todos = vec![Todo::new(u64::MAX, "last", false)];
            assert!(matches!(next_id(&todos), Err(StoreError::IdsExhausted(_))));
        }
    }
}
