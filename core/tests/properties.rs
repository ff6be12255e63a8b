//! Property tests for the identity store and todo operations.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use multitodo_core::{IdentityStore, NewTodo, TodoError, TodoOperations, TodoPatch};
use multitodo_testing::test_environment;
use proptest::prelude::*;
use std::collections::HashSet;

fn usernames() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-c]{1,2}", 1..30)
}

/// A mutation applied to one of the todos created so far (by index).
#[derive(Debug, Clone)]
enum Step {
    Create(String),
    Rename(usize, String),
    Done(usize),
    Delete(usize),
}

fn steps() -> impl Strategy<Value = Vec<Step>> {
    let step = prop_oneof![
        "[a-z]{1,8}".prop_map(Step::Create),
        (0usize..8, "[a-z]{1,8}").prop_map(|(i, t)| Step::Rename(i, t)),
        (0usize..8).prop_map(Step::Done),
        (0usize..8).prop_map(Step::Delete),
    ];
    prop::collection::vec(step, 1..40)
}

proptest! {
    #[test]
    fn usernames_stay_unique(names in usernames()) {
        let env = test_environment();
        let mut store = IdentityStore::new();
        let mut seen = HashSet::new();

        for name in &names {
            let result = store.register(&env, name.clone(), name.clone());
            if seen.insert(name.clone()) {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(result.unwrap_err(), TodoError::DuplicateUsername);
            }
        }

        prop_assert_eq!(store.len(), seen.len());
        let ids: HashSet<_> = store.users().map(|u| u.id).collect();
        prop_assert_eq!(ids.len(), seen.len());
    }

    #[test]
    fn list_tracks_a_reference_model(steps in steps()) {
        let env = test_environment();
        let ops = TodoOperations::new(env.clone());
        let mut store = IdentityStore::new();
        store.register(&env, "Ana", "ana").unwrap();
        let user = store.find_by_username_mut("ana").unwrap();

        // (id, title, done) in expected order
        let mut model = Vec::new();
        let mut ever_created = Vec::new();

        for step in steps {
            match step {
                Step::Create(title) => {
                    let todo = ops.create(user, NewTodo {
                        title: Some(title.clone()),
                        deadline: Some("2025-01-01".into()),
                    }).unwrap();
                    prop_assert!(!todo.done);
                    prop_assert_eq!(ops.list(user).last(), Some(&todo));
                    model.push((todo.id, title, false));
                    ever_created.push(todo.id);
                }
                Step::Rename(i, title) => {
                    let Some(&id) = ever_created.get(i) else { continue };
                    let patch = TodoPatch { title: Some(title.clone()), deadline: None };
                    match model.iter_mut().find(|(mid, _, _)| *mid == id) {
                        Some(entry) => {
                            let todo = ops.update(user, id, patch).unwrap();
                            prop_assert_eq!(todo.done, entry.2);
                            entry.1 = title;
                        }
                        None => {
                            prop_assert_eq!(ops.update(user, id, patch).unwrap_err(), TodoError::TodoNotFound);
                        }
                    }
                }
                Step::Done(i) => {
                    let Some(&id) = ever_created.get(i) else { continue };
                    match model.iter_mut().find(|(mid, _, _)| *mid == id) {
                        Some(entry) => {
                            prop_assert!(ops.mark_done(user, id).unwrap().done);
                            entry.2 = true;
                        }
                        None => {
                            prop_assert_eq!(ops.mark_done(user, id).unwrap_err(), TodoError::TodoNotFound);
                        }
                    }
                }
                Step::Delete(i) => {
                    let Some(&id) = ever_created.get(i) else { continue };
                    match model.iter().position(|(mid, _, _)| *mid == id) {
                        Some(pos) => {
                            ops.delete(user, id).unwrap();
                            model.remove(pos);
                        }
                        None => {
                            prop_assert_eq!(ops.delete(user, id).unwrap_err(), TodoError::TodoNotFound);
                        }
                    }
                }
            }

            let actual: Vec<_> = ops
                .list(user)
                .iter()
                .map(|t| (t.id, t.title.clone(), t.done))
                .collect();
            prop_assert_eq!(&actual, &model);
        }
    }
}
