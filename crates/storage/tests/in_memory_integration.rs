use std::sync::Arc;
use std::thread;

use quiz_core::model::{QuestionDraft, QuizSession};
use quiz_core::time::fixed_now;
use storage::{SessionStore, Storage};

#[test]
fn concurrent_updates_on_one_session_are_all_applied() {
    let store = Arc::new(SessionStore::new());
    let id = store
        .create(QuizSession::new((0..64).collect(), fixed_now()).unwrap())
        .unwrap();

    thread::scope(|scope| {
        for worker in 0..8 {
            let store = Arc::clone(&store);
            let id = id.clone();
            scope.spawn(move || {
                for _ in 0..8 {
                    store
                        .with_session(&id, |s| s.record_answer(worker % 2 == 0, fixed_now()))
                        .unwrap()
                        .unwrap()
                        .unwrap();
                }
            });
        }
    });

    let session = store.get(&id).unwrap().unwrap();
    assert_eq!(session.position(), 64);
    assert_eq!(session.correct_count(), 32);
    assert!(session.is_complete());
}

#[test]
fn concurrent_creates_yield_distinct_ids() {
    let store = Arc::new(SessionStore::new());

    let ids: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = Arc::clone(&store);
                scope.spawn(move || {
                    store
                        .create(QuizSession::new(vec![0], fixed_now()).unwrap())
                        .unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(store.len().unwrap(), ids.len());
}

#[test]
fn catalog_appends_are_visible_through_shared_storage() {
    let storage = Storage::seeded();
    let shared = storage.clone();

    let draft = QuestionDraft::new("獺祭", "だっさい").validate().unwrap();
    let added = shared.questions.append_question(draft).unwrap();

    assert_eq!(added.id().value(), 15);
    assert_eq!(storage.questions.count_questions().unwrap(), 15);
    assert_eq!(
        storage.questions.question_at(14).unwrap().unwrap().answer(),
        "だっさい"
    );
}
