use aacboard_core::{
    BoardEvent, BoardSession, BoardStore, CategoryId, EventOutcome, RecordingSpeech, SymbolId,
    UiMode, EMPTY_SENTENCE_PLACEHOLDER,
};
use std::sync::Arc;

fn session() -> (BoardSession<Arc<RecordingSpeech>>, Arc<RecordingSpeech>) {
    let speech = Arc::new(RecordingSpeech::new());
    (BoardSession::with_default_catalog(Arc::clone(&speech)), speech)
}

fn symbol_by_text(session: &BoardSession<Arc<RecordingSpeech>>, text: &str) -> (CategoryId, SymbolId) {
    session
        .store()
        .categories()
        .find_map(|category| {
            session
                .store()
                .items(category.id)
                .into_iter()
                .find(|symbol| symbol.text == text)
                .map(|symbol| (category.id, symbol.id))
        })
        .unwrap()
}

#[test]
fn tap_and_speak_flow_issues_one_request() {
    let (mut session, speech) = session();
    let (_, i_want) = symbol_by_text(&session, "I want");
    let (_, apple) = symbol_by_text(&session, "apple");

    assert_eq!(session.handle(BoardEvent::TapSymbol(i_want)), EventOutcome::Applied);
    assert_eq!(session.handle(BoardEvent::TapSymbol(apple)), EventOutcome::Applied);

    let outcome = session.handle(BoardEvent::Speak);
    assert!(matches!(outcome, EventOutcome::Spoken(ref utterance) if utterance.text == "I want apple"));
    assert_eq!(speech.requests().len(), 1);
}

#[test]
fn speak_on_empty_sentence_is_ignored() {
    let (mut session, speech) = session();
    assert_eq!(session.handle(BoardEvent::Speak), EventOutcome::Ignored);
    assert!(speech.requests().is_empty());
}

#[test]
fn tapping_unknown_symbol_is_ignored() {
    let (mut session, _) = session();
    assert_eq!(
        session.handle(BoardEvent::TapSymbol(SymbolId::from_raw(5_000))),
        EventOutcome::Ignored
    );
    assert!(session.composer().is_empty());
}

#[test]
fn remove_and_clear_events_edit_sentence() {
    let (mut session, _) = session();
    let (_, mom) = symbol_by_text(&session, "mom");
    let (_, dad) = symbol_by_text(&session, "dad");
    session.handle(BoardEvent::TapSymbol(mom));
    session.handle(BoardEvent::TapSymbol(dad));

    assert_eq!(session.handle(BoardEvent::RemoveAt(7)), EventOutcome::Ignored);
    assert_eq!(session.handle(BoardEvent::RemoveAt(0)), EventOutcome::Applied);
    assert_eq!(session.composer().entries(), &[dad]);

    assert_eq!(session.handle(BoardEvent::Clear), EventOutcome::Applied);
    assert!(session.composer().is_empty());
}

#[test]
fn catalog_edits_require_admin_mode() {
    let (mut session, _) = session();
    let (food, apple) = symbol_by_text(&session, "apple");

    assert_eq!(session.handle(BoardEvent::BeginAddCategory), EventOutcome::Ignored);
    assert_eq!(session.handle(BoardEvent::BeginAddItem(food)), EventOutcome::Ignored);
    assert_eq!(
        session.handle(BoardEvent::DeleteItem {
            category: food,
            symbol: apple,
        }),
        EventOutcome::Ignored
    );
    assert_eq!(
        session.handle(BoardEvent::SubmitCategory {
            name: "Toys".to_string(),
            color: "orange".to_string(),
        }),
        EventOutcome::Ignored
    );
    assert_eq!(session.store().category_count(), 6);
    assert_eq!(session.mode(), UiMode::Viewing);
}

#[test]
fn add_category_form_round_trip() {
    let (mut session, _) = session();
    session.handle(BoardEvent::ToggleAdmin);
    assert_eq!(session.handle(BoardEvent::BeginAddCategory), EventOutcome::Applied);
    assert_eq!(session.mode(), UiMode::AddingCategory);

    let rejected = session.handle(BoardEvent::SubmitCategory {
        name: "  ".to_string(),
        color: "orange".to_string(),
    });
    assert_eq!(rejected, EventOutcome::Ignored);
    assert_eq!(session.mode(), UiMode::AddingCategory);

    let created = session.handle(BoardEvent::SubmitCategory {
        name: "Toys".to_string(),
        color: "orange".to_string(),
    });
    let EventOutcome::CategoryCreated(id) = created else {
        panic!("expected category to be created, got {created:?}");
    };
    assert_eq!(session.store().category(id).unwrap().name, "Toys");
    assert_eq!(session.mode(), UiMode::Admin);
}

#[test]
fn add_item_form_targets_captured_category() {
    let (mut session, _) = session();
    let (people, _) = symbol_by_text(&session, "mom");
    session.handle(BoardEvent::ToggleAdmin);
    session.handle(BoardEvent::BeginAddItem(people));
    assert_eq!(session.mode(), UiMode::AddingItem(people));

    let created = session.handle(BoardEvent::SubmitItem {
        text: "grandma".to_string(),
        emoji: "👵".to_string(),
    });
    let EventOutcome::ItemCreated(grandma) = created else {
        panic!("expected item to be created, got {created:?}");
    };
    assert_eq!(session.store().owner_of(grandma), Some(people));
    assert_eq!(session.store().items(people).len(), 5);
    assert_eq!(session.mode(), UiMode::Admin);
}

#[test]
fn begin_add_item_for_unknown_category_is_ignored() {
    let (mut session, _) = session();
    session.handle(BoardEvent::ToggleAdmin);
    assert_eq!(
        session.handle(BoardEvent::BeginAddItem(CategoryId::from_raw(77))),
        EventOutcome::Ignored
    );
    assert_eq!(session.mode(), UiMode::Admin);
}

#[test]
fn open_form_blocks_board_interaction() {
    let (mut session, speech) = session();
    let (food, apple) = symbol_by_text(&session, "apple");
    let food_items = session.store().items(food).len();
    session.handle(BoardEvent::TapSymbol(apple));
    session.handle(BoardEvent::ToggleAdmin);
    session.handle(BoardEvent::BeginAddCategory);

    assert_eq!(session.handle(BoardEvent::TapSymbol(apple)), EventOutcome::Ignored);
    assert_eq!(session.handle(BoardEvent::RemoveAt(0)), EventOutcome::Ignored);
    assert_eq!(session.handle(BoardEvent::Clear), EventOutcome::Ignored);
    assert_eq!(session.handle(BoardEvent::Speak), EventOutcome::Ignored);
    assert_eq!(
        session.handle(BoardEvent::DeleteItem {
            category: food,
            symbol: apple,
        }),
        EventOutcome::Ignored
    );
    assert_eq!(session.handle(BoardEvent::BeginAddCategory), EventOutcome::Ignored);
    assert_eq!(session.handle(BoardEvent::BeginAddItem(food)), EventOutcome::Ignored);
    assert_eq!(session.composer().len(), 1);
    assert_eq!(session.store().items(food).len(), food_items);
    assert!(speech.requests().is_empty());

    assert_eq!(session.handle(BoardEvent::Cancel), EventOutcome::Applied);
    assert_eq!(session.mode(), UiMode::Admin);
    assert_eq!(session.handle(BoardEvent::Cancel), EventOutcome::Ignored);
}

#[test]
fn deleted_item_already_in_sentence_still_speaks() {
    let (mut session, speech) = session();
    let (food, pizza) = symbol_by_text(&session, "pizza");
    session.handle(BoardEvent::TapSymbol(pizza));
    session.handle(BoardEvent::ToggleAdmin);

    assert_eq!(
        session.handle(BoardEvent::DeleteItem {
            category: food,
            symbol: pizza,
        }),
        EventOutcome::Applied
    );
    assert_eq!(session.handle(BoardEvent::TapSymbol(pizza)), EventOutcome::Ignored);

    session.handle(BoardEvent::Speak);
    assert_eq!(speech.requests()[0].text, "pizza");
}

#[test]
fn snapshot_reports_placeholder_and_labels() {
    let (mut session, _) = session();
    let empty = session.snapshot();
    assert_eq!(empty.placeholder, Some(EMPTY_SENTENCE_PLACEHOLDER));
    assert!(!empty.speak_enabled);
    assert_eq!(empty.categories.len(), 6);
    assert_eq!(empty.categories[1].items[0].label, "Add apple to message");

    let (_, apple) = symbol_by_text(&session, "apple");
    session.handle(BoardEvent::TapSymbol(apple));
    let filled = session.snapshot();
    assert_eq!(filled.placeholder, None);
    assert!(filled.speak_enabled);
    assert_eq!(filled.sentence_text.as_deref(), Some("apple"));
    assert_eq!(filled.sentence[0].remove_label, "Remove apple");
}

#[test]
fn snapshot_serializes_snake_case_fields() {
    let (mut session, _) = session();
    let (_, i_want) = symbol_by_text(&session, "I want");
    session.handle(BoardEvent::TapSymbol(i_want));

    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["mode"]["mode"], "viewing");
    assert_eq!(json["speak_enabled"], true);
    assert_eq!(json["sentence"][0]["text"], "I want");
    assert_eq!(json["sentence"][0]["index"], 0);
    let tile = &json["categories"][0]["items"][0];
    assert_eq!(tile["text"], "I want");
    assert_eq!(tile["emoji"], "👋");
    assert_eq!(tile["prefix"], true);
    assert_eq!(tile["label"], "Add I want to message");
}

#[test]
fn empty_store_session_starts_blank() {
    let session = BoardSession::new(BoardStore::new(), RecordingSpeech::new());
    assert_eq!(session.snapshot().categories.len(), 0);
    assert_eq!(session.speech().requests().len(), 0);
}
