//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose board sessions to Dart via FRB sync functions.
//! - Address sessions with opaque UUID handles so one process can host
//!   several boards.
//!
//! # Invariants
//! - Exported functions never panic across the FFI boundary.
//! - Unknown or malformed handles produce failure envelopes, not errors.
//! - Sessions default to the null speech backend; the host speaks the
//!   returned `spoken_text` itself.

use aacboard_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, BoardConfig,
    BoardEvent, BoardSession, BoardSnapshot, CategoryId, EventOutcome, SpeechBackendKind,
    SpeechCapability, SymbolId, UiMode,
};
use log::info;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

type HostedSession = BoardSession<Box<dyn SpeechCapability + Send + Sync>>;

static SESSIONS: Lazy<Mutex<HashMap<Uuid, HostedSession>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), Path::new(log_dir.as_str())) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Response envelope for opening a board session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardOpenResponse {
    pub ok: bool,
    /// Opaque session handle, present on success.
    pub handle: Option<String>,
    pub message: String,
}

/// Response envelope for one board interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardActionResponse {
    /// Whether the interaction changed board state.
    pub ok: bool,
    /// Raw id of a category or picture created by this interaction.
    pub created_id: Option<u32>,
    /// Sentence text the host should speak, for `board_speak`.
    pub spoken_text: Option<String>,
    /// Mode after the interaction (`viewing|admin|adding_item|adding_category`).
    pub mode: String,
    pub message: String,
}

impl BoardActionResponse {
    fn from_outcome(outcome: EventOutcome, mode: UiMode) -> Self {
        let mut response = Self {
            ok: true,
            created_id: None,
            spoken_text: None,
            mode: mode.as_str().to_string(),
            message: "Applied.".to_string(),
        };
        match outcome {
            EventOutcome::Applied => {}
            EventOutcome::Ignored => {
                response.ok = false;
                response.message = "Nothing to do.".to_string();
            }
            EventOutcome::CategoryCreated(id) => {
                response.created_id = Some(id.raw());
                response.message = "Category added.".to_string();
            }
            EventOutcome::ItemCreated(id) => {
                response.created_id = Some(id.raw());
                response.message = "Picture added.".to_string();
            }
            EventOutcome::Spoken(utterance) => {
                response.spoken_text = Some(utterance.text);
                response.message = "Speaking.".to_string();
            }
        }
        response
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            created_id: None,
            spoken_text: None,
            mode: String::new(),
            message: message.into(),
        }
    }
}

/// One picture tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardTile {
    pub id: u32,
    pub text: String,
    pub emoji: String,
    pub prefix: bool,
    /// Accessibility label for the tile button.
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardCategory {
    pub id: u32,
    pub name: String,
    pub color: String,
    pub tiles: Vec<BoardTile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSentenceEntry {
    pub index: u32,
    pub symbol_id: u32,
    pub text: String,
    pub emoji: String,
    pub remove_label: String,
}

/// Render-ready board state for the Flutter view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub categories: Vec<BoardCategory>,
    pub sentence: Vec<BoardSentenceEntry>,
    pub sentence_text: Option<String>,
    pub speak_enabled: bool,
    pub placeholder: Option<String>,
    pub mode: String,
    /// Category targeted by the open add-item form.
    pub adding_item_category: Option<u32>,
}

impl From<BoardSnapshot> for BoardView {
    fn from(snapshot: BoardSnapshot) -> Self {
        Self {
            categories: snapshot
                .categories
                .into_iter()
                .map(|category| BoardCategory {
                    id: category.id.raw(),
                    name: category.name,
                    color: category.color,
                    tiles: category
                        .items
                        .into_iter()
                        .map(|tile| BoardTile {
                            id: tile.symbol.id.raw(),
                            text: tile.symbol.text,
                            emoji: tile.symbol.emoji,
                            prefix: tile.symbol.prefix,
                            label: tile.label,
                        })
                        .collect(),
                })
                .collect(),
            sentence: snapshot
                .sentence
                .into_iter()
                .map(|entry| BoardSentenceEntry {
                    index: u32::try_from(entry.index).unwrap_or(u32::MAX),
                    symbol_id: entry.symbol_id.raw(),
                    text: entry.text,
                    emoji: entry.emoji,
                    remove_label: entry.remove_label,
                })
                .collect(),
            sentence_text: snapshot.sentence_text,
            speak_enabled: snapshot.speak_enabled,
            placeholder: snapshot.placeholder.map(str::to_string),
            mode: snapshot.mode.as_str().to_string(),
            adding_item_category: snapshot.mode.adding_item_target().map(CategoryId::raw),
        }
    }
}

/// Opens a new board session.
///
/// Input semantics:
/// - `speech_backend`: `command|null`; `None` selects `null`.
/// - `seed_default_catalog`: start from the built-in board or an empty one.
///
/// # FFI contract
/// - Returns a handle for all other `board_*` calls on success.
#[flutter_rust_bridge::frb(sync)]
pub fn board_open(speech_backend: Option<String>, seed_default_catalog: bool) -> BoardOpenResponse {
    let mut config = BoardConfig {
        seed_default_catalog,
        ..BoardConfig::default()
    };
    config.speech.backend = match speech_backend.as_deref() {
        Some(raw) => match raw.parse::<SpeechBackendKind>() {
            Ok(kind) => kind,
            Err(err) => {
                return BoardOpenResponse {
                    ok: false,
                    handle: None,
                    message: format!("board_open failed: {err}"),
                }
            }
        },
        None => SpeechBackendKind::Null,
    };

    let session = BoardSession::new(config.build_store(), config.build_speech());
    let handle = Uuid::new_v4();
    lock_sessions().insert(handle, session);
    info!("event=ffi_session_open module=ffi status=ok handle={handle}");
    BoardOpenResponse {
        ok: true,
        handle: Some(handle.to_string()),
        message: "Board opened.".to_string(),
    }
}

/// Drops a board session. Returns `false` for unknown handles.
#[flutter_rust_bridge::frb(sync)]
pub fn board_close(handle: String) -> bool {
    let Some(id) = parse_handle(&handle) else {
        return false;
    };
    let removed = lock_sessions().remove(&id).is_some();
    if removed {
        info!("event=ffi_session_close module=ffi status=ok handle={id}");
    }
    removed
}

/// Returns the current view, or `None` for unknown handles.
#[flutter_rust_bridge::frb(sync)]
pub fn board_view(handle: String) -> Option<BoardView> {
    let id = parse_handle(&handle)?;
    lock_sessions()
        .get(&id)
        .map(|session| BoardView::from(session.snapshot()))
}

#[flutter_rust_bridge::frb(sync)]
pub fn board_tap(handle: String, symbol_id: u32) -> BoardActionResponse {
    dispatch(&handle, BoardEvent::TapSymbol(SymbolId::from_raw(symbol_id)))
}

#[flutter_rust_bridge::frb(sync)]
pub fn board_remove_at(handle: String, index: u32) -> BoardActionResponse {
    dispatch(&handle, BoardEvent::RemoveAt(index as usize))
}

#[flutter_rust_bridge::frb(sync)]
pub fn board_clear(handle: String) -> BoardActionResponse {
    dispatch(&handle, BoardEvent::Clear)
}

/// Flattens the sentence and returns it in `spoken_text`.
///
/// Sessions opened with the `command` backend also play it through the
/// system TTS program.
#[flutter_rust_bridge::frb(sync)]
pub fn board_speak(handle: String) -> BoardActionResponse {
    dispatch(&handle, BoardEvent::Speak)
}

#[flutter_rust_bridge::frb(sync)]
pub fn board_toggle_admin(handle: String) -> BoardActionResponse {
    dispatch(&handle, BoardEvent::ToggleAdmin)
}

#[flutter_rust_bridge::frb(sync)]
pub fn board_begin_add_category(handle: String) -> BoardActionResponse {
    dispatch(&handle, BoardEvent::BeginAddCategory)
}

#[flutter_rust_bridge::frb(sync)]
pub fn board_submit_category(handle: String, name: String, color: String) -> BoardActionResponse {
    dispatch(&handle, BoardEvent::SubmitCategory { name, color })
}

#[flutter_rust_bridge::frb(sync)]
pub fn board_begin_add_item(handle: String, category_id: u32) -> BoardActionResponse {
    dispatch(
        &handle,
        BoardEvent::BeginAddItem(CategoryId::from_raw(category_id)),
    )
}

#[flutter_rust_bridge::frb(sync)]
pub fn board_submit_item(handle: String, text: String, emoji: String) -> BoardActionResponse {
    dispatch(&handle, BoardEvent::SubmitItem { text, emoji })
}

#[flutter_rust_bridge::frb(sync)]
pub fn board_delete_item(handle: String, category_id: u32, symbol_id: u32) -> BoardActionResponse {
    dispatch(
        &handle,
        BoardEvent::DeleteItem {
            category: CategoryId::from_raw(category_id),
            symbol: SymbolId::from_raw(symbol_id),
        },
    )
}

#[flutter_rust_bridge::frb(sync)]
pub fn board_cancel(handle: String) -> BoardActionResponse {
    dispatch(&handle, BoardEvent::Cancel)
}

fn dispatch(handle: &str, event: BoardEvent) -> BoardActionResponse {
    let Some(id) = parse_handle(handle) else {
        return BoardActionResponse::failure("invalid board handle");
    };
    let mut sessions = lock_sessions();
    let Some(session) = sessions.get_mut(&id) else {
        return BoardActionResponse::failure("board session not found");
    };
    let outcome = session.handle(event);
    BoardActionResponse::from_outcome(outcome, session.mode())
}

fn parse_handle(handle: &str) -> Option<Uuid> {
    Uuid::parse_str(handle.trim()).ok()
}

fn lock_sessions() -> std::sync::MutexGuard<'static, HashMap<Uuid, HostedSession>> {
    SESSIONS.lock().unwrap_or_else(PoisonError::into_inner)
}
