use std::borrow::Cow;
use std::path::PathBuf;

use reedline::{
    Emacs, FileBackedHistory, Prompt, PromptEditMode, PromptHistorySearch,
    PromptHistorySearchStatus, Reedline, default_emacs_keybindings,
};
use tracing::{debug, warn};

use crate::highlighter::Highlighter;

const HISTORY_CAPACITY: usize = 1000;

/// `styx> ` prompt.
pub struct StyxPrompt;

impl Prompt for StyxPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed("styx")
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("> ")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("   .. ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({}reverse-search: {}) ",
            prefix, history_search.term
        ))
    }
}

/// Location of the history file, creating its directory if needed.
fn history_path() -> Option<PathBuf> {
    let dir = dirs::data_dir()?.join("styx");
    if let Err(e) = std::fs::create_dir_all(&dir) {
        warn!(path = %dir.display(), error = %e, "cannot create history directory");
        return None;
    }
    Some(dir.join("history.txt"))
}

pub fn setup_reedline(with_history: bool) -> Reedline {
    // No validator: Enter always submits the line, balanced or not.
    let mut line_editor = Reedline::create()
        .with_highlighter(Box::new(Highlighter))
        .with_edit_mode(Box::new(Emacs::new(default_emacs_keybindings())));

    if with_history && let Some(path) = history_path() {
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => {
                debug!(path = %path.display(), "using history file");
                line_editor = line_editor.with_history(Box::new(history));
            }
            Err(e) => warn!(path = %path.display(), error = %e, "history disabled"),
        }
    }

    line_editor
}
