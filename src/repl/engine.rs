use reedline::{
    ColumnarMenu, Emacs, FileBackedHistory, History, KeyCode, KeyModifiers, MenuBuilder, Reedline,
    ReedlineEvent, ReedlineMenu, Signal, default_emacs_keybindings,
};

use crate::completion::TokenAutocompleteEngine;
use crate::config::{EditorConfig, HistoryConfig};
use crate::error::Result;

use super::completer::TokenCompleter;
use super::highlighter::TokenHighlighter;
use super::hinter::TokenHinter;
use super::prompt::HeaderPrompt;

const COMPLETION_MENU: &str = "completion_menu";

/// REPL engine for interactive token entry
pub struct ReplEngine {
    /// Line editor for input
    editor: Reedline,

    /// Prompt with the header label
    prompt: HeaderPrompt,

    /// Engine used to split submitted lines
    engine: TokenAutocompleteEngine,

    /// Whether to continue running
    running: bool,
}

impl ReplEngine {
    /// Create a new REPL engine
    ///
    /// # Arguments
    /// * `editor_config` - Completion and prompt settings
    /// * `history_config` - History configuration
    /// * `color` - Enable ANSI styling
    ///
    /// # Returns
    /// * `Result<Self>` - New REPL engine or error
    pub fn new(
        editor_config: &EditorConfig,
        history_config: &HistoryConfig,
        color: bool,
    ) -> Result<Self> {
        let engine = editor_config.build_engine()?;

        let mut keybindings = default_emacs_keybindings();
        keybindings.add_binding(
            KeyModifiers::NONE,
            KeyCode::Tab,
            ReedlineEvent::UntilFound(vec![
                ReedlineEvent::Menu(COMPLETION_MENU.to_string()),
                ReedlineEvent::MenuNext,
            ]),
        );

        let menu = ColumnarMenu::default().with_name(COMPLETION_MENU);
        let highlighter = TokenHighlighter::new(
            engine.vocabulary().to_vec(),
            engine.separator(),
            engine.case_sensitivity(),
            editor_config.highlight_unknown && color,
        );

        let editor = Reedline::create()
            .with_history(Self::create_history(history_config)?)
            .with_completer(Box::new(TokenCompleter::new(engine.clone())))
            .with_hinter(Box::new(TokenHinter::new(engine.clone())))
            .with_highlighter(Box::new(highlighter))
            .with_menu(ReedlineMenu::EngineCompleter(Box::new(menu)))
            .with_edit_mode(Box::new(Emacs::new(keybindings)))
            .with_ansi_colors(color);

        tracing::debug!(
            vocabulary = engine.vocabulary().len(),
            separator = %engine.separator(),
            "line editor ready"
        );

        Ok(Self {
            editor,
            prompt: HeaderPrompt::new(&editor_config.header, &editor_config.placeholder),
            engine,
            running: true,
        })
    }

    fn create_history(config: &HistoryConfig) -> Result<Box<dyn History>> {
        if config.persist {
            if let Some(parent) = config.file_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let history = FileBackedHistory::with_file(config.max_size, config.file_path.clone())?;
            Ok(Box::new(history))
        } else {
            Ok(Box::new(FileBackedHistory::new(config.max_size)?))
        }
    }

    /// Read a single line of input
    ///
    /// # Returns
    /// * `Result<Option<String>>` - Input line, empty on Ctrl-C, None on Ctrl-D
    pub fn read_line(&mut self) -> Result<Option<String>> {
        match self.editor.read_line(&self.prompt)? {
            Signal::Success(line) => Ok(Some(line)),
            Signal::CtrlD => {
                self.running = false;
                Ok(None)
            }
            // Ctrl-C discards the line
            _ => Ok(Some(String::new())),
        }
    }

    /// Split a submitted line into its tokens
    ///
    /// # Arguments
    /// * `input` - Submitted line
    ///
    /// # Returns
    /// * `Vec<String>` - Entered tokens in order
    pub fn process_input(&mut self, input: &str) -> Vec<String> {
        self.engine.set_text(input);
        self.engine.extract_token_list()
    }

    /// Check if REPL is still running
    pub fn is_running(&self) -> bool {
        self.running
    }
}
