//! Command surface: turns palette actions into dispatcher calls.
//!
//! Three edges start a request:
//! - [`Selector::sync`], the reactive one, fires when mode, command, and
//!   session are all set and differ from the last trigger
//! - [`Selector::select_command`] when a palette entry is picked
//! - [`Selector::submit`] for the free-form input

use scribe_common::RequestId;
use scribe_config::schema::PaletteConfig;
use tracing::debug;

use crate::dispatcher::{DispatchState, Dispatcher};
use crate::document::Document;
use crate::mode::{palette_commands, Mode, PaletteCommand};

const FOLLOW_UP_PLACEHOLDER: &str = "Tell AI what to do next";
const PROMPT_PLACEHOLDER: &str = "Ask AI to edit or generate...";

pub struct Selector {
    dispatcher: Dispatcher,
    input: String,
    selected_option: Option<Mode>,
    selected_value: String,
    /// Mode and command of the last request this surface started.
    last_trigger: Option<(Mode, String)>,
    continue_context_chars: usize,
    open: bool,
}

impl Selector {
    pub fn new(dispatcher: Dispatcher, palette: &PaletteConfig) -> Self {
        Self {
            dispatcher,
            input: String::new(),
            selected_option: None,
            selected_value: String::new(),
            last_trigger: None,
            continue_context_chars: palette.continue_context_chars,
            open: false,
        }
    }

    /// Entries to list while no completion is displayed.
    pub fn commands(&self) -> Vec<PaletteCommand> {
        if self.dispatcher.state() == DispatchState::Completed {
            Vec::new()
        } else {
            palette_commands()
        }
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn selected_option(&self) -> Option<Mode> {
        self.selected_option
    }

    pub fn selected_value(&self) -> &str {
        &self.selected_value
    }

    /// Set the mode and command without dispatching; [`Selector::sync`]
    /// picks the change up.
    pub fn set_selection(&mut self, mode: Option<Mode>, value: impl Into<String>) {
        self.selected_option = mode;
        self.selected_value = value.into();
    }

    /// Dispatch if mode, command, and session are all present and the
    /// pair changed since the last request.
    pub fn sync(&mut self) -> Option<RequestId> {
        let mode = self.selected_option?;
        if self.selected_value.trim().is_empty() || self.dispatcher.session_id().is_empty() {
            return None;
        }
        if self.last_trigger.as_ref() == Some(&(mode, self.selected_value.clone())) {
            return None;
        }

        let command = self.selected_value.clone();
        Some(self.start(mode, command.clone(), command))
    }

    /// A palette entry was picked. `continue` sends the text before the
    /// cursor; every other mode sends the selection.
    pub fn select_command(&mut self, mode: Mode, doc: &dyn Document) -> Option<RequestId> {
        if self.dispatcher.is_loading() {
            debug!(option = %mode, "command ignored while a request is pending");
            return None;
        }

        let command = match mode {
            Mode::Continue => doc.preceding_text(self.continue_context_chars),
            _ => doc.selection_text(),
        };
        self.set_selection(Some(mode), command.clone());
        Some(self.start(mode, command.clone(), command))
    }

    /// Submit the free-form input.
    ///
    /// With a completion on display the input refines it; otherwise it is
    /// sent as a `zap` instruction over the current selection.
    pub fn submit(&mut self, doc: &dyn Document) -> Option<RequestId> {
        if self.dispatcher.is_loading() || self.input.trim().is_empty() {
            return None;
        }

        if self.dispatcher.state() == DispatchState::Completed {
            let instruction = std::mem::take(&mut self.input);
            return self.dispatcher.follow_up(instruction);
        }

        let instruction = self.input.clone();
        self.set_selection(Some(Mode::Zap), instruction.clone());
        Some(self.start(Mode::Zap, doc.selection_text(), instruction))
    }

    /// Mark the selection the palette works on.
    pub fn focus(&mut self, doc: &mut dyn Document) {
        doc.set_highlight(true);
        self.open = true;
    }

    /// Drop the displayed completion and close the palette.
    pub fn discard(&mut self, doc: &mut dyn Document) {
        self.dispatcher.discard(doc);
        self.input.clear();
        self.selected_option = None;
        self.selected_value.clear();
        self.last_trigger = None;
        self.open = false;
    }

    pub fn placeholder(&self) -> &'static str {
        if self.dispatcher.state() == DispatchState::Completed {
            FOLLOW_UP_PLACEHOLDER
        } else {
            PROMPT_PLACEHOLDER
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher {
        &mut self.dispatcher
    }

    fn start(&mut self, mode: Mode, command: String, prompt: String) -> RequestId {
        self.last_trigger = Some((mode, self.selected_value.clone()));
        self.open = true;
        self.dispatcher.dispatch(mode, command, prompt)
    }
}
