//! Typed view over the event name table.
//!
//! [`Event`] has one variant per canonical event and converts to and from the
//! editor spelling. [`EventGroup`] mirrors the topical blocks of
//! [`crate::names`].

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::alias::ALIASES;
use crate::error::EventError;
use crate::macros::define_events;

/// Shortest name considered when suggesting a correction for an unknown
/// event. Keeps fragments like `Buf` from matching half the table.
const MIN_SUGGESTION_LEN: usize = 6;

// =============================================================================
// Event Groups
// =============================================================================

/// Topical grouping of autocmd events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventGroup {
    /// Buffer lifecycle, including channel and command-line bookkeeping.
    Buffer,
    /// Reading files, filters and stdin.
    Read,
    /// Writing and appending files and filters.
    Write,
    /// Option changes.
    Options,
    /// Startup, suspend and exit.
    Lifecycle,
    /// Everything else: windows, tabs, modes, text changes, LSP.
    Various,
    /// Terminal buffers and jobs.
    Terminal,
    /// UI attach and detach.
    Ui,
}

impl EventGroup {
    /// Every group, in table order.
    pub const ALL: &'static [EventGroup] = &[
        EventGroup::Buffer,
        EventGroup::Read,
        EventGroup::Write,
        EventGroup::Options,
        EventGroup::Lifecycle,
        EventGroup::Various,
        EventGroup::Terminal,
        EventGroup::Ui,
    ];

    /// Returns the snake_case name of the group.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EventGroup::Buffer => "buffer",
            EventGroup::Read => "read",
            EventGroup::Write => "write",
            EventGroup::Options => "options",
            EventGroup::Lifecycle => "lifecycle",
            EventGroup::Various => "various",
            EventGroup::Terminal => "terminal",
            EventGroup::Ui => "ui",
        }
    }

    /// Returns the events in this group, in table order.
    pub fn events(self) -> impl Iterator<Item = Event> {
        Event::ALL
            .iter()
            .copied()
            .filter(move |event| event.group() == self)
    }
}

impl std::fmt::Display for EventGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventGroup {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventGroup::ALL
            .iter()
            .copied()
            .find(|group| group.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| EventError::UnknownGroup(s.to_string()))
    }
}

// =============================================================================
// Event Table
// =============================================================================

define_events! {
    Buffer {
        /// Just after creating a buffer that is added to the buffer list.
        BufAdd => BUF_ADD,
        /// Before deleting a buffer from the buffer list.
        BufDelete => BUF_DELETE,
        /// After entering a buffer.
        BufEnter => BUF_ENTER,
        /// After changing the name of the current buffer.
        BufFilePost => BUF_FILE_POST,
        /// Before changing the name of the current buffer.
        BufFilePre => BUF_FILE_PRE,
        /// Before a buffer becomes hidden.
        BufHidden => BUF_HIDDEN,
        /// Before leaving to another buffer.
        BufLeave => BUF_LEAVE,
        /// After the 'modified' value of a buffer has been changed.
        BufModifiedSet => BUF_MODIFIED_SET,
        /// Just after creating a new buffer or renaming one.
        BufNew => BUF_NEW,
        /// When starting to edit a file that doesn't exist.
        BufNewFile => BUF_NEW_FILE,
        /// After reading a file into a new buffer, before modelines.
        BufReadPost => BUF_READ_POST,
        /// Before starting to edit a new buffer; should read the file.
        BufReadCmd => BUF_READ_CMD,
        /// Before reading a file into a new buffer.
        BufReadPre => BUF_READ_PRE,
        /// Before unloading a buffer.
        BufUnload => BUF_UNLOAD,
        /// After a buffer is displayed in a window.
        BufWinEnter => BUF_WIN_ENTER,
        /// Before a buffer is removed from a window.
        BufWinLeave => BUF_WIN_LEAVE,
        /// Before completely deleting a buffer.
        BufWipeout => BUF_WIPEOUT,
        /// Before writing the whole buffer to a file.
        BufWritePre => BUF_WRITE_PRE,
        /// Before writing the whole buffer; should write the file.
        BufWriteCmd => BUF_WRITE_CMD,
        /// After writing the whole buffer to a file.
        BufWritePost => BUF_WRITE_POST,
        /// State of a channel changed.
        ChanInfo => CHAN_INFO,
        /// Just after a channel was opened.
        ChanOpen => CHAN_OPEN,
        /// When an undefined user command is used.
        CmdUndefined => CMD_UNDEFINED,
        /// After the text in the command line changed.
        CmdlineChanged => CMDLINE_CHANGED,
        /// Detected an existing swap file.
        SwapExists => SWAP_EXISTS,
    }
    Read {
        /// Before reading a file with :read.
        FileReadPre => FILE_READ_PRE,
        /// After reading a file with :read.
        FileReadPost => FILE_READ_POST,
        /// Before reading a file with :read; should read the file.
        FileReadCmd => FILE_READ_CMD,
        /// Before reading a file from a filter command.
        FilterReadPre => FILTER_READ_PRE,
        /// After reading a file from a filter command.
        FilterReadPost => FILTER_READ_POST,
        /// Before reading from stdin into the buffer.
        StdinReadPre => STDIN_READ_PRE,
        /// After reading from stdin into the buffer.
        StdinReadPost => STDIN_READ_POST,
    }
    Write {
        /// Starting to write part of a buffer to a file.
        FileWritePre => FILE_WRITE_PRE,
        /// After writing part of a buffer to a file.
        FileWritePost => FILE_WRITE_POST,
        /// Before writing part of a buffer; should write the file.
        FileWriteCmd => FILE_WRITE_CMD,
        /// Starting to append to a file.
        FileAppendPre => FILE_APPEND_PRE,
        /// After appending to a file.
        FileAppendPost => FILE_APPEND_POST,
        /// Before appending to a file; should append the file.
        FileAppendCmd => FILE_APPEND_CMD,
        /// Starting to write a file for a filter command or diff.
        FilterWritePre => FILTER_WRITE_PRE,
        /// After writing a file for a filter command or diff.
        FilterWritePost => FILTER_WRITE_POST,
    }
    Options {
        /// When the 'filetype' option has been set.
        FileType => FILE_TYPE,
        /// When the 'syntax' option has been set.
        Syntax => SYNTAX,
        /// After setting any option.
        OptionSet => OPTION_SET,
        /// After the 'encoding' option changed (never fired by Neovim).
        EncodingChanged => ENCODING_CHANGED,
        /// After the value of 'term' changed (never fired by Neovim).
        TermChanged => TERM_CHANGED,
    }
    Lifecycle {
        /// After doing all the startup stuff.
        VimEnter => VIM_ENTER,
        /// After starting the GUI successfully (Vim GUI only).
        GUIEnter => GUI_ENTER,
        /// After starting the GUI failed (Vim GUI only).
        GUIFailed => GUI_FAILED,
        /// After the terminal response to a query is received.
        TermResponse => TERM_RESPONSE,
        /// When using :quit, before deciding whether to exit.
        QuitPre => QUIT_PRE,
        /// When using a command that may make Vim exit.
        ExitPre => EXIT_PRE,
        /// Before exiting Nvim, before writing the shada file.
        VimLeavePre => VIM_LEAVE_PRE,
        /// Before exiting Nvim, after writing the shada file.
        VimLeave => VIM_LEAVE,
        /// After Nvim is resumed.
        VimResume => VIM_RESUME,
        /// Before Nvim is suspended.
        VimSuspend => VIM_SUSPEND,
    }
    Various {
        /// After diffs have been updated.
        DiffUpdated => DIFF_UPDATED,
        /// Vim notices that a file changed since editing started.
        FileChangedShell => FILE_CHANGED_SHELL,
        /// After handling a file changed since editing started.
        FileChangedShellPost => FILE_CHANGED_SHELL_POST,
        /// Before making the first change to a read-only file.
        FileChangedRO => FILE_CHANGED_RO,
        /// After executing a shell command.
        ShellCmdPost => SHELL_CMD_POST,
        /// After filtering with a shell command.
        ShellFilterPost => SHELL_FILTER_POST,
        /// A user function is used but it isn't defined.
        FuncUndefined => FUNC_UNDEFINED,
        /// A spell file is used but it can't be found.
        SpellFileMissing => SPELL_FILE_MISSING,
        /// Before sourcing a Vim/Lua file.
        SourcePre => SOURCE_PRE,
        /// After sourcing a Vim/Lua file.
        SourcePost => SOURCE_POST,
        /// Before sourcing a Vim/Lua file; should source the file.
        SourceCmd => SOURCE_CMD,
        /// After the Vim window size changed.
        VimResized => VIM_RESIZED,
        /// Nvim got focus.
        FocusGained => FOCUS_GAINED,
        /// Nvim lost focus.
        FocusLost => FOCUS_LOST,
        /// The user doesn't press a key for a while.
        CursorHold => CURSOR_HOLD,
        /// The user doesn't press a key for a while in Insert mode.
        CursorHoldI => CURSOR_HOLD_I,
        /// The cursor was moved in Normal or Visual mode.
        CursorMoved => CURSOR_MOVED,
        /// The cursor was moved in Insert mode.
        CursorMovedI => CURSOR_MOVED_I,
        /// The cursor was moved in the command-line.
        CursorMovedC => CURSOR_MOVED_C,
        /// After creating a new window.
        WinNew => WIN_NEW,
        /// After entering another window.
        WinEnter => WIN_ENTER,
        /// Before leaving a window.
        WinLeave => WIN_LEAVE,
        /// After closing a window.
        WinClosed => WIN_CLOSED,
        /// After a window scrolled or changed size.
        WinScrolled => WIN_SCROLLED,
        /// After a window changed size.
        WinResized => WIN_RESIZED,
        /// When creating a new tab page.
        TabNew => TAB_NEW,
        /// After entering a new tab page.
        TabNewEntered => TAB_NEW_ENTERED,
        /// After entering another tab page.
        TabEnter => TAB_ENTER,
        /// Before leaving a tab page.
        TabLeave => TAB_LEAVE,
        /// After closing a tab page.
        TabClosed => TAB_CLOSED,
        /// After entering cmdline mode.
        CmdlineEnter => CMDLINE_ENTER,
        /// Before leaving cmdline mode.
        CmdlineLeave => CMDLINE_LEAVE,
        /// After entering the command-line window.
        CmdwinEnter => CMDWIN_ENTER,
        /// Before leaving the command-line window.
        CmdwinLeave => CMDWIN_LEAVE,
        /// Starting Insert mode.
        InsertEnter => INSERT_ENTER,
        /// When typing <Insert> while in Insert or Replace mode.
        InsertChange => INSERT_CHANGE,
        /// Just before leaving Insert mode.
        InsertLeavePre => INSERT_LEAVE_PRE,
        /// When leaving Insert mode.
        InsertLeave => INSERT_LEAVE,
        /// When a character was typed in Insert mode, before inserting it.
        InsertCharPre => INSERT_CHAR_PRE,
        /// Just before a key is processed, after mappings.
        KeyInputPre => KEY_INPUT_PRE,
        /// After changing the mode.
        ModeChanged => MODE_CHANGED,
        /// When some text is yanked or deleted.
        TextYankPost => TEXT_YANK_POST,
        /// After a change was made to the text in Normal mode.
        TextChanged => TEXT_CHANGED,
        /// After a change was made to the text in Insert mode, no popup menu.
        TextChangedI => TEXT_CHANGED_I,
        /// After a change was made to the text in Insert mode, popup menu visible.
        TextChangedP => TEXT_CHANGED_P,
        /// After a change was made to the text in Terminal mode.
        TextChangedT => TEXT_CHANGED_T,
        /// Before loading a color scheme.
        ColorSchemePre => COLOR_SCHEME_PRE,
        /// After loading a color scheme.
        ColorScheme => COLOR_SCHEME,
        /// A reply from a Vim server was received (never fired by Neovim).
        RemoteReply => REMOTE_REPLY,
        /// Before a quickfix command is run.
        QuickFixCmdPre => QUICK_FIX_CMD_PRE,
        /// After a quickfix command is run.
        QuickFixCmdPost => QUICK_FIX_CMD_POST,
        /// After loading a session file.
        SessionLoadPost => SESSION_LOAD_POST,
        /// After writing a session file.
        SessionWritePost => SESSION_WRITE_POST,
        /// Just before showing the popup menu.
        MenuPopup => MENU_POPUP,
        /// After the popup menu changed.
        CompleteChanged => COMPLETE_CHANGED,
        /// After Insert mode completion is done, before clearing info.
        CompleteDonePre => COMPLETE_DONE_PRE,
        /// After Insert mode completion is done.
        CompleteDone => COMPLETE_DONE,
        /// Before the current directory is changed.
        DirChangedPre => DIR_CHANGED_PRE,
        /// After the current directory was changed.
        DirChanged => DIR_CHANGED,
        /// When a macro starts recording.
        RecordingEnter => RECORDING_ENTER,
        /// When a macro stops recording.
        RecordingLeave => RECORDING_LEAVE,
        /// Nothing is pending, waiting for the user to type a character.
        SafeState => SAFE_STATE,
        /// After a search wrapped around the document.
        SearchWrapped => SEARCH_WRAPPED,
        /// After Nvim receives a signal.
        Signal => SIGNAL,
        /// Custom event, only triggered with :doautocmd.
        User => USER,
        /// The user presses the same key 42 times (never fired by Neovim).
        UserGettingBored => USER_GETTING_BORED,
        /// After diagnostics have changed.
        DiagnosticChanged => DIAGNOSTIC_CHANGED,
        /// After an LSP client attaches to a buffer.
        LspAttach => LSP_ATTACH,
        /// Just before an LSP client detaches from a buffer.
        LspDetach => LSP_DETACH,
        /// After an LSP notification is sent to the server.
        LspNotify => LSP_NOTIFY,
        /// Upon receipt of an LSP progress notification.
        LspProgress => LSP_PROGRESS,
        /// After an LSP request is started, canceled, or completed.
        LspRequest => LSP_REQUEST,
        /// When a visible semantic token is updated by an LSP server.
        LspTokenUpdate => LSP_TOKEN_UPDATE,
    }
    Terminal {
        /// When a terminal job starts.
        TermOpen => TERM_OPEN,
        /// After entering Terminal mode.
        TermEnter => TERM_ENTER,
        /// After leaving Terminal mode.
        TermLeave => TERM_LEAVE,
        /// When a terminal job ends.
        TermClose => TERM_CLOSE,
        /// When a terminal job emits an OSC or DCS sequence.
        TermRequest => TERM_REQUEST,
    }
    Ui {
        /// After a UI connects via nvim_ui_attach().
        UIEnter => UI_ENTER,
        /// After a UI disconnects from Nvim.
        UILeave => UI_LEAVE,
    }
}

// =============================================================================
// Lookup
// =============================================================================

/// Lowercased name (canonical and alias spellings) to event.
fn index() -> &'static HashMap<String, Event> {
    static INDEX: OnceLock<HashMap<String, Event>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut map = HashMap::with_capacity(Event::ALL.len() + ALIASES.len());
        for &event in Event::ALL {
            map.insert(event.as_str().to_ascii_lowercase(), event);
        }
        for alias in ALIASES {
            map.insert(alias.name.to_ascii_lowercase(), alias.target);
        }
        map
    })
}

/// Finds the canonical name closest to an unknown one, where one is a prefix
/// of the other. Catches trailing junk (`WinLeavet`) and truncation
/// (`BufWri`).
fn suggest(name: &str) -> Option<&'static str> {
    let lower = name.to_ascii_lowercase();
    Event::ALL
        .iter()
        .map(|event| event.as_str())
        .filter(|candidate| {
            let candidate = candidate.to_ascii_lowercase();
            let (short, long) = if candidate.len() <= lower.len() {
                (candidate.as_str(), lower.as_str())
            } else {
                (lower.as_str(), candidate.as_str())
            };
            short.len() >= MIN_SUGGESTION_LEN && long.starts_with(short)
        })
        .min_by_key(|candidate| candidate.len().abs_diff(lower.len()))
}

impl Event {
    /// Parses an event name as Neovim would.
    ///
    /// Matching ignores ASCII case. Legacy aliases such as `BufRead` resolve
    /// to the event they stand for.
    pub fn parse(s: &str) -> Result<Self, EventError> {
        if s.is_empty() {
            return Err(EventError::Empty);
        }

        if s.chars().any(|c| c.is_whitespace() || c == ',') {
            return Err(EventError::InvalidName {
                name: s.to_string(),
            });
        }

        index()
            .get(&s.to_ascii_lowercase())
            .copied()
            .ok_or_else(|| EventError::UnknownEvent {
                name: s.to_string(),
                suggestion: suggest(s),
            })
    }

    /// Parses a comma-separated event list, as accepted by `:autocmd`.
    ///
    /// Order is preserved and repeated events are kept once.
    pub fn parse_list(s: &str) -> Result<Vec<Self>, EventError> {
        let mut events = Vec::new();
        for part in s.split(',') {
            let event = Self::parse(part)?;
            if !events.contains(&event) {
                events.push(event);
            }
        }
        Ok(events)
    }

    /// One-line summary of when the event fires.
    #[must_use]
    pub fn description(self) -> &'static str {
        self.raw_description().trim()
    }

    /// Returns true for events that Vim does not define.
    #[must_use]
    pub const fn is_neovim_only(self) -> bool {
        matches!(
            self,
            Event::BufModifiedSet
                | Event::ChanInfo
                | Event::ChanOpen
                | Event::DiagnosticChanged
                | Event::LspAttach
                | Event::LspDetach
                | Event::LspNotify
                | Event::LspProgress
                | Event::LspRequest
                | Event::LspTokenUpdate
                | Event::RecordingEnter
                | Event::RecordingLeave
                | Event::SearchWrapped
                | Event::Signal
                | Event::TabNewEntered
                | Event::TermOpen
                | Event::TermEnter
                | Event::TermLeave
                | Event::TermClose
                | Event::TermRequest
                | Event::UIEnter
                | Event::UILeave
        )
    }

    /// Legacy spellings that resolve to this event.
    pub fn aliases(self) -> impl Iterator<Item = &'static str> {
        ALIASES
            .iter()
            .filter(move |alias| alias.target == self)
            .map(|alias| alias.name)
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Event {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Event {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<Event> for &'static str {
    fn from(event: Event) -> Self {
        event.as_str()
    }
}

impl Serialize for Event {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Event {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_size_is_pinned() {
        // Adding or removing an event must be a deliberate edit here too.
        assert_eq!(Event::ALL.len(), 135);
        assert_eq!(ALIASES.len(), 4);
    }

    #[test]
    fn test_values_are_single_non_empty_tokens() {
        for event in Event::ALL {
            let name = event.as_str();
            assert!(!name.is_empty(), "{event:?} has an empty name");
            assert!(
                !name.chars().any(char::is_whitespace),
                "{event:?} contains whitespace"
            );
            assert!(
                name.chars().all(|c| c.is_ascii_alphanumeric()),
                "{event:?} is not a plain identifier"
            );
        }
    }

    #[test]
    fn test_no_duplicate_values() {
        let unique: HashSet<_> = Event::ALL.iter().map(|e| e.as_str()).collect();
        assert_eq!(unique.len(), Event::ALL.len(), "Duplicate event names found!");

        // Neovim compares case-insensitively, so lowercase must be unique too.
        let folded: HashSet<_> = Event::ALL
            .iter()
            .map(|e| e.as_str().to_ascii_lowercase())
            .collect();
        assert_eq!(folded.len(), Event::ALL.len());
    }

    #[test]
    fn test_buf_enter_lookup() {
        assert_eq!(Event::BufEnter.as_str(), names::BUF_ENTER);
        assert_eq!(Event::BufEnter.as_str(), "BufEnter");
        assert_eq!(Event::parse("BufEnter").unwrap(), Event::BufEnter);
    }

    #[test]
    fn test_aliases_parse_to_target() {
        assert_eq!(Event::parse("BufCreate").unwrap(), Event::BufAdd);
        assert_eq!(Event::parse("BufRead").unwrap(), Event::BufReadPost);
        assert_eq!(Event::parse("BufWrite").unwrap(), Event::BufWritePre);
        assert_eq!(Event::parse("FileEncoding").unwrap(), Event::EncodingChanged);
    }

    #[test]
    fn test_alias_constants_match_parsed_event() {
        assert_eq!(names::BUF_CREATE, Event::BufAdd.as_str());
        assert_eq!(names::BUF_READ, Event::BufReadPost.as_str());
        assert_eq!(names::BUF_WRITE, Event::BufWritePre.as_str());
        assert_eq!(names::FILE_ENCODING, Event::EncodingChanged.as_str());
    }

    #[test]
    fn test_parse_ignores_ascii_case() {
        assert_eq!(Event::parse("bufenter").unwrap(), Event::BufEnter);
        assert_eq!(Event::parse("BUFREAD").unwrap(), Event::BufReadPost);
        assert_eq!(Event::parse("CmdWinEnter").unwrap(), Event::CmdwinEnter);
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(Event::parse(""), Err(EventError::Empty));
    }

    #[test]
    fn test_parse_rejects_whitespace_and_commas() {
        assert!(matches!(
            Event::parse(" BufEnter"),
            Err(EventError::InvalidName { .. })
        ));
        assert!(matches!(
            Event::parse("BufEnter,BufLeave"),
            Err(EventError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_names_outside_the_table_do_not_exist() {
        for name in ["BufFoo", "WinLeavet", "TabEntert", "TabLeavet", "ShellFilterPostafter", "*"] {
            let err = Event::parse(name).unwrap_err();
            assert!(err.is_unknown(), "{name} should be unknown");
        }
    }

    #[test]
    fn test_suggestions_for_transcription_drift() {
        let cases = [
            ("WinLeavet", "WinLeave"),
            ("TabEntert", "TabEnter"),
            ("TabLeavet", "TabLeave"),
            ("ShellFilterPostafter", "ShellFilterPost"),
            ("bufwinente", "BufWinEnter"),
        ];
        for (input, expected) in cases {
            let err = Event::parse(input).unwrap_err();
            assert_eq!(err.suggestion(), Some(expected), "input {input}");
        }
    }

    #[test]
    fn test_no_suggestion_for_short_fragments() {
        let err = Event::parse("Buf").unwrap_err();
        assert_eq!(err.suggestion(), None);
        let err = Event::parse("Completely").unwrap_err();
        assert_eq!(err.suggestion(), None);
    }

    #[test]
    fn test_parse_list() {
        let events = Event::parse_list("BufRead,BufNewFile").unwrap();
        assert_eq!(events, vec![Event::BufReadPost, Event::BufNewFile]);
    }

    #[test]
    fn test_parse_list_drops_repeats() {
        let events = Event::parse_list("BufRead,BufReadPost,BufEnter").unwrap();
        assert_eq!(events, vec![Event::BufReadPost, Event::BufEnter]);
    }

    #[test]
    fn test_parse_list_rejects_empty_segments() {
        assert_eq!(Event::parse_list("BufRead,"), Err(EventError::Empty));
        assert_eq!(Event::parse_list(""), Err(EventError::Empty));
    }

    #[test]
    fn test_group_membership() {
        assert_eq!(Event::BufAdd.group(), EventGroup::Buffer);
        assert_eq!(Event::StdinReadPost.group(), EventGroup::Read);
        assert_eq!(Event::FilterWritePost.group(), EventGroup::Write);
        assert_eq!(Event::OptionSet.group(), EventGroup::Options);
        assert_eq!(Event::VimLeavePre.group(), EventGroup::Lifecycle);
        assert_eq!(Event::LspAttach.group(), EventGroup::Various);
        assert_eq!(Event::TermClose.group(), EventGroup::Terminal);
        assert_eq!(Event::UILeave.group(), EventGroup::Ui);
    }

    #[test]
    fn test_groups_partition_the_table() {
        let total: usize = EventGroup::ALL.iter().map(|g| g.events().count()).sum();
        assert_eq!(total, Event::ALL.len());
        assert_eq!(EventGroup::Ui.events().collect::<Vec<_>>(), vec![Event::UIEnter, Event::UILeave]);
        for group in EventGroup::ALL {
            assert!(group.events().next().is_some(), "{group} is empty");
        }
    }

    #[test]
    fn test_group_from_str() {
        assert_eq!("terminal".parse::<EventGroup>().unwrap(), EventGroup::Terminal);
        assert_eq!("UI".parse::<EventGroup>().unwrap(), EventGroup::Ui);
        assert!(matches!(
            "windows".parse::<EventGroup>(),
            Err(EventError::UnknownGroup(_))
        ));
    }

    #[test]
    fn test_descriptions_are_present() {
        for event in Event::ALL {
            let description = event.description();
            assert!(!description.is_empty(), "{event:?} has no description");
            assert_eq!(description, description.trim());
        }
        assert_eq!(Event::BufEnter.description(), "After entering a buffer.");
    }

    #[test]
    fn test_event_aliases() {
        assert_eq!(Event::BufAdd.aliases().collect::<Vec<_>>(), vec!["BufCreate"]);
        assert_eq!(Event::BufWritePre.aliases().collect::<Vec<_>>(), vec!["BufWrite"]);
        assert_eq!(Event::BufEnter.aliases().count(), 0);
    }

    #[test]
    fn test_neovim_only() {
        let mut neovim_only: Vec<&str> = Event::ALL
            .iter()
            .filter(|event| event.is_neovim_only())
            .map(|event| event.as_str())
            .collect();
        neovim_only.sort_unstable();

        let mut expected = vec![
            "BufModifiedSet",
            "ChanInfo",
            "ChanOpen",
            "DiagnosticChanged",
            "LspAttach",
            "LspDetach",
            "LspNotify",
            "LspProgress",
            "LspRequest",
            "LspTokenUpdate",
            "RecordingEnter",
            "RecordingLeave",
            "SearchWrapped",
            "Signal",
            "TabNewEntered",
            "TermClose",
            "TermEnter",
            "TermLeave",
            "TermOpen",
            "TermRequest",
            "UIEnter",
            "UILeave",
        ];
        expected.sort_unstable();

        assert_eq!(neovim_only, expected);
        assert!(!Event::BufEnter.is_neovim_only());
        assert!(!Event::KeyInputPre.is_neovim_only());
    }

    #[test]
    fn test_cmdline_and_key_events() {
        assert_eq!(Event::parse("CursorMovedC").unwrap(), Event::CursorMovedC);
        assert_eq!(Event::parse("keyinputpre").unwrap(), Event::KeyInputPre);
        assert_eq!(Event::CursorMovedC.as_str(), names::CURSOR_MOVED_C);
        assert_eq!(Event::KeyInputPre.group(), EventGroup::Various);
    }

    #[test]
    fn test_event_json_roundtrip() {
        let json = serde_json::to_string(&Event::TextYankPost).unwrap();
        assert_eq!(json, "\"TextYankPost\"");
        let parsed: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Event::TextYankPost);
    }

    #[test]
    fn test_event_deserialize_accepts_alias() {
        let parsed: Event = serde_json::from_str("\"BufRead\"").unwrap();
        assert_eq!(parsed, Event::BufReadPost);
        assert!(serde_json::from_str::<Event>("\"WinLeavet\"").is_err());
    }

    #[test]
    fn test_group_serialization() {
        assert_eq!(
            serde_json::to_string(&EventGroup::Lifecycle).unwrap(),
            "\"lifecycle\""
        );
    }

    #[test]
    fn test_table_is_stable() {
        let first: Vec<_> = Event::ALL.iter().map(|e| e.as_str()).collect();
        let second: Vec<_> = Event::ALL.iter().map(|e| e.as_str()).collect();
        assert_eq!(first, second);
        assert!(std::ptr::eq(index(), index()));
    }

    proptest! {
        #[test]
        fn prop_every_event_parses_in_any_case(idx in 0..Event::ALL.len(), upper in any::<bool>()) {
            let event = Event::ALL[idx];
            let name = if upper {
                event.as_str().to_ascii_uppercase()
            } else {
                event.as_str().to_ascii_lowercase()
            };
            prop_assert_eq!(Event::parse(&name).unwrap(), event);
        }

        #[test]
        fn prop_parse_never_panics(s in "\\PC*") {
            let _ = Event::parse(&s);
            let _ = Event::parse_list(&s);
        }

        #[test]
        fn prop_display_roundtrips(idx in 0..Event::ALL.len()) {
            let event = Event::ALL[idx];
            prop_assert_eq!(event.to_string().parse::<Event>().unwrap(), event);
        }
    }
}
