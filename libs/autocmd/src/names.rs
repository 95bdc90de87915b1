//! Autocmd event names as string constants.
//!
//! Every value is spelled exactly as Neovim spells the event, so it can be
//! passed straight to `nvim_create_autocmd` or `:autocmd`. Legacy aliases are
//! defined in terms of the constant they alias and therefore always carry
//! the identical value.
//!
//! The descriptions are condensed from `:help autocmd-events`.

// =============================================================================
// Buffer Events
// =============================================================================

/// Just after creating a new buffer which is added to the buffer list, or
/// adding a buffer to the buffer list, or renaming a listed buffer.
///
/// Fires before `BufEnter`.
pub const BUF_ADD: &str = "BufAdd";

/// Just after adding a buffer to the buffer list.
///
/// Legacy alias of [`BUF_ADD`].
pub const BUF_CREATE: &str = BUF_ADD;

/// Before deleting a buffer from the buffer list.
///
/// `BufUnload` may be called first (if the buffer was loaded).
pub const BUF_DELETE: &str = "BufDelete";

/// After entering a buffer. Useful for setting options for a file type.
///
/// Also executed when starting to edit a buffer, after `BufReadPost`.
pub const BUF_ENTER: &str = "BufEnter";

/// After changing the name of the current buffer with `:file` or `:saveas`.
pub const BUF_FILE_POST: &str = "BufFilePost";

/// Before changing the name of the current buffer with `:file` or `:saveas`.
pub const BUF_FILE_PRE: &str = "BufFilePre";

/// Before a buffer becomes hidden: when there are no longer windows that
/// show the buffer, but the buffer is not unloaded or deleted.
pub const BUF_HIDDEN: &str = "BufHidden";

/// Before leaving to another buffer.
///
/// Also when leaving or closing the current window and the new current
/// window is not for the same buffer.
pub const BUF_LEAVE: &str = "BufLeave";

/// After the `'modified'` value of a buffer has been changed.
pub const BUF_MODIFIED_SET: &str = "BufModifiedSet";

/// Just after creating a new buffer. Also used just after a buffer has been
/// renamed. When the buffer is added to the buffer list `BufAdd` fires too.
pub const BUF_NEW: &str = "BufNew";

/// When starting to edit a file that doesn't exist. Can be used to read in a
/// skeleton file.
pub const BUF_NEW_FILE: &str = "BufNewFile";

/// When starting to edit a new buffer, after reading the file into the
/// buffer, before processing modelines.
///
/// Also triggered when writing an unnamed buffer such that the buffer gets a
/// name, after successfully recovering a file, and for the `filetypedetect`
/// group when executing `:filetype detect`. Not triggered for `:r file` or
/// when the file doesn't exist.
pub const BUF_READ_POST: &str = "BufReadPost";

/// Starting to edit a new buffer, after reading the file.
///
/// Legacy alias of [`BUF_READ_POST`].
pub const BUF_READ: &str = BUF_READ_POST;

/// Before starting to edit a new buffer. Should read the file into the
/// buffer. See `:help Cmd-event`.
pub const BUF_READ_CMD: &str = "BufReadCmd";

/// When starting to edit a new buffer, before reading the file into the
/// buffer. Not used if the file doesn't exist.
pub const BUF_READ_PRE: &str = "BufReadPre";

/// Before unloading a buffer, when the text in the buffer is going to be
/// freed. Fires after `BufWritePost` and before `BufDelete`.
pub const BUF_UNLOAD: &str = "BufUnload";

/// After a buffer is displayed in a window.
///
/// This may be when the buffer is loaded (after processing modelines) or
/// when a hidden buffer is displayed and is no longer hidden.
pub const BUF_WIN_ENTER: &str = "BufWinEnter";

/// Before a buffer is removed from a window. Not when it's still visible in
/// another window. Also triggered when exiting. Fires before `BufUnload` and
/// `BufHidden`.
pub const BUF_WIN_LEAVE: &str = "BufWinLeave";

/// Before completely deleting a buffer.
///
/// `BufUnload` and `BufDelete` may be called first (if the buffer was loaded
/// and was in the buffer list). Also used just before a buffer is renamed.
pub const BUF_WIPEOUT: &str = "BufWipeout";

/// Before writing the whole buffer to a file.
pub const BUF_WRITE_PRE: &str = "BufWritePre";

/// Before writing the whole buffer to a file.
///
/// Legacy alias of [`BUF_WRITE_PRE`].
pub const BUF_WRITE: &str = BUF_WRITE_PRE;

/// Before writing the whole buffer to a file. Should do the writing of the
/// file and reset `'modified'`. See `:help Cmd-event`.
pub const BUF_WRITE_CMD: &str = "BufWriteCmd";

/// After writing the whole buffer to a file (should undo the commands for
/// `BufWritePre`).
pub const BUF_WRITE_POST: &str = "BufWritePost";

/// State of a channel changed, for instance the client of an RPC channel
/// described itself. Sets `v:event.info`, see `nvim_get_chan_info()`.
pub const CHAN_INFO: &str = "ChanInfo";

/// Just after a channel was opened. Sets `v:event.info`, see
/// `nvim_get_chan_info()`.
pub const CHAN_OPEN: &str = "ChanOpen";

/// When a user command is used but it isn't defined. The pattern is matched
/// against the command name; `<amatch>` and `<afile>` expand to it.
pub const CMD_UNDEFINED: &str = "CmdUndefined";

/// After a change was made to the text inside the command line.
/// `<afile>` expands to the `cmdline-char`.
pub const CMDLINE_CHANGED: &str = "CmdlineChanged";

/// Detected an existing swap file when starting to edit a file.
///
/// `v:swapchoice` may be set to answer the attention prompt.
pub const SWAP_EXISTS: &str = "SwapExists";

// =============================================================================
// Read Events
// =============================================================================

/// Before reading a file with a `:read` command.
pub const FILE_READ_PRE: &str = "FileReadPre";

/// After reading a file with a `:read` command.
pub const FILE_READ_POST: &str = "FileReadPost";

/// Before reading a file with a `:read` command. See `:help Cmd-event`.
pub const FILE_READ_CMD: &str = "FileReadCmd";

/// Before reading a file from a filter command.
pub const FILTER_READ_PRE: &str = "FilterReadPre";

/// After reading a file from a filter command.
pub const FILTER_READ_POST: &str = "FilterReadPost";

/// Before reading from stdin into the buffer.
pub const STDIN_READ_PRE: &str = "StdinReadPre";

/// After reading from stdin into the buffer, before executing modelines.
pub const STDIN_READ_POST: &str = "StdinReadPost";

// =============================================================================
// Write Events
// =============================================================================

/// Starting to write part of a buffer to a file.
pub const FILE_WRITE_PRE: &str = "FileWritePre";

/// After writing part of a buffer to a file.
pub const FILE_WRITE_POST: &str = "FileWritePost";

/// Before writing part of a buffer to a file. See `:help Cmd-event`.
pub const FILE_WRITE_CMD: &str = "FileWriteCmd";

/// Starting to append to a file.
pub const FILE_APPEND_PRE: &str = "FileAppendPre";

/// After appending to a file.
pub const FILE_APPEND_POST: &str = "FileAppendPost";

/// Before appending to a file. See `:help Cmd-event`.
pub const FILE_APPEND_CMD: &str = "FileAppendCmd";

/// Starting to write a file for a filter command or diff.
pub const FILTER_WRITE_PRE: &str = "FilterWritePre";

/// After writing a file for a filter command or diff.
pub const FILTER_WRITE_POST: &str = "FilterWritePost";

// =============================================================================
// Option Events
// =============================================================================

/// When the `'filetype'` option has been set. The pattern is matched
/// against the filetype.
pub const FILE_TYPE: &str = "FileType";

/// When the `'syntax'` option has been set.
pub const SYNTAX: &str = "Syntax";

/// After setting any option. `<amatch>` expands to the option name and
/// `v:option_old`/`v:option_new` hold the values.
pub const OPTION_SET: &str = "OptionSet";

/// After the `'encoding'` option has been changed. Recognized for Vim
/// compatibility; Neovim never fires it.
pub const ENCODING_CHANGED: &str = "EncodingChanged";

/// After the `'encoding'` option has been changed.
///
/// Legacy alias of [`ENCODING_CHANGED`].
pub const FILE_ENCODING: &str = ENCODING_CHANGED;

/// After the value of `'term'` has changed. Recognized for Vim
/// compatibility; Neovim never fires it.
pub const TERM_CHANGED: &str = "TermChanged";

// =============================================================================
// Startup and Exit Events
// =============================================================================

/// After doing all the startup stuff, including loading vimrc files,
/// executing `-c` arguments, creating windows and loading buffers.
pub const VIM_ENTER: &str = "VimEnter";

/// After starting the GUI successfully. Recognized for Vim compatibility;
/// Neovim UIs use `UIEnter` instead.
pub const GUI_ENTER: &str = "GUIEnter";

/// After starting the GUI failed. Recognized for Vim compatibility.
pub const GUI_FAILED: &str = "GUIFailed";

/// After the terminal response to a query is received. `v:termresponse`
/// holds the response.
pub const TERM_RESPONSE: &str = "TermResponse";

/// When using `:quit`, `:wq` or `:qall`, before deciding whether it closes
/// the current window or quits Vim.
pub const QUIT_PRE: &str = "QuitPre";

/// When using a command that may make Vim exit. Before `VimLeavePre`.
pub const EXIT_PRE: &str = "ExitPre";

/// Before exiting Nvim, just before writing the shada file.
pub const VIM_LEAVE_PRE: &str = "VimLeavePre";

/// Before exiting Nvim, just after writing the shada file.
pub const VIM_LEAVE: &str = "VimLeave";

/// After Nvim is resumed.
pub const VIM_RESUME: &str = "VimResume";

/// Before Nvim is suspended.
pub const VIM_SUSPEND: &str = "VimSuspend";

// =============================================================================
// Various Events
// =============================================================================

/// After diffs have been updated.
pub const DIFF_UPDATED: &str = "DiffUpdated";

/// When Vim notices that the modification time of a file has changed since
/// editing started.
pub const FILE_CHANGED_SHELL: &str = "FileChangedShell";

/// After handling a file that was changed outside of Vim.
pub const FILE_CHANGED_SHELL_POST: &str = "FileChangedShellPost";

/// Before making the first change to a read-only file.
pub const FILE_CHANGED_RO: &str = "FileChangedRO";

/// After executing a shell command with `:!cmd`, `:make` and `:grep`.
pub const SHELL_CMD_POST: &str = "ShellCmdPost";

/// After executing a shell command with `:{range}!cmd`, `:w !cmd` or
/// `:r !cmd`.
pub const SHELL_FILTER_POST: &str = "ShellFilterPost";

/// When a user function is used but it isn't defined. Useful for defining
/// a function only when it's used.
pub const FUNC_UNDEFINED: &str = "FuncUndefined";

/// When trying to load a spell checking file and it can't be found.
pub const SPELL_FILE_MISSING: &str = "SpellFileMissing";

/// Before sourcing a Vim/Lua file.
pub const SOURCE_PRE: &str = "SourcePre";

/// After sourcing a Vim/Lua file.
pub const SOURCE_POST: &str = "SourcePost";

/// When sourcing a Vim/Lua file. See `:help Cmd-event`.
pub const SOURCE_CMD: &str = "SourceCmd";

/// After the Vim window was resized, thus `'lines'` and/or `'columns'`
/// changed.
pub const VIM_RESIZED: &str = "VimResized";

/// When Nvim got input focus.
pub const FOCUS_GAINED: &str = "FocusGained";

/// When Nvim lost input focus.
pub const FOCUS_LOST: &str = "FocusLost";

/// When the user doesn't press a key for the time specified with
/// `'updatetime'`. Not triggered in Insert mode.
pub const CURSOR_HOLD: &str = "CursorHold";

/// Like `CursorHold`, but in Insert mode.
pub const CURSOR_HOLD_I: &str = "CursorHoldI";

/// After the cursor was moved in Normal or Visual mode.
pub const CURSOR_MOVED: &str = "CursorMoved";

/// After the cursor was moved in Insert mode.
pub const CURSOR_MOVED_I: &str = "CursorMovedI";

/// After the cursor was moved in the command-line. Sets `v:event` with the
/// command-line type.
pub const CURSOR_MOVED_C: &str = "CursorMovedC";

/// When a new window was created. Not done for the first window.
/// Fires before `WinEnter`.
pub const WIN_NEW: &str = "WinNew";

/// After entering another window.
pub const WIN_ENTER: &str = "WinEnter";

/// Before leaving a window.
pub const WIN_LEAVE: &str = "WinLeave";

/// When closing a window, just before it is removed from the window
/// layout. `<afile>` expands to the window-ID. Fires after `WinLeave`.
pub const WIN_CLOSED: &str = "WinClosed";

/// After any window in the current tab page scrolled the text or changed
/// width or height.
pub const WIN_SCROLLED: &str = "WinScrolled";

/// After a window in the current tab page changed width or height.
pub const WIN_RESIZED: &str = "WinResized";

/// When creating a new tab page.
pub const TAB_NEW: &str = "TabNew";

/// After entering a new tab page.
pub const TAB_NEW_ENTERED: &str = "TabNewEntered";

/// Just after entering a tab page.
pub const TAB_ENTER: &str = "TabEnter";

/// Just before leaving a tab page.
pub const TAB_LEAVE: &str = "TabLeave";

/// After closing a tab page. `<afile>` expands to the tab page number.
pub const TAB_CLOSED: &str = "TabClosed";

/// After entering the command-line. `<afile>` expands to the
/// `cmdline-char`.
pub const CMDLINE_ENTER: &str = "CmdlineEnter";

/// Before leaving the command-line. `v:event.abort` can only be changed
/// from false to true.
pub const CMDLINE_LEAVE: &str = "CmdlineLeave";

/// After entering the command-line window. `<afile>` expands to the
/// command-line type character.
pub const CMDWIN_ENTER: &str = "CmdwinEnter";

/// Before leaving the command-line window.
pub const CMDWIN_LEAVE: &str = "CmdwinLeave";

/// Just before starting Insert mode. Also for Replace mode and Virtual
/// Replace mode. `v:insertmode` indicates the mode.
pub const INSERT_ENTER: &str = "InsertEnter";

/// When typing `<Insert>` while in Insert or Replace mode.
pub const INSERT_CHANGE: &str = "InsertChange";

/// Just before leaving Insert mode. Also when using `CTRL-O`.
pub const INSERT_LEAVE_PRE: &str = "InsertLeavePre";

/// Just after leaving Insert mode. Also when using `CTRL-O`.
pub const INSERT_LEAVE: &str = "InsertLeave";

/// When a character is typed in Insert mode, before inserting the char.
/// `v:char` holds the character and may be changed.
pub const INSERT_CHAR_PRE: &str = "InsertCharPre";

/// Just before a key is processed, after mappings have been applied. The
/// pattern is matched against the current mode as `mode(1)` reports it.
/// `v:char` holds the key and may be changed.
pub const KEY_INPUT_PRE: &str = "KeyInputPre";

/// After changing the mode. The pattern is matched against
/// `'old_mode:new_mode'`.
pub const MODE_CHANGED: &str = "ModeChanged";

/// Just after a yank or deleting command, but not if the black hole
/// register is used. Sets `v:event` with the operator and register.
pub const TEXT_YANK_POST: &str = "TextYankPost";

/// After a change was made to the text in the current buffer in Normal
/// mode.
pub const TEXT_CHANGED: &str = "TextChanged";

/// After a change was made to the text in the current buffer in Insert
/// mode, when the popup menu is not visible.
pub const TEXT_CHANGED_I: &str = "TextChangedI";

/// After a change was made to the text in the current buffer in Insert
/// mode, when the popup menu is visible.
pub const TEXT_CHANGED_P: &str = "TextChangedP";

/// After a change was made to the text in the current buffer in Terminal
/// mode.
pub const TEXT_CHANGED_T: &str = "TextChangedT";

/// Before loading a color scheme. Useful to setup removing things added by
/// a color scheme before another one is loaded.
pub const COLOR_SCHEME_PRE: &str = "ColorSchemePre";

/// After loading a color scheme. The pattern is matched against the
/// colorscheme name.
pub const COLOR_SCHEME: &str = "ColorScheme";

/// When a reply from a Vim that functions as server was received. Neovim
/// never fires it.
pub const REMOTE_REPLY: &str = "RemoteReply";

/// Before a quickfix command is run (`:make`, `:grep`, `:vimgrep`, ...).
pub const QUICK_FIX_CMD_PRE: &str = "QuickFixCmdPre";

/// Like `QuickFixCmdPre`, but after a quickfix command is run.
pub const QUICK_FIX_CMD_POST: &str = "QuickFixCmdPost";

/// After loading the session file created using `:mksession`.
pub const SESSION_LOAD_POST: &str = "SessionLoadPost";

/// After writing a session file by calling `:mksession`.
pub const SESSION_WRITE_POST: &str = "SessionWritePost";

/// Just before showing the popup menu (under the right mouse button).
pub const MENU_POPUP: &str = "MenuPopup";

/// After each time the Insert mode completion menu changed. Not fired on
/// popup menu hide.
pub const COMPLETE_CHANGED: &str = "CompleteChanged";

/// After Insert mode completion is done, before clearing completion info.
pub const COMPLETE_DONE_PRE: &str = "CompleteDonePre";

/// After Insert mode completion is done, either when something was
/// completed or abandoning completion.
pub const COMPLETE_DONE: &str = "CompleteDone";

/// When the current directory is going to be changed.
pub const DIR_CHANGED_PRE: &str = "DirChangedPre";

/// After the current directory was changed. The pattern can be `window`,
/// `tabpage`, `global` or `auto`.
pub const DIR_CHANGED: &str = "DirChanged";

/// When a macro starts recording.
pub const RECORDING_ENTER: &str = "RecordingEnter";

/// When a macro stops recording. `v:event.regname` holds the register.
pub const RECORDING_LEAVE: &str = "RecordingLeave";

/// When nothing is pending, going to wait for the user to type a
/// character.
pub const SAFE_STATE: &str = "SafeState";

/// After making a search with `n` or `N` if the search wraps around the
/// document back to the start/finish respectively.
pub const SEARCH_WRAPPED: &str = "SearchWrapped";

/// After Nvim receives a signal. The pattern is matched against the signal
/// name. Only `SIGUSR1` and `SIGWINCH` are supported.
pub const SIGNAL: &str = "Signal";

/// Not executed automatically. Use `:doautocmd` to trigger this, typically
/// for "custom events" in a plugin.
pub const USER: &str = "User";

/// When the user presses the same key 42 times. Neovim never fires it.
pub const USER_GETTING_BORED: &str = "UserGettingBored";

/// After diagnostics have changed.
pub const DIAGNOSTIC_CHANGED: &str = "DiagnosticChanged";

/// After an LSP client attaches to a buffer.
pub const LSP_ATTACH: &str = "LspAttach";

/// Just before an LSP client detaches from a buffer.
pub const LSP_DETACH: &str = "LspDetach";

/// After an LSP notification is sent to the server.
pub const LSP_NOTIFY: &str = "LspNotify";

/// Upon receipt of a progress notification from the server.
pub const LSP_PROGRESS: &str = "LspProgress";

/// After an LSP request is started, canceled, or completed.
pub const LSP_REQUEST: &str = "LspRequest";

/// When a visible semantic token is sent or updated by an LSP server.
pub const LSP_TOKEN_UPDATE: &str = "LspTokenUpdate";

// =============================================================================
// Terminal Events
// =============================================================================

/// When a terminal job is starting. Can be used to configure the terminal
/// buffer.
pub const TERM_OPEN: &str = "TermOpen";

/// After entering Terminal mode. After `TermOpen`.
pub const TERM_ENTER: &str = "TermEnter";

/// After leaving Terminal mode. After `TermClose`.
pub const TERM_LEAVE: &str = "TermLeave";

/// When a terminal job ends. Sets `v:event.status`.
pub const TERM_CLOSE: &str = "TermClose";

/// When a terminal job emits an OSC or DCS sequence. Sets
/// `v:termrequest`.
pub const TERM_REQUEST: &str = "TermRequest";

// =============================================================================
// UI Events
// =============================================================================

/// After a UI connects via `nvim_ui_attach()`, or after the builtin TUI is
/// started, after `VimEnter`. Can be used for GUI-specific configuration.
pub const UI_ENTER: &str = "UIEnter";

/// After a UI disconnects from Nvim, or after the builtin TUI is stopped,
/// after `VimLeave`.
pub const UI_LEAVE: &str = "UILeave";

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_match_their_spelling() {
        assert_eq!(BUF_ENTER, "BufEnter");
        assert_eq!(WIN_LEAVE, "WinLeave");
        assert_eq!(TAB_ENTER, "TabEnter");
        assert_eq!(TAB_LEAVE, "TabLeave");
        assert_eq!(SHELL_FILTER_POST, "ShellFilterPost");
        assert_eq!(UI_ENTER, "UIEnter");
    }

    #[test]
    fn test_alias_values_are_identical() {
        assert_eq!(BUF_CREATE, BUF_ADD);
        assert_eq!(BUF_READ, BUF_READ_POST);
        assert_eq!(BUF_WRITE, BUF_WRITE_PRE);
        assert_eq!(FILE_ENCODING, ENCODING_CHANGED);
        // Same bytes, not just equal after normalization.
        assert_eq!(BUF_CREATE.as_bytes(), b"BufAdd");
        assert_eq!(BUF_WRITE.as_bytes(), b"BufWritePre");
    }

    #[test]
    fn test_alias_values_are_single_tokens() {
        for name in [BUF_CREATE, BUF_READ, BUF_WRITE, FILE_ENCODING] {
            assert!(!name.is_empty());
            assert!(name.chars().all(|c| c.is_ascii_alphanumeric()), "{name:?}");
        }
    }
}
