//! Searchable currency combobox, as a headless state machine.
//!
//! The widget is driven by events (focus, text input, key presses,
//! pointer actions) and rendered from its state; it owns no DOM and
//! performs no I/O. Three states cover the interaction:
//!
//! - **Closed**: dropdown hidden, the input displays the committed
//!   currency's code.
//! - **Browsing**: dropdown open with no live query; the whole list
//!   shows and arrow keys move the highlight.
//! - **Editing**: the user has typed a query; the dropdown shows
//!   currencies whose code or name contains it, case-insensitively.
//!
//! Committing (Enter, pointer selection, or reset) invokes the
//! caller-supplied change handler and closes the dropdown. Escape and
//! clicks outside discard the query without touching the committed
//! value. Pointer selection fires on mouse-down semantics so it wins
//! against the host's outside-click dismissal.

use calcsuite_core::types::Currency;
use std::fmt;

/// Where the combobox interaction currently stands.
///
/// The query string only exists in `Editing`, so "editing while
/// closed" is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectState {
    /// Dropdown hidden; displaying the committed selection.
    Closed,
    /// Dropdown open, no live query.
    Browsing,
    /// Dropdown open, filtering by a typed query.
    Editing {
        /// The search text as typed.
        query: String,
    },
}

/// Keys the combobox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Move the highlight down; opens the dropdown if closed.
    ArrowDown,
    /// Move the highlight up.
    ArrowUp,
    /// Commit the highlighted entry.
    Enter,
    /// Close and discard the query.
    Escape,
    /// Begin editing when a selection is displayed.
    Backspace,
    /// Same as Backspace.
    Delete,
}

type ChangeHandler = Box<dyn FnMut(Currency)>;

/// The currency-search combobox.
///
/// Generic over nothing and tied to no UI framework: a host renders
/// `filtered()` / `highlight()` / `display_value()` and feeds events
/// back in.
pub struct CurrencySelect {
    list: &'static [Currency],
    state: SelectState,
    highlight: usize,
    value: Option<Currency>,
    on_change: Option<ChangeHandler>,
}

impl CurrencySelect {
    /// Creates a closed combobox over a registry list with no
    /// committed value.
    #[must_use]
    pub fn new(list: &'static [Currency]) -> Self {
        Self {
            list,
            state: SelectState::Closed,
            highlight: 0,
            value: None,
            on_change: None,
        }
    }

    /// Sets the change handler invoked on every commit.
    #[must_use]
    pub fn on_change(mut self, handler: impl FnMut(Currency) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Sets the controlled current value. The widget never learns the
    /// caller's previous value any other way.
    pub fn set_value(&mut self, value: Option<Currency>) {
        self.value = value;
    }

    /// The committed currency, if any.
    #[must_use]
    pub fn value(&self) -> Option<Currency> {
        self.value
    }

    /// Current interaction state.
    #[must_use]
    pub fn state(&self) -> &SelectState {
        &self.state
    }

    /// Whether the dropdown is visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self.state, SelectState::Closed)
    }

    /// Index of the highlighted entry within `filtered()`.
    #[must_use]
    pub fn highlight(&self) -> usize {
        self.highlight
    }

    /// The entries the dropdown currently shows: the whole list, or the
    /// case-insensitive substring matches of the query against code and
    /// name.
    #[must_use]
    pub fn filtered(&self) -> Vec<Currency> {
        match &self.state {
            SelectState::Editing { query } if !query.trim().is_empty() => self
                .list
                .iter()
                .filter(|c| c.matches(query))
                .copied()
                .collect(),
            _ => self.list.to_vec(),
        }
    }

    /// What the text input shows: the live query while editing,
    /// otherwise the committed code (or nothing).
    #[must_use]
    pub fn display_value(&self) -> String {
        match &self.state {
            SelectState::Editing { query } => query.clone(),
            _ => self.value.map(|c| c.code().to_string()).unwrap_or_default(),
        }
    }

    /// Focusing the input opens the dropdown without entering edit mode.
    pub fn focus(&mut self) {
        if self.state == SelectState::Closed {
            self.state = SelectState::Browsing;
        }
    }

    /// A text change from the host: enters edit mode, recomputes the
    /// filter, and resets the highlight to the top.
    pub fn input(&mut self, text: &str) {
        self.state = SelectState::Editing {
            query: text.to_string(),
        };
        self.highlight = 0;
    }

    /// Handles a key press. Returns the committed currency when the key
    /// completed a selection.
    pub fn key(&mut self, key: Key) -> Option<Currency> {
        match key {
            Key::Backspace | Key::Delete => {
                // With a selection displayed (not editing), these start
                // a fresh query instead of deleting from the code.
                if !matches!(self.state, SelectState::Editing { .. }) && self.value.is_some() {
                    self.state = SelectState::Editing {
                        query: String::new(),
                    };
                }
                None
            }
            Key::ArrowDown => {
                if self.state == SelectState::Closed {
                    self.state = SelectState::Browsing;
                }
                let len = self.filtered().len();
                if len > 0 {
                    self.highlight = (self.highlight + 1).min(len - 1);
                }
                None
            }
            Key::ArrowUp => {
                self.highlight = self.highlight.saturating_sub(1);
                None
            }
            Key::Enter => {
                let selected = self.filtered().get(self.highlight).copied();
                selected.map(|c| self.commit(c))
            }
            Key::Escape => {
                log::debug!("currency select: escape, discarding query");
                self.state = SelectState::Closed;
                None
            }
        }
    }

    /// Hovering an entry moves the highlight to it.
    pub fn pointer_hover(&mut self, index: usize) {
        if index < self.filtered().len() {
            self.highlight = index;
        }
    }

    /// Pointer selection of an entry by its index within `filtered()`.
    /// Fires on mouse-down so it pre-empts outside-click dismissal.
    pub fn pointer_select(&mut self, index: usize) -> Option<Currency> {
        let selected = self.filtered().get(index).copied();
        selected.map(|c| self.commit(c))
    }

    /// A click outside the widget: close and discard any query. A
    /// committed selection is unaffected.
    pub fn click_outside(&mut self) {
        self.state = SelectState::Closed;
    }

    /// The reset affordance: force-select the list's first entry and
    /// close, discarding any query.
    pub fn reset(&mut self) -> Currency {
        self.commit(self.list[0])
    }

    fn commit(&mut self, currency: Currency) -> Currency {
        log::debug!("currency select: committed {}", currency.code());
        self.value = Some(currency);
        self.state = SelectState::Closed;
        if let Some(handler) = self.on_change.as_mut() {
            handler(currency);
        }
        currency
    }
}

impl fmt::Debug for CurrencySelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrencySelect")
            .field("state", &self.state)
            .field("highlight", &self.highlight)
            .field("value", &self.value)
            .field("list_len", &self.list.len())
            .finish()
    }
}
