//! The picker component the host screen drives.
//!
//! A [`TypeaheadSelector`] owns the indexed corpus, the visible list and the
//! working selection. The host wires four inputs to it (text changed, row
//! checkbox changed, confirm pressed, cancel pressed) and listens for the
//! terminal [`SelectionEvent`].

use crate::error::{Result, TypeaheadError};
use crate::events::{Listeners, SelectionEvent};
use crate::session::SelectionSession;
use lazer_core::config::TypeaheadConfig;
use lazer_search::{search_indices, Corpus, Item, SearchKeys, SearchOptions, DEFAULT_LIMIT};
use std::sync::Arc;
use std::sync::mpsc::Receiver;
use tracing::{debug, instrument};

/// Heading used when the host supplies none.
pub const DEFAULT_TITLE: &str = "Select Item";

/// Search behaviour of a picker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorOptions {
    /// Maximum ranked results shown for a non-blank query
    pub limit: usize,
    /// Options the corpus is built with
    pub search: SearchOptions,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            search: SearchOptions::default(),
        }
    }
}

impl SelectorOptions {
    /// Reject a zero limit or an out-of-range threshold.
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(TypeaheadError::InvalidOptions("limit must be at least 1".to_string()));
        }
        self.search.validate()?;
        Ok(())
    }
}

impl From<&TypeaheadConfig> for SelectorOptions {
    fn from(config: &TypeaheadConfig) -> Self {
        Self {
            limit: config.limit,
            search: SearchOptions {
                threshold: config.threshold,
                ignore_case: config.ignore_case,
            },
        }
    }
}

/// Handle for one query's results.
///
/// Results computed off the event path are installed with
/// [`TypeaheadSelector::apply_results`], which drops them if a newer query
/// (or a new item list) has arrived since the ticket was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    generation: u64,
    query: Option<String>,
}

impl QueryTicket {
    /// The query these results are for.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Position of this query in the picker's input sequence.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Single-select typeahead picker.
///
/// # Example
/// ```
/// use lazer_search::Item;
/// use lazer_typeahead::{SelectionEvent, TypeaheadSelector};
///
/// let items = vec![Item::new("Main St", "1"), Item::new("Maple Ave", "2")];
/// let mut picker = TypeaheadSelector::initialize(items, None);
/// let events = picker.subscribe();
///
/// picker.search_input("mapel");
/// picker.checkbox_change("2", true);
/// picker.confirm();
///
/// assert_eq!(events.try_recv().unwrap(), SelectionEvent::Change(Some("2".into())));
/// ```
#[derive(Debug)]
pub struct TypeaheadSelector {
    corpus: Arc<Corpus<Item>>,
    view: Vec<usize>,
    query: Option<String>,
    generation: u64,
    session: Option<SelectionSession>,
    title: String,
    options: SelectorOptions,
    listeners: Listeners,
}

impl TypeaheadSelector {
    /// Open a picker over `items` with the caller's current selection.
    ///
    /// Like the host component it replaces, the first view is the result of
    /// searching for the current selection; with nothing selected every item
    /// is shown.
    pub fn initialize(items: Vec<Item>, selected_item: Option<String>) -> Self {
        Self::build(items, selected_item, SelectorOptions::default())
    }

    /// Open a picker with explicit search options.
    pub fn with_options(
        items: Vec<Item>,
        selected_item: Option<String>,
        options: SelectorOptions,
    ) -> Result<Self> {
        options.validate()?;
        Ok(Self::build(items, selected_item, options))
    }

    /// Open a picker configured from `.lazer.toml`.
    pub fn from_config(
        items: Vec<Item>,
        selected_item: Option<String>,
        config: &TypeaheadConfig,
    ) -> Result<Self> {
        let selector = Self::with_options(items, selected_item, SelectorOptions::from(config))?;
        Ok(selector.with_title(config.title.clone()))
    }

    fn build(items: Vec<Item>, selected_item: Option<String>, options: SelectorOptions) -> Self {
        let corpus = Arc::new(Corpus::with_keys(items, SearchKeys::default(), options.search));
        let mut selector = Self {
            corpus,
            view: Vec::new(),
            query: None,
            generation: 0,
            session: Some(SelectionSession::initialize(selected_item.clone())),
            title: DEFAULT_TITLE.to_string(),
            options,
            listeners: Listeners::new(),
        };
        selector.refresh(selected_item.as_deref());

        debug!(
            items = selector.corpus.len(),
            selected = ?selected_item,
            visible = selector.view.len(),
            "Typeahead initialized"
        );
        selector
    }

    /// Set the heading. Display only.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Heading shown above the list.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Search options in effect.
    pub fn options(&self) -> &SelectorOptions {
        &self.options
    }

    /// Shared handle to the indexed corpus, for searching off the event path.
    pub fn corpus(&self) -> Arc<Corpus<Item>> {
        Arc::clone(&self.corpus)
    }

    /// Query behind the current view.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Registered listeners.
    pub fn listeners_mut(&mut self) -> &mut Listeners {
        &mut self.listeners
    }

    /// Receive events over a channel.
    pub fn subscribe(&mut self) -> Receiver<SelectionEvent> {
        self.listeners.subscribe()
    }

    /// Call `callback` with the confirmed value.
    pub fn on_change(&mut self, callback: impl FnMut(Option<&str>) + 'static) {
        self.listeners.on_change(callback);
    }

    /// Call `callback` on cancel.
    pub fn on_cancel(&mut self, callback: impl FnMut() + 'static) {
        self.listeners.on_cancel(callback);
    }

    /// True once confirm or cancel has fired.
    pub fn is_closed(&self) -> bool {
        self.session.is_none()
    }

    /// Text input changed.
    #[instrument(level = "debug", skip(self))]
    pub fn search_input(&mut self, query: &str) {
        if self.ignored("search_input") {
            return;
        }
        self.refresh(Some(query));
    }

    /// Row checkbox changed.
    #[instrument(level = "debug", skip(self))]
    pub fn checkbox_change(&mut self, value: &str, checked: bool) {
        let Some(session) = self.session.as_mut() else {
            debug!("Picker closed, ignoring checkbox_change");
            return;
        };
        session.set_checked(value, checked);
    }

    /// Whether the row holding `value` renders as checked.
    pub fn is_checked(&self, value: Option<&str>) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_selected(value))
    }

    /// Uncommitted selection, `None` once closed.
    pub fn working_value(&self) -> Option<&str> {
        self.session.as_ref().and_then(SelectionSession::working_value)
    }

    /// Items currently visible, in display order.
    pub fn filtered_items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.view.iter().filter_map(|&index| self.corpus.get(index))
    }

    /// Visible items with their check state.
    pub fn rows(&self) -> impl Iterator<Item = (&Item, bool)> + '_ {
        self.filtered_items().map(|item| (item, self.is_checked(item.value())))
    }

    /// Number of visible items.
    pub fn filtered_len(&self) -> usize {
        self.view.len()
    }

    /// Confirm pressed: emit the working value and close.
    pub fn confirm(&mut self) -> Option<SelectionEvent> {
        let session = self.close("confirm")?;
        let event = SelectionEvent::Change(session.confirm());
        self.listeners.emit(event.clone());
        Some(event)
    }

    /// Cancel pressed: emit a cancellation and close.
    pub fn cancel(&mut self) -> Option<SelectionEvent> {
        let session = self.close("cancel")?;
        session.cancel();
        self.listeners.emit(SelectionEvent::Cancel);
        Some(SelectionEvent::Cancel)
    }

    /// Swap in a new item list, keeping the query and the working selection.
    pub fn replace_items(&mut self, items: Vec<Item>) {
        if self.ignored("replace_items") {
            return;
        }
        let corpus = Corpus::with_keys(items, SearchKeys::default(), self.options.search);
        self.corpus = Arc::new(corpus);
        let query = self.query.take();
        self.refresh(query.as_deref());
    }

    /// Record `query` as the latest input and hand out a ticket for its results.
    pub fn begin_query(&mut self, query: Option<&str>) -> QueryTicket {
        self.generation += 1;
        self.query = query.map(String::from);
        QueryTicket {
            generation: self.generation,
            query: self.query.clone(),
        }
    }

    /// Install results for `ticket` unless a newer query superseded it.
    ///
    /// Returns whether the view changed.
    pub fn apply_results(&mut self, ticket: &QueryTicket, indices: Vec<usize>) -> bool {
        if self.is_closed() {
            return false;
        }
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                latest = self.generation,
                "Discarding superseded search results"
            );
            return false;
        }
        self.view = indices;
        true
    }

    fn refresh(&mut self, query: Option<&str>) {
        let ticket = self.begin_query(query);
        let indices = search_indices(&self.corpus, ticket.query(), self.options.limit);
        self.apply_results(&ticket, indices);
    }

    fn close(&mut self, action: &str) -> Option<SelectionSession> {
        let session = self.session.take();
        if session.is_none() {
            debug!(action, "Picker already closed, ignoring");
        }
        session
    }

    fn ignored(&self, action: &str) -> bool {
        if self.is_closed() {
            debug!(action, "Picker closed, ignoring input");
            return true;
        }
        false
    }
}
