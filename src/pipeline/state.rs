//! Pipeline state machine and request-scoped session context.
//!
//! [`PipelineState`] is the UI's view of the orchestrator.  [`Session`] holds
//! the form's scratch state (keyword, suggestions, chosen organisation); it
//! is owned by the app and handed to each step explicitly, never global.

use crate::classify::StaticMatcher;

// ---------------------------------------------------------------------------
// PipelineState
// ---------------------------------------------------------------------------

/// States of the classification pipeline.
///
/// ```text
/// Idle ──classify──▶ Classifying ──report──▶ Result
/// Result ──new search / classify──▶ Idle / Classifying
/// startup config error ──▶ Error   (terminal)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineState {
    Idle,
    /// A request is in flight (static match + AI call).
    Classifying,
    /// A report is ready to display.
    Result,
    /// Fatal configuration error; nothing else is rendered.
    Error,
}

impl PipelineState {
    /// Returns `true` while a request is in flight.
    ///
    /// ```
    /// use sector_mapper::pipeline::PipelineState;
    ///
    /// assert!(!PipelineState::Idle.is_busy());
    /// assert!(PipelineState::Classifying.is_busy());
    /// assert!(!PipelineState::Result.is_busy());
    /// ```
    pub fn is_busy(&self) -> bool {
        matches!(self, PipelineState::Classifying)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PipelineState::Idle => "Idle",
            PipelineState::Classifying => "Classifying",
            PipelineState::Result => "Done",
            PipelineState::Error => "Error",
        }
    }
}

impl Default for PipelineState {
    fn default() -> Self {
        PipelineState::Idle
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Search-and-select scratch state for one UI session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    /// Current contents of the search field.
    pub keyword: String,
    /// Reference-list entries offered for the last search.
    pub suggestions: Vec<String>,
    /// Organisation chosen for classification.
    pub selected: Option<String>,
    /// Set when a non-empty search found nothing.
    pub no_match: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a suggestion search for the current keyword.
    ///
    /// Clears any previous selection.
    pub fn search(&mut self, matcher: &StaticMatcher) {
        let keyword = self.keyword.trim();
        self.selected = None;
        self.suggestions = matcher.suggestions(keyword);
        self.no_match = self.suggestions.is_empty() && !keyword.is_empty();
    }

    /// Choose `org` from the suggestions.  Returns the name to classify.
    pub fn select(&mut self, org: &str) -> String {
        self.suggestions.clear();
        self.no_match = false;
        self.selected = Some(org.to_string());
        org.to_string()
    }

    /// Direct classification is offered only when there is input, nothing
    /// is selected and no suggestions are pending.
    pub fn can_classify_directly(&self) -> bool {
        !self.keyword.trim().is_empty() && self.selected.is_none() && self.suggestions.is_empty()
    }

    /// Select the typed keyword itself.  `None` if direct classification is
    /// not currently offered.
    pub fn classify_directly(&mut self) -> Option<String> {
        if !self.can_classify_directly() {
            return None;
        }
        let keyword = self.keyword.trim().to_string();
        Some(self.select(&keyword))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ReferenceLists;

    fn matcher() -> StaticMatcher {
        StaticMatcher::new(&ReferenceLists::builtin())
    }

    #[test]
    fn state_labels_and_busy() {
        assert_eq!(PipelineState::default(), PipelineState::Idle);
        assert_eq!(PipelineState::Result.label(), "Done");
        assert!(PipelineState::Classifying.is_busy());
        assert!(!PipelineState::Error.is_busy());
    }

    #[test]
    fn search_populates_suggestions() {
        let mut s = Session::new();
        s.keyword = "กองทัพ".into();
        s.search(&matcher());
        assert!(s.suggestions.contains(&"กองทัพบก".to_string()));
        assert!(!s.no_match);
        assert!(!s.can_classify_directly());
    }

    #[test]
    fn search_without_hits_flags_no_match() {
        let mut s = Session::new();
        s.keyword = "Bangkok Bank".into();
        s.search(&matcher());
        assert!(s.suggestions.is_empty());
        assert!(s.no_match);
        assert!(s.can_classify_directly());
    }

    #[test]
    fn empty_search_is_quiet() {
        let mut s = Session::new();
        s.search(&matcher());
        assert!(s.suggestions.is_empty());
        assert!(!s.no_match);
        assert!(!s.can_classify_directly());
    }

    #[test]
    fn search_resets_selection() {
        let mut s = Session::new();
        s.selected = Some("old".into());
        s.keyword = "กรม".into();
        s.search(&matcher());
        assert!(s.selected.is_none());
    }

    #[test]
    fn select_clears_suggestions() {
        let mut s = Session::new();
        s.keyword = "ธนาคาร".into();
        s.search(&matcher());
        let name = s.select("ธนาคารออมสิน");
        assert_eq!(name, "ธนาคารออมสิน");
        assert!(s.suggestions.is_empty());
        assert_eq!(s.selected.as_deref(), Some("ธนาคารออมสิน"));
    }

    #[test]
    fn classify_directly_uses_trimmed_keyword_once() {
        let mut s = Session::new();
        s.keyword = "  Bangkok Bank ".into();
        assert_eq!(s.classify_directly().as_deref(), Some("Bangkok Bank"));
        // Already selected; the button is no longer offered.
        assert_eq!(s.classify_directly(), None);
    }
}
