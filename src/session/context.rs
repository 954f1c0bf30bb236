//! Session context and its state machine
//!
//! A [`SessionContext`] carries everything one user's pseudonymization
//! workflow needs: the working dataset, the drop selection, the chosen
//! identifier column and the last output. Every action checks the current
//! [`SessionState`] and fails with `InvalidState` when it does not apply.
//!
//! The workflow is forward-only: once the drop selection is validated the
//! columns are gone from the working dataset, and a failed tokenization
//! leaves that reduced dataset in place.

use super::cache::DatasetCache;
use super::state::SessionState;
use crate::domain::{validate_selection, Dataset, PseudonymError, Result, SelectionSet};
use crate::pseudonymization::{
    PersistedOutputs, PseudonymizationEngine, RunSummary, TokenizationOutput,
};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// State of one pseudonymization workflow
#[derive(Debug)]
pub struct SessionContext {
    key: String,
    state: SessionState,
    source: Option<PathBuf>,
    dataset: Option<Dataset>,
    drop_selection: SelectionSet,
    dropped: Vec<String>,
    identifier: Option<String>,
    output: Option<TokenizationOutput>,
    summary: Option<RunSummary>,
    started: Option<Instant>,
}

impl SessionContext {
    /// Creates an idle session
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            state: SessionState::Idle,
            source: None,
            dataset: None,
            drop_selection: SelectionSet::default(),
            dropped: Vec::new(),
            identifier: None,
            output: None,
            summary: None,
            started: None,
        }
    }

    /// Session key, also used to scope cached datasets
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Working dataset: the loaded one, reduced once the selection is validated
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// Drop selection over the loaded columns
    pub fn drop_selection(&self) -> &SelectionSet {
        &self.drop_selection
    }

    /// Columns removed by validation
    pub fn dropped_columns(&self) -> &[String] {
        &self.dropped
    }

    /// Columns the identifier may be chosen from
    pub fn identifier_candidates(&self) -> Vec<&str> {
        match (self.state, &self.dataset) {
            (SessionState::Validated, Some(dataset)) => dataset.column_names(),
            _ => Vec::new(),
        }
    }

    /// Chosen identifier column
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Result of the last successful tokenization
    pub fn output(&self) -> Option<&TokenizationOutput> {
        self.output.as_ref()
    }

    /// Summary of the last tokenization, with file details once persisted
    pub fn summary(&self) -> Option<&RunSummary> {
        self.summary.as_ref()
    }

    /// Loads the source dataset through `cache`
    pub fn load(&mut self, path: impl AsRef<Path>, cache: &mut DatasetCache) -> Result<&Dataset> {
        self.require("load", &[SessionState::Idle])?;

        let path = path.as_ref();
        let dataset = cache.get_or_load(&self.key, path)?;
        self.drop_selection = SelectionSet::new(dataset.column_names());
        self.source = Some(path.to_path_buf());
        self.started = Some(Instant::now());
        self.transition(SessionState::DatasetLoaded);

        Ok(self.dataset.insert(dataset))
    }

    /// Ticks or unticks one column of the drop selection
    pub fn select_drop(&mut self, column: &str, checked: bool) -> Result<()> {
        self.require_editable_selection("select columns")?;
        self.drop_selection.set(column, checked)?;
        self.refresh_selection_state();
        Ok(())
    }

    /// Ticks or unticks every column of the drop selection
    pub fn select_all(&mut self, checked: bool) -> Result<()> {
        self.require_editable_selection("select columns")?;
        self.drop_selection.select_all(checked)?;
        self.refresh_selection_state();
        Ok(())
    }

    /// Locks the drop selection and removes the chosen columns
    ///
    /// # Errors
    ///
    /// `NoSelection` if no column is ticked; the session stays editable.
    pub fn validate(&mut self) -> Result<()> {
        self.require_editable_selection("validate")?;
        self.drop_selection.validate()?;

        let dropped: Vec<String> = self
            .drop_selection
            .checked()
            .into_iter()
            .map(str::to_string)
            .collect();

        let dataset = self.working_dataset("validate")?;
        let reduced = crate::pseudonymization::remove_columns(dataset, &dropped)?;

        tracing::info!(
            session = %self.key,
            dropped = ?dropped,
            remaining = reduced.column_count(),
            "Removed selected columns"
        );

        self.dataset = Some(reduced);
        self.dropped = dropped;
        self.transition(SessionState::Validated);
        Ok(())
    }

    /// Picks the column to tokenize among the remaining ones
    pub fn choose_identifier(&mut self, column: &str) -> Result<()> {
        self.require("choose identifier", &[SessionState::Validated])?;
        self.working_dataset("choose identifier")?
            .require_column(column)?;
        self.identifier = Some(column.to_string());
        tracing::debug!(session = %self.key, column = %column, "Identifier column chosen");
        Ok(())
    }

    /// Tokenizes the chosen identifier column
    ///
    /// # Errors
    ///
    /// `NoSelection` if no identifier was chosen; any tokenizer error
    /// otherwise. On failure the reduced working dataset is kept.
    pub fn tokenize(&mut self, engine: &PseudonymizationEngine) -> Result<&TokenizationOutput> {
        self.require("tokenize", &[SessionState::Validated])?;
        validate_selection([self.identifier.is_some()])?;
        let identifier = self.identifier.clone().unwrap_or_default();

        let output = engine.tokenize(self.working_dataset("tokenize")?, &identifier)?;

        let duration = self.started.map(|s| s.elapsed()).unwrap_or_default();
        self.summary = Some(engine.summarize(
            self.source_label(),
            self.dropped.clone(),
            &output,
            duration,
        ));
        self.transition(SessionState::Tokenized);

        Ok(self.output.insert(output))
    }

    /// Writes the output dataset and mapping table into `dest_dir`
    ///
    /// May be called again (e.g. for another directory); files are overwritten.
    pub fn persist(
        &mut self,
        dest_dir: impl AsRef<Path>,
        engine: &PseudonymizationEngine,
    ) -> Result<PersistedOutputs> {
        self.require("persist", &[SessionState::Tokenized])?;
        let (Some(output), Some(summary)) = (&self.output, &mut self.summary) else {
            return Err(PseudonymError::invalid_state("persist", self.state));
        };

        let persisted = engine.persist(output, dest_dir, summary)?;
        summary.outputs = Some(persisted.clone());
        summary.dry_run = false;
        Ok(persisted)
    }

    /// Discards everything and returns to `Idle`
    ///
    /// Cached datasets of this session are dropped too, so the next load
    /// reads the file again.
    pub fn reset(&mut self, cache: &mut DatasetCache) {
        cache.invalidate(&self.key);
        let key = std::mem::take(&mut self.key);
        *self = Self::new(key);
        tracing::debug!(session = %self.key, "Session reset");
    }

    fn source_label(&self) -> String {
        self.source
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn working_dataset(&self, action: &str) -> Result<&Dataset> {
        self.dataset
            .as_ref()
            .ok_or_else(|| PseudonymError::invalid_state(action, self.state))
    }

    fn require(&self, action: &str, allowed: &[SessionState]) -> Result<()> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(PseudonymError::invalid_state(action, self.state))
        }
    }

    fn require_editable_selection(&self, action: &str) -> Result<()> {
        if self.state.accepts_selection() {
            Ok(())
        } else {
            Err(PseudonymError::invalid_state(action, self.state))
        }
    }

    fn refresh_selection_state(&mut self) {
        let next = if self.drop_selection.checked().is_empty() {
            SessionState::DatasetLoaded
        } else {
            SessionState::ColumnsSelected
        };
        if next != self.state {
            self.transition(next);
        }
    }

    fn transition(&mut self, next: SessionState) {
        tracing::debug!(session = %self.key, from = %self.state, to = %next, "Session transition");
        self.state = next;
    }
}
