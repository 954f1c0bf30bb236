//! Checkbox-style selections and their validation
//!
//! A [`SelectionSet`] models a group of boolean choices over named options
//! (columns to drop, a tokenization target, any generic checkbox group).
//! Validating a selection requires at least one checked option and then
//! locks it so later edits are rejected.

use super::errors::PseudonymError;
use super::result::Result;

/// Fails with [`PseudonymError::NoSelection`] unless at least one choice is true.
///
/// This is the single guard used before every workflow step that needs a
/// non-empty choice (drop columns, tokenization target, demo checkboxes).
///
/// # Examples
///
/// ```
/// use pseudonymizer::domain::selection::validate_selection;
///
/// assert!(validate_selection([false, true, false]).is_ok());
/// assert!(validate_selection([false, false]).is_err());
/// assert!(validate_selection(Vec::<bool>::new()).is_err());
/// ```
pub fn validate_selection<I>(choices: I) -> Result<()>
where
    I: IntoIterator<Item = bool>,
{
    if choices.into_iter().any(|checked| checked) {
        Ok(())
    } else {
        Err(PseudonymError::NoSelection(
            "You must select at least one choice".to_string(),
        ))
    }
}

/// An ordered group of named checkboxes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSet {
    options: Vec<(String, bool)>,
    locked: bool,
}

impl SelectionSet {
    /// Creates a selection with every option unchecked
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(|o| (o.into(), false)).collect(),
            locked: false,
        }
    }

    /// Sets one option
    ///
    /// # Errors
    ///
    /// `SelectionLocked` after validation, `ColumnNotFound` for unknown options.
    pub fn set(&mut self, option: &str, checked: bool) -> Result<()> {
        self.ensure_unlocked()?;
        let slot = self
            .options
            .iter_mut()
            .find(|(name, _)| name == option)
            .ok_or_else(|| PseudonymError::ColumnNotFound(option.to_string()))?;
        slot.1 = checked;
        Ok(())
    }

    /// Flips one option and returns its new value
    pub fn toggle(&mut self, option: &str) -> Result<bool> {
        let current = self.is_checked(option);
        self.set(option, !current)?;
        Ok(!current)
    }

    /// "Select all" checkbox: sets every option to `checked`
    pub fn select_all(&mut self, checked: bool) -> Result<()> {
        self.ensure_unlocked()?;
        for (_, value) in &mut self.options {
            *value = checked;
        }
        Ok(())
    }

    /// Whether an option is currently checked
    pub fn is_checked(&self, option: &str) -> bool {
        self.options
            .iter()
            .any(|(name, checked)| name == option && *checked)
    }

    /// Checked option names, in option order
    pub fn checked(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|(_, checked)| *checked)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Unchecked option names, in option order
    pub fn unchecked(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|(_, checked)| !*checked)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Whether the selection has been validated and frozen
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Validates the selection and locks it on success
    ///
    /// On failure the selection stays editable so the user can be re-prompted.
    pub fn validate(&mut self) -> Result<()> {
        validate_selection(self.options.iter().map(|(_, checked)| *checked))?;
        self.locked = true;
        Ok(())
    }

    fn ensure_unlocked(&self) -> Result<()> {
        if self.locked {
            return Err(PseudonymError::SelectionLocked(
                "selection was already validated".to_string(),
            ));
        }
        Ok(())
    }
}
