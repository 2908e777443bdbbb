//! Terminal type picker

use async_trait::async_trait;
use dialoguer::Select;

use magpie_core::{ChoicePrompt, VaultError, VaultResult};

/// Single-selection prompt on the controlling terminal.
///
/// Esc or `q` cancels, which comes back as `Ok(None)`. Cancellation is a
/// choice, not an error.
pub struct TermPicker;

#[async_trait]
impl ChoicePrompt for TermPicker {
    async fn choose_one(&self, options: &[String]) -> VaultResult<Option<String>> {
        let selection = Select::new()
            .with_prompt("Select a callout type")
            .items(options)
            .default(0)
            .interact_opt()
            .map_err(|err| VaultError::prompt(err.to_string()))?;

        Ok(selection.map(|index| options[index].clone()))
    }
}
