//! Frontmatter destination writing

use tracing::debug;

use magpie_core::{Callout, FrontmatterStore, NoteHandle, VaultResult};

/// Frontmatter key the collected list is written under.
pub const CALLOUTS_KEY: &str = "callouts";

/// Write `callouts` to the target note's frontmatter in one transaction.
///
/// The [`CALLOUTS_KEY`] value is replaced wholesale with the serialized
/// list; an empty slice still writes an empty list, never removes the key.
/// Transaction failures propagate; a failed write must not be swallowed.
pub async fn write_callouts(
    store: &dyn FrontmatterStore,
    note: &NoteHandle,
    callouts: &[Callout],
) -> VaultResult<()> {
    let value = serde_yaml::to_value(callouts)?;
    debug!(target = %note.path.display(), count = callouts.len(), "writing callouts key");

    store
        .transact(
            note,
            Box::new(move |mapping| {
                mapping.insert(CALLOUTS_KEY.into(), value);
            }),
        )
        .await
}
