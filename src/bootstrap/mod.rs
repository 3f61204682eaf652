pub mod config;

use std::sync::Arc;

use crate::application::ports::record_store::RecordStore;
use crate::application::ports::tag_association_repository::TagAssociationRepository;
use crate::application::services::tags::TagStore;
use crate::infrastructure::collation::IcuTitleCollation;

/// Wires a [`TagStore`] from a config and externally supplied persistence
/// ports, building the ICU collation for the configured locale.
pub fn tag_store(
    cfg: &config::Config,
    records: Arc<dyn RecordStore>,
    associations: Arc<dyn TagAssociationRepository>,
) -> anyhow::Result<TagStore> {
    let collation = IcuTitleCollation::new(&cfg.sort_locale)?;
    Ok(TagStore::new(records, associations, Arc::new(collation)))
}
