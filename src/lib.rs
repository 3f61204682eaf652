// Module layout (Clean Architecture style)
// - bootstrap: configuration and wiring
// - infrastructure: collation adapter
// - application: ports, use cases, the TagStore service
// - domain: core models

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;

pub use application::services::tags::TagStore;
pub use domain::tags::tag::{Tag, TagItemAssociation, TagRecordError};
