mod builtins;
mod layout;
mod record;
mod registry;

pub use builtins::{builtin_registry, BUILTIN_ARTIFACTS};
pub use layout::ArtifactLayout;
pub use record::ArtifactRecord;
pub use registry::{ArtifactRegistry, ArtifactRegistryBuilder};
