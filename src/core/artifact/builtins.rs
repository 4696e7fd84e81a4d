use super::registry::{ArtifactRegistry, ArtifactRegistryBuilder};
use crate::core::config::SyncConfig;

/// Releases known at build time: `(game_version, remote_version_id)`.
/// All of them ship at the configured default artifact version.
pub const BUILTIN_ARTIFACTS: &[(&str, &str)] = &[
    ("1.20.4", "kJmEO0xO"),
    ("1.20.2", "czoUx8H7"),
    ("1.20.1", "KHhjRppT"),
    ("1.19.4", "Qjcg7Sz1"),
    ("1.19.3", "mF64uUAf"),
    ("1.19.2", "JLg8jqoe"),
];

/// Registry seeded with [`BUILTIN_ARTIFACTS`], then the config's extra entries.
pub fn builtin_registry(config: &SyncConfig) -> ArtifactRegistry {
    BUILTIN_ARTIFACTS
        .iter()
        .fold(
            ArtifactRegistryBuilder::new(config.default_artifact_version.clone()),
            |builder, (game_version, remote_id)| builder.register_default(*game_version, *remote_id),
        )
        .register_from_config(config)
        .build()
}
