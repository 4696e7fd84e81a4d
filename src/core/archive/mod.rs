mod inspector;
mod manifest;

pub use inspector::{read_entry, MAX_ENTRY_BYTES};
pub use manifest::{inspect_candidate, CandidateStatus, InvalidReason, ModManifest};
