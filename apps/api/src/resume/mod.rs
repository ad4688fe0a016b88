// Résumé side of the pipeline: document → plain text → experience section →
// CandidateProfile. All passes are deterministic and dictionary-driven; the
// entity recognizer is the only swappable seam.

pub mod entities;
pub mod extract;
pub mod handlers;
pub mod locations;
pub mod organizations;
pub mod profile;
pub mod remote;
pub mod sections;
