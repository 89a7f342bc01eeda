// label-domain library entry point
pub mod artifact;
pub mod branch;
pub mod error;
pub mod label;
pub mod record;
pub use artifact::ImageArtifact;
pub use branch::{Branch, TargetTable};
pub use error::DomainError;
pub use label::LabelResult;
pub use record::AnalysisRecord;
