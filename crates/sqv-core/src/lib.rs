#![deny(missing_docs)]
#![doc = "Core types for verifying Monte-Carlo samples of a quantum spin chain against its exact wavefunction."]

pub mod amplitude;
pub mod basis;
pub mod corpus;
pub mod errors;

pub use amplitude::AmplitudeTable;
pub use basis::Configuration;
pub use corpus::SampleCorpus;
pub use errors::{ErrorInfo, SqvError};
