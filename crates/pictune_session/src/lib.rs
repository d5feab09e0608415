//! Interactive session logic for PicTune.
//!
//! A [`Session`] holds the photo awaiting upload, the outstanding request and
//! the last result. Front ends feed it [`SessionEvent`]s and execute the
//! [`Command`]s it returns, either inline through [`AnalysisWorkflow`] or on a
//! background task with [`execute`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod events;
mod session;
mod workflow;

pub use events::{Command, RequestState, SessionEvent};
pub use session::{PendingUpload, Session};
pub use workflow::{AnalysisWorkflow, analyze, execute};
