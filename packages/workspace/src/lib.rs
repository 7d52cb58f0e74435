//! Session layer: owns one live editor and its persistence collaborator.

mod session;

pub use session::{EditorSession, SessionEvent};
