//! Wire types and errors shared by the care notes service and its clients.

pub mod error;
pub mod protocol;

pub use error::{FieldError, ServiceError};
pub use protocol::{Note, NoteId};
