//! Infrastructure layer
//!
//! External collaborators: the version-control diff query.

pub mod git;
