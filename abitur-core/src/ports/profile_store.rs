//! Profile store port - persistent slot abstraction

use crate::domain::result::Result;
use crate::domain::UserProfile;

/// Single-slot persistent store for the applicant profile
///
/// The store holds at most one record under a fixed key. Every operation is
/// one synchronous read or write; there is no partial success. Concurrent
/// processes writing the same slot race with last-write-wins semantics -
/// the store does not guard against that.
pub trait ProfileStore: Send + Sync {
    /// Load the stored profile, if any
    ///
    /// A malformed payload reads as absent rather than as an error.
    fn load(&self) -> Result<Option<UserProfile>>;

    /// Write the profile, replacing whatever the slot held before
    fn save(&self, profile: &UserProfile) -> Result<()>;

    /// Delete the stored profile; deleting an empty slot is not an error
    fn delete(&self) -> Result<()>;
}
