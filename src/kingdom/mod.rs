//! Kingdom restoration: the parcel catalog and the restore operation.

pub mod data;
pub mod logic;

pub use data::{get_all_parcels, parcel_by_id, ItemRequirement, Parcel};
pub use logic::{restore_parcel, RestoreError, RestoreOutcome};
