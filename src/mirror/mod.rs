//! Best-effort mirroring of download counts into `modinfo.json` files.
//!
//! After every committed record, the new total can be written into the
//! package's `modinfo.json` so static mod listings stay in sync. A failed
//! sync is reported as a warning and never rolls back the record.

/// Implementation blocks for the modinfo mirror.
pub mod impls;

/// Mirror data structures.
pub mod structs;
