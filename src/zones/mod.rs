//! Zones of a Klondike layout.
//!
//! ## Key Types
//!
//! - `Stock`: draw pile, waste and cycled pile
//! - `Tableau`: face-down back pile under a face-up front pile
//! - `Foundation`: suit-locked ascending pile
//!
//! Every zone is generic over `Face`, so the authoritative state and the
//! observer's view share one implementation. Each mutating operation has
//! an `undo_*` counterpart that restores the zone exactly.

pub mod foundation;
pub mod stock;
pub mod tableau;

pub use foundation::Foundation;
pub use stock::{Hit, Recycled, Stock};
pub use tableau::{Tableau, Taken};
