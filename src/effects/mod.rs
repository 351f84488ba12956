//! Tile effects: what happens when a player lands somewhere.
//!
//! - `SpaceResolver`: applies the tile under a player and reports a
//!   [`SpaceOutcome`]
//! - `EventKind`: the event-tile catalog
//! - `ShopItem`: the shop catalog
//!
//! Offers (star, shop) are reported here but settled by the turn engine
//! once the matching decision arrives.

mod events;
mod outcome;
mod resolver;
mod shop;

pub use events::{EventKind, EventOutcome};
pub use outcome::SpaceOutcome;
pub use resolver::SpaceResolver;
pub use shop::ShopItem;
