//! Platform-free effect logic. Nothing in here touches `web-sys`, so the
//! whole module is exercised by host-side tests.

pub mod constants;
pub mod counter;
pub mod handoff;
pub mod heart;
pub mod particles;
pub mod rng;
pub mod sky;
pub mod tier;

pub use counter::*;
pub use handoff::*;
pub use heart::*;
pub use particles::*;
pub use rng::*;
pub use sky::*;
pub use tier::*;
