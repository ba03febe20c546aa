pub mod engagement;
pub mod hype;
pub mod interest;

pub use engagement::*;
pub use hype::*;
pub use interest::*;
