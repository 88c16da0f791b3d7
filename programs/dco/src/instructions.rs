pub mod donate_to_charity;
pub mod fetch_campaign;
pub mod initialize;
pub mod inject_supply;
pub mod manage_releasers;
pub mod release;
pub mod withdraw;

pub use donate_to_charity::*;
pub use fetch_campaign::*;
pub use initialize::*;
pub use inject_supply::*;
pub use manage_releasers::*;
pub use release::*;
pub use withdraw::*;
