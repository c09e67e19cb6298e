pub mod analytics_handlers;
pub mod match_handlers;
pub mod network_handlers;
pub mod referral_handlers;
pub mod system_handlers;

pub use analytics_handlers::*;
pub use match_handlers::*;
pub use network_handlers::*;
pub use referral_handlers::*;
pub use system_handlers::*;
