//! Type-safe wrappers for ids, seasons, dates and CLI parameter arguments.

pub mod ids;
pub mod param_arg;
pub mod time;

pub use ids::{PlayerId, TeamId};
pub use param_arg::{to_overrides, ParamArg};
pub use time::{GameDate, Season, CURRENT_SEASON};
