pub mod games;
pub mod players;
pub mod schools;
pub mod stats;
pub mod teams;

pub use games::{Game, NewGame};
pub use players::{NewPlayer, Player};
pub use schools::{NewSchool, School};
pub use stats::{NewStats, StatLine, StatRecord};
pub use teams::{NewTeam, Team};

fn active_by_default() -> bool {
    true
}
