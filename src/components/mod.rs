mod dashboard;
mod locations;
mod navigation;
mod racers;
mod races;
mod rankings;
mod status;

pub use dashboard::DashboardScreen;
pub use locations::LocationsScreen;
pub use navigation::NavigationBar;
pub use racers::RacersScreen;
pub use races::RacesScreen;
pub use rankings::{LeaderboardScreen, StandingsScreen};
