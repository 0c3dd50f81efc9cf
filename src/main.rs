use std::rc::Rc;

use dioxus::prelude::*;

mod components;
mod config;
mod error;

use club_api::ClubApiClient;
use components::{
    DashboardScreen, LeaderboardScreen, LocationsScreen, NavigationBar, RacersScreen,
    RacesScreen, StandingsScreen,
};
use config::ClubConfig;
use error::AppError;
use media_gallery::{
    GalleryController, GalleryOptions, LocalStore, MediaSection, MemoryStore, SqliteStore,
};

fn main() {
    init_logging();
    dioxus::launch(App);
}

#[cfg(target_os = "android")]
fn init_logging() {
    android_logger::init_once(
        android_logger::Config::default().with_max_level(log::LevelFilter::Info),
    );
}

#[cfg(not(target_os = "android"))]
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Screen navigation for the app
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Screen {
    Dashboard,
    Racers,
    Races,
    Leaderboard,
    Standings,
    Locations,
    Media,
}

/// Opens the SQLite store, or an in-memory one if that fails
fn open_store(config: &ClubConfig) -> Rc<dyn LocalStore> {
    match SqliteStore::open(&config.database_path) {
        Ok(store) => Rc::new(store),
        Err(e) => {
            let err = AppError::from(e);
            log::error!(
                "Falling back to in-memory store ({}): {}",
                config.database_path.display(),
                err
            );
            Rc::new(MemoryStore::new())
        }
    }
}

/// Builds the API client and the gallery controller from the config
fn build_services(
    config: &ClubConfig,
    store: Rc<dyn LocalStore>,
) -> Result<(ClubApiClient, GalleryController), AppError> {
    let client = ClubApiClient::new(config.api_url.clone())?;
    log::info!("Using API at {} (admin: {})", config.api_url, config.admin);
    let gallery = GalleryController::new(
        client.clone(),
        store,
        GalleryOptions {
            is_admin: config.admin,
            photo_source: config.photo_source,
        },
    );
    Ok((client, gallery))
}

#[component]
fn App() -> Element {
    let services = use_hook(|| {
        let config = ClubConfig::load();
        build_services(&config, open_store(&config)).map_err(|e| {
            log::error!("Could not create API client: {}", e);
            e.user_message()
        })
    });

    match services {
        Ok((client, gallery)) => rsx! {
            ClubShell { client, gallery }
        },
        Err(message) => rsx! {
            div { style: "padding: 40px; text-align: center; color: #a00; font-family: sans-serif;",
                "Erro ao iniciar o cliente da API"
                p { style: "color: #666; font-size: 14px;", "{message}" }
            }
        },
    }
}

/// Screens and navigation, with the client and gallery shared as context
#[component]
fn ClubShell(client: ClubApiClient, gallery: GalleryController) -> Element {
    let mut current_screen = use_signal(|| Screen::Dashboard);
    use_context_provider(|| client);
    use_context_provider(|| gallery);

    rsx! {
        div { style: "display: flex; flex-direction: column; height: 100vh; font-family: sans-serif; background: #f5f5f5;",

            // Main Content
            div { style: "flex: 1; overflow-y: auto;",
                match current_screen() {
                    Screen::Dashboard => rsx! {
                        DashboardScreen { on_navigate: move |s| current_screen.set(s) }
                    },
                    Screen::Racers => rsx! {
                        RacersScreen {}
                    },
                    Screen::Races => rsx! {
                        RacesScreen {}
                    },
                    Screen::Leaderboard => rsx! {
                        LeaderboardScreen {}
                    },
                    Screen::Standings => rsx! {
                        StandingsScreen {}
                    },
                    Screen::Locations => rsx! {
                        LocationsScreen {}
                    },
                    Screen::Media => rsx! {
                        MediaSection {}
                    },
                }
            }

            // Bottom Navigation Bar
            NavigationBar {
                current_screen: current_screen(),
                on_navigate: move |screen| current_screen.set(screen),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_services_follow_config() {
        let config = ClubConfig {
            api_url: "http://10.0.0.2:5000".to_string(),
            admin: true,
            ..Default::default()
        };

        let (client, gallery) = build_services(&config, Rc::new(MemoryStore::new())).unwrap();

        assert_eq!(client.base_url(), "http://10.0.0.2:5000");
        assert_eq!(gallery.api(), &client);
        assert!(gallery.is_admin());
    }
}
