use crate::Screen;
use dioxus::prelude::*;

const NAV_ITEMS: [(Screen, &str); 7] = [
    (Screen::Dashboard, "🏠 Início"),
    (Screen::Racers, "🏎️ Pilotos"),
    (Screen::Races, "🏁 Corridas"),
    (Screen::Leaderboard, "⏱️ Ranking"),
    (Screen::Standings, "🏆 Campeonato"),
    (Screen::Locations, "📍 Kartódromos"),
    (Screen::Media, "📸 Galeria"),
];

#[component]
pub fn NavigationBar(current_screen: Screen, on_navigate: EventHandler<Screen>) -> Element {
    let nav_style = "display: flex; justify-content: space-around; padding: 8px; background: #f0f0f0; border-top: 1px solid #ddd; overflow-x: auto;";

    rsx! {
        div {
            style: "{nav_style}",

            for (screen, label) in NAV_ITEMS {
                button {
                    key: "{label}",
                    style: if current_screen == screen {
                        "flex: 1; padding: 10px 6px; margin: 0 3px; border: none; border-radius: 8px; cursor: pointer; font-size: 13px; text-align: center; white-space: nowrap; background: #d62828; color: #ffffff;"
                    } else {
                        "flex: 1; padding: 10px 6px; margin: 0 3px; border: none; border-radius: 8px; cursor: pointer; font-size: 13px; text-align: center; white-space: nowrap; background: #ffffff; color: #333;"
                    },
                    onclick: move |_| on_navigate.call(screen),
                    "{label}"
                }
            }
        }
    }
}
