use super::status::{LoadError, Loading};
use crate::error::report;
use crate::Screen;
use club_api::format::{format_date_short, translate_weather};
use club_api::{ClubApiClient, FastestByLocation, FastestLap, Race, Stats};
use dioxus::prelude::*;

#[component]
pub fn DashboardScreen(on_navigate: EventHandler<Screen>) -> Element {
    let client = use_context::<ClubApiClient>();

    // Three independent loads; one failing leaves the others alone
    let stats = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { report("stats", client.stats().await) }
        }
    });
    let recent = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { report("recent races", client.recent_races().await) }
        }
    });
    let fastest = use_resource(move || {
        let client = client.clone();
        async move { report("fastest laps", client.fastest_by_location().await) }
    });

    rsx! {
        div { style: "padding: 16px; max-width: 900px; margin: 0 auto;",
            h1 { style: "color: #d62828; text-align: center; margin: 24px 0; font-size: 28px; font-weight: 700;",
                "🏎️ Kart Club"
            }

            match stats.read().clone() {
                Some(Ok(stats)) => rsx! { StatsCards { stats, on_navigate } },
                Some(Err(msg)) => rsx! { LoadError { message: msg } },
                None => rsx! { Loading {} },
            }

            h2 { style: "margin: 24px 0 12px; font-size: 20px; color: #333;", "Corridas recentes" }
            match recent.read().clone() {
                Some(Ok(races)) if races.is_empty() => rsx! {
                    p { style: "color: #999; text-align: center;", "Nenhuma corrida registrada" }
                },
                Some(Ok(races)) => rsx! {
                    div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 12px;",
                        for race in races {
                            RecentRaceCard { key: "{race.race_id}", race }
                        }
                    }
                },
                Some(Err(msg)) => rsx! { LoadError { message: msg } },
                None => rsx! { Loading {} },
            }

            h2 { style: "margin: 24px 0 12px; font-size: 20px; color: #333;", "Voltas mais rápidas por kartódromo" }
            match fastest.read().clone() {
                Some(Ok(venues)) if venues.is_empty() => rsx! {
                    p { style: "color: #999; text-align: center;", "Nenhuma volta registrada" }
                },
                Some(Ok(venues)) => rsx! {
                    for venue in venues {
                        FastestCard { key: "{venue.location_name}", venue }
                    }
                },
                Some(Err(msg)) => rsx! { LoadError { message: msg } },
                None => rsx! { Loading {} },
            }
        }
    }
}

#[component]
fn StatsCards(stats: Stats, on_navigate: EventHandler<Screen>) -> Element {
    let card = "flex: 1; background: white; border-radius: 12px; padding: 16px; text-align: center; cursor: pointer; box-shadow: 0 2px 6px rgba(0,0,0,0.08);";

    rsx! {
        div { style: "display: flex; gap: 12px;",
            div { style: "{card}", onclick: move |_| on_navigate.call(Screen::Racers),
                div { style: "font-size: 32px; font-weight: 700; color: #d62828;", "{stats.total_racers}" }
                div { style: "color: #666;", "Pilotos" }
            }
            div { style: "{card}", onclick: move |_| on_navigate.call(Screen::Races),
                div { style: "font-size: 32px; font-weight: 700; color: #d62828;", "{stats.total_races}" }
                div { style: "color: #666;", "Corridas" }
            }
        }
    }
}

#[component]
fn RecentRaceCard(race: Race) -> Element {
    let date = race.date.as_deref().map(format_date_short).unwrap_or_default();
    let weather = race.weather.as_deref().map(translate_weather);

    rsx! {
        div { style: "background: white; border-radius: 12px; padding: 14px; box-shadow: 0 2px 6px rgba(0,0,0,0.08);",
            div { style: "font-weight: 600; color: #222; margin-bottom: 4px;", "{race.race_name}" }
            div { style: "font-size: 13px; color: #666;", "📅 {date}" }
            if let Some(track) = &race.track_name {
                div { style: "font-size: 13px; color: #666;", "📍 {track}" }
            }
            if let Some(weather) = weather {
                div { style: "font-size: 13px; color: #666;", "🌤️ {weather}" }
            }
            if let Some(laps) = race.total_laps {
                div { style: "font-size: 13px; color: #666;", "🔁 {laps} voltas" }
            }
        }
    }
}

#[component]
fn FastestCard(venue: FastestByLocation) -> Element {
    let conditions = [
        ("☀️ Seco", venue.dry.clone()),
        ("🌧️ Molhado", venue.wet.clone()),
        ("🏢 Indoor", venue.indoor.clone()),
    ];

    rsx! {
        div { style: "background: white; border-radius: 12px; padding: 14px; margin-bottom: 10px;",
            div { style: "font-weight: 600; color: #222; margin-bottom: 8px;", "{venue.location_name}" }
            div { style: "display: flex; gap: 8px; flex-wrap: wrap;",
                for (label, lap) in conditions {
                    div { key: "{label}", style: "flex: 1; min-width: 120px; background: #f7f7f7; border-radius: 8px; padding: 8px;",
                        div { style: "font-size: 12px; color: #888;", "{label}" }
                        match lap {
                            Some(FastestLap { fastest_lap, fastest_racer }) => rsx! {
                                div { style: "font-weight: 600; color: #d62828;", "{fastest_lap}" }
                                div { style: "font-size: 13px; color: #555;", "{fastest_racer}" }
                            },
                            None => rsx! {
                                div { style: "color: #bbb;", "—" }
                            },
                        }
                    }
                }
            }
        }
    }
}
