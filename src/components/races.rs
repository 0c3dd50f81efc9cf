use super::status::{LoadError, Loading};
use crate::error::report;
use club_api::format::{format_date_short, translate_weather};
use club_api::{ClubApiClient, Race, RaceDetail, RaceResult};
use dioxus::prelude::*;
use media_gallery::{Collapsible, Toggle};

/// "1º", "DNF" or "-" when the server sent no position
pub fn position_label(result: &RaceResult) -> String {
    if result.dnf {
        return "DNF".to_string();
    }
    match result.position {
        Some(position) => format!("{}º", position),
        None => "-".to_string(),
    }
}

#[component]
pub fn RacesScreen() -> Element {
    let client = use_context::<ClubApiClient>();

    let races = use_resource(move || {
        let client = client.clone();
        async move { report("races", client.races().await) }
    });

    rsx! {
        div { style: "padding: 16px; max-width: 800px; margin: 0 auto;",
            h1 { style: "color: #d62828; margin: 0 0 12px; font-size: 24px; font-weight: 700;",
                "🏁 Corridas"
            }
            match races.read().clone() {
                Some(Ok(list)) if list.is_empty() => rsx! {
                    div { style: "text-align: center; padding: 40px; color: #999;", "Nenhuma corrida registrada" }
                },
                Some(Ok(list)) => rsx! {
                    for race in list {
                        RacePanel { key: "{race.race_id}", race }
                    }
                },
                Some(Err(msg)) => rsx! { LoadError { message: msg } },
                None => rsx! { Loading {} },
            }
        }
    }
}

/// Race header that fetches its results the first time it is expanded
#[component]
fn RacePanel(race: Race) -> Element {
    let client = use_context::<ClubApiClient>();
    let mut panel = use_signal(Collapsible::<Result<RaceDetail, String>>::lazy);
    let race_id = race.race_id;

    let date = race.date.as_deref().map(format_date_short).unwrap_or_default();
    let weather = race.weather.as_deref().map(translate_weather);
    let expanded = panel.read().is_expanded();
    let content = panel.read().content().cloned();

    rsx! {
        div { style: "background: white; border-radius: 12px; margin-bottom: 10px; overflow: hidden; box-shadow: 0 2px 6px rgba(0,0,0,0.08);",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; padding: 14px 16px; cursor: pointer;",
                onclick: move |_| {
                    if panel.write().toggle() == Toggle::ExpandedNeedsLoad {
                        let client = client.clone();
                        spawn(async move {
                            let detail = report("race results", client.race(race_id).await);
                            panel.write().fill(detail);
                        });
                    }
                },
                div {
                    div { style: "font-weight: 600; color: #222;", "{race.race_name}" }
                    div { style: "font-size: 13px; color: #666;",
                        "📅 {date}"
                        if let Some(track) = &race.track_name {
                            " • 📍 {track}"
                        }
                        if let Some(weather) = &weather {
                            " • {weather}"
                        }
                    }
                }
                span { style: "font-size: 18px; color: #999;",
                    if expanded { "▲" } else { "▼" }
                }
            }
            if expanded {
                div { style: "padding: 0 16px 16px;",
                    match content {
                        None => rsx! { Loading {} },
                        Some(Err(msg)) => rsx! { LoadError { message: msg } },
                        Some(Ok(detail)) if detail.results.is_empty() => rsx! {
                            p { style: "color: #999;", "Sem resultados" }
                        },
                        Some(Ok(detail)) => rsx! { ResultsTable { results: detail.results } },
                    }
                }
            }
        }
    }
}

#[component]
fn ResultsTable(results: Vec<RaceResult>) -> Element {
    rsx! {
        table { style: "width: 100%; border-collapse: collapse; font-size: 14px;",
            thead {
                tr { style: "text-align: left; color: #888; border-bottom: 1px solid #eee;",
                    th { style: "padding: 6px;", "Pos." }
                    th { style: "padding: 6px;", "Piloto" }
                    th { style: "padding: 6px;", "Voltas" }
                    th { style: "padding: 6px;", "Tempo" }
                    th { style: "padding: 6px;", "Melhor volta" }
                    th { style: "padding: 6px;", "Pontos" }
                }
            }
            tbody {
                for (i, result) in results.into_iter().enumerate() {
                    tr {
                        key: "{i}",
                        style: if result.dnf { "color: #a00; border-bottom: 1px solid #f5f5f5;" } else { "color: #333; border-bottom: 1px solid #f5f5f5;" },
                        td { style: "padding: 6px; font-weight: 600;", "{position_label(&result)}" }
                        td { style: "padding: 6px;", "{result.name.clone().unwrap_or_default()}" }
                        td { style: "padding: 6px;", "{result.laps.map(|l| l.to_string()).unwrap_or_default()}" }
                        td { style: "padding: 6px;", "{result.total_time.clone().unwrap_or_default()}" }
                        td { style: "padding: 6px;", "{result.lap_time_best.clone().unwrap_or_default()}" }
                        td { style: "padding: 6px;", "{result.points_earned.unwrap_or(0)}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(position: Option<i64>, dnf: bool) -> RaceResult {
        RaceResult {
            result_id: None,
            racer_id: Some(1),
            name: Some("Ana".to_string()),
            position,
            laps: Some(20),
            total_time: None,
            lap_time_best: None,
            points_earned: None,
            dnf,
        }
    }

    #[test]
    fn test_position_label() {
        assert_eq!(position_label(&result(Some(1), false)), "1º");
        assert_eq!(position_label(&result(Some(7), true)), "DNF");
        assert_eq!(position_label(&result(None, false)), "-");
    }

    #[tokio::test]
    async fn test_results_panel_fetches_once() {
        let mut panel: Collapsible<Result<RaceDetail, String>> = Collapsible::lazy();
        let mut fetches = 0;

        for _ in 0..4 {
            panel
                .toggle_with(|| {
                    fetches += 1;
                    async { Err("offline".to_string()) }
                })
                .await;
        }

        assert_eq!(fetches, 1);
        assert!(!panel.is_expanded());
        assert_eq!(panel.content(), Some(&Err("offline".to_string())));
    }
}
