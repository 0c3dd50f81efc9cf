use super::status::{LoadError, Loading};
use crate::error::report;
use club_api::{ClubApiClient, Racer, Standing};
use dioxus::prelude::*;

/// Medal and row background for the top three positions (1-based)
pub fn podium(position: usize) -> Option<(&'static str, &'static str)> {
    match position {
        1 => Some(("🥇", "#fff4cc")),
        2 => Some(("🥈", "#eeeeee")),
        3 => Some(("🥉", "#f6e3d4")),
        _ => None,
    }
}

fn row_style(position: usize) -> String {
    let background = podium(position).map(|(_, bg)| bg).unwrap_or("white");
    format!(
        "display: flex; align-items: center; gap: 12px; padding: 12px 14px; margin-bottom: 6px; border-radius: 10px; background: {};",
        background
    )
}

fn position_badge(position: usize) -> String {
    podium(position)
        .map(|(medal, _)| medal.to_string())
        .unwrap_or_else(|| format!("{}º", position))
}

#[component]
pub fn LeaderboardScreen() -> Element {
    let client = use_context::<ClubApiClient>();

    let leaderboard = use_resource(move || {
        let client = client.clone();
        async move { report("leaderboard", client.leaderboard().await) }
    });

    rsx! {
        div { style: "padding: 16px; max-width: 700px; margin: 0 auto;",
            h1 { style: "color: #d62828; margin: 0 0 12px; font-size: 24px; font-weight: 700;",
                "⏱️ Ranking"
            }
            match leaderboard.read().clone() {
                Some(Ok(racers)) if racers.is_empty() => rsx! {
                    div { style: "text-align: center; padding: 40px; color: #999;", "Sem dados de ranking" }
                },
                Some(Ok(racers)) => rsx! {
                    for (i, racer) in racers.into_iter().enumerate() {
                        LeaderboardRow { key: "{racer.racer_id}", position: i + 1, racer }
                    }
                },
                Some(Err(msg)) => rsx! { LoadError { message: msg } },
                None => rsx! { Loading {} },
            }
        }
    }
}

#[component]
fn LeaderboardRow(position: usize, racer: Racer) -> Element {
    rsx! {
        div { style: "{row_style(position)}",
            div { style: "width: 36px; font-weight: 700; text-align: center;", "{position_badge(position)}" }
            div { style: "flex: 1; font-weight: 600; color: #222;", "{racer.name}" }
            div { style: "font-size: 13px; color: #555;",
                "{racer.wins.unwrap_or(0)} vitórias • {racer.podium_finishes.unwrap_or(0)} pódios"
            }
        }
    }
}

#[component]
pub fn StandingsScreen() -> Element {
    let client = use_context::<ClubApiClient>();

    let standings = use_resource(move || {
        let client = client.clone();
        async move { report("standings", client.standings().await) }
    });

    rsx! {
        div { style: "padding: 16px; max-width: 700px; margin: 0 auto;",
            h1 { style: "color: #d62828; margin: 0 0 12px; font-size: 24px; font-weight: 700;",
                "🏆 Campeonato"
            }
            match standings.read().clone() {
                Some(Ok(rows)) if rows.is_empty() => rsx! {
                    div { style: "text-align: center; padding: 40px; color: #999;", "Sem classificação" }
                },
                Some(Ok(rows)) => rsx! {
                    for (i, standing) in rows.into_iter().enumerate() {
                        StandingRow { key: "{standing.racer_id}", position: i + 1, standing }
                    }
                },
                Some(Err(msg)) => rsx! { LoadError { message: msg } },
                None => rsx! { Loading {} },
            }
        }
    }
}

#[component]
fn StandingRow(position: usize, standing: Standing) -> Element {
    rsx! {
        div { style: "{row_style(position)}",
            div { style: "width: 36px; font-weight: 700; text-align: center;", "{position_badge(position)}" }
            div { style: "flex: 1;",
                div { style: "font-weight: 600; color: #222;", "{standing.name}" }
                div { style: "font-size: 12px; color: #777;",
                    "{standing.races_participated} corridas • {standing.wins} vitórias"
                }
            }
            div { style: "font-size: 18px; font-weight: 700; color: #d62828;", "{standing.total_points} pts" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_three_are_highlighted() {
        assert_eq!(position_badge(1), "🥇");
        assert_eq!(position_badge(3), "🥉");
        assert_eq!(position_badge(4), "4º");
        assert!(row_style(2).contains("#eeeeee"));
        assert!(row_style(10).contains("background: white"));
    }
}
