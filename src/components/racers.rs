use super::status::{LoadError, Loading};
use crate::error::report;
use club_api::{ClubApiClient, Racer};
use dioxus::prelude::*;

/// Case-insensitive substring match on the racer name; blank query keeps all
pub fn filter_racers(racers: &[Racer], query: &str) -> Vec<Racer> {
    let query = query.trim().to_lowercase();
    racers
        .iter()
        .filter(|r| query.is_empty() || r.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

#[component]
pub fn RacersScreen() -> Element {
    let client = use_context::<ClubApiClient>();
    let mut search_filter = use_signal(String::new);

    let racers = use_resource(move || {
        let client = client.clone();
        async move { report("racers", client.racers().await) }
    });

    rsx! {
        div { style: "padding: 16px; max-width: 700px; margin: 0 auto;",
            h1 { style: "color: #d62828; margin: 0 0 12px; font-size: 24px; font-weight: 700;",
                "🏎️ Pilotos"
            }
            input {
                style: "width: 100%; padding: 14px 16px; font-size: 16px; border: 2px solid #e0e0e0; border-radius: 10px; background: white; margin-bottom: 16px; box-sizing: border-box;",
                r#type: "text",
                placeholder: "🔍 Buscar piloto",
                value: "{search_filter}",
                oninput: move |e| search_filter.set(e.value()),
            }

            match racers.read().as_ref() {
                Some(Ok(list)) => {
                    let shown = filter_racers(list, &search_filter());
                    rsx! {
                        if shown.is_empty() {
                            div { style: "text-align: center; padding: 40px; color: #999;", "Nenhum piloto encontrado" }
                        }
                        for racer in shown {
                            RacerCard { key: "{racer.racer_id}", racer }
                        }
                    }
                }
                Some(Err(msg)) => rsx! { LoadError { message: msg.clone() } },
                None => rsx! { Loading {} },
            }
        }
    }
}

#[component]
fn RacerCard(racer: Racer) -> Element {
    rsx! {
        div { style: "background: white; border-radius: 12px; padding: 14px 16px; margin-bottom: 10px; box-shadow: 0 2px 6px rgba(0,0,0,0.08);",
            div { style: "display: flex; justify-content: space-between; align-items: baseline;",
                div { style: "font-weight: 600; font-size: 17px; color: #222;", "{racer.name}" }
                if let Some(age) = racer.age {
                    div { style: "font-size: 13px; color: #888;", "{age} anos" }
                }
            }
            div { style: "display: flex; gap: 16px; font-size: 13px; color: #555; margin-top: 6px;",
                span { "🏁 {racer.total_races.unwrap_or(0)} corridas" }
                span { "🥇 {racer.wins.unwrap_or(0)} vitórias" }
                span { "🏆 {racer.podium_finishes.unwrap_or(0)} pódios" }
            }
            if let Some(years) = racer.experience_years {
                div { style: "font-size: 13px; color: #888; margin-top: 4px;", "{years} anos de experiência" }
            }
            if !racer.best_laps_by_location.is_empty() {
                div { style: "margin-top: 8px; border-top: 1px solid #eee; padding-top: 8px;",
                    for laps in racer.best_laps_by_location.clone() {
                        div { key: "{laps.location_name}", style: "font-size: 13px; color: #555; margin-bottom: 2px;",
                            strong { "{laps.location_name}: " }
                            if let Some(dry) = &laps.dry { "☀️ {dry} " }
                            if let Some(wet) = &laps.wet { "🌧️ {wet} " }
                            if let Some(indoor) = &laps.indoor { "🏢 {indoor}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn racer(id: i64, name: &str) -> Racer {
        Racer {
            racer_id: id,
            name: name.to_string(),
            age: None,
            experience_years: None,
            total_races: None,
            wins: None,
            podium_finishes: None,
            best_laps_by_location: Vec::new(),
        }
    }

    #[test]
    fn test_filter_racers() {
        let racers = vec![racer(1, "Ana Souza"), racer(2, "Bruno Lima"), racer(3, "Mariana")];

        let names = |list: Vec<Racer>| list.into_iter().map(|r| r.name).collect::<Vec<_>>();

        assert_eq!(names(filter_racers(&racers, "ANA")), vec!["Ana Souza", "Mariana"]);
        assert_eq!(names(filter_racers(&racers, " lima ")), vec!["Bruno Lima"]);
        assert_eq!(filter_racers(&racers, "").len(), 3);
        assert!(filter_racers(&racers, "xyz").is_empty());
    }
}
