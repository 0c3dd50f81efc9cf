use super::status::{LoadError, Loading};
use crate::error::report;
use club_api::format::format_price_brl;
use club_api::{ClubApiClient, Venue};
use dioxus::prelude::*;

/// "Seg-Sex: ...", "Sáb: ...", "Dom: ..." for the days the venue has hours
pub fn schedule_lines(venue: &Venue) -> Vec<String> {
    [
        ("Seg-Sex", &venue.schedule_weekday),
        ("Sáb", &venue.schedule_saturday),
        ("Dom", &venue.schedule_sunday),
    ]
    .into_iter()
    .filter_map(|(day, hours)| {
        hours
            .as_deref()
            .filter(|h| !h.trim().is_empty())
            .map(|h| format!("{}: {}", day, h))
    })
    .collect()
}

/// "4 a 12 pessoas", "mín. 4 pessoas" or nothing
pub fn participants_label(venue: &Venue) -> Option<String> {
    match (venue.min_participants, venue.max_participants) {
        (Some(min), Some(max)) => Some(format!("{} a {} pessoas", min, max)),
        (Some(min), None) => Some(format!("mín. {} pessoas", min)),
        (None, Some(max)) => Some(format!("até {} pessoas", max)),
        (None, None) => None,
    }
}

#[component]
pub fn LocationsScreen() -> Element {
    let client = use_context::<ClubApiClient>();

    let venues = use_resource(move || {
        let client = client.clone();
        async move { report("locations", client.venues().await) }
    });

    rsx! {
        div { style: "padding: 16px; max-width: 900px; margin: 0 auto;",
            h1 { style: "color: #d62828; margin: 0 0 12px; font-size: 24px; font-weight: 700;",
                "📍 Kartódromos"
            }
            match venues.read().clone() {
                Some(Ok(list)) if list.is_empty() => rsx! {
                    div { style: "text-align: center; padding: 40px; color: #999;", "Nenhum kartódromo cadastrado" }
                },
                Some(Ok(list)) => rsx! {
                    div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 12px;",
                        for venue in list {
                            VenueCard { key: "{venue.location_id}", venue }
                        }
                    }
                },
                Some(Err(msg)) => rsx! { LoadError { message: msg } },
                None => rsx! { Loading {} },
            }
        }
    }
}

#[component]
fn VenueCard(venue: Venue) -> Element {
    let price = format_price_brl(venue.price_per_person, venue.rental_duration.as_deref());
    let address = venue.full_address();
    let schedule = schedule_lines(&venue);
    let participants = participants_label(&venue);
    let instagram = venue.instagram_url();

    rsx! {
        div { style: "background: white; border-radius: 12px; overflow: hidden; box-shadow: 0 2px 6px rgba(0,0,0,0.08);",
            if let Some(thumb) = &venue.thumbnail_url {
                img {
                    src: "{thumb}",
                    alt: "{venue.name}",
                    style: "width: 100%; height: 150px; object-fit: cover; display: block;",
                }
            }
            div { style: "padding: 14px;",
                div { style: "font-weight: 700; font-size: 17px; color: #222;", "{venue.name}" }
                if !address.is_empty() {
                    div { style: "font-size: 13px; color: #666; margin-top: 4px;", "📍 {address}" }
                }
                div { style: "display: flex; justify-content: space-between; margin-top: 10px;",
                    span { style: "font-size: 18px; font-weight: 700; color: #d62828;", "{price}" }
                    if let Some(duration) = &venue.rental_duration {
                        span { style: "font-size: 13px; color: #888;", "{duration}" }
                    }
                }
                if let Some(participants) = participants {
                    div { style: "font-size: 13px; color: #555; margin-top: 6px;", "👥 {participants}" }
                }
                if let Some(height) = &venue.min_height {
                    div { style: "font-size: 13px; color: #555;", "📏 Altura mínima: {height}" }
                }
                for line in schedule {
                    div { key: "{line}", style: "font-size: 13px; color: #555;", "🕒 {line}" }
                }
                if let Some(info) = &venue.exclusive_info {
                    div { style: "font-size: 13px; color: #777; margin-top: 6px;", "{info}" }
                }
                if let Some(description) = &venue.description {
                    p { style: "font-size: 13px; color: #777;", "{description}" }
                }
                div { style: "display: flex; gap: 12px; margin-top: 8px;",
                    if let Some(url) = instagram {
                        a { href: "{url}", target: "_blank", style: "color: #c13584;", "Instagram" }
                    }
                    if let Some(site) = &venue.website {
                        a { href: "{site}", target: "_blank", style: "color: #0066cc;", "Site" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_skips_missing_days() {
        let venue = Venue {
            schedule_weekday: Some("10h às 22h".to_string()),
            schedule_sunday: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(schedule_lines(&venue), vec!["Seg-Sex: 10h às 22h"]);
    }

    #[test]
    fn test_participants_label() {
        let mut venue = Venue {
            min_participants: Some(4),
            max_participants: Some(12),
            ..Default::default()
        };
        assert_eq!(participants_label(&venue).as_deref(), Some("4 a 12 pessoas"));

        venue.max_participants = None;
        assert_eq!(participants_label(&venue).as_deref(), Some("mín. 4 pessoas"));

        venue.min_participants = None;
        assert_eq!(participants_label(&venue), None);
    }
}
