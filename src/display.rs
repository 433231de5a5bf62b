//! Text and JSON rendering of recommendation cards

use crate::map::MapResult;
use crate::models::{DestinationRecord, UserPreferences};
use crate::recommend::Recommendation;
use serde::Serialize;

/// Shown when no destination satisfies every filter
pub const NO_MATCHES: &str = "No destinations match your filters. Try being more flexible!";

/// Render one card: destination details followed by the current weather
#[must_use]
pub fn render_card(card: &Recommendation<'_>, map: Option<&MapResult>) -> String {
    let destination = card.destination;
    let weather = &card.weather;

    let mut out = format!(
        "== {} ==\n\
         Country:     {}\n\
         Best Season: {}\n\
         Budget:      {}\n\
         {}\n\
         Current Weather\n  \
         Temperature: {}\n  \
         {}\n  \
         {}\n",
        destination.title(),
        destination.country,
        destination.best_season,
        destination.budget_level.format_bags(),
        destination.description,
        weather.format_temperature(),
        weather.conditions,
        weather.format_season(),
    );

    if let Some(map) = map {
        out.push_str(&render_map(map));
        out.push('\n');
    }
    out
}

/// Render the recommendation list, or the relax-your-filters hint when empty
#[must_use]
pub fn render_recommendations(
    cards: &[Recommendation<'_>],
    maps: &[Option<MapResult>],
) -> String {
    if cards.is_empty() {
        return format!("{NO_MATCHES}\n");
    }

    let mut out = String::from("Recommended Destinations\n\n");
    for (i, card) in cards.iter().enumerate() {
        let map = maps.get(i).and_then(Option::as_ref);
        out.push_str(&render_card(card, map));
        out.push('\n');
    }
    out
}

/// One line describing a map lookup outcome
#[must_use]
pub fn render_map(map: &MapResult) -> String {
    match map {
        MapResult::Found(view) => format!(
            "Map: {} ({}) zoom {}",
            view.location.name,
            view.location.format_coordinates(),
            view.zoom
        ),
        other => format!("⚠ {}", other.warning().unwrap_or_default()),
    }
}

/// Catalog listing, one destination per line
#[must_use]
pub fn render_catalog(records: &[DestinationRecord]) -> String {
    records
        .iter()
        .map(|record| {
            format!(
                "{:<12} {:<11} {:<5} {:<7} {}\n",
                record.name,
                record.category,
                record.budget_level.format_bags(),
                record.best_season,
                record.country
            )
        })
        .collect()
}

#[derive(Serialize)]
struct CardJson<'a> {
    #[serde(flatten)]
    card: &'a Recommendation<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    map: Option<&'a MapResult>,
}

#[derive(Serialize)]
struct ReportJson<'a> {
    preferences: &'a UserPreferences,
    month: u32,
    recommendations: Vec<CardJson<'a>>,
}

/// JSON document with the applied preferences and every card
pub fn render_json(
    prefs: &UserPreferences,
    month: u32,
    cards: &[Recommendation<'_>],
    maps: &[Option<MapResult>],
) -> crate::Result<String> {
    let report = ReportJson {
        preferences: prefs,
        month,
        recommendations: cards
            .iter()
            .enumerate()
            .map(|(i, card)| CardJson {
                card,
                map: maps.get(i).and_then(Option::as_ref),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
