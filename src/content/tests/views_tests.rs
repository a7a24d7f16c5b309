//! Tests for filterable views

use super::{community_csv, news_csv};
use crate::content::ImageOptions;
use crate::content::news::news_from_table;
use crate::content::profiles::profiles_from_table;
use crate::content::views::{CommunityView, Filter, NewsView};
use crate::parser::parse_csv;

fn community_view() -> CommunityView {
    let (profiles, _) =
        profiles_from_table(&parse_csv(&community_csv()), &ImageOptions::default());
    CommunityView::new(profiles)
}

fn news_view() -> NewsView {
    let (items, _) = news_from_table(&parse_csv(&news_csv()), &ImageOptions::default());
    NewsView::new(items)
}

#[test]
fn test_filter_parse() {
    assert_eq!(Filter::parse("Todos"), Filter::All);
    assert_eq!(Filter::parse("ALL"), Filter::All);
    assert_eq!(Filter::parse("  "), Filter::All);
    assert_eq!(Filter::parse(" Ocaña "), Filter::Only("Ocaña".to_string()));
    assert_eq!("Agro".parse::<Filter>().unwrap(), Filter::Only("Agro".to_string()));
}

#[test]
fn test_filter_matches_exactly() {
    let filter = Filter::Only("Ocaña".to_string());
    assert!(filter.matches("Ocaña"));
    assert!(!filter.matches("ocaña"));
    assert!(Filter::All.matches(""));
}

#[test]
fn test_community_options() {
    let view = community_view();
    assert_eq!(view.municipality_options(), ["Ocaña", "Pamplona"]);
    assert_eq!(view.sector_options(), ["Agro", "Otro"]);
}

#[test]
fn test_community_filters_combine() {
    let mut view = community_view();
    assert_eq!(view.filtered().len(), 3);

    view.set_municipality_filter(Filter::parse("Ocaña"));
    assert_eq!(view.filtered().len(), 2);

    view.set_sector_filter(Filter::parse("Agro"));
    assert_eq!(view.filtered().len(), 2);

    view.set_municipality_filter(Filter::parse("Pamplona"));
    assert!(view.filtered().is_empty());

    view.reset_filters();
    assert_eq!(view.filtered().len(), 3);
}

#[test]
fn test_preview_keeps_sheet_order() {
    let view = community_view();
    let names: Vec<_> = view
        .preview(2)
        .iter()
        .map(|p| p.entrepreneur_name.as_str())
        .collect();
    assert_eq!(names, ["Ana Pérez", "Luis Gómez"]);
    assert_eq!(view.preview(10).len(), 3);
    assert!(CommunityView::default().preview(3).is_empty());
}

#[test]
fn test_news_view() {
    let mut view = news_view();
    assert_eq!(view.municipality_options(), ["Cúcuta", "Ocaña"]);
    assert_eq!(view.preview(3).len(), 3);

    view.set_municipality_filter(Filter::parse("Ocaña"));
    let titles: Vec<_> = view.filtered().iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, ["Feria regional", "Ruta 3"]);

    view.set_municipality_filter(Filter::parse("Todos"));
    assert_eq!(view.filtered().len(), view.items().len());
}
