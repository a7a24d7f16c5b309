//! Tests for static reference data

use crate::content::reference::{find_municipality, municipalities, routes};

#[test]
fn test_municipalities() {
    let all = municipalities();
    assert_eq!(all.len(), 21);
    assert!(all.iter().all(|m| (6.0..9.0).contains(&m.lat)));
    assert!(all.iter().all(|m| (-74.0..-72.0).contains(&m.lng)));
}

#[test]
fn test_find_municipality() {
    let cucuta = find_municipality(" cúcuta ").unwrap();
    assert_eq!(cucuta.name, "Cúcuta");
    assert_eq!(cucuta.lat, 7.8939);
    assert!(find_municipality("Bogotá").is_none());
}

#[test]
fn test_routes() {
    let routes = routes();
    assert_eq!(routes.len(), 3);
    assert_eq!(routes[0].name, "Ruta 1");
    assert_eq!(routes[0].stops.len(), 8);
    assert_eq!(routes[1].stops.len(), 5);
    assert_eq!(routes[2].stops[0].municipality, "Sardinata");
}
