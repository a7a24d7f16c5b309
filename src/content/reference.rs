//! Static reference data: benefiting municipalities and tour routes

use crate::constants::{MUNICIPALITIES, ROUTES};
use crate::models::{Municipality, Route, RouteStop};

pub fn municipalities() -> Vec<Municipality> {
    MUNICIPALITIES
        .iter()
        .map(|&(name, lat, lng)| Municipality {
            name: name.to_string(),
            lat,
            lng,
        })
        .collect()
}

pub fn find_municipality(name: &str) -> Option<Municipality> {
    let name = name.trim();
    municipalities()
        .into_iter()
        .find(|m| m.name.to_lowercase() == name.to_lowercase())
}

pub fn routes() -> Vec<Route> {
    ROUTES
        .iter()
        .map(|&(name, stops)| Route {
            name: name.to_string(),
            stops: stops
                .iter()
                .map(|&(date, municipality)| RouteStop {
                    date: date.to_string(),
                    municipality: municipality.to_string(),
                })
                .collect(),
        })
        .collect()
}
