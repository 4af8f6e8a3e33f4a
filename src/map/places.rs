use crate::map::models::{LatLng, TypicalRoute};

pub const PARIS: LatLng = LatLng::new(48.8566, 2.3522);
pub const LYON: LatLng = LatLng::new(45.7640, 4.8357);
pub const MARSEILLE: LatLng = LatLng::new(43.2965, 5.3698);
pub const BEAUVAIS: LatLng = LatLng::new(49.4333, 2.0833);
pub const TOULOUSE: LatLng = LatLng::new(43.6047, 1.4442);
pub const NANTES: LatLng = LatLng::new(47.2184, -1.5536);

const KNOWN_CITIES: [(&str, LatLng); 6] = [
    ("paris", PARIS),
    ("lyon", LYON),
    ("marseille", MARSEILLE),
    ("beauvais", BEAUVAIS),
    ("toulouse", TOULOUSE),
    ("nantes", NANTES),
];

const TYPICAL_ROUTES: [(&str, LatLng, LatLng); 5] = [
    ("Paris → Lyon", PARIS, LYON),
    ("Paris → Marseille", PARIS, MARSEILLE),
    ("Paris → Toulouse", PARIS, TOULOUSE),
    ("Paris → Nantes", PARIS, NANTES),
    ("Lyon → Marseille", LYON, MARSEILLE),
];

/// Looks a free-text place up in the built-in table, e.g. `" Lyon, France "`.
pub fn known_city(text: &str) -> Option<LatLng> {
    let normalized = text.trim().to_lowercase();
    let name = normalized
        .strip_suffix(", france")
        .unwrap_or(&normalized)
        .trim();
    KNOWN_CITIES
        .iter()
        .find(|(city, _)| *city == name)
        .map(|(_, location)| *location)
}

pub fn typical_routes() -> Vec<TypicalRoute> {
    TYPICAL_ROUTES
        .iter()
        .map(|(name, start, end)| TypicalRoute {
            name: name.to_string(),
            start: *start,
            end: *end,
        })
        .collect()
}

/// The pair the interactive page sends when its button is pressed.
pub fn example_route() -> TypicalRoute {
    let (name, start, end) = TYPICAL_ROUTES[0];
    TypicalRoute {
        name: name.to_string(),
        start,
        end,
    }
}
