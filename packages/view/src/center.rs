//! The map center control.

use vector_map_fixtures::PopularLocation;
use vector_map_zone_models::LatLng;

use crate::state::ViewState;

/// Parses free-form latitude and longitude text.
///
/// Returns `None` unless both parse as finite floats.
#[must_use]
pub fn parse_center(lat: &str, lng: &str) -> Option<LatLng> {
    let lat = lat.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
    let lng = lng.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some(LatLng::new(lat, lng))
}

/// Applies the center form. Leaves the center unchanged unless both fields
/// parse. Returns whether the center changed.
pub fn apply_center_form(state: &mut ViewState, lat: &str, lng: &str) -> bool {
    parse_center(lat, lng).is_some_and(|center| {
        state.set_center(center);
        true
    })
}

/// Recenters on a popular location by exact name. Returns the location
/// used, if any.
pub fn apply_location<'a>(
    state: &mut ViewState,
    locations: &'a [PopularLocation],
    name: &str,
) -> Option<&'a PopularLocation> {
    let location = locations.iter().find(|l| l.name == name)?;
    state.set_center(location.center);
    Some(location)
}

#[cfg(test)]
mod tests {
    use vector_map_fixtures::Fixtures;

    use super::*;

    #[test]
    fn parses_trimmed_floats() {
        assert_eq!(parse_center(" 18.5204", "73.8567 "), Some(LatLng::new(18.5204, 73.8567)));
        assert_eq!(parse_center("18.5", ""), None);
        assert_eq!(parse_center("north", "73.8"), None);
        assert_eq!(parse_center("NaN", "73.8"), None);
    }

    #[test]
    fn bad_form_leaves_center_alone() {
        let mut state = ViewState::default();
        let before = state.center;
        assert!(!apply_center_form(&mut state, "18.5", "east"));
        assert_eq!(state.center, before);

        assert!(apply_center_form(&mut state, "18.53", "73.85"));
        assert_eq!(state.center, LatLng::new(18.53, 73.85));
    }

    #[test]
    fn location_shortcut() {
        let fixtures = Fixtures::embedded();
        let mut state = ViewState::default();

        let spot = apply_location(&mut state, &fixtures.locations, "Pune City Center").unwrap();
        assert_eq!(state.center, spot.center);
        assert_eq!(state.center, LatLng::new(18.5204, 73.8567));
        assert!(apply_location(&mut state, &fixtures.locations, "Atlantis").is_none());
    }
}
