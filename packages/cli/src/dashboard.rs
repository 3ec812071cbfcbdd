//! Interactive terminal dashboard.
//!
//! Holds one [`ViewState`] for the session and mirrors the map's grid
//! overlay onto a [`FeatureSurface`], so every layer toggle goes through the
//! same erase-then-draw update a map client performs.

use chrono::Utc;
use dialoguer::{Input, Select};
use vector_map_analytics::{build_dashboard, header_stats};
use vector_map_fixtures::Fixtures;
use vector_map_grid::GridLayerSet;
use vector_map_view::center::{apply_center_form, apply_location};
use vector_map_view::layers::{in_category, is_grid_layer};
use vector_map_view::style::zone_rule;
use vector_map_view::timestamp::last_updated_now;
use vector_map_view::{
    Basemap, FeatureSurface, GridOverlay, LayerCategory, Tab, ViewState, zone_at, zone_detail,
};
use vector_map_zone_models::{LatLng, Zone};

/// One dashboard session over a loaded dataset.
pub struct Session<'a> {
    fixtures: &'a Fixtures,
    grids: &'a GridLayerSet,
    state: ViewState,
    overlay: GridOverlay<usize>,
    surface: FeatureSurface,
}

impl<'a> Session<'a> {
    /// Starts a session in the initial view.
    #[must_use]
    pub fn new(fixtures: &'a Fixtures, grids: &'a GridLayerSet) -> Self {
        let mut session = Self {
            fixtures,
            grids,
            state: ViewState::default(),
            overlay: GridOverlay::new(),
            surface: FeatureSurface::new(),
        };
        session.redraw();
        session
    }

    /// Current view state.
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Toggles a layer, redrawing the grid overlay when a grid layer changed.
    pub fn toggle_layer(&mut self, layer_id: &str) -> bool {
        let active = self.state.toggle_layer(layer_id);
        if is_grid_layer(layer_id) {
            self.redraw();
        }
        active
    }

    /// Selects the zone containing `point`. A point outside every zone
    /// leaves the selection as it was.
    pub fn select_at(&mut self, point: LatLng) -> Option<&'a Zone> {
        let fixtures = self.fixtures;
        let zone = zone_at(&fixtures.zones, point)?;
        self.state.select_zone(Some(zone.id.clone()));
        Some(zone)
    }

    /// Number of grid cells currently drawn.
    #[must_use]
    pub fn drawn_cells(&self) -> usize {
        self.surface.features().count()
    }

    fn redraw(&mut self) {
        let layers = self.grids.active(&self.state.active_layers);
        self.overlay.update(&mut self.surface, &layers);
    }
}

enum Action {
    ToggleLayer,
    SelectZone,
    PickPoint,
    SetCenter,
    GoToLocation,
    Basemap,
    SwitchTab,
    Quit,
}

impl Action {
    const ALL: &[Self] = &[
        Self::ToggleLayer,
        Self::SelectZone,
        Self::PickPoint,
        Self::SetCenter,
        Self::GoToLocation,
        Self::Basemap,
        Self::SwitchTab,
        Self::Quit,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::ToggleLayer => "Toggle a layer",
            Self::SelectZone => "Select a zone",
            Self::PickPoint => "Pick zone at coordinates",
            Self::SetCenter => "Set map center",
            Self::GoToLocation => "Go to popular location",
            Self::Basemap => "Change basemap",
            Self::SwitchTab => "Switch tab",
            Self::Quit => "Quit",
        }
    }
}

/// Runs the dashboard until the user quits.
///
/// # Errors
///
/// Returns an error if a prompt fails.
pub fn run(fixtures: &Fixtures, grids: &GridLayerSet) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(fixtures, grids);
    let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();

    loop {
        render(&session);

        let idx = Select::new()
            .with_prompt("Dashboard")
            .items(&labels)
            .default(0)
            .interact()?;

        match Action::ALL[idx] {
            Action::ToggleLayer => handle_toggle(&mut session)?,
            Action::SelectZone => handle_select(&mut session)?,
            Action::PickPoint => handle_pick(&mut session)?,
            Action::SetCenter => handle_center(&mut session)?,
            Action::GoToLocation => handle_location(&mut session)?,
            Action::Basemap => handle_basemap(&mut session)?,
            Action::SwitchTab => {
                let tab = match session.state.tab {
                    Tab::Map => Tab::Analytics,
                    Tab::Analytics => Tab::Map,
                };
                session.state.set_tab(tab);
            }
            Action::Quit => return Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

fn handle_toggle(session: &mut Session<'_>) -> Result<(), Box<dyn std::error::Error>> {
    let entries: Vec<_> = LayerCategory::all()
        .iter()
        .flat_map(|c| in_category(*c))
        .collect();
    let labels: Vec<String> = entries
        .iter()
        .map(|l| {
            let mark = if session.state.is_active(l.id) { "x" } else { " " };
            format!("[{mark}] {} - {} ({})", l.label, l.description, l.category)
        })
        .collect();

    let idx = Select::new()
        .with_prompt("Layer")
        .items(&labels)
        .default(0)
        .interact()?;

    let id = entries[idx].id;
    let active = session.toggle_layer(id);
    log::info!("{id} {}", if active { "on" } else { "off" });
    Ok(())
}

fn handle_select(session: &mut Session<'_>) -> Result<(), Box<dyn std::error::Error>> {
    let mut labels: Vec<String> = session
        .fixtures
        .zones
        .iter()
        .map(|z| format!("{} ({})", z.name, z.risk_level))
        .collect();
    labels.push("(clear selection)".to_string());

    let idx = Select::new()
        .with_prompt("Zone")
        .items(&labels)
        .default(0)
        .interact()?;

    let zone_id = session.fixtures.zones.get(idx).map(|z| z.id.clone());
    session.state.select_zone(zone_id);
    Ok(())
}

fn handle_pick(session: &mut Session<'_>) -> Result<(), Box<dyn std::error::Error>> {
    let lat: String = Input::new().with_prompt("Latitude").interact_text()?;
    let lng: String = Input::new().with_prompt("Longitude").interact_text()?;

    let Some(point) = vector_map_view::center::parse_center(&lat, &lng) else {
        println!("Coordinates must be numbers.");
        return Ok(());
    };

    match session.select_at(point) {
        Some(zone) => println!("Selected {}.", zone.name),
        None => println!("No zone at {lat}, {lng}; selection unchanged."),
    }
    Ok(())
}

fn handle_center(session: &mut Session<'_>) -> Result<(), Box<dyn std::error::Error>> {
    let current = session.state.center;
    let lat: String = Input::new()
        .with_prompt("Latitude")
        .default(current.lat.to_string())
        .interact_text()?;
    let lng: String = Input::new()
        .with_prompt("Longitude")
        .default(current.lng.to_string())
        .interact_text()?;

    if !apply_center_form(&mut session.state, &lat, &lng) {
        println!("Center unchanged: coordinates must be numbers.");
    }
    Ok(())
}

fn handle_location(session: &mut Session<'_>) -> Result<(), Box<dyn std::error::Error>> {
    let locations = &session.fixtures.locations;
    let names: Vec<&str> = locations.iter().map(|l| l.name.as_str()).collect();

    let idx = Select::new()
        .with_prompt("Location")
        .items(&names)
        .default(0)
        .interact()?;

    if let Some(location) = apply_location(&mut session.state, locations, names[idx]) {
        println!(
            "Centered on {} ({:.6}, {:.6}).",
            location.name, location.center.lat, location.center.lng
        );
    }
    Ok(())
}

fn handle_basemap(session: &mut Session<'_>) -> Result<(), Box<dyn std::error::Error>> {
    let labels: Vec<&str> = Basemap::all().iter().map(|b| b.descriptor().name).collect();

    let idx = Select::new()
        .with_prompt("Basemap")
        .items(&labels)
        .default(0)
        .interact()?;

    session.state.set_basemap(Basemap::all()[idx]);
    Ok(())
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn render(session: &Session<'_>) {
    let fixtures = session.fixtures;
    let state = &session.state;
    let stats = header_stats(&fixtures.zones, &fixtures.hotspots);

    println!();
    println!(
        "Zones: {} high / {} medium / {} low | Cases: {} | Hotspots: {} ({} high) | Updated {}",
        stats.zones.high,
        stats.zones.medium,
        stats.zones.low,
        stats.total_cases,
        stats.total_hotspots,
        stats.high_risk_hotspots,
        last_updated_now()
    );
    println!("{}", "-".repeat(100));

    match state.tab {
        Tab::Map => render_map(session),
        Tab::Analytics => render_analytics(fixtures),
    }
}

fn render_map(session: &Session<'_>) {
    let state = session.state();

    println!(
        "Basemap: {} | Center: {:.6}, {:.6} | Zones colored by: {}",
        state.basemap.descriptor().name,
        state.center.lat,
        state.center.lng,
        zone_rule(&state.active_layers)
    );
    println!("Active layers: {}", state.active_layers.join(", "));

    let drawn: Vec<&str> = session.overlay.layer_ids().collect();
    if !drawn.is_empty() {
        println!(
            "Grid overlay: {} cells across {}",
            session.drawn_cells(),
            drawn.join(", ")
        );
    }

    let Some(detail) = zone_detail(session.fixtures, state.selected_zone.as_deref(), Utc::now())
    else {
        println!("No zone selected.");
        return;
    };

    println!();
    println!("{} [{}]", detail.name, detail.badge);
    println!("{}", detail.explanation);
    for driver in &detail.drivers {
        println!("  * {} ({})", driver.factor, driver.impact);
    }
    println!(
        "Population {} | Cases {} ({}) | Traps {} | {}°C | {}% humidity",
        detail.metrics.population,
        detail.metrics.recent_cases,
        detail.metrics.case_trend,
        detail.metrics.trap_count,
        detail.metrics.temperature,
        detail.metrics.humidity
    );
    for slice in &detail.risk_breakdown {
        println!("  {:<14} {}", slice.name, slice.share.format(0));
    }
    println!(
        "Hotspots: {} ({} high, {} medium, {} low), {} cases",
        detail.hotspots.total,
        detail.hotspots.by_risk.high,
        detail.hotspots.by_risk.medium,
        detail.hotspots.by_risk.low,
        detail.hotspots.total_cases
    );
    println!(
        "Recommended ({}): {} - {}",
        detail.recommendation.priority, detail.recommendation.action, detail.recommendation.details
    );
    println!("Last updated {}", detail.last_updated);
}

fn render_analytics(fixtures: &Fixtures) {
    let dashboard = build_dashboard(fixtures);
    let kpis = &dashboard.kpis;

    println!(
        "Total cases: {} | Week over week: {} ({}) | Completed fogging: {}",
        kpis.total_cases,
        kpis.week_over_week.change.format(1),
        kpis.week_over_week.direction,
        kpis.completed_fogging
    );
    println!(
        "Avg response: {:.1}h | Sites eliminated: {} | High-risk zones: {} | Budget used: {}",
        kpis.avg_response_time,
        kpis.breeding_sites_eliminated,
        kpis.high_risk_zones,
        kpis.budget_utilized.format(0)
    );

    println!();
    println!("{:<24} {:>8} {:>14}", "ZONE", "FOGGING", "EFFECTIVENESS");
    for row in &dashboard.fogging_by_zone {
        println!("{:<24} {:>8} {:>13.1}%", row.name, row.count, row.effectiveness);
    }

    println!();
    println!("Recent fogging:");
    for op in &dashboard.recent_fogging {
        println!(
            "  {} {:<20} {:<10} {}",
            op.date, op.zone_name, op.team, op.status
        );
    }

    let budget = &dashboard.budget;
    println!();
    println!(
        "Budget: ₹{:.2}M total, ₹{:.2}M spent, ₹{:.2}M remaining",
        budget.total_millions, budget.spent_millions, budget.remaining_millions
    );
}
