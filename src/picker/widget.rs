//! The map picker widget
//!
//! One owned context struct instead of page globals: the view, the single
//! draggable marker, the readout text and the two capability seams (host
//! bridge, geolocation). Every operation here corresponds to a UI event in
//! the shipped webapp.

use crate::constants::map::{DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG, DEFAULT_ZOOM, LOCATE_ZOOM};
use crate::error::{Error, Result};
use crate::picker::bridge::HostBridge;
use crate::picker::location::LocationProvider;
use crate::picker::{Coordinates, Selection};

/// Map viewport: center and zoom
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    center: Coordinates,
    zoom: u8,
}

impl MapView {
    pub fn new(center: Coordinates, zoom: u8) -> Self {
        Self { center, zoom }
    }

    pub fn center(&self) -> Coordinates {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Recenter and rezoom in one step, like Leaflet's `setView`
    pub fn set_view(&mut self, center: Coordinates, zoom: u8) {
        self.center = center;
        self.zoom = zoom;
    }
}

/// The one draggable marker; its position is the widget's only mutable state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    position: Coordinates,
}

impl Marker {
    pub fn new(position: Coordinates) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Coordinates {
        self.position
    }

    pub fn set_position(&mut self, position: Coordinates) {
        self.position = position;
    }
}

/// Event-driven picker bound to a host bridge and a location provider
pub struct MapPicker<B, L> {
    view: MapView,
    marker: Marker,
    bridge: B,
    locator: L,
    readout: String,
}

impl<B: HostBridge, L: LocationProvider> MapPicker<B, L> {
    /// Initialize at the default center and zoom
    pub fn new(bridge: B, locator: L) -> Self {
        Self::with_view(
            bridge,
            locator,
            Coordinates::new(DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG),
            DEFAULT_ZOOM,
        )
    }

    /// Initialize with an explicit view; the marker starts at its center
    pub fn with_view(bridge: B, locator: L, center: Coordinates, zoom: u8) -> Self {
        bridge.notify_ready();
        Self {
            view: MapView::new(center, zoom),
            marker: Marker::new(center),
            bridge,
            locator,
            readout: center.readout(),
        }
    }

    pub fn view(&self) -> &MapView {
        &self.view
    }

    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    /// Current coordinate readout text
    pub fn readout(&self) -> &str {
        &self.readout
    }

    /// Marker drag finished at a new position
    ///
    /// No bounds checking: the map hands over whatever the user dragged to.
    pub fn marker_dragged(&mut self, to: Coordinates) {
        self.marker.set_position(to);
        self.readout = to.readout();
    }

    /// Map clicked: the marker jumps to the clicked point
    pub fn map_clicked(&mut self, at: Coordinates) {
        self.marker.set_position(at);
        self.readout = at.readout();
    }

    /// Locate button pressed
    ///
    /// Missing capability or a failed request returns `LocationUnavailable`
    /// with a user-facing message and leaves the marker untouched. Success
    /// moves the marker, recenters the view and refreshes the readout.
    pub async fn locate(&mut self) -> Result<Coordinates> {
        if !self.locator.is_available() {
            return Err(Error::LocationUnavailable(
                "Geolocation is not supported".to_string(),
            ));
        }

        match self.locator.current_position().await {
            Ok(pos) => {
                self.marker.set_position(pos);
                self.view.set_view(pos, LOCATE_ZOOM);
                self.readout = pos.readout();
                Ok(pos)
            }
            Err(Error::LocationUnavailable(reason)) => Err(Error::LocationUnavailable(format!(
                "Could not get location: {}",
                reason
            ))),
            Err(e) => Err(e),
        }
    }

    /// Choose button pressed: hand the current selection to the host
    ///
    /// A connected bridge receives the JSON payload and is then asked to
    /// close the widget; the standalone bridge surfaces the same payload to
    /// the user instead.
    pub fn choose(&mut self, date: Option<&str>) -> Result<Selection> {
        let selection = Selection::new(self.marker.position(), date);
        let payload = serde_json::to_string(&selection)?;
        self.bridge.deliver(&payload)?;
        self.bridge.dismiss();
        Ok(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::bridge::{ChannelBridge, StandaloneBridge};
    use crate::picker::location::{Failing, FixedLocation, Unavailable};
    use std::sync::mpsc;

    fn standalone_picker() -> MapPicker<StandaloneBridge, Unavailable> {
        MapPicker::new(StandaloneBridge::new(), Unavailable)
    }

    #[test]
    fn test_initial_state() {
        let picker = standalone_picker();
        assert_eq!(picker.marker().position(), Coordinates::new(55.0, 37.0));
        assert_eq!(picker.readout(), "55.00000, 37.00000");
    }

    #[test]
    fn test_drag_updates_readout() {
        let mut picker = standalone_picker();
        picker.marker_dragged(Coordinates::new(-33.856789, 151.215123));
        assert_eq!(picker.readout(), "-33.85679, 151.21512");
    }

    #[test]
    fn test_click_moves_marker() {
        let mut picker = standalone_picker();
        picker.map_clicked(Coordinates::new(10.123456, 20.654321));
        assert_eq!(picker.marker().position(), Coordinates::new(10.123456, 20.654321));
        assert_eq!(picker.readout(), "10.12346, 20.65432");
    }

    #[test]
    fn test_out_of_range_click_accepted() {
        // The widget performs no bounds checking on user interaction
        let mut picker = standalone_picker();
        picker.map_clicked(Coordinates::new(95.0, 200.0));
        assert_eq!(picker.readout(), "95.00000, 200.00000");
    }

    #[test]
    fn test_choose_with_bridge_sends_and_closes() {
        let (tx, rx) = mpsc::channel();
        let mut picker = MapPicker::new(ChannelBridge::new(tx), Unavailable);
        picker.map_clicked(Coordinates::new(55.0, 37.0));

        picker.choose(None).unwrap();

        assert_eq!(rx.recv().unwrap(), r#"{"lat":55,"lng":37}"#);
        assert!(picker.bridge().dismissed());
    }

    #[test]
    fn test_choose_with_date() {
        let (tx, rx) = mpsc::channel();
        let mut picker = MapPicker::new(ChannelBridge::new(tx), Unavailable);
        picker.map_clicked(Coordinates::new(10.1, 20.2));

        picker.choose(Some("2024-05-01")).unwrap();

        assert_eq!(
            rx.recv().unwrap(),
            r#"{"lat":10.1,"lng":20.2,"date":"2024-05-01"}"#
        );
    }

    #[test]
    fn test_choose_empty_date_omitted() {
        let (tx, rx) = mpsc::channel();
        let mut picker = MapPicker::new(ChannelBridge::new(tx), Unavailable);
        picker.map_clicked(Coordinates::new(10.1, 20.2));

        picker.choose(Some("")).unwrap();

        assert_eq!(rx.recv().unwrap(), r#"{"lat":10.1,"lng":20.2}"#);
    }

    #[test]
    fn test_choose_without_bridge_falls_back_to_alert() {
        let mut picker = standalone_picker();
        picker.map_clicked(Coordinates::new(55.0, 37.0));

        picker.choose(None).unwrap();

        let alerts = picker.bridge().alerts();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].contains(r#"{"lat":55,"lng":37}"#));
    }

    #[tokio::test]
    async fn test_locate_unavailable() {
        let mut picker = standalone_picker();
        let before = picker.marker().position();

        let err = picker.locate().await.unwrap_err();

        assert!(matches!(err, Error::LocationUnavailable(_)));
        assert!(err.to_string().contains("not supported"));
        // Marker did not move and the widget stays usable
        assert_eq!(picker.marker().position(), before);
        assert_eq!(picker.readout(), before.readout());
    }

    #[tokio::test]
    async fn test_locate_success_recenters() {
        let mut picker = MapPicker::new(
            StandaloneBridge::new(),
            FixedLocation(Coordinates::new(48.8, 2.3)),
        );

        let pos = picker.locate().await.unwrap();

        assert_eq!(pos, Coordinates::new(48.8, 2.3));
        assert_eq!(picker.marker().position(), pos);
        assert_eq!(picker.view().center(), pos);
        assert_eq!(picker.view().zoom(), LOCATE_ZOOM);
        assert_eq!(picker.readout(), "48.80000, 2.30000");
    }

    #[tokio::test]
    async fn test_locate_failure_keeps_marker() {
        let mut picker = MapPicker::new(
            StandaloneBridge::new(),
            Failing("User denied Geolocation".to_string()),
        );
        let before = picker.marker().position();

        let err = picker.locate().await.unwrap_err();

        assert!(err.to_string().contains("Could not get location"));
        assert!(err.to_string().contains("User denied Geolocation"));
        assert_eq!(picker.marker().position(), before);

        // A failure is terminal for that attempt only; choosing still works
        assert!(picker.choose(None).is_ok());
    }
}
