//! Stubbed location detection. A real build would ask a geolocation service;
//! this one resolves a fixed Mumbai neighbourhood after a short delay so the
//! calling flow still exercises an await point.

use std::time::Duration;

use tracing::{debug, info};

/// Where the customer appears to be ordering from.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedLocation {
    pub city: String,
    pub area: String,
    pub lat: f64,
    pub lng: f64,
}

const LOOKUP_DELAY: Duration = Duration::from_millis(1000);

/// Pretends to look up the device location. Always resolves Andheri West
/// after a one-second delay; there is no failure or cancellation path.
pub async fn detect_location() -> DetectedLocation {
    debug!("Looking up device location");
    tokio::time::sleep(LOOKUP_DELAY).await;

    let location = DetectedLocation {
        city: "Mumbai".to_string(),
        area: "Andheri West".to_string(),
        lat: 19.1350,
        lng: 72.8358,
    };
    info!(city = %location.city, area = %location.area, "Location detected");
    location
}
