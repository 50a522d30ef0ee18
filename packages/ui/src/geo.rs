//! Geolocation seam.
//!
//! Workflows ask a [`Geolocator`] for the device position and suspend until it
//! answers. In the browser this is `navigator.geolocation`; elsewhere (and in
//! tests) a [`FixedGeolocator`] answers immediately.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GeoError {
    #[error("Location access denied.")]
    Denied,
    #[error("Geolocation is not supported by this browser.")]
    Unsupported,
    #[error("Location unavailable.")]
    Unavailable,
}

pub trait Geolocator {
    fn current_position(&self) -> impl std::future::Future<Output = Result<Position, GeoError>>;
}

/// Answers every request with the same result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedGeolocator(pub Result<Position, GeoError>);

impl Geolocator for FixedGeolocator {
    async fn current_position(&self) -> Result<Position, GeoError> {
        self.0
    }
}

/// `navigator.geolocation.getCurrentPosition`, bridged into a future.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserGeolocator;

#[cfg(target_arch = "wasm32")]
impl Geolocator for BrowserGeolocator {
    async fn current_position(&self) -> Result<Position, GeoError> {
        use std::cell::RefCell;
        use std::rc::Rc;

        use futures::channel::oneshot;
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;
        use web_sys::{GeolocationPosition, GeolocationPositionError};

        let geolocation = web_sys::window()
            .ok_or(GeoError::Unsupported)?
            .navigator()
            .geolocation()
            .map_err(|_| GeoError::Unsupported)?;

        let (tx, rx) = oneshot::channel::<Result<Position, GeoError>>();
        let tx = Rc::new(RefCell::new(Some(tx)));

        let success_tx = tx.clone();
        let on_success = Closure::once(move |position: GeolocationPosition| {
            let coords = position.coords();
            if let Some(tx) = success_tx.borrow_mut().take() {
                let _ = tx.send(Ok(Position::new(coords.latitude(), coords.longitude())));
            }
        });
        let on_error = Closure::once(move |error: GeolocationPositionError| {
            let reason = if error.code() == GeolocationPositionError::PERMISSION_DENIED {
                GeoError::Denied
            } else {
                GeoError::Unavailable
            };
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Err(reason));
            }
        });

        geolocation
            .get_current_position_with_error_callback(
                on_success.as_ref().unchecked_ref(),
                Some(on_error.as_ref().unchecked_ref()),
            )
            .map_err(|_| GeoError::Unavailable)?;

        let result = rx.await.unwrap_or(Err(GeoError::Unavailable));
        drop((on_success, on_error));
        if let Err(e) = &result {
            tracing::warn!("Geolocation failed: {e}");
        }
        result
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Geolocator for BrowserGeolocator {
    async fn current_position(&self) -> Result<Position, GeoError> {
        Err(GeoError::Unsupported)
    }
}
