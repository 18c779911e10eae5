//! Hand gesture classification from hand landmarks.
//!
//! This crate takes the 21-point hand skeletons estimated by an external hand tracking pipeline
//! (one [`HandLandmarks`] set per detected hand and frame) and classifies each frame into a named
//! [`Gesture`] using purely geometric threshold rules. It performs no camera capture, inference,
//! or rendering itself; those are the job of the surrounding application.
//!
//! Classification is stateless and per-frame. There is no smoothing or debouncing across frames,
//! so dropped or reordered frames cannot corrupt anything.
//!
//! # Coordinates
//!
//! Landmark positions use normalized image coordinates: X and Y are in range 0.0 to 1.0, with X
//! pointing right and Y pointing *down*, so smaller Y values are higher up in the camera image.
//! This is the convention used by MediaPipe-style hand landmark networks.
//!
//! [`HandLandmarks`]: hand::HandLandmarks
//! [`Gesture`]: hand::gesture::Gesture

use log::LevelFilter;

pub mod hand;
pub mod landmark;


/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and this library will log at *debug* level; the `RUST_LOG` environment
/// variable can override this.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
