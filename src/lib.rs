//! # aurora_lights_rs
//!
//! An async Rust library for controlling Nanoleaf Aurora light panels
//! over the local network.
//!
//! The device exposes an HTTP/JSON API on port 16021; this crate maps
//! that API onto methods of [`Aurora`]. State is never cached: every
//! read asks the device, and every write is a single request (except
//! the documented compound operations).
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::net::Ipv4Addr;
//! use std::str::FromStr;
//! use aurora_lights_rs::{Aurora, Color};
//!
//! # async fn run() -> Result<(), aurora_lights_rs::Error> {
//! // The auth token comes from the device's pairing flow.
//! let panels = Aurora::new(Ipv4Addr::from_str("192.168.1.100").unwrap(), "token");
//!
//! panels.set_on(true).await?;
//! panels.set_brightness(80).await?;
//! panels.set_rgb(Color::from_str("FF8000")?).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - **Power**: on/off and toggle
//! - **Channels**: brightness, hue, saturation, and color temperature,
//!   each with absolute and relative writes
//! - **RGB Colors**: hex or numeric colors via [`Color`], converted
//!   client-side to the device's hue/saturation/brightness units
//! - **Layout**: panel count, side length, and per-panel positions
//! - **Effects**: select, list, random rotation, details, rename,
//!   delete, and raw uploads
//!
//! ## Errors
//!
//! No failure is fatal. Device and network failures surface as
//! [`Error`] values and are logged through the [`log`] facade; an `Err`
//! is always distinguishable from a real `false`/`0` payload.

mod client;
mod command;
mod errors;
mod layout;
mod transport;
mod types;

// Re-export public API
pub use client::Aurora;
pub use errors::Error;
pub use layout::PanelPosition;
pub use types::{Color, ColorMode, Hsv};
