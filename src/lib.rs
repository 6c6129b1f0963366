//! Wayle MPRIS - typed bindings for the MPRIS2 media player interfaces.
//!
//! MPRIS2 players register on the session bus as
//! `org.mpris.MediaPlayer2.<id>` and export the base and player interfaces
//! at `/org/mpris/MediaPlayer2`. This crate lists those players and wraps
//! every method and property of both interfaces in a typed async call.
//! There is no caching: each call is one round trip.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wayle_mpris::{Player, list_players};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let connection = zbus::Connection::session().await?;
//!
//! for id in list_players(&connection).await? {
//!     let player = Player::new(connection.clone(), id);
//!     println!("{}: {}", player.id(), player.identity().await?);
//! }
//! # Ok(())
//! # }
//! ```

/// Message bus seam and its zbus implementation.
pub mod bus;

/// Command-line front end.
pub mod cli;

/// Configuration for the command-line front end.
pub mod config;

/// Typed decoding of property values.
pub mod decode;

/// Player discovery.
pub mod discovery;

/// Error types.
pub mod error;

/// Protocol names and paths.
pub mod interfaces;

/// Track metadata.
pub mod metadata;

/// Player handle.
pub mod player;

/// Subscriber setup for structured logging.
pub mod tracing_config;

/// Identifier and status types.
pub mod types;

pub use bus::{MessageBus, MethodArg, MethodCall, PropertyKey, connect};
pub use discovery::{list_players, player_ids};
pub use error::{MprisError, Result};
pub use metadata::Metadata;
pub use player::Player;
pub use types::{LoopStatus, PlaybackStatus, PlayerId};
