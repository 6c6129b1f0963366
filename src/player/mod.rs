//! Handle on a single MPRIS2 player.
//!
//! A [`Player`] owns no state besides its address. Every operation is one
//! round trip to the remote process, grouped by the interface it targets:
//! the base interface in `base`, playback methods in `control` and the
//! player properties in `properties`.

mod base;
mod control;
mod properties;

use tracing::{debug, warn};
use zbus::{
    Connection,
    zvariant::{OwnedValue, Value},
};

use crate::{
    bus::{MessageBus, MethodArg, MethodCall, PropertyKey},
    error::{MprisError, Result},
    interfaces::OBJECT_PATH,
    types::PlayerId,
};

/// Addressable reference to one MPRIS2 player.
///
/// Construction performs no I/O. Whether the player exists and implements
/// the interfaces is only known once an operation is called.
#[derive(Debug, Clone)]
pub struct Player<B = Connection> {
    bus: B,
    id: PlayerId,
    bus_name: String,
}

impl<B: MessageBus> Player<B> {
    /// Creates a handle for the player registered as `org.mpris.MediaPlayer2.<id>`.
    pub fn new(bus: B, id: impl Into<PlayerId>) -> Self {
        let id = id.into();
        let bus_name = id.bus_name();

        Self { bus, id, bus_name }
    }

    /// Identifier this handle was created with.
    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    /// Full bus name calls are addressed to.
    pub fn bus_name(&self) -> &str {
        &self.bus_name
    }

    /// Object path calls are addressed to.
    pub fn object_path(&self) -> &'static str {
        OBJECT_PATH
    }

    /// Bus the handle talks through.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    async fn call(
        &self,
        interface: &'static str,
        member: &'static str,
        args: Vec<MethodArg>,
    ) -> Result<()> {
        let call = MethodCall {
            destination: self.bus_name.clone(),
            path: OBJECT_PATH,
            interface,
            member,
            args,
        };

        debug!(player = %self.id, interface, member, "Calling player method");

        self.bus.call_method(&call).await.map_err(|e| {
            warn!(player = %self.id, interface, member, error = %e, "Player method failed");
            MprisError::from_call(interface, member, e)
        })
    }

    async fn get(
        &self,
        interface: &'static str,
        name: &'static str,
    ) -> Result<(PropertyKey, OwnedValue)> {
        let key = self.property_key(interface, name);

        debug!(player = %self.id, interface, property = name, "Reading player property");

        match self.bus.get_property(&key).await {
            Ok(value) => Ok((key, value)),
            Err(e) => {
                warn!(player = %self.id, interface, property = name, error = %e, "Property read failed");
                Err(MprisError::from_call(interface, name, e))
            }
        }
    }

    async fn set(
        &self,
        interface: &'static str,
        name: &'static str,
        value: Value<'_>,
    ) -> Result<()> {
        let key = self.property_key(interface, name);

        debug!(player = %self.id, interface, property = name, "Writing player property");

        self.bus.set_property(&key, value).await.map_err(|e| {
            warn!(player = %self.id, interface, property = name, error = %e, "Property write failed");
            MprisError::from_call(interface, name, e)
        })
    }

    fn property_key(&self, interface: &'static str, name: &'static str) -> PropertyKey {
        PropertyKey {
            destination: self.bus_name.clone(),
            path: OBJECT_PATH,
            interface,
            name,
        }
    }
}
