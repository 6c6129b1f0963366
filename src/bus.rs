//! Transport seam between the typed bindings and the message bus.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};
use zbus::{
    Connection, fdo,
    names::InterfaceName,
    zvariant::{OwnedObjectPath, OwnedValue, Value},
};

use crate::config::{BusConfig, BusKind};

/// A single argument of a remote method call.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodArg {
    /// D-Bus `x`
    Int64(i64),
    /// D-Bus `o`
    ObjectPath(OwnedObjectPath),
    /// D-Bus `s`
    Str(String),
}

/// Fully addressed remote method call.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    /// Bus name of the service receiving the call
    pub destination: String,
    /// Object path on that service
    pub path: &'static str,
    /// Interface declaring the member
    pub interface: &'static str,
    /// Method name
    pub member: &'static str,
    /// Arguments, in signature order
    pub args: Vec<MethodArg>,
}

/// Fully addressed remote property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyKey {
    /// Bus name of the service owning the property
    pub destination: String,
    /// Object path on that service
    pub path: &'static str,
    /// Interface declaring the property
    pub interface: &'static str,
    /// Property name
    pub name: &'static str,
}

/// Request/response operations the bindings need from a message bus.
///
/// Every method is one round trip. Errors are returned exactly as the
/// transport produced them.
#[async_trait]
pub trait MessageBus: Send + Sync {
    /// Names currently registered on the bus, in the order the bus reports them.
    async fn list_names(&self) -> zbus::Result<Vec<String>>;

    /// Invokes a method and discards its (empty) reply.
    async fn call_method(&self, call: &MethodCall) -> zbus::Result<()>;

    /// Reads a property through `org.freedesktop.DBus.Properties.Get`.
    async fn get_property(&self, key: &PropertyKey) -> zbus::Result<OwnedValue>;

    /// Writes a property through `org.freedesktop.DBus.Properties.Set`.
    async fn set_property(&self, key: &PropertyKey, value: Value<'_>) -> zbus::Result<()>;
}

#[async_trait]
impl MessageBus for Connection {
    #[instrument(skip(self))]
    async fn list_names(&self) -> zbus::Result<Vec<String>> {
        let proxy = fdo::DBusProxy::new(self).await?;
        let names = proxy.list_names().await?;

        Ok(names.into_iter().map(|name| name.to_string()).collect())
    }

    #[instrument(skip(self), fields(destination = %call.destination, member = call.member))]
    async fn call_method(&self, call: &MethodCall) -> zbus::Result<()> {
        let destination = Some(call.destination.as_str());
        let interface = Some(call.interface);

        debug!(interface = call.interface, "Sending method call");

        match call.args.as_slice() {
            [] => {
                Connection::call_method(self, destination, call.path, interface, call.member, &())
                    .await?;
            }
            [MethodArg::Int64(value)] => {
                Connection::call_method(self, destination, call.path, interface, call.member, value)
                    .await?;
            }
            [MethodArg::Str(value)] => {
                Connection::call_method(
                    self,
                    destination,
                    call.path,
                    interface,
                    call.member,
                    &value.as_str(),
                )
                .await?;
            }
            [MethodArg::ObjectPath(path), MethodArg::Int64(value)] => {
                Connection::call_method(
                    self,
                    destination,
                    call.path,
                    interface,
                    call.member,
                    &(path, *value),
                )
                .await?;
            }
            _ => return Err(zbus::Error::Unsupported),
        }

        Ok(())
    }

    #[instrument(skip(self), fields(destination = %key.destination, property = key.name))]
    async fn get_property(&self, key: &PropertyKey) -> zbus::Result<OwnedValue> {
        let proxy = properties_proxy(self, key).await?;
        let interface = InterfaceName::try_from(key.interface)?;

        Ok(proxy.get(interface, key.name).await?)
    }

    #[instrument(skip(self, value), fields(destination = %key.destination, property = key.name))]
    async fn set_property(&self, key: &PropertyKey, value: Value<'_>) -> zbus::Result<()> {
        let proxy = properties_proxy(self, key).await?;
        let interface = InterfaceName::try_from(key.interface)?;

        Ok(proxy.set(interface, key.name, value).await?)
    }
}

async fn properties_proxy<'a>(
    connection: &Connection,
    key: &'a PropertyKey,
) -> zbus::Result<fdo::PropertiesProxy<'a>> {
    fdo::PropertiesProxy::builder(connection)
        .destination(key.destination.as_str())?
        .path(key.path)?
        .build()
        .await
}

#[async_trait]
impl<T: MessageBus + ?Sized> MessageBus for &T {
    async fn list_names(&self) -> zbus::Result<Vec<String>> {
        (**self).list_names().await
    }

    async fn call_method(&self, call: &MethodCall) -> zbus::Result<()> {
        (**self).call_method(call).await
    }

    async fn get_property(&self, key: &PropertyKey) -> zbus::Result<OwnedValue> {
        (**self).get_property(key).await
    }

    async fn set_property(&self, key: &PropertyKey, value: Value<'_>) -> zbus::Result<()> {
        (**self).set_property(key, value).await
    }
}

#[async_trait]
impl<T: MessageBus + ?Sized> MessageBus for Arc<T> {
    async fn list_names(&self) -> zbus::Result<Vec<String>> {
        (**self).list_names().await
    }

    async fn call_method(&self, call: &MethodCall) -> zbus::Result<()> {
        (**self).call_method(call).await
    }

    async fn get_property(&self, key: &PropertyKey) -> zbus::Result<OwnedValue> {
        (**self).get_property(key).await
    }

    async fn set_property(&self, key: &PropertyKey, value: Value<'_>) -> zbus::Result<()> {
        (**self).set_property(key, value).await
    }
}

/// Opens a connection to the bus selected by `config`.
///
/// An explicit address wins over the bus kind.
///
/// # Errors
/// Returns the zbus error if the bus cannot be reached or authentication fails
#[instrument]
pub async fn connect(config: &BusConfig) -> zbus::Result<Connection> {
    if let Some(address) = &config.address {
        debug!("Connecting to explicit bus address");
        return zbus::connection::Builder::address(address.as_str())?
            .build()
            .await;
    }

    match config.kind {
        BusKind::Session => Connection::session().await,
        BusKind::System => Connection::system().await,
    }
}
