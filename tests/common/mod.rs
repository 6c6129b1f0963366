//! In-memory message bus shared by the integration tests.

#![allow(dead_code)]

use std::{collections::HashMap, io, sync::Mutex};

use async_trait::async_trait;
use wayle_mpris::{MessageBus, MethodCall, PropertyKey};
use zbus::{
    fdo,
    zvariant::{OwnedValue, Value},
};

/// Kind of failure the stub injects instead of answering.
#[derive(Debug, Clone, Copy)]
pub enum Failure {
    /// The player answers with a D-Bus error reply
    Remote,
    /// The round trip fails before reaching the player
    Transport,
}

impl Failure {
    fn to_error(self) -> zbus::Error {
        match self {
            Failure::Remote => zbus::Error::from(fdo::Error::NotSupported(
                "operation not supported".to_string(),
            )),
            Failure::Transport => zbus::Error::from(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "connection closed",
            )),
        }
    }
}

/// Records every request and answers from an in-memory property table.
#[derive(Default)]
pub struct StubBus {
    names: Vec<String>,
    properties: Mutex<HashMap<(String, String), OwnedValue>>,
    calls: Mutex<Vec<MethodCall>>,
    reads: Mutex<Vec<PropertyKey>>,
    writes: Mutex<Vec<PropertyKey>>,
    failure: Option<Failure>,
}

impl StubBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_names(mut self, names: &[&str]) -> Self {
        self.names = names.iter().map(|name| name.to_string()).collect();
        self
    }

    pub fn with_property(self, interface: &str, name: &str, value: Value<'_>) -> Self {
        let owned = value.try_to_owned().unwrap();
        self.properties
            .lock()
            .unwrap()
            .insert((interface.to_string(), name.to_string()), owned);
        self
    }

    pub fn failing(mut self, failure: Failure) -> Self {
        self.failure = Some(failure);
        self
    }

    pub fn calls(&self) -> Vec<MethodCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn reads(&self) -> Vec<PropertyKey> {
        self.reads.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<PropertyKey> {
        self.writes.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.calls().len() + self.reads().len() + self.writes().len()
    }

    fn check(&self) -> zbus::Result<()> {
        match self.failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MessageBus for StubBus {
    async fn list_names(&self) -> zbus::Result<Vec<String>> {
        self.check()?;
        Ok(self.names.clone())
    }

    async fn call_method(&self, call: &MethodCall) -> zbus::Result<()> {
        self.calls.lock().unwrap().push(call.clone());
        self.check()
    }

    async fn get_property(&self, key: &PropertyKey) -> zbus::Result<OwnedValue> {
        self.reads.lock().unwrap().push(key.clone());
        self.check()?;

        let properties = self.properties.lock().unwrap();
        let value = properties
            .get(&(key.interface.to_string(), key.name.to_string()))
            .ok_or_else(|| {
                zbus::Error::from(fdo::Error::UnknownProperty(format!(
                    "no property {}",
                    key.name
                )))
            })?;

        Ok(value.try_clone()?)
    }

    async fn set_property(&self, key: &PropertyKey, value: Value<'_>) -> zbus::Result<()> {
        self.writes.lock().unwrap().push(key.clone());
        self.check()?;

        let owned = value.try_to_owned()?;
        self.properties
            .lock()
            .unwrap()
            .insert((key.interface.to_string(), key.name.to_string()), owned);
        Ok(())
    }
}
