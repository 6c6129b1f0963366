use zbus::zvariant;

/// Errors returned by MPRIS2 operations.
///
/// The underlying zbus error is kept untouched as the source. The variant
/// only records which side of the bus produced it.
#[derive(thiserror::Error, Debug)]
pub enum MprisError {
    /// The bus connection is unavailable or the round trip failed
    #[error("D-Bus transport failed during {operation}: {source}")]
    Transport {
        /// Fully qualified member that was being accessed
        operation: String,
        /// Error reported by the transport
        #[source]
        source: zbus::Error,
    },

    /// The player answered with a D-Bus error
    #[error("player rejected {operation}: {source}")]
    Remote {
        /// Fully qualified member that was being accessed
        operation: String,
        /// Error reported by the remote peer
        #[source]
        source: zbus::Error,
    },

    /// A property value did not have the expected wire type
    #[error("property {interface}.{property} is not {expected}: {source}")]
    Decode {
        /// Interface owning the property
        interface: &'static str,
        /// Property name
        property: &'static str,
        /// Semantic type the property was expected to carry
        expected: &'static str,
        /// Conversion error from zvariant
        #[source]
        source: zvariant::Error,
    },
}

/// Result alias for MPRIS2 operations.
pub type Result<T> = std::result::Result<T, MprisError>;

impl MprisError {
    /// Classifies a zbus error raised while accessing `interface.member`.
    ///
    /// Errors carried back in a D-Bus error reply are remote; anything else
    /// happened on the way there.
    pub fn from_call(interface: &str, member: &str, source: zbus::Error) -> Self {
        let operation = format!("{interface}.{member}");

        match source {
            zbus::Error::MethodError(..) | zbus::Error::FDO(_) => {
                MprisError::Remote { operation, source }
            }
            source => MprisError::Transport { operation, source },
        }
    }

    /// Whether the player answered with a D-Bus error reply.
    pub fn is_remote(&self) -> bool {
        matches!(self, MprisError::Remote { .. })
    }

    /// Whether the failure happened in the transport.
    pub fn is_transport(&self) -> bool {
        matches!(self, MprisError::Transport { .. })
    }

    /// Whether a property value had an unexpected type.
    pub fn is_decode(&self) -> bool {
        matches!(self, MprisError::Decode { .. })
    }
}
