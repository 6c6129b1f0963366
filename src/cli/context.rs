use tokio::sync::OnceCell;
use tracing::instrument;
use zbus::Connection;

use super::{CliError, commands::media::utils::resolve_player};
use crate::{bus, config::Config, player::Player};

/// Shared state for command execution.
///
/// The bus connection is opened on first use so that commands which never
/// talk to a player work without a running bus.
pub struct CliContext {
    config: Config,
    connection: OnceCell<Connection>,
}

impl CliContext {
    /// Creates a context around a loaded configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            connection: OnceCell::new(),
        }
    }

    /// Loaded configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Bus connection, opened on first call.
    ///
    /// # Errors
    /// Returns `CliError::ServiceError` if the bus cannot be reached
    #[instrument(skip(self))]
    pub async fn connection(&self) -> Result<&Connection, CliError> {
        self.connection
            .get_or_try_init(|| async {
                bus::connect(&self.config.bus)
                    .await
                    .map_err(|e| CliError::ServiceError {
                        service: "D-Bus".to_string(),
                        details: e.to_string(),
                    })
            })
            .await
    }

    /// Handle on the player selected by `identifier`, or the default player.
    ///
    /// # Errors
    /// Returns error if the bus is unreachable or no player matches
    pub async fn player(&self, identifier: Option<&String>) -> Result<Player, CliError> {
        let connection = self.connection().await?;
        let id = resolve_player(
            connection,
            identifier.map(String::as_str),
            &self.config.media,
        )
        .await?;

        Ok(Player::new(connection.clone(), id))
    }
}
