//! Media player control commands
mod identity;
mod info;
mod list;
mod loop_mode;
mod open;
mod position;
mod seek;
mod shuffle;
mod status;
mod transport;
pub(crate) mod utils;
mod volume;

use std::sync::Arc;

pub use identity::IdentityCommand;
pub use info::InfoCommand;
pub use list::ListCommand;
pub use loop_mode::LoopCommand;
pub use open::OpenCommand;
pub use position::PositionCommand;
pub use seek::SeekCommand;
pub use shuffle::ShuffleCommand;
pub use status::StatusCommand;
pub use transport::{TransportAction, TransportCommand};
pub use volume::{SetVolumeCommand, VolumeCommand};

use crate::cli::{CliContext, CommandRegistry};

/// Registers all media-related commands with the command registry
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `context` - Shared context giving access to the bus
pub fn register_commands(registry: &mut CommandRegistry, context: Arc<CliContext>) {
    const CATEGORY_NAME: &str = "media";

    registry.register_command(CATEGORY_NAME, Box::new(ListCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(IdentityCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(SeekCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(PositionCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(OpenCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(VolumeCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(SetVolumeCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(LoopCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(ShuffleCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(StatusCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(InfoCommand::new(context.clone())));

    for action in TransportAction::ALL {
        registry.register_command(
            CATEGORY_NAME,
            Box::new(TransportCommand::new(context.clone(), action)),
        );
    }
}
