mod broadcaster;
mod local_game;

use broadcaster::LocalBroadcaster;
pub use local_game::spawn_local_game;
