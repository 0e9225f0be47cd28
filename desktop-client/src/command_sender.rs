use tictactoe_common::session::SessionCommand;
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<SessionCommand>,
}

impl CommandSender {
    pub fn new(tx: mpsc::UnboundedSender<SessionCommand>) -> Self {
        Self { tx }
    }

    pub fn send(&self, command: SessionCommand) {
        if self.tx.send(command).is_err() {
            tictactoe_common::log!("Session is gone, dropped {:?}", command);
        }
    }
}
