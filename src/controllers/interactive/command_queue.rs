use std::collections::VecDeque;

use crate::controllers::interactive::data::navigation_command::NavigationCommand;

/// FIFO of navigation commands. Input adapters push, the controller pulls.
#[derive(Debug, Default)]
pub struct CommandQueue {
    pending: VecDeque<NavigationCommand>,
}

impl CommandQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: NavigationCommand) {
        self.pending.push_back(command);
    }

    pub fn pop(&mut self) -> Option<NavigationCommand> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
