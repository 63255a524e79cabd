pub mod dump;
pub mod watch;

use crate::model::{Event, State};

/// Side effects run around the fetch-execute loop. The state is passed
/// through every hook in order.
pub trait Hook {
    fn init(&mut self, state: State) -> State;
    fn exec(&mut self, time: u64, event: &Event, state: State) -> State;
}
