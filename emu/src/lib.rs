//! Behavioral simulator for the SC32 machine.
//!
//! [`model::State`] executes one instruction per [`model::State::exec`];
//! [`run`] drives it to termination through a chain of [`hooks::Hook`]s.

pub mod error;
pub mod hooks;
pub mod loader;
pub mod model;

pub use error::Error;

use hooks::Hook;
use model::State;

/// Run until the machine halts, leaves memory, or `tmax` steps pass.
pub fn run(state: State, hooks: &mut [Box<dyn Hook>], tmax: Option<u64>) -> State {
    let mut state = hooks.iter_mut().fold(state, |state, hook| hook.init(state));
    for time in 0..tmax.unwrap_or(u64::MAX) {
        let event = state.exec();
        state = hooks
            .iter_mut()
            .fold(state, |state, hook| hook.exec(time, &event, state));
        if state.is_terminated() {
            break;
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use arch::inst::Inst;
    use model::{Event, Exit};
    use std::{cell::RefCell, rc::Rc};

    struct Record(Rc<RefCell<Vec<(u64, Event)>>>);

    impl Hook for Record {
        fn init(&mut self, state: State) -> State {
            self.0.borrow_mut().clear();
            state
        }
        fn exec(&mut self, time: u64, event: &Event, state: State) -> State {
            self.0.borrow_mut().push((time, event.clone()));
            state
        }
    }

    fn prog(insts: &[Inst]) -> State {
        let mut state = State::default();
        state.load(&insts.iter().map(Inst::to_bin).collect::<Vec<_>>());
        state
    }

    #[test]
    fn hooks_see_every_step() {
        let log = Rc::new(RefCell::new(vec![]));
        let mut hooks: Vec<Box<dyn Hook>> = vec![Box::new(Record(log.clone()))];
        let state = run(prog(&[Inst::NOOP(), Inst::HALT()]), &mut hooks, None);
        assert_eq!(state.exit(), Some(Exit::Halted));
        assert_eq!(
            *log.borrow(),
            vec![
                (0, Event::Exec(0, Inst::NOOP())),
                (1, Event::Exec(1, Inst::HALT())),
            ]
        );
    }

    #[test]
    fn step_budget() {
        let r0 = arch::reg::Reg::new(0).unwrap();
        let state = run(prog(&[Inst::BEQ(r0, r0, -1)]), &mut [], Some(10));
        assert!(!state.is_terminated());
        assert_eq!(state.executed(), 10);
    }

    #[test]
    fn runs_off_the_end() {
        let state = run(prog(&[Inst::NOOP()]), &mut [], None);
        assert_eq!(state.exit(), Some(Exit::PcOutOfBounds(100)));
        assert_eq!(state.executed(), 100);
    }
}
