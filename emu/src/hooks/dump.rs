use arch::{inst::Inst, reg::Reg};
use color_print::cformat;

use super::Hook;
use crate::model::{Event, State};

/// Reports every step: anomalies always, the full machine state unless
/// quiet.
#[derive(Debug)]
pub struct Dump {
    each_step: bool,
}

impl Dump {
    pub fn new(each_step: bool) -> Self {
        Dump { each_step }
    }

    /// Output before the first step.
    pub fn report_init(&self, state: &State) -> Vec<String> {
        if self.each_step {
            vec![snapshot(state)]
        } else {
            vec![]
        }
    }

    /// Output after one step, in print order.
    pub fn report(&self, time: u64, event: &Event, state: &State) -> Vec<String> {
        let mut out = vec![];
        match event {
            Event::Exec(_, Inst::HALT()) => out.push(cformat!("<g,s>machine halted</>\n")),
            Event::Exec(..) => {}
            Event::OutOfBoundsAccess(addr, op, ea) => out.push(cformat!(
                "<y,s>warn</>: [{:0>4}] memory access out of bounds for {} at {:04}: {}\n",
                time,
                op,
                addr,
                ea
            )),
            Event::UnknownOpcode(addr, code) => out.push(cformat!(
                "<y,s>warn</>: [{:0>4}] unknown instruction at {:04}: {}\n",
                time,
                addr,
                code
            )),
            Event::PcOutOfBounds(pc) => {
                out.push(cformat!(
                    "<r,s>Program counter exceeds memory bounds</> (pc {}). Exiting simulation.\n",
                    pc
                ));
                return out;
            }
        }
        if self.each_step {
            out.push(snapshot(state));
        }
        out
    }
}

/// Program counter, loaded memory, registers and loaded-word count.
pub fn snapshot(state: &State) -> String {
    let mut out = format!("@@@\nstate:\n\tpc {}\n\tmemory:\n", state.pc());
    for (idx, word) in state.memory()[..state.loaded()].iter().enumerate() {
        out.push_str(&format!("\tmem[ {:>2} ] {}\n", idx, word));
    }
    out.push_str("\tregisters:\n");
    for reg in Reg::all() {
        out.push_str(&format!("\treg[ {:>2} ] {}\n", reg, state.reg(reg)));
    }
    out.push_str(&format!("\tnumMemory: {}\nend state\n", state.loaded()));
    out
}

impl Hook for Dump {
    fn init(&mut self, state: State) -> State {
        for chunk in self.report_init(&state) {
            print!("{}", chunk);
        }
        state
    }

    fn exec(&mut self, time: u64, event: &Event, state: State) -> State {
        for chunk in self.report(time, event, &state) {
            print!("{}", chunk);
        }
        state
    }
}
