use arch::{inst::Inst, op::OpKind, reg::Reg, Word};

/// Default memory capacity in words.
pub const MEM_SIZE: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Halted,
    /// Program counter at the failed fetch.
    PcOutOfBounds(i32),
}

/// What one call to [`State::exec`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Instruction fetched from `addr` and executed.
    Exec(usize, Inst),
    /// `lw`/`sw` at `addr` computed an effective address outside memory.
    /// Registers and memory are unchanged.
    OutOfBoundsAccess(usize, OpKind, i64),
    /// Word at `addr` has no valid opcode. Treated as a no-op.
    UnknownOpcode(usize, Word),
    /// Nothing fetched; the run is over.
    PcOutOfBounds(i32),
}

#[derive(Debug, Clone)]
pub struct State {
    reg: [Word; Reg::COUNT],
    mem: Vec<Word>,
    pc: i32,
    loaded: usize,
    executed: u64,
    exit: Option<Exit>,
}

impl Default for State {
    fn default() -> Self {
        State::new(MEM_SIZE)
    }
}

impl State {
    pub fn new(mem_size: usize) -> Self {
        State {
            reg: [0; Reg::COUNT],
            mem: vec![0; mem_size],
            pc: 0,
            loaded: 0,
            executed: 0,
            exit: None,
        }
    }

    /// Place `words` at addresses `0..`. Returns how many did not fit.
    pub fn load(&mut self, words: &[Word]) -> usize {
        let fit = words.len().min(self.mem.len());
        self.mem[..fit].copy_from_slice(&words[..fit]);
        self.loaded = fit;
        words.len() - fit
    }
}

// Register and memory access
impl State {
    pub fn reg(&self, reg: Reg) -> Word {
        self.reg[reg.idx()]
    }

    pub fn set_reg(&mut self, reg: Reg, val: Word) {
        self.reg[reg.idx()] = val;
    }

    pub fn get(&self, addr: usize) -> Option<Word> {
        self.mem.get(addr).copied()
    }

    pub fn set(&mut self, addr: usize, val: Word) -> bool {
        match self.mem.get_mut(addr) {
            Some(cell) => {
                *cell = val;
                true
            }
            None => false,
        }
    }

    pub fn registers(&self) -> &[Word] {
        &self.reg
    }

    pub fn memory(&self) -> &[Word] {
        &self.mem
    }

    pub fn pc(&self) -> i32 {
        self.pc
    }

    pub fn set_pc(&mut self, pc: i32) {
        self.pc = pc;
    }

    /// Number of words placed by [`State::load`].
    pub fn loaded(&self) -> usize {
        self.loaded
    }

    /// Instructions fetched so far, `halt` included.
    pub fn executed(&self) -> u64 {
        self.executed
    }

    pub fn exit(&self) -> Option<Exit> {
        self.exit
    }

    pub fn is_terminated(&self) -> bool {
        self.exit.is_some()
    }

    fn effective(&self, base: Reg, off: i16) -> Result<usize, i64> {
        let ea = self.reg(base) as i64 + off as i64;
        usize::try_from(ea)
            .ok()
            .filter(|addr| *addr < self.mem.len())
            .ok_or(ea)
    }
}

impl State {
    /// Fetch, decode and execute one instruction.
    pub fn exec(&mut self) -> Event {
        let pc = self.pc;
        let Some(addr) = usize::try_from(pc).ok().filter(|addr| *addr < self.mem.len()) else {
            self.exit = Some(Exit::PcOutOfBounds(pc));
            return Event::PcOutOfBounds(pc);
        };

        let code = self.mem[addr];
        self.pc = pc.wrapping_add(1);
        self.executed += 1;

        let inst = match Inst::from_bin(code) {
            Ok(inst) => inst,
            Err(_) => return Event::UnknownOpcode(addr, code),
        };

        match inst {
            Inst::ADD(ra, rb, rd) => self.set_reg(rd, self.reg(ra).wrapping_add(self.reg(rb))),
            Inst::NAND(ra, rb, rd) => self.set_reg(rd, !(self.reg(ra) & self.reg(rb))),
            Inst::LW(ra, rb, off) => match self.effective(ra, off) {
                Ok(ea) => self.set_reg(rb, self.mem[ea]),
                Err(ea) => return Event::OutOfBoundsAccess(addr, OpKind::LW, ea),
            },
            Inst::SW(ra, rb, off) => match self.effective(ra, off) {
                Ok(ea) => self.mem[ea] = self.reg(rb),
                Err(ea) => return Event::OutOfBoundsAccess(addr, OpKind::SW, ea),
            },
            Inst::BEQ(ra, rb, off) => {
                if self.reg(ra) == self.reg(rb) {
                    self.pc = self.pc.wrapping_add(off as i32);
                }
            }
            Inst::JALR(ra, rb) => {
                self.set_reg(rb, self.pc);
                self.pc = self.reg(ra);
            }
            Inst::HALT() => self.exit = Some(Exit::Halted),
            Inst::NOOP() => {}
        }
        Event::Exec(addr, inst)
    }
}
