use arch::{
    inst::Inst,
    op::{is_opcode, OpKind, FILL},
    reg::Reg,
    Word,
};

use crate::{error::Error, label::Labels};

// ----------------------------------------------------------------------------
// Line

/// Tokens of one non-blank source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    pub label: Option<&'a str>,
    pub op: Option<&'a str>,
    pub args: Vec<&'a str>,
}

impl<'a> Line<'a> {
    /// `None` for blank lines.
    pub fn parse(raw: &'a str) -> Option<Line<'a>> {
        let words: Vec<&str> = raw.split_whitespace().collect();
        let (head, rest) = words.split_first()?;

        if is_opcode(head) || *head == FILL {
            return Some(Line {
                label: None,
                op: Some(*head),
                args: rest.to_vec(),
            });
        }

        let (op, args) = match rest.split_first() {
            Some((op, args)) => (Some(*op), args.to_vec()),
            None => (None, vec![]),
        };
        Some(Line {
            label: Some(*head),
            op,
            args,
        })
    }

    pub fn stmt(&self) -> Result<Stmt, Error> {
        let op = self
            .op
            .ok_or_else(|| Error::MissingOperation(self.label.unwrap_or_default().to_string()))?;
        let args = &self.args;

        // Get argument by index and parse as Type
        // Example: arg!(0, Reg) -> Reg
        macro_rules! arg {
            ($index:expr, Reg) => {{
                let arg = args
                    .get($index)
                    .ok_or_else(|| Error::MissingArgument(op.to_string()))?;
                Reg::parse(arg).ok_or_else(|| Error::InvalidRegister(arg.to_string()))?
            }};
            ($index:expr, Imm) => {{
                let arg = args
                    .get($index)
                    .ok_or_else(|| Error::MissingArgument(op.to_string()))?;
                Imm::parse(arg)
            }};
        }

        if op == FILL {
            return Ok(Stmt::Fill(arg!(0, Imm)));
        }

        let kind = OpKind::parse(op).map_err(|_| Error::InvalidOpcode(op.to_string()))?;
        if args.len() < kind.shape().arg_count() {
            return Err(Error::MissingArgument(op.to_string()));
        }
        let code = match kind {
            OpKind::ADD => Code::ADD(arg!(0, Reg), arg!(1, Reg), arg!(2, Reg)),
            OpKind::NAND => Code::NAND(arg!(0, Reg), arg!(1, Reg), arg!(2, Reg)),
            OpKind::LW => Code::LW(arg!(0, Reg), arg!(1, Reg), arg!(2, Imm)),
            OpKind::SW => Code::SW(arg!(0, Reg), arg!(1, Reg), arg!(2, Imm)),
            OpKind::BEQ => Code::BEQ(arg!(0, Reg), arg!(1, Reg), arg!(2, Imm)),
            OpKind::JALR => Code::JALR(arg!(0, Reg), arg!(1, Reg)),
            OpKind::HALT => Code::HALT(),
            OpKind::NOOP => Code::NOOP(),
        };
        Ok(Stmt::Code(code))
    }
}

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Code(Code),
    Fill(Imm),
}

impl Stmt {
    /// Pass 2. `pc` is the address of this statement.
    pub fn resolve(&self, labels: &Labels, pc: usize) -> Result<Word, Error> {
        match self {
            Stmt::Code(code) => Ok(code.resolve(labels, pc)?.to_bin()),
            Stmt::Fill(imm) => Ok(match imm.resolve(labels)? {
                Target::Label(addr) => addr as Word,
                Target::Literal(val) => val,
            }),
        }
    }
}

// ----------------------------------------------------------------------------
// Operation

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Code {
    ADD(Reg, Reg, Reg),
    NAND(Reg, Reg, Reg),
    LW(Reg, Reg, Imm),
    SW(Reg, Reg, Imm),
    BEQ(Reg, Reg, Imm),
    JALR(Reg, Reg),
    HALT(),
    NOOP(),
}

impl Code {
    pub fn resolve(&self, labels: &Labels, pc: usize) -> Result<Inst, Error> {
        match self {
            Code::ADD(ra, rb, rd) => Ok(Inst::ADD(*ra, *rb, *rd)),
            Code::NAND(ra, rb, rd) => Ok(Inst::NAND(*ra, *rb, *rd)),
            Code::LW(ra, rb, imm) => Ok(Inst::LW(*ra, *rb, imm.absolute(labels)?)),
            Code::SW(ra, rb, imm) => Ok(Inst::SW(*ra, *rb, imm.absolute(labels)?)),
            Code::BEQ(ra, rb, imm) => Ok(Inst::BEQ(*ra, *rb, imm.relative(labels, pc)?)),
            Code::JALR(ra, rb) => Ok(Inst::JALR(*ra, *rb)),
            Code::HALT() => Ok(Inst::HALT()),
            Code::NOOP() => Ok(Inst::NOOP()),
        }
    }
}

// ----------------------------------------------------------------------------
// Immediate

/// Raw operand token. A label takes precedence over a numeric reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Imm(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Label(usize),
    Literal(i32),
}

impl Imm {
    fn parse(s: &str) -> Imm {
        Imm(s.to_string())
    }

    pub fn resolve(&self, labels: &Labels) -> Result<Target, Error> {
        if let Some(addr) = labels.get_val(&self.0) {
            return Ok(Target::Label(addr));
        }
        self.0
            .parse::<i32>()
            .map(Target::Literal)
            .map_err(|_| Error::UndefinedSymbolOrBadLiteral(self.0.clone()))
    }

    /// Offset for `lw`/`sw`: a label stands for its address.
    fn absolute(&self, labels: &Labels) -> Result<i16, Error> {
        fit(match self.resolve(labels)? {
            Target::Label(addr) => addr as i64,
            Target::Literal(val) => val as i64,
        })
    }

    /// Offset for `beq`: a label is measured from the next instruction.
    fn relative(&self, labels: &Labels, pc: usize) -> Result<i16, Error> {
        fit(match self.resolve(labels)? {
            Target::Label(addr) => addr as i64 - (pc as i64 + 1),
            Target::Literal(val) => val as i64,
        })
    }
}

fn fit(offset: i64) -> Result<i16, Error> {
    i16::try_from(offset).map_err(|_| Error::OffsetOutOfRange(offset))
}
