use arch::{reg::Reg, word, Word};
use scemu::{
    loader,
    model::{Exit, State},
    run,
};

fn assemble(src: &[&str]) -> String {
    word::to_text(&scasm::assemble(src).unwrap())
}

fn simulate(text: &str) -> State {
    let mut state = State::default();
    assert!(loader::load(&mut state, text).is_empty());
    run(state, &mut [], None)
}

fn reg(state: &State, idx: u8) -> Word {
    state.reg(Reg::new(idx).unwrap())
}

#[test]
fn add_then_halt() {
    let text = assemble(&["add 0 1 2", "halt"]);
    let opcodes: Vec<_> = text
        .lines()
        .map(|l| word::opcode(l.parse().unwrap()))
        .collect();
    assert_eq!(opcodes, vec![0, 6]);

    let state = simulate(&text);
    assert_eq!(state.exit(), Some(Exit::Halted));
    assert_eq!(state.executed(), 2);
    assert_eq!(state.pc(), 2);
    assert_eq!(state.registers(), &[0; 8]);
}

#[test]
fn count_to_five() {
    let text = assemble(&[
        "        lw      0       1       five    load reg1 with 5",
        "        lw      1       2       3       load reg2 with -1",
        "start   add     1       2       1       decrement reg1",
        "        beq     0       1       2       goto end when reg1==0",
        "        beq     0       0       start   back to the loop",
        "        noop",
        "done    halt",
        "five    .fill   5",
        "neg1    .fill   -1",
        "stAddr  .fill   start",
    ]);
    let state = simulate(&text);
    assert_eq!(state.exit(), Some(Exit::Halted));
    assert_eq!(reg(&state, 1), 0);
    assert_eq!(reg(&state, 2), -1);
    assert_eq!(state.pc(), 7);
    assert_eq!(state.executed(), 17);
    assert_eq!(state.loaded(), 10);
}

#[test]
fn subroutine_call() {
    let text = assemble(&[
        "        lw      0       4       subAdr",
        "        jalr    4       7",
        "        sw      0       1       slot",
        "        halt",
        "sub     lw      0       1       val",
        "        jalr    7       6",
        "val     .fill   42",
        "slot    .fill   0",
        "subAdr  .fill   sub",
    ]);
    let state = simulate(&text);
    assert_eq!(state.exit(), Some(Exit::Halted));
    assert_eq!(reg(&state, 1), 42);
    assert_eq!(reg(&state, 7), 2);
    assert_eq!(reg(&state, 6), 6);
    assert_eq!(state.get(7), Some(42));
}

#[test]
fn runs_off_the_end() {
    let text = assemble(&["noop"; 100]);
    let state = simulate(&text);
    assert_eq!(state.exit(), Some(Exit::PcOutOfBounds(100)));
    assert_eq!(state.executed(), 100);
}
