use std::process::ExitCode;

use clap::Parser;
use color_print::cprintln;

use scemu::hooks::{
    dump::{self, Dump},
    watch::Watch,
    Hook,
};
use scemu::loader;
use scemu::model::{Exit, State, MEM_SIZE};

#[derive(Parser, Debug)]
#[clap(version, about = "Simulator for the SC32 machine")]
struct Args {
    /// Stop after this many steps
    #[arg(short = 't', long)]
    tmax: Option<u64>,

    /// Memory capacity in words
    #[arg(short, long, default_value_t = MEM_SIZE)]
    mem_size: usize,

    /// Only print the final state
    #[arg(short, long)]
    quiet: bool,

    /// YAML file of addresses to watch
    #[arg(short, long)]
    watch_cfg: Option<String>,

    #[arg(default_value = "main.mc")]
    input_file: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    println!("SC32 Simulator");

    println!("+-----------------------------------------------+");
    println!("| {:<45} |", args.input_file);
    println!("+-----------------------------------------------+");

    // ------------------------------------------------------------------------
    // Initialize state machine model
    let text = match loader::read(&args.input_file) {
        Ok(text) => text,
        Err(err) => {
            cprintln!("<red,bold>error</>: {}", err);
            return ExitCode::FAILURE;
        }
    };
    let mut state = State::new(args.mem_size);
    for warn in loader::load(&mut state, &text) {
        cprintln!("<y,s>warn</>: {}", warn);
    }

    // ------------------------------------------------------------------------
    // Initialize hooks
    println!("[INIT]");
    let mut hooks: Vec<Box<dyn Hook>> = vec![Box::new(Dump::new(!args.quiet))];
    if let Some(path) = &args.watch_cfg {
        match Watch::from_file(path) {
            Ok(watch) => hooks.push(Box::new(watch)),
            Err(err) => {
                cprintln!("<red,bold>error</>: {}", err);
                return ExitCode::FAILURE;
            }
        }
    }

    // ------------------------------------------------------------------------
    // Main loop
    let state = scemu::run(state, &mut hooks, args.tmax);

    println!("=================================================");
    println!("final state of machine:");
    println!("total of {} instructions executed", state.executed());
    print!("{}", dump::snapshot(&state));

    match state.exit() {
        Some(Exit::Halted) => ExitCode::SUCCESS,
        Some(Exit::PcOutOfBounds(_)) => ExitCode::FAILURE,
        None => {
            cprintln!("<y,s>warn</>: step limit reached before halt");
            ExitCode::FAILURE
        }
    }
}
