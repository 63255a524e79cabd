use std::process::ExitCode;

use color_print::cprintln;
use scasm::{msg::Msg, util, Error, Labels};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    #[clap(default_value = "main.as")]
    input: String,

    /// Output file, one decimal word per line
    #[clap(short, long, default_value = "main.mc")]
    output: String,

    /// Dump assembly listing
    #[clap(short, long)]
    dump: bool,
}

fn main() -> ExitCode {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("SC32 Assembler");

    println!("1. Read File");
    println!("  < {}", args.input);
    let lines: Vec<String> = match std::fs::read_to_string(&args.input) {
        Ok(text) => text.lines().map(String::from).collect(),
        Err(err) => return fail(&Error::FileOpen(args.input.clone(), err)),
    };

    println!("2. Collect Labels");
    let labels = match Labels::collect(&lines) {
        Ok(labels) => labels,
        Err((idx, err)) => return diag(&args.input, &lines, idx, &err),
    };
    println!("  - found #{} labels", labels.len());

    println!("3. Resolve Labels & Generate Words");
    let words = match scasm::encode(&lines, &labels) {
        Ok(words) => words,
        Err((idx, err)) => return diag(&args.input, &lines, idx, &err),
    };

    println!("  > {}", args.output);
    if let Err(err) = write(&args.output, &words) {
        return fail(&err);
    }
    println!("  - wrote #{} words", words.len());

    if args.dump {
        util::print_dump(&args.input, &lines, &words, &labels);
    }
    ExitCode::SUCCESS
}

fn write(path: &str, words: &[arch::Word]) -> Result<(), Error> {
    use std::io::Write;
    let mut file =
        std::fs::File::create(path).map_err(|err| Error::FileCreate(path.to_string(), err))?;
    file.write_all(arch::word::to_text(words).as_bytes())
        .map_err(|err| Error::FileWrite(path.to_string(), err))
}

fn diag(file: &str, lines: &[String], idx: usize, err: &Error) -> ExitCode {
    let raw = |i: usize| lines.get(i).map(String::as_str).unwrap_or("");
    Msg::Error(err.to_string()).diag((file, idx, raw(idx)));
    if let Error::DuplicateLabel(_, prev) = err {
        Msg::Note("First defined here".to_string()).diag((file, *prev, raw(*prev)));
    }
    cprintln!("<red,bold>Assembly aborted</>: no output written");
    ExitCode::FAILURE
}

fn fail(err: &Error) -> ExitCode {
    cprintln!("<red,bold>error</>: {}", err);
    if let Some(source) = std::error::Error::source(err) {
        cprintln!("  <blue>caused by</>: {}", source);
    }
    ExitCode::FAILURE
}
