use color_print::cprintln;

#[derive(Debug)]
pub enum Msg {
    Error(String),
    Note(String),
}

impl Msg {
    /// `info` is (file, 0-based line index, raw line).
    pub fn diag(&self, info: (&str, usize, &str)) {
        let (file, idx, raw) = info;
        let line = idx + 1;
        match self {
            Msg::Error(msg) => cprintln!("<red,bold>error</>: {}", msg),
            Msg::Note(msg) => cprintln!("<green,bold>note</>: {}", msg),
        }
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", line, raw);
        cprintln!("      <blue>|</>");
    }
}
