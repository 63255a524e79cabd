use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

use arch::reg::Reg;
use serde::{Deserialize, Serialize};

use super::Hook;
use crate::error::Error;
use crate::model::{Event, State};

/// Prints selected registers and memory words each time execution passes
/// through a watched address.
///
/// ```yaml
/// 4:
///   reg: [1, 2]
///   mem: [7]
/// ```
#[derive(Debug, Default)]
pub struct Watch {
    file: Option<String>,
    list: List,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct List(HashMap<usize, Config>);

#[derive(Debug, Serialize, Deserialize)]
struct Config {
    #[serde(default)]
    reg: Vec<Reg>,
    #[serde(default)]
    mem: Vec<usize>,
}

impl Watch {
    pub fn from_file(path: &str) -> Result<Self, Error> {
        let file = File::open(path).map_err(|err| Error::FileOpen(path.to_string(), err))?;
        let list: List = serde_yaml::from_reader(BufReader::new(file))
            .map_err(|err| Error::Config(path.to_string(), err))?;
        Ok(Watch {
            file: Some(path.to_string()),
            list,
        })
    }

    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        Ok(Watch {
            file: None,
            list: serde_yaml::from_str(text)?,
        })
    }

    pub fn len(&self) -> usize {
        self.list.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.0.is_empty()
    }

    /// Lines to print after executing the instruction at `addr`, if watched.
    pub fn render(&self, addr: usize, state: &State) -> Option<Vec<String>> {
        let cfg = self.list.0.get(&addr)?;
        let mut rows = vec![format!(" * watch @ {:04} pc={}", addr, state.pc())];
        for reg in &cfg.reg {
            rows.push(format!("   reg[ {} ] {}", reg, state.reg(*reg)));
        }
        for mem in &cfg.mem {
            match state.get(*mem) {
                Some(val) => rows.push(format!("   mem[ {} ] {}", mem, val)),
                None => rows.push(format!("   mem[ {} ] -", mem)),
            }
        }
        Some(rows)
    }
}

impl Hook for Watch {
    fn init(&mut self, state: State) -> State {
        if let Some(fname) = &self.file {
            println!(" * Watch[{}] {:?}", self.len(), fname);
        }
        state
    }

    fn exec(&mut self, _time: u64, event: &Event, state: State) -> State {
        if let Event::Exec(addr, _) = event {
            for row in self.render(*addr, &state).into_iter().flatten() {
                println!("{}", row);
            }
        }
        state
    }
}
