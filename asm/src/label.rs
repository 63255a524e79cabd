use indexmap::IndexMap;

use crate::{error::Error, parser::Line};

/// Symbol table: label -> (line index of the definition, address).
#[derive(Debug, Default)]
pub struct Labels {
    labels: IndexMap<String, (usize, usize)>,
}

impl Labels {
    pub fn new() -> Self {
        Labels {
            labels: IndexMap::new(),
        }
    }

    /// Pass 1. Every non-blank line occupies one address; a leading token
    /// that is neither a mnemonic nor `.fill` names that address.
    pub fn collect<S: AsRef<str>>(lines: &[S]) -> Result<Labels, (usize, Error)> {
        let mut labels = Labels::new();
        let mut pc = 0;
        for (idx, raw) in lines.iter().enumerate() {
            let Some(line) = Line::parse(raw.as_ref()) else {
                continue;
            };
            if let Some(label) = line.label {
                if let Some(&(prev, _)) = labels.get(label) {
                    return Err((idx, Error::DuplicateLabel(label.to_string(), prev)));
                }
                labels.insert(label.to_string(), idx, pc);
            }
            pc += 1;
        }
        Ok(labels)
    }

    pub fn insert(&mut self, name: String, line_idx: usize, addr: usize) -> Option<(usize, usize)> {
        self.labels.insert(name, (line_idx, addr))
    }

    pub fn get(&self, name: &str) -> Option<&(usize, usize)> {
        self.labels.get(name)
    }

    pub fn get_val(&self, name: &str) -> Option<usize> {
        self.labels.get(name).map(|(_, addr)| *addr)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.labels.iter().map(|(name, (_, addr))| (name.as_str(), *addr))
    }
}
