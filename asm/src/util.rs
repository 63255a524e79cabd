use arch::{bits, inst::Inst, op::FILL, Word};
use color_print::cformat;

use crate::{label::Labels, parser::Line};

/// One listing row per source line. `words` must be the output of assembling
/// `lines`.
pub fn dump<S: AsRef<str>>(path: &str, lines: &[S], words: &[Word], labels: &Labels) -> Vec<String> {
    let mut rows = vec![format!(
        "{}+------[{}]{}",
        "-".repeat(16),
        path,
        "-".repeat(60_usize.saturating_sub(path.len()))
    )];
    let mut pc = 0;
    for (idx, raw) in lines.iter().enumerate() {
        let line_num = idx + 1;
        let Some(line) = Line::parse(raw.as_ref()) else {
            rows.push(format!("{:16}| {:>4}:", "", line_num));
            continue;
        };
        let Some(&bin) = words.get(pc) else {
            break;
        };

        let label = line
            .label
            .map(|l| cformat!("<g>{}</>", l))
            .unwrap_or_default();
        let (fields, body) = match (line.op, Inst::from_bin(bin)) {
            (Some(FILL), _) | (_, Err(_)) => (
                bits::encode(bin, 32),
                cformat!("<c>{:<6}</><y>{}</>", FILL, bin),
            ),
            (_, Ok(inst)) => (inst.fields(), inst.cformat()),
        };
        rows.push(format!(
            "[{:04}] {:08X} | {:>4}: {:<34} {:<8} {}",
            pc,
            bin,
            line_num,
            fields,
            label,
            body
        ));
        pc += 1;
    }
    rows.push(format!("{}+{}", "-".repeat(16), "-".repeat(68)));
    for (name, addr) in labels.iter() {
        rows.push(cformat!("{:16}| <g>{:<12}</> = {}", "", name, addr));
    }
    rows
}

pub fn print_dump<S: AsRef<str>>(path: &str, lines: &[S], words: &[Word], labels: &Labels) {
    for row in dump(path, lines, words, labels) {
        println!("{}", row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble;

    #[test]
    fn one_row_per_line() {
        let src = ["start lw 0 1 five", "", "halt", "five .fill 5"];
        let words = assemble(&src).unwrap();
        let labels = Labels::collect(&src).unwrap();
        let rows = dump("count.as", &src, &words, &labels);
        // header, 4 lines, separator, 2 labels
        assert_eq!(rows.len(), 1 + 4 + 1 + 2);
        assert!(rows[0].contains("[count.as]"));
        assert!(rows[1].starts_with("[0000] 00810002 |    1: 010 000 001 0000000000000010"));
        assert!(rows[2].ends_with("2:"));
        assert!(rows[3].starts_with("[0001] 01800000 |    3: "));
        assert!(rows[4].starts_with(&format!("[0002] 00000005 |    4: {}", bits::encode(5, 32))));
        assert!(rows[6].contains("start"));
        assert!(rows[7].contains("five"));
    }
}
