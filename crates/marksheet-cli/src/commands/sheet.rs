//! Interactive sheet: the terminal counterpart of the subject form.
//!
//! Rows are addressed by their 1-based position on screen; the sheet maps
//! positions to store handles before touching the store.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use anyhow::Result;
use marksheet_core::{
    DisplayConfig, EntryStore, Field, GRADE_SCALE, SubjectEntry, format_sheet_console,
};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowField {
    Subject,
    Value(Field),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SheetCommand {
    Add(SubjectEntry),
    Set {
        row: usize,
        field: RowField,
        value: String,
    },
    Remove(usize),
    List,
    Calc,
    Clear,
    Help,
    Quit,
}

/// Parse one input line. An empty line calculates.
pub fn parse_command(line: &str) -> Result<SheetCommand, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, rest)) = tokens.split_first() else {
        return Ok(SheetCommand::Calc);
    };

    match name.to_ascii_lowercase().as_str() {
        "add" => Ok(SheetCommand::Add(entry_from_tokens(rest))),
        "set" => match rest {
            [row, field, value @ ..] if !value.is_empty() => Ok(SheetCommand::Set {
                row: parse_row(row)?,
                field: parse_row_field(field)?,
                value: value.join(" "),
            }),
            _ => Err("usage: set <row> subject|mark|out <value>".to_string()),
        },
        "remove" | "rm" => match rest {
            [row] => Ok(SheetCommand::Remove(parse_row(row)?)),
            _ => Err("usage: remove <row>".to_string()),
        },
        "list" | "ls" => Ok(SheetCommand::List),
        "calc" | "calculate" => Ok(SheetCommand::Calc),
        "clear" => Ok(SheetCommand::Clear),
        "help" | "?" => Ok(SheetCommand::Help),
        "quit" | "exit" | "q" => Ok(SheetCommand::Quit),
        other => Err(format!("unknown command {:?}, try 'help'", other)),
    }
}

/// `add` arguments: `<subject>`, `<mark> <out>`, or `<subject...> <mark> <out>`.
fn entry_from_tokens(tokens: &[&str]) -> SubjectEntry {
    match tokens {
        [] => SubjectEntry::new(),
        [subject] => SubjectEntry::with_text(*subject, "", ""),
        [mark, out_of] => SubjectEntry::with_text("", mark, out_of),
        [subject @ .., mark, out_of] => SubjectEntry::with_text(subject.join(" "), mark, out_of),
    }
}

fn parse_row(token: &str) -> Result<usize, String> {
    match token.parse::<usize>() {
        Ok(row) if row >= 1 => Ok(row),
        _ => Err(format!("row must be a number from 1, got {:?}", token)),
    }
}

fn parse_row_field(token: &str) -> Result<RowField, String> {
    match token.to_ascii_lowercase().as_str() {
        "subject" | "name" => Ok(RowField::Subject),
        "mark" => Ok(RowField::Value(Field::Mark)),
        "out" | "outof" | "out_of" => Ok(RowField::Value(Field::OutOf)),
        other => Err(format!("unknown field {:?}, expected subject, mark or out", other)),
    }
}

pub fn help_text() -> String {
    let mut text = String::from(
        "Commands:\n\
         \x20 add [subject] [mark out]     add a row\n\
         \x20 set <row> subject|mark|out <value>\n\
         \x20 remove <row>                 remove a row\n\
         \x20 list                         show rows\n\
         \x20 calc (or empty line)         calculate grades\n\
         \x20 clear                        remove all rows\n\
         \x20 quit\n\
         Grading scale:",
    );
    for (min, letter) in GRADE_SCALE {
        let _ = write!(text, " {} >= {}%,", letter, min);
    }
    text.push_str(" F below");
    text
}

pub struct Sheet {
    store: EntryStore,
    config: DisplayConfig,
}

impl Sheet {
    pub fn new(config: DisplayConfig) -> Self {
        Self {
            store: EntryStore::with_rows(config.initial_rows),
            config,
        }
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    /// Apply a command and return the text to show. `Quit` is handled by the
    /// caller.
    pub fn execute(&mut self, command: SheetCommand) -> String {
        match command {
            SheetCommand::Add(entry) => {
                self.store.push(entry);
                format!("Added row {}", self.store.len())
            }
            SheetCommand::Set { row, field, value } => {
                let Some(entry) = row
                    .checked_sub(1)
                    .and_then(|index| self.store.handle_at(index))
                    .and_then(|handle| self.store.get_mut(handle))
                else {
                    return format!("No row {}", row);
                };
                match field {
                    RowField::Subject => entry.subject = value,
                    RowField::Value(field) => entry.set_field(field, value),
                }
                format!("Updated row {}", row)
            }
            SheetCommand::Remove(row) => {
                let Some(handle) = row
                    .checked_sub(1)
                    .and_then(|index| self.store.handle_at(index))
                else {
                    return format!("No row {}", row);
                };
                match self.store.remove(handle) {
                    Ok(_) => format!("Removed row {}", row),
                    Err(e) => e.to_string(),
                }
            }
            SheetCommand::List => self.list(),
            SheetCommand::Calc => {
                let evaluation = self.store.evaluate();
                format_sheet_console(&self.store, &evaluation, &self.config)
            }
            SheetCommand::Clear => {
                self.store.clear();
                "Cleared all rows".to_string()
            }
            SheetCommand::Help => help_text(),
            SheetCommand::Quit => String::new(),
        }
    }

    fn list(&self) -> String {
        if self.store.is_empty() {
            return "(no subjects)".to_string();
        }
        let mut output = String::new();
        for (index, entry) in self.store.entries().enumerate() {
            let _ = writeln!(
                output,
                "  {:>2}. {}  [{} / {}]",
                index + 1,
                if entry.subject.is_empty() { "-" } else { entry.subject.as_str() },
                entry.mark,
                entry.out_of
            );
        }
        output.trim_end().to_string()
    }
}

/// Read commands from `input` until `quit` or end of input.
pub fn run_with<R: BufRead, W: Write>(config: &DisplayConfig, input: R, mut out: W) -> Result<()> {
    let mut sheet = Sheet::new(config.clone());
    writeln!(out, "Marksheet - type 'help' for commands, empty line to calculate")?;
    writeln!(out, "{}", sheet.execute(SheetCommand::List))?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match parse_command(&line) {
            Ok(SheetCommand::Quit) => break,
            Ok(command) => {
                debug!("Sheet command: {:?}", command);
                writeln!(out, "{}", sheet.execute(command))?;
            }
            Err(message) => writeln!(out, "{}", message)?,
        }
    }

    writeln!(out)?;
    Ok(())
}

pub fn run(config: &DisplayConfig) -> Result<()> {
    let stdin = io::stdin();
    run_with(config, stdin.lock(), io::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;
    use marksheet_core::GradeLetter;

    fn sheet() -> Sheet {
        Sheet::new(DisplayConfig::default().with_color(false))
    }

    #[test]
    fn test_parse_add_variants() {
        assert_eq!(parse_command("add"), Ok(SheetCommand::Add(SubjectEntry::new())));
        assert_eq!(
            parse_command("add Maths"),
            Ok(SheetCommand::Add(SubjectEntry::with_text("Maths", "", "")))
        );
        assert_eq!(
            parse_command("add 40 50"),
            Ok(SheetCommand::Add(SubjectEntry::with_text("", "40", "50")))
        );
        assert_eq!(
            parse_command("ADD Computer Science 90 100"),
            Ok(SheetCommand::Add(SubjectEntry::with_text(
                "Computer Science",
                "90",
                "100"
            )))
        );
    }

    #[test]
    fn test_parse_set_and_remove() {
        assert_eq!(
            parse_command("set 2 out 50"),
            Ok(SheetCommand::Set {
                row: 2,
                field: RowField::Value(Field::OutOf),
                value: "50".to_string(),
            })
        );
        assert_eq!(
            parse_command("set 1 subject Further Maths"),
            Ok(SheetCommand::Set {
                row: 1,
                field: RowField::Subject,
                value: "Further Maths".to_string(),
            })
        );
        assert_eq!(parse_command("remove 3"), Ok(SheetCommand::Remove(3)));
        assert!(parse_command("remove 0").is_err());
        assert!(parse_command("set 1 mark").is_err());
        assert!(parse_command("set 1 grade A").is_err());
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse_command(""), Ok(SheetCommand::Calc));
        assert_eq!(parse_command("   "), Ok(SheetCommand::Calc));
        assert_eq!(parse_command("quit"), Ok(SheetCommand::Quit));
        assert_eq!(parse_command("list"), Ok(SheetCommand::List));
        assert!(parse_command("frobnicate").is_err());
    }

    #[test]
    fn test_sheet_starts_with_configured_rows() {
        assert_eq!(sheet().store().len(), 1);

        let config = DisplayConfig {
            initial_rows: 3,
            ..DisplayConfig::default()
        };
        assert_eq!(Sheet::new(config).store().len(), 3);
    }

    #[test]
    fn test_sheet_edit_and_calculate() {
        let mut sheet = sheet();
        let commands = [
            "set 1 subject Maths",
            "set 1 mark 90",
            "set 1 out 100",
            "add Physics 40 50",
        ];
        for line in commands {
            sheet.execute(parse_command(line).unwrap());
        }

        let evaluation = sheet.store().evaluate();
        assert_eq!(evaluation.aggregate.result().unwrap().letter, GradeLetter::A);

        let output = sheet.execute(SheetCommand::Calc);
        assert!(output.contains("Total: 130.00 / 150.00"));
        assert!(output.contains("Overall Grade: A"));
    }

    #[test]
    fn test_sheet_remove_by_position() {
        let mut sheet = sheet();
        sheet.execute(parse_command("add B 1 2").unwrap());
        sheet.execute(parse_command("add C 1 2").unwrap());

        assert_eq!(sheet.execute(SheetCommand::Remove(1)), "Removed row 1");
        let subjects: Vec<&str> = sheet.store().entries().map(|e| e.subject.as_str()).collect();
        assert_eq!(subjects, ["B", "C"]);

        assert_eq!(sheet.execute(SheetCommand::Remove(5)), "No row 5");
        assert_eq!(
            sheet.execute(SheetCommand::Set {
                row: 9,
                field: RowField::Subject,
                value: "X".to_string()
            }),
            "No row 9"
        );
    }

    #[test]
    fn test_sheet_row_zero_is_not_a_row() {
        let mut sheet = sheet();
        assert_eq!(sheet.execute(SheetCommand::Remove(0)), "No row 0");
        assert_eq!(
            sheet.execute(SheetCommand::Set {
                row: 0,
                field: RowField::Value(Field::Mark),
                value: "5".to_string()
            }),
            "No row 0"
        );
        assert_eq!(sheet.store().len(), 1);
    }

    #[test]
    fn test_sheet_can_be_emptied() {
        let mut sheet = sheet();
        sheet.execute(SheetCommand::Remove(1));
        assert!(sheet.store().is_empty());
        assert_eq!(sheet.execute(SheetCommand::List), "(no subjects)");
        assert!(sheet.execute(SheetCommand::Calc).contains("Overall Grade: --"));
    }

    #[test]
    fn test_run_with_scripted_input() {
        let input = "set 1 mark 19\nset 1 out 20\n\nbogus\nquit\nadd never 1 1\n";
        let mut output = Vec::new();
        run_with(
            &DisplayConfig::default().with_color(false),
            input.as_bytes(),
            &mut output,
        )
        .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Updated row 1"));
        assert!(output.contains("Grade: O"));
        assert!(output.contains("Percentage: 95.00%"));
        assert!(output.contains("unknown command"));
        assert!(!output.contains("Added row"));
    }

    #[test]
    fn test_help_lists_scale() {
        let help = help_text();
        assert!(help.contains("O >= 95%"));
        assert!(help.contains("C >= 65%"));
    }
}
