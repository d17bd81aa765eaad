//! Interactive lookup loop
//!
//! Reads one pattern per line and prints ranked suggestions. Lines starting
//! with `:` are commands:
//!
//! - `:define <word>` - show the definitions of a word
//! - `:stats` - show index statistics
//! - `:help` - list commands
//! - `:quit` / `:q` - leave (end of input does the same)

use crate::corpus::Lexicon;
use crate::index::{SearchMode, SuffixIndex};
use crate::output::{print_definitions, print_suggestions};
use crate::query::suggest;
use std::io::{self, BufRead};
use termcolor::WriteColor;
use tracing::debug;

const PROMPT: &str = "> ";

/// A parsed input line
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Search(&'a str),
    Define(&'a str),
    Stats,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_line(line: &str) -> Input<'_> {
    let line = line.trim();

    let Some(command) = line.strip_prefix(':') else {
        return Input::Search(line);
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };

    match name {
        "q" | "quit" => Input::Quit,
        "d" | "define" => Input::Define(arg),
        "stats" => Input::Stats,
        "h" | "help" => Input::Help,
        _ => Input::Unknown(name),
    }
}

/// Session state for the interactive loop
pub struct Repl<'a> {
    index: &'a SuffixIndex,
    lexicon: &'a Lexicon,
    mode: SearchMode,
    limit: usize,
}

impl<'a> Repl<'a> {
    pub fn new(
        index: &'a SuffixIndex,
        lexicon: &'a Lexicon,
        mode: SearchMode,
        limit: usize,
    ) -> Self {
        Self {
            index,
            lexicon,
            mode,
            limit,
        }
    }

    /// Run until `:quit` or end of input.
    ///
    /// Returns the number of searches performed.
    pub fn run<R, W>(&self, mut input: R, out: &mut W) -> io::Result<usize>
    where
        R: BufRead,
        W: WriteColor,
    {
        let mut line = String::new();
        let mut searches = 0;

        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }

            match parse_line(&line) {
                Input::Search(pattern) => {
                    let suggestions =
                        suggest(self.index, self.lexicon, pattern, self.mode, self.limit);
                    debug!(pattern, matches = suggestions.len(), "search");
                    print_suggestions(out, &suggestions, pattern)?;
                    searches += 1;
                }
                Input::Define(word) => {
                    let entries = self.lexicon.definitions(word);
                    if entries.is_empty() {
                        writeln!(out, "no definitions for {:?}", word)?;
                    } else {
                        print_definitions(out, word, entries)?;
                    }
                }
                Input::Stats => {
                    let stats = self.index.stats();
                    writeln!(
                        out,
                        "{} words, {} trie nodes, {} suffixes",
                        stats.word_count, stats.node_count, stats.suffix_count
                    )?;
                }
                Input::Help => {
                    writeln!(out, "<pattern>        list words containing pattern")?;
                    writeln!(out, ":define <word>   show definitions")?;
                    writeln!(out, ":stats           show index statistics")?;
                    writeln!(out, ":quit            exit")?;
                }
                Input::Quit => break,
                Input::Unknown(name) => {
                    writeln!(out, "unknown command :{} (try :help)", name)?;
                }
            }
        }

        Ok(searches)
    }
}
