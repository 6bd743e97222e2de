use std::io::{self, BufRead, Write};

use log::{debug, info};
use thompson_regexp::Regex;

const BANNER: &str = "Regular expression parsing\n";

const MENU: &str = "Available operations:\n \
                    - exp <expression>\tRead in regular expression\n \
                    - dot <filename>\tExport regular expression to dot-notation\n \
                    - mat <string>\t\tCheck whether a string is accepted by automaton\n \
                    - end\t\t\tClose the program\n\
                    Please enter an operation. If applicable, you can immediately provide\n\
                    an argument for the operation:";

/// A single line of input, interpreted as a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `exp [expression]`
    Expression(Option<&'a str>),
    /// `dot [filename]`
    Dot(Option<&'a str>),
    /// `mat [string]`
    Match(Option<&'a str>),
    /// `end`
    End,
    /// Anything else; empty for a blank line
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    /// Parse a line, ignoring a carriage return and everything after it.
    pub fn parse(line: &'a str) -> Command<'a> {
        let line = strip_carriage_return(line).trim_start();
        let (token, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));
        let rest = Some(rest.trim()).filter(|rest| !rest.is_empty());

        match token {
            "exp" => Command::Expression(rest),
            "dot" => Command::Dot(rest.and_then(|rest| rest.split_whitespace().next())),
            "mat" => Command::Match(rest),
            "end" => Command::End,
            other => Command::Unknown(other),
        }
    }
}

fn strip_carriage_return(line: &str) -> &str {
    match line.find('\r') {
        Some(index) => &line[..index],
        None => line.trim_end_matches('\n'),
    }
}

/// The command loop, generic over its input and output so it can be driven
/// from memory.
pub struct Shell<R, W> {
    input: R,
    output: W,
    regex: Regex,
    quiet: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell holding the empty expression
    pub fn new(input: R, output: W, quiet: bool) -> Self {
        Self {
            input,
            output,
            regex: Regex::default(),
            quiet,
        }
    }

    /// Run commands until `end` or the end of the input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        if !self.quiet {
            write!(self.output, "{}", BANNER)?;
        }

        loop {
            if !self.quiet {
                write!(self.output, "{}", MENU)?;
            }
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                info!("end of input");
                return Ok(());
            };
            if !self.execute(&line)? {
                return Ok(());
            }
        }
    }

    /// Execute one command, returning whether the loop should continue.
    pub fn execute(&mut self, line: &str) -> anyhow::Result<bool> {
        let command = Command::parse(line);
        debug!("executing {:?}", command);

        match command {
            Command::Expression(argument) => {
                let Some(pattern) =
                    self.argument_or_prompt(argument, "Please enter a regular expression:")?
                else {
                    return Ok(false);
                };
                match Regex::new(&pattern) {
                    Ok(regex) => {
                        info!("compiled {:?} into {} states", pattern, regex.nfa().len());
                        self.regex = regex;
                    }
                    Err(err) => writeln!(self.output, "Invalid regular expression: {}", err)?,
                }
            }
            Command::Dot(argument) => {
                let Some(path) = self.argument_or_prompt(
                    argument,
                    "Please enter a filepath to write the output to:",
                )?
                else {
                    return Ok(false);
                };
                if let Err(err) = std::fs::write(&path, self.regex.to_dot()) {
                    writeln!(self.output, "Error while exporting .dot: {}", err)?;
                } else {
                    info!("exported {:?} to {}", self.regex.as_str(), path);
                }
            }
            Command::Match(argument) => {
                let Some(input) =
                    self.argument_or_prompt(argument, "Please enter a string to check:")?
                else {
                    return Ok(false);
                };
                let verdict = if self.regex.is_match(&input) {
                    "match"
                } else {
                    "no match"
                };
                writeln!(self.output, "{}", verdict)?;
            }
            Command::End => return Ok(false),
            Command::Unknown(token) => {
                let token = if token.is_empty() { "(none)" } else { token };
                writeln!(self.output, "Unknown command: {}", token)?;
            }
        }

        Ok(true)
    }

    /// The expression currently held by the shell
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Use the inline argument, or ask for one. `None` means the input ended.
    fn argument_or_prompt(
        &mut self,
        argument: Option<&str>,
        prompt: &str,
    ) -> io::Result<Option<String>> {
        if let Some(argument) = argument {
            return Ok(Some(argument.to_string()));
        }

        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(self
            .read_line()?
            .map(|line| strip_carriage_return(&line).to_string()))
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
