//! # shellkit CLI
//!
//! Command-line interface for the shellkit toolbox.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;

use shellkit::commands::{
    self, render::parse_var, FieldsArgs, FilterArgs, GitArgs, IniArgs, MedianArgs, PaintArgs,
    ParseArgs, PredicateArgs, RenderArgs, RunArgs, SelectArgs, TakeArgs, UniqueArgs,
};

const GLOBAL_HELP: &str = "\
Input:
  Record commands read JSON from --input or stdin: an array of objects,
  or one object per line. Records are written as JSON Lines.

Field Patterns:
  Field names are matched as case-insensitive regular expressions.
  A pattern matching several fields is ambiguous unless one field name
  equals the pattern exactly; ambiguous and unknown fields are reported
  on stderr together with the names that are available.

Configuration:
  ~/.config/shellkit/config   Optional TOML settings (run `sk setup`)
  RUST_LOG=debug              Diagnostic logging

Examples:
  sk fields -i ps.json                     List field names
  sk select name cpu -i ps.json            Keep two fields
  sk where status running -i svc.json      Filter by value pattern
  sk ini app.ini                           INI file as JSON
  sk render '{name} uses {cpu}%' -i ps.json";

#[derive(Parser)]
#[command(name = "sk")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Shell toolbox for exploring records, INI files and templates")]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Record input shared by the record commands
#[derive(Args)]
struct Input {
    /// Read input from this file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the field names present in the input records
    #[command(after_help = "Examples:\n  \
sk fields -i files.json            All fields, in first-seen order\n  \
sk fields time -i files.json       Fields whose name contains 'time'")]
    Fields {
        /// Only list fields matching this pattern
        pattern: Option<String>,

        #[command(flatten)]
        input: Input,
    },

    /// Keep only the fields matching the given patterns
    #[command(
        long_about = "Keep only the fields matching the given patterns.\n\n\
Each pattern must resolve to exactly one field across the whole input. If any \
pattern is unknown or ambiguous, no records are written and the candidates are \
reported instead. Without patterns, the available fields are listed.",
        after_help = "Examples:\n  \
sk select name length -i files.json\n  \
sk select creationtime -i files.json    Exact name beats CreationTimeUtc"
    )]
    Select {
        /// Field patterns, in output order
        patterns: Vec<String>,

        #[command(flatten)]
        input: Input,
    },

    /// Filter records by the value of one field
    #[command(
        long_about = "Filter records by the value of one field.\n\n\
Without a field, lists the available fields. Without a value, lists the distinct \
values of the field. With --no-value, keeps records whose field is missing, empty, \
zero or false.",
        after_help = "Examples:\n  \
sk where -i svc.json                   Which fields are there?\n  \
sk where status -i svc.json            Which statuses are there?\n  \
sk where status '^run' -i svc.json     Records with a running status\n  \
sk where desc --no-value -i svc.json   Records without a description"
    )]
    Where {
        /// Field pattern
        field: Option<String>,

        /// Value pattern (case-insensitive search)
        value: Option<String>,

        /// Keep records whose field is missing or falsy
        #[arg(long)]
        no_value: bool,

        #[command(flatten)]
        input: Input,
    },

    /// Drop repeated records or lines, keeping first occurrences
    Unique {
        /// Compare records by this field only
        #[arg(long, value_name = "FIELD")]
        by: Option<String>,

        /// Treat input as plain text lines
        #[arg(long, conflicts_with = "by")]
        lines: bool,

        #[command(flatten)]
        input: Input,
    },

    /// Keep the first N records or lines
    First {
        /// Number of items to keep
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Treat input as plain text lines
        #[arg(long)]
        lines: bool,

        #[command(flatten)]
        input: Input,
    },

    /// Keep the last N records or lines
    Last {
        /// Number of items to keep
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Treat input as plain text lines
        #[arg(long)]
        lines: bool,

        #[command(flatten)]
        input: Input,
    },

    /// Succeed if any record's field matches a value pattern
    Any {
        /// Field pattern
        field: String,

        /// Value pattern (case-insensitive search)
        value: String,

        #[command(flatten)]
        input: Input,
    },

    /// Succeed if every record's field matches a value pattern
    All {
        /// Field pattern
        field: String,

        /// Value pattern (case-insensitive search)
        value: String,

        #[command(flatten)]
        input: Input,
    },

    /// Median of a numeric field, or of numeric input lines
    Median {
        /// Field pattern; without it every input line is a number
        field: Option<String>,

        #[command(flatten)]
        input: Input,
    },

    /// Parse an INI file and print it as JSON
    #[command(
        long_about = "Parse an INI file and print it as JSON.\n\n\
Keys before the first section header are hoisted to the top level, unless a \
section of the same name exists. Unrecognized lines are reported as warnings \
and skipped.",
        after_help = "Examples:\n  \
sk ini app.ini\n  \
sk ini --comment '#' --keep-empty app.ini\n  \
cat app.ini | sk ini"
    )]
    Ini {
        /// INI file (stdin when omitted)
        file: Option<PathBuf>,

        /// Comment marker (default from config, normally ';')
        #[arg(long, value_name = "MARKER")]
        comment: Option<String>,

        /// Keep sections without keys
        #[arg(long)]
        keep_empty: bool,
    },

    /// Fill {name} placeholders once per input record
    #[command(
        long_about = "Fill {name} placeholders once per input record.\n\n\
Each placeholder takes the first non-empty value from: the record's field, \
--var values, the [variables] table of the config, the environment. \
Placeholders with no value are left as written.",
        after_help = "Examples:\n  \
sk render '{Name} is {Age}' --var Age=30 -i people.json\n  \
sk render --no-input 'home is {HOME}'"
    )]
    Render {
        /// Template text
        template: String,

        /// Template variable (can repeat)
        #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_var)]
        vars: Vec<(String, String)>,

        /// Render once without reading input records
        #[arg(long, conflicts_with = "input")]
        no_input: bool,

        #[command(flatten)]
        input: Input,
    },

    /// Parse text lines with a capture-group regex
    #[command(after_help = "Examples:\n  \
sk parse 'version (\\S+)' -i log.txt                   Bare values of group 1\n  \
sk parse '^(\\w+)\\s+(\\d+)' --name user --name pid     Labeled records\n  \
sk parse 'line (\\d+)' --enforce -i log.txt            Fail on the first mismatch")]
    Parse {
        /// Regular expression (case-sensitive as written)
        pattern: String,

        /// Label for the next capture group (can repeat)
        #[arg(long = "name", value_name = "LABEL")]
        names: Vec<String>,

        /// Fail on non-matching lines instead of skipping them
        #[arg(long)]
        enforce: bool,

        #[command(flatten)]
        input: Input,
    },

    /// Run a command and print its output, optionally retrying and parsing
    #[command(after_help = "Examples:\n  \
sk run -- git log -n 3 --oneline\n  \
sk run --retry 5 --delay-ms 200 -- curl -fsS http://localhost:8080/health\n  \
sk run --parse '^(\\S+)\\s+(\\S+)' --name hash --name subject -- git log --oneline\n  \
sk run --line 'ls -la' --cwd /tmp")]
    Run {
        /// Whole command line as a single shell-style string
        #[arg(long, conflicts_with = "command")]
        line: Option<String>,

        /// Working directory for the command
        #[arg(long, value_name = "DIR")]
        cwd: Option<PathBuf>,

        /// Retry while the command fails (attempts; config default when no value)
        #[arg(long, value_name = "ATTEMPTS", num_args = 0..=1)]
        retry: Option<Option<u32>>,

        /// Delay between retries in milliseconds
        #[arg(long, value_name = "MS", requires = "retry")]
        delay_ms: Option<u64>,

        /// Parse stdout lines with this capture regex
        #[arg(long, value_name = "PATTERN")]
        parse: Option<String>,

        /// Label for the next capture group (can repeat)
        #[arg(long = "name", value_name = "LABEL", requires = "parse")]
        names: Vec<String>,

        /// Fail on stdout lines that don't match --parse
        #[arg(long, requires = "parse")]
        enforce: bool,

        /// Program and arguments
        #[arg(last = true)]
        command: Vec<String>,
    },

    /// Run git with the given arguments
    #[command(disable_help_flag = true)]
    Git {
        /// Working directory for git
        #[arg(long, value_name = "DIR")]
        cwd: Option<PathBuf>,

        /// Arguments passed to git unchanged
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Print text in a named color
    #[command(after_help = "Colors:\n  \
black red green yellow blue magenta cyan white gray default\n  \
bright-* variants (bright-red, ...) and dark-* aliases (dark-red = red)")]
    Paint {
        /// Color name
        color: String,

        /// Text to print
        #[arg(required = true)]
        text: Vec<String>,

        /// Do not print a trailing newline
        #[arg(short = 'n', long)]
        no_newline: bool,
    },

    /// Create the default configuration file
    Setup,

    /// Print a shell completion script
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    pretty_env_logger::init();

    match run() {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            std::process::exit(1);
        }
    }
}

/// Runs the selected command and returns the process exit code.
fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fields { pattern, input } => commands::fields(&FieldsArgs {
            pattern,
            input: input.input,
        })
        .map(|()| 0),

        Commands::Select { patterns, input } => commands::select(&SelectArgs {
            patterns,
            input: input.input,
        })
        .map(|()| 0),

        Commands::Where {
            field,
            value,
            no_value,
            input,
        } => commands::filter(&FilterArgs {
            field,
            value,
            no_value,
            input: input.input,
        })
        .map(|()| 0),

        Commands::Unique { by, lines, input } => commands::unique(&UniqueArgs {
            by,
            lines,
            input: input.input,
        })
        .map(|()| 0),

        Commands::First {
            count,
            lines,
            input,
        } => commands::first(&TakeArgs {
            count,
            lines,
            input: input.input,
        })
        .map(|()| 0),

        Commands::Last {
            count,
            lines,
            input,
        } => commands::last(&TakeArgs {
            count,
            lines,
            input: input.input,
        })
        .map(|()| 0),

        Commands::Any {
            field,
            value,
            input,
        } => commands::any(&PredicateArgs {
            field,
            value,
            input: input.input,
        })
        .map(|answer| i32::from(!answer)),

        Commands::All {
            field,
            value,
            input,
        } => commands::all(&PredicateArgs {
            field,
            value,
            input: input.input,
        })
        .map(|answer| i32::from(!answer)),

        Commands::Median { field, input } => commands::median(&MedianArgs {
            field,
            input: input.input,
        })
        .map(|()| 0),

        Commands::Ini {
            file,
            comment,
            keep_empty,
        } => commands::ini(&IniArgs {
            file,
            comment,
            keep_empty,
        })
        .map(|()| 0),

        Commands::Render {
            template,
            vars,
            no_input,
            input,
        } => commands::render(&RenderArgs {
            template,
            vars,
            no_input,
            input: input.input,
        })
        .map(|()| 0),

        Commands::Parse {
            pattern,
            names,
            enforce,
            input,
        } => commands::parse(&ParseArgs {
            pattern,
            names,
            enforce,
            input: input.input,
        })
        .map(|()| 0),

        Commands::Run {
            line,
            cwd,
            retry,
            delay_ms,
            parse,
            names,
            enforce,
            command,
        } => commands::run(&RunArgs {
            command,
            line,
            cwd,
            retry,
            delay_ms,
            parse,
            names,
            enforce,
        }),

        Commands::Git { cwd, args } => commands::git(&GitArgs { args, cwd }),

        Commands::Paint {
            color,
            text,
            no_newline,
        } => commands::paint(&PaintArgs {
            color,
            text,
            no_newline,
        })
        .map(|()| 0),

        Commands::Setup => commands::setup().map(|()| 0),

        Commands::Completions { shell } => {
            commands::completions(shell, &mut Cli::command()).map(|()| 0)
        }
    }
}
