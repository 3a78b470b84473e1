use std::fmt;

use daftar_core::model::{
    Difficulty, FilterScope, InterfaceLanguage, TranslationDirection, VocabularyQuery,
};
use daftar_core::quiz::{QuizFilter, QuizMode};

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidValue { flag: &'static str, raw: String },
    MissingText,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidValue { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::MissingText => write!(f, "translate needs some text"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_value<T: std::str::FromStr>(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<T, ArgsError> {
    let raw = require_value(args, flag)?;
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidValue { flag, raw })
}

fn parse_switch(args: &mut impl Iterator<Item = String>, flag: &'static str) -> Result<bool, ArgsError> {
    let raw = require_value(args, flag)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(ArgsError::InvalidValue { flag, raw }),
    }
}

/// `--count` accepts a positive number or `all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountArg {
    Limited(usize),
    All,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizArgs {
    pub count: Option<CountArg>,
    pub mode: QuizMode,
    pub filters: Vec<QuizFilter>,
    pub shuffle: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateArgs {
    pub text: String,
    pub direction: TranslationDirection,
    pub save: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsArgs {
    pub font_size: Option<u8>,
    pub language: Option<InterfaceLanguage>,
    pub daily_reminder: Option<bool>,
    pub quiz_streak: Option<bool>,
}

impl SettingsArgs {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quiz(QuizArgs),
    Translate(TranslateArgs),
    Vocab(VocabularyQuery),
    Settings(SettingsArgs),
    Help,
}

/// Parse everything after the program name.
pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Command, ArgsError> {
    let mut args = args.into_iter();
    let Some(first) = args.next() else {
        return Ok(Command::Help);
    };

    match first.as_str() {
        "quiz" => parse_quiz(&mut args).map(Command::Quiz),
        "translate" => parse_translate(&mut args).map(Command::Translate),
        "vocab" => parse_vocab(&mut args).map(Command::Vocab),
        "settings" => parse_settings(&mut args).map(Command::Settings),
        "help" | "--help" | "-h" => Ok(Command::Help),
        _ => Err(ArgsError::UnknownCommand(first)),
    }
}

fn parse_quiz(args: &mut impl Iterator<Item = String>) -> Result<QuizArgs, ArgsError> {
    let mut parsed = QuizArgs::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--count" => {
                let raw = require_value(args, "--count")?;
                parsed.count = Some(if raw.trim().eq_ignore_ascii_case("all") {
                    CountArg::All
                } else {
                    match raw.trim().parse::<usize>() {
                        Ok(n) if n > 0 => CountArg::Limited(n),
                        _ => return Err(ArgsError::InvalidValue { flag: "--count", raw }),
                    }
                });
            }
            "--mode" => parsed.mode = parse_value(args, "--mode")?,
            "--favorites" => parsed.filters.push(QuizFilter::Favorites),
            "--category" => {
                let category = require_value(args, "--category")?;
                parsed.filters.push(QuizFilter::Category(category));
            }
            "--difficulty" => {
                let raw = require_value(args, "--difficulty")?;
                let level = raw
                    .trim()
                    .parse::<u8>()
                    .ok()
                    .and_then(|value| Difficulty::new(value).ok())
                    .ok_or(ArgsError::InvalidValue {
                        flag: "--difficulty",
                        raw,
                    })?;
                parsed.filters.push(QuizFilter::Difficulty(level));
            }
            "--recent" => parsed.filters.push(QuizFilter::Recent),
            "--shuffle" => parsed.shuffle = true,
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }
    Ok(parsed)
}

fn parse_translate(args: &mut impl Iterator<Item = String>) -> Result<TranslateArgs, ArgsError> {
    let mut words: Vec<String> = Vec::new();
    let mut direction = TranslationDirection::default();
    let mut save = false;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--direction" => direction = parse_value(args, "--direction")?,
            "--save" => save = true,
            flag if flag.starts_with("--") => return Err(ArgsError::UnknownArg(arg)),
            _ => words.push(arg),
        }
    }

    let text = words.join(" ");
    if text.trim().is_empty() {
        return Err(ArgsError::MissingText);
    }
    Ok(TranslateArgs {
        text,
        direction,
        save,
    })
}

fn parse_vocab(args: &mut impl Iterator<Item = String>) -> Result<VocabularyQuery, ArgsError> {
    let mut query = VocabularyQuery::all();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--search" => query.search = require_value(args, "--search")?,
            "--favorites" => query.scope = FilterScope::Favorites,
            "--category" => {
                query.scope = FilterScope::Category(require_value(args, "--category")?);
            }
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }
    Ok(query)
}

fn parse_settings(args: &mut impl Iterator<Item = String>) -> Result<SettingsArgs, ArgsError> {
    let mut parsed = SettingsArgs::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--font-size" => parsed.font_size = Some(parse_value(args, "--font-size")?),
            "--language" => {
                let raw = require_value(args, "--language")?;
                parsed.language = match raw.trim().to_ascii_lowercase().as_str() {
                    "en" => Some(InterfaceLanguage::En),
                    "fr" => Some(InterfaceLanguage::Fr),
                    _ => return Err(ArgsError::InvalidValue { flag: "--language", raw }),
                };
            }
            "--daily-reminder" => parsed.daily_reminder = Some(parse_switch(args, "--daily-reminder")?),
            "--quiz-streak" => parsed.quiz_streak = Some(parse_switch(args, "--quiz-streak")?),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }
    Ok(parsed)
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  daftar quiz [--count N|all] [--mode ar-tr|tr-ar] [--favorites] [--category C]");
    eprintln!("              [--difficulty 1-5] [--recent] [--shuffle]");
    eprintln!("  daftar translate <text...> [--direction ar-en|ar-fr|to-ar] [--save]");
    eprintln!("  daftar vocab [--search Q] [--favorites] [--category C]");
    eprintln!("  daftar settings [--font-size 14-24] [--language en|fr]");
    eprintln!("                  [--daily-reminder on|off] [--quiz-streak on|off]");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  DAFTAR_TRANSLATE_API_KEY, DAFTAR_TRANSLATE_BASE_URL, DAFTAR_TRANSLATE_MODEL");
    eprintln!("  DAFTAR_QUIZ_WORD_COUNT, DAFTAR_QUIZ_SHUFFLE, RUST_LOG");
}
