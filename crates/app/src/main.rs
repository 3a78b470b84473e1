mod args;
mod interactive;

use std::error::Error;
use std::io::{self, Write};

use args::{Command, CountArg, QuizArgs, SettingsArgs, TranslateArgs};
use daftar_core::model::{TranslationResult, VocabularyEntry, VocabularyQuery};
use daftar_core::quiz::QuizConfiguration;
use services::{AppConfig, AppServices, Clock};

fn quiz_configuration(config: &AppConfig, args: &QuizArgs) -> Result<QuizConfiguration, Box<dyn Error>> {
    Ok(match args.count {
        None => config.quiz_configuration(args.mode),
        Some(CountArg::All) => QuizConfiguration::all(args.mode),
        Some(CountArg::Limited(n)) => QuizConfiguration::new(n, args.mode)?,
    })
}

async fn run_quiz(services: &AppServices, args: &QuizArgs) -> Result<(), Box<dyn Error>> {
    let quiz = services.quiz_loop();
    let config = quiz_configuration(services.config(), args)?;
    let mut attempt = quiz.start_quiz(config, &args.filters).await?;
    println!(
        "{}: {} words",
        config.mode().label(),
        attempt.progress().total
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    interactive::play(&quiz, &mut attempt, &mut input, &mut out).await?;
    Ok(())
}

fn print_translation(out: &mut impl Write, result: &TranslationResult) -> io::Result<()> {
    writeln!(out, "{}", result.translation)?;
    if !result.word_breakdown.is_empty() {
        writeln!(out)?;
        writeln!(out, "Word breakdown:")?;
        for word in &result.word_breakdown {
            let mut detail: Vec<&str> = Vec::new();
            if let Some(root) = &word.root {
                detail.push(root);
            }
            if let Some(pos) = word.part_of_speech {
                detail.push(pos.as_str());
            }
            if detail.is_empty() {
                writeln!(out, "  {}  {}", word.arabic, word.translation)?;
            } else {
                writeln!(out, "  {}  ({})  {}", word.arabic, detail.join(", "), word.translation)?;
            }
        }
    }
    if let Some(example) = &result.example_sentence {
        writeln!(out)?;
        writeln!(out, "Example: {example}")?;
        if let Some(translation) = &result.example_translation {
            writeln!(out, "         {translation}")?;
        }
    }
    Ok(())
}

async fn run_translate(services: &AppServices, args: &TranslateArgs) -> Result<(), Box<dyn Error>> {
    let translator = services.translator();
    let result = translator.translate(&args.text, args.direction).await?;
    print_translation(&mut io::stdout(), &result)?;

    if args.save {
        let entry = translator.save_to_vocabulary(&result).await?;
        println!();
        println!(
            "Saved {} to vocabulary ({} words).",
            entry.arabic_text(),
            services.vocabulary().count().await?
        );
    }
    Ok(())
}

fn format_entry(entry: &VocabularyEntry) -> String {
    let star = if entry.is_favorite() { '*' } else { ' ' };
    let category = entry
        .category()
        .map(|category| format!("  [{category}]"))
        .unwrap_or_default();
    format!(
        "{star} {}  {}{category}  difficulty {}/5",
        entry.arabic_text(),
        entry.translation(),
        entry.difficulty().value()
    )
}

async fn run_vocab(services: &AppServices, query: &VocabularyQuery) -> Result<(), Box<dyn Error>> {
    let vocabulary = services.vocabulary();
    let entries = vocabulary.list(query).await?;
    let total = vocabulary.count().await?;
    println!("{} of {total} words", entries.len());
    for entry in &entries {
        println!("{}", format_entry(entry));
    }
    println!();
    println!("Categories: {}", vocabulary.categories().await?.join(", "));
    Ok(())
}

async fn run_settings(services: &AppServices, args: &SettingsArgs) -> Result<(), Box<dyn Error>> {
    let preferences = services.preferences();
    let mut current = preferences.load().await?;
    if !args.is_empty() {
        let mut draft = current.to_draft();
        if let Some(font_size) = args.font_size {
            draft.font_size = font_size;
        }
        if let Some(language) = args.language {
            draft.translation_language = language;
        }
        if let Some(on) = args.daily_reminder {
            draft.daily_reminder = on;
        }
        if let Some(on) = args.quiz_streak {
            draft.quiz_streak = on;
        }
        current = preferences.save(draft).await?;
    }

    let on_off = |on: bool| if on { "on" } else { "off" };
    println!("Translation language: {}", current.translation_language().label());
    println!("Daily reminder:       {}", on_off(current.daily_reminder()));
    println!("Quiz streak:          {}", on_off(current.quiz_streak()));
    println!("Font size:            {}px", current.font_size());
    Ok(())
}

async fn run() -> Result<(), Box<dyn Error>> {
    let command = args::parse(std::env::args().skip(1)).inspect_err(|e| {
        eprintln!("{e}");
        args::print_usage();
    })?;

    let mut config = AppConfig::from_env();
    if let Command::Quiz(quiz) = &command {
        config.shuffle_quiz |= quiz.shuffle;
    }
    let services = AppServices::in_memory_demo(config, Clock::default_clock());

    match command {
        Command::Quiz(args) => run_quiz(&services, &args).await,
        Command::Translate(args) => run_translate(&services, &args).await,
        Command::Vocab(query) => run_vocab(&services, &query).await,
        Command::Settings(args) => run_settings(&services, &args).await,
        Command::Help => {
            args::print_usage();
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
