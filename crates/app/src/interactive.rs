//! Line-based quiz loop for the terminal.

use std::error::Error;
use std::io::{BufRead, Write};

use daftar_core::quiz::QuizSummary;
use services::{QuizAttempt, QuizLoopService};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizOutcome {
    Finished,
    Quit,
}

/// Read one trimmed, lowercased line. `None` at end of input.
fn read_reply(input: &mut impl BufRead) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

/// Play `attempt` until the results screen; offers to play again with the same filters.
///
/// # Errors
///
/// Returns I/O errors and quiz service errors.
pub async fn play(
    quiz: &QuizLoopService,
    attempt: &mut QuizAttempt,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<QuizOutcome, Box<dyn Error>> {
    loop {
        while !attempt.is_complete() {
            let Some(card) = attempt.current_card() else {
                break;
            };
            writeln!(out)?;
            writeln!(out, "[{}/{}] {}", card.position, card.total, card.prompt)?;
            write!(out, "{} (Enter to reveal, q to quit) ", card.hint)?;
            out.flush()?;

            match read_reply(input)?.as_deref() {
                None | Some("q") => return Ok(QuizOutcome::Quit),
                Some(_) => attempt.reveal()?,
            }
            if let Some(answer) = attempt.current_card().and_then(|card| card.answer) {
                writeln!(out, "  => {answer}")?;
            }

            let correct = loop {
                write!(out, "Did you know it? [y/n] ")?;
                out.flush()?;
                match read_reply(input)?.as_deref() {
                    None | Some("q") => return Ok(QuizOutcome::Quit),
                    Some("y" | "yes") => break true,
                    Some("n" | "no") => break false,
                    Some(_) => {}
                }
            };

            let result = quiz.answer_current(attempt, correct).await?;
            log::debug!("answered {} ({})", result.entry_id, result.correct);
        }

        if let Some(summary) = attempt.summary() {
            print_summary(out, summary)?;
        }

        write!(out, "Play again? [y/N] ")?;
        out.flush()?;
        if !matches!(read_reply(input)?.as_deref(), Some("y" | "yes")) {
            return Ok(QuizOutcome::Finished);
        }
        let filters = attempt.filters().to_vec();
        quiz.restart_quiz(attempt, &filters).await?;
    }
}

fn print_summary(out: &mut impl Write, summary: &QuizSummary) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Quiz complete!")?;
    writeln!(
        out,
        "Correct: {}  Incorrect: {}  Accuracy: {}%  Time: {}",
        summary.correct_count(),
        summary.incorrect_count(),
        summary.accuracy_percent(),
        summary.format_elapsed()
    )?;
    if !summary.incorrect_words().is_empty() {
        writeln!(out, "Words to review:")?;
        for entry in summary.incorrect_words() {
            writeln!(out, "  {}  {}", entry.arabic_text(), entry.translation())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::Arc;

    use daftar_core::quiz::{QuizConfiguration, QuizMode};
    use daftar_core::time::fixed_now;
    use services::Clock;
    use storage::repository::InMemoryRepository;
    use storage::seed::demo_vocabulary;

    fn service() -> QuizLoopService {
        let repo = InMemoryRepository::with_entries(demo_vocabulary(fixed_now()));
        QuizLoopService::new(Clock::fixed(fixed_now()), Arc::new(repo.clone()), Arc::new(repo))
    }

    #[tokio::test]
    async fn plays_to_results_and_lists_missed_words() {
        let quiz = service();
        let config = QuizConfiguration::new(2, QuizMode::ArabicToTranslation).unwrap();
        let mut attempt = quiz.start_quiz(config, &[]).await.unwrap();
        let mut input = Cursor::new("\ny\n\nmaybe\nn\nn\n");
        let mut out = Vec::new();

        let outcome = play(&quiz, &mut attempt, &mut input, &mut out).await.unwrap();
        assert_eq!(outcome, QuizOutcome::Finished);
        assert!(attempt.record_id().is_some());

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[1/2] كتاب"));
        assert!(text.contains("=> Book"));
        assert!(text.contains("Accuracy: 50%"));
        assert!(text.contains("مرحبا  Hello"));
    }

    #[tokio::test]
    async fn quitting_mid_quiz_stores_nothing() {
        let quiz = service();
        let mut attempt = quiz
            .start_quiz(QuizConfiguration::default(), &[])
            .await
            .unwrap();
        let mut input = Cursor::new("\ny\nq\n");
        let mut out = Vec::new();

        let outcome = play(&quiz, &mut attempt, &mut input, &mut out).await.unwrap();
        assert_eq!(outcome, QuizOutcome::Quit);
        assert_eq!(attempt.session().answer_log().len(), 1);
        assert!(quiz.history(5).await.unwrap().is_empty());
    }
}
