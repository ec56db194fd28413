//! Interactive flows behind each menu entry.
//!
//! Each flow talks to the user through a [`Console`] and mutates state only
//! through [`Session`]. Rejected input surfaces as a [`QuizError`] before any
//! store is touched.

use anyhow::Result;

use crate::error::QuizError;
use crate::model::{Question, QuestionDraft, QuestionType};
use crate::session::Session;
use crate::statistics::{render_profile_statistics, render_question_statistics};
use crate::traits::{Console, Storage};

/// Literal answer that leaves practice mode.
pub const EXIT_SENTINEL: &str = "done";

fn parse_number<T: std::str::FromStr>(input: &str) -> Result<T, QuizError> {
    input
        .trim()
        .parse()
        .map_err(|_| QuizError::InvalidNumber(input.to_string()))
}

/// Show a question's text and, for quiz questions, its numbered options.
/// Returns the prompt to use for the answer.
fn present(console: &mut dyn Console, question: &Question) -> Result<&'static str> {
    console.say(&format!("Question: {}", question.text))?;
    for (i, option) in question.options().iter().enumerate() {
        console.say(&format!("{}. {option}", i + 1))?;
    }
    Ok(match question.kind {
        QuestionType::Quiz => "Select the correct option number: ",
        QuestionType::FreeForm => "Enter your answer: ",
    })
}

/// Collect a new question from the user and store it.
pub fn add_question<S: Storage>(
    session: &mut Session<S>,
    console: &mut dyn Console,
) -> Result<()> {
    console.say("Adding a question:")?;
    let text = console.ask("Enter the question text: ")?;
    let kind: QuestionType = console
        .ask("Enter the question type (1 for quiz, 2 for free-form): ")?
        .parse()?;

    let draft = match kind {
        QuestionType::Quiz => {
            let count: usize =
                parse_number(&console.ask("Enter the number of answer options: ")?)?;
            if count == 0 {
                return Err(QuizError::NoOptions.into());
            }
            let mut options = Vec::with_capacity(count);
            for i in 1..=count {
                options.push(console.ask(&format!("Enter option {i}: "))?);
            }
            let correct = console.ask("Enter the correct answer option number: ")?;
            QuestionDraft::quiz(text, options, correct)
        }
        QuestionType::FreeForm => {
            let correct = console.ask("Enter the correct answer: ")?;
            QuestionDraft::free_form(text, correct)
        }
    };

    let id = session.add_question(draft)?;
    console.say(&format!("Question added with ID {id}."))?;
    Ok(())
}

/// Enable or disable one question chosen by id.
pub fn toggle_question<S: Storage>(
    session: &mut Session<S>,
    console: &mut dyn Console,
) -> Result<()> {
    console.say("Available Questions:")?;
    for question in session.questions() {
        console.say(&format!("Question ID: {}", question.id))?;
    }
    let id: u32 = parse_number(
        &console.ask("Enter the ID of the question you want to disable/enable: ")?,
    )?;
    let question = session
        .find_by_id(id)
        .ok_or(QuizError::QuestionNotFound(id))?;

    console.say("Question Information:")?;
    console.say(&format!("ID: {}", question.id))?;
    console.say(&format!("Question Text: {}", question.text))?;
    console.say(&format!("Answer: {}", question.correct_answer))?;

    let action = console.ask(
        "Enter 'disable' to disable the question or 'enable' to enable the question: ",
    )?;
    let active = match action.as_str() {
        "disable" => false,
        "enable" => true,
        _ => return Err(QuizError::UnknownAction(action).into()),
    };
    session.set_active(id, active)?;
    console.say(&format!(
        "Question {id} {}.",
        if active { "enabled" } else { "disabled" }
    ))?;
    Ok(())
}

/// Adaptive drilling until the user answers `done`.
///
/// The draw answered with `done` is still scored and counted before the
/// loop exits.
pub fn practice<S: Storage>(session: &mut Session<S>, console: &mut dyn Console) -> Result<()> {
    session.ensure_enough_questions("Practice")?;

    loop {
        let question = session.draw_practice_question()?;
        console.say("")?;
        console.say(&format!("write {EXIT_SENTINEL} to exit"))?;
        let prompt = present(console, &question)?;
        let answer = console.ask(prompt)?;

        let correct = session.record_practice_answer(question.id, &answer)?;
        if correct {
            console.say("Correct!")?;
        }
        if answer == EXIT_SENTINEL {
            console.say("Bye from Practice Mode")?;
            return Ok(());
        }
        if !correct {
            console.say("Incorrect.")?;
        }
    }
}

/// A fixed-size scored test recorded against the current profile.
pub fn test<S: Storage>(session: &mut Session<S>, console: &mut dyn Console) -> Result<()> {
    session.ensure_enough_questions("Test")?;
    session.ensure_active("the test")?;
    let count: usize =
        parse_number(&console.ask("Enter the number of questions for the test: ")?)?;
    let questions = session.draw_test(count)?;

    let mut score = 0;
    for question in &questions {
        console.say("")?;
        console.say(&format!("Question ID: {}", question.id))?;
        let prompt = present(console, question)?;
        let answer = console.ask(prompt)?;
        if question.check_answer(&answer) {
            console.say("Correct!")?;
            score += 1;
        } else {
            console.say("Incorrect.")?;
        }
    }

    let result = session.finish_test(score, count)?;
    console.say(&result.to_string())?;
    Ok(())
}

/// Print practice statistics for every question.
pub fn view_statistics<S: Storage>(session: &Session<S>, console: &mut dyn Console) -> Result<()> {
    for line in render_question_statistics(session.questions()) {
        console.say(&line)?;
    }
    Ok(())
}

/// Ask for a profile name and make it current.
pub fn select_profile<S: Storage>(
    session: &mut Session<S>,
    console: &mut dyn Console,
) -> Result<()> {
    let name = console.ask("Enter profile name: ")?;
    session.select_profile(&name)
}

/// Print the current profile's aggregates; silent when none is selected.
pub fn profile_statistics<S: Storage>(
    session: &Session<S>,
    console: &mut dyn Console,
) -> Result<()> {
    if let Some((name, stats)) = session.current_profile_stats() {
        for line in render_profile_statistics(name, stats) {
            console.say(&line)?;
        }
    }
    Ok(())
}
