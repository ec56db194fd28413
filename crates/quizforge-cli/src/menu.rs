//! The numbered main menu and its dispatch loop.

use std::str::FromStr;

use anyhow::Result;

use quizforge_core::error::QuizError;
use quizforge_core::modes;
use quizforge_core::session::Session;
use quizforge_core::traits::{Console, Storage};

const WELCOME: &str = "Welcome to the Interactive Learning Tool!";
const FAREWELL: &str = "Bye from this Learning Tool";

const MENU: [&str; 9] = [
    "Menu:",
    "1. Adding questions",
    "2. Disable/Enable questions",
    "3. Practice Mode",
    "4. Test Mode",
    "5. Application Statistics viewing",
    "6. Profile Select",
    "7. Individual profile data",
    "0. Quit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddQuestion,
    ToggleQuestion,
    Practice,
    Test,
    QuestionStatistics,
    SelectProfile,
    ProfileStatistics,
    Quit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::AddQuestion),
            "2" => Ok(MenuChoice::ToggleQuestion),
            "3" => Ok(MenuChoice::Practice),
            "4" => Ok(MenuChoice::Test),
            "5" => Ok(MenuChoice::QuestionStatistics),
            "6" => Ok(MenuChoice::SelectProfile),
            "7" => Ok(MenuChoice::ProfileStatistics),
            "0" => Ok(MenuChoice::Quit),
            other => Err(format!("unknown menu choice: {other}")),
        }
    }
}

enum Flow {
    Continue,
    Stop,
}

/// Sort an operation's outcome: rejected input is reported and the menu
/// continues, closed input stops it, anything else is a real failure.
fn settle(result: Result<()>, console: &mut dyn Console) -> Result<Flow> {
    let Err(err) = result else {
        return Ok(Flow::Continue);
    };
    match err.downcast_ref::<QuizError>() {
        Some(e) if e.is_terminal() => Ok(Flow::Stop),
        Some(e) => {
            tracing::info!(error = ?e, "operation rejected");
            console.say(&e.to_string())?;
            Ok(Flow::Continue)
        }
        None => Err(err),
    }
}

fn dispatch<S: Storage>(
    choice: MenuChoice,
    session: &mut Session<S>,
    console: &mut dyn Console,
) -> Result<()> {
    match choice {
        MenuChoice::AddQuestion => modes::add_question(session, console),
        MenuChoice::ToggleQuestion => modes::toggle_question(session, console),
        MenuChoice::Practice => modes::practice(session, console),
        MenuChoice::Test => modes::test(session, console),
        MenuChoice::QuestionStatistics => modes::view_statistics(session, console),
        MenuChoice::SelectProfile => modes::select_profile(session, console),
        MenuChoice::ProfileStatistics => modes::profile_statistics(session, console),
        MenuChoice::Quit => Ok(()),
    }
}

/// Greet, select a profile, then serve the menu until the user quits or
/// input ends.
pub fn run<S: Storage>(session: &mut Session<S>, console: &mut dyn Console) -> Result<()> {
    console.say(WELCOME)?;
    let startup = modes::select_profile(session, console);
    if let Flow::Continue = settle(startup, console)? {
        serve(session, console)?;
    }
    console.say(FAREWELL)
}

fn serve<S: Storage>(session: &mut Session<S>, console: &mut dyn Console) -> Result<()> {
    loop {
        console.say("")?;
        for line in MENU {
            console.say(line)?;
        }

        let input = match console.ask("Enter your choice: ") {
            Ok(input) => input,
            Err(err) => match settle(Err(err), console)? {
                Flow::Continue => continue,
                Flow::Stop => return Ok(()),
            },
        };

        let choice = match input.parse::<MenuChoice>() {
            Ok(MenuChoice::Quit) => return Ok(()),
            Ok(choice) => choice,
            Err(e) => {
                tracing::debug!("{e}");
                console.say("Invalid choice. Please try again.")?;
                continue;
            }
        };

        if let Flow::Stop = settle(dispatch(choice, session, console), console)? {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizforge_core::model::{Question, QuestionDraft};
    use quizforge_core::traits::{MemoryStorage, ScriptedConsole};

    fn five_free_form() -> Vec<Question> {
        (1..=5)
            .map(|id| {
                QuestionDraft::free_form(format!("Question {id}"), "paris")
                    .into_question(id)
                    .unwrap()
            })
            .collect()
    }

    fn run_script(storage: MemoryStorage, answers: &[&str]) -> ScriptedConsole {
        let mut session = Session::load(storage).unwrap();
        let mut console = ScriptedConsole::new(answers.iter().copied());
        run(&mut session, &mut console).unwrap();
        console
    }

    #[test]
    fn menu_choice_parsing() {
        assert_eq!("3".parse::<MenuChoice>(), Ok(MenuChoice::Practice));
        assert_eq!(" 0 ".parse::<MenuChoice>(), Ok(MenuChoice::Quit));
        assert!("8".parse::<MenuChoice>().is_err());
        assert!("quit".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn menu_lists_every_entry_in_order() {
        let console = run_script(MemoryStorage::new(), &["alice", "0"]);
        let start = console
            .transcript()
            .iter()
            .position(|l| l == "Menu:")
            .unwrap();
        assert_eq!(&console.transcript()[start..start + MENU.len()], MENU);
        assert!(console.printed("5. Application Statistics viewing"));
        assert!(console.printed("7. Individual profile data"));
    }

    #[test]
    fn quit_says_goodbye() {
        let console = run_script(MemoryStorage::new(), &["alice", "0"]);
        assert_eq!(console.transcript()[0], WELCOME);
        assert_eq!(console.transcript().last().unwrap(), FAREWELL);
    }

    #[test]
    fn invalid_choice_redisplays_menu() {
        let console = run_script(MemoryStorage::new(), &["alice", "9", "0"]);
        assert!(console.printed("Invalid choice. Please try again."));
        let menus = console.transcript().iter().filter(|l| *l == "Menu:").count();
        assert_eq!(menus, 2);
    }

    #[test]
    fn rejected_operation_keeps_the_loop_alive() {
        let storage = MemoryStorage::new();
        let console = run_script(storage.clone(), &["alice", "3", "1", "Q?", "7", "0"]);
        assert!(console.printed("Practice mode requires at least 5 questions."));
        assert!(console.printed("Invalid question type."));
        assert_eq!(console.remaining(), 0);
        assert!(storage.snapshot().questions.is_empty());
    }

    #[test]
    fn end_of_input_ends_the_session_cleanly() {
        let console = run_script(MemoryStorage::new(), &["alice", "1", "Half a question"]);
        assert_eq!(console.transcript().last().unwrap(), FAREWELL);
    }

    #[test]
    fn end_of_input_before_profile() {
        let storage = MemoryStorage::new();
        let console = run_script(storage.clone(), &[]);
        assert_eq!(console.transcript().last().unwrap(), FAREWELL);
        assert!(storage.snapshot().profiles.is_empty());
    }

    #[test]
    fn test_then_profile_statistics() {
        let storage = MemoryStorage::with_questions(five_free_form());
        let console = run_script(
            storage.clone(),
            &["alice", "4", "3", "paris", "paris", "paris", "7", "0"],
        );
        assert!(console.printed("Score: 3"));
        assert!(console.printed("Total Questions: 3"));
        assert!(console.printed("Times Correct: 3"));
        assert_eq!(storage.snapshot().results[0].ratio(), "3/3");
    }
}
