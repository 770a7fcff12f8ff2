use std::io::{self, BufRead};

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::{
    cli::output,
    config::Config,
    errors::CliError,
    ledger::{parse_amount, Ledger},
    storage::{ledger_warnings, JsonStore},
};

/// Environment variable that switches the CLI into script mode, where every
/// prompt consumes one raw stdin line instead of going through rustyline.
pub const SCRIPT_MODE_ENV: &str = "BUDGET_TRACKER_SCRIPT";

#[derive(Clone, Copy, PartialEq, Eq)]
enum CliMode {
    Interactive,
    Script,
}

/// Runs the interactive menu loop until save-and-exit or end of input.
pub fn run_cli(config: Config) -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_MODE_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let store = JsonStore::new(config.data_file);
    let ledger = load_or_fresh(&store);
    let prompter = Prompter::new(mode)?;

    Shell {
        ledger,
        store,
        prompter,
    }
    .run()
}

fn load_or_fresh(store: &JsonStore) -> Ledger {
    match store.load() {
        Ok(Some(ledger)) => {
            output::info(format!("Data loaded from {}.", store.path().display()));
            for warning in ledger_warnings(&ledger) {
                output::warning(&warning);
                tracing::warn!(%warning, "loaded store failed integrity check");
            }
            ledger
        }
        Ok(None) => {
            output::info("No saved data found. Starting fresh.");
            Ledger::new()
        }
        Err(err) => {
            output::warning(format!("Could not read saved data ({err}). Starting fresh."));
            Ledger::new()
        }
    }
}

struct Shell {
    ledger: Ledger,
    store: JsonStore,
    prompter: Prompter,
}

impl Shell {
    fn run(&mut self) -> Result<(), CliError> {
        loop {
            render_menu();
            let Some(choice) = self.prompter.read_line("Choose an option: ")? else {
                output::warning("Input ended. Exiting without saving.");
                break;
            };
            match choice.trim() {
                "" => continue,
                "1" => self.add_income()?,
                "2" => self.add_expense()?,
                "3" => println!("\n{}", self.ledger.summary()),
                "4" => {
                    self.save_and_exit();
                    break;
                }
                _ => output::error("Invalid choice. Please try again."),
            }
        }
        Ok(())
    }

    fn add_income(&mut self) -> Result<(), CliError> {
        let Some(source) = self.prompter.read_line("Enter the source of income: ")? else {
            return Ok(());
        };
        let Some(raw_amount) = self.prompter.read_line("Enter the amount: ")? else {
            return Ok(());
        };
        let added = parse_amount(&raw_amount)
            .and_then(|amount| self.ledger.add_income(amount).map(|()| amount));
        match added {
            Ok(amount) => output::success(format!(
                "Income from {} of ${:.2} added successfully.",
                source.trim(),
                amount
            )),
            Err(err) => output::error(err),
        }
        Ok(())
    }

    fn add_expense(&mut self) -> Result<(), CliError> {
        let Some(category) = self.prompter.read_line("Enter the expense category: ")? else {
            return Ok(());
        };
        let Some(description) = self
            .prompter
            .read_line("Enter the description of the expense: ")?
        else {
            return Ok(());
        };
        let Some(raw_amount) = self.prompter.read_line("Enter the amount: ")? else {
            return Ok(());
        };
        let category = category.trim().to_string();
        let description = description.trim().to_string();
        let added = parse_amount(&raw_amount).and_then(|amount| {
            self.ledger
                .add_expense(&category, description.clone(), amount)
                .map(|()| amount)
        });
        match added {
            Ok(amount) => output::success(format!(
                "Expense of ${amount:.2} for {description} added to {category}."
            )),
            Err(err) => output::error(err),
        }
        Ok(())
    }

    /// Best-effort save: a write failure is reported, but the session still
    /// ends as requested.
    fn save_and_exit(&self) {
        match self.store.save(&self.ledger) {
            Ok(()) => output::success(format!("Data saved to {}.", self.store.path().display())),
            Err(err) => output::error(format!("saving data failed: {err}")),
        }
        output::info("Goodbye!");
    }
}

fn render_menu() {
    output::section("Budget Tracker");
    println!("1. Add Income");
    println!("2. Add Expense");
    println!("3. View Summary");
    println!("4. Save and Exit");
}

/// Reads prompt responses either through rustyline (interactive) or from raw
/// stdin lines (script mode). `None` means the input source is exhausted or
/// the user aborted the prompt.
enum Prompter {
    Interactive(Box<DefaultEditor>),
    Script(io::Lines<io::StdinLock<'static>>),
}

impl Prompter {
    fn new(mode: CliMode) -> Result<Self, CliError> {
        match mode {
            CliMode::Interactive => Ok(Self::Interactive(Box::new(DefaultEditor::new()?))),
            CliMode::Script => Ok(Self::Script(io::stdin().lock().lines())),
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        match self {
            Self::Interactive(editor) => match editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        editor.add_history_entry(line.trim()).ok();
                    }
                    Ok(Some(line))
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
                Err(err) => Err(err.into()),
            },
            Self::Script(lines) => match lines.next() {
                Some(line) => Ok(Some(line?)),
                None => Ok(None),
            },
        }
    }
}
