//! Interactive menu shell
//!
//! Reads one line per prompt, routes each menu selection to a [`Ledger`]
//! operation and prints the outcome. Every ledger error is printed and the
//! loop continues; only `8`, end of input or a terminal I/O failure end the
//! session.

use crate::core::{AccountStorage, Ledger};
use crate::types::{is_valid_pin, validate_name, validate_opening_deposit, LedgerError};
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Menu text shown before every selection
pub const MENU: &str = "1. Create Account\n\
                        2. Deposit\n\
                        3. Withdraw\n\
                        4. Check Balance\n\
                        5. View All Accounts\n\
                        6. Close Account\n\
                        7. Delete All Accounts\n\
                        8. Exit\n";

/// Printed after every PIN mismatch during closure
const WRONG_PIN: &str = "Wrong PIN. Please try again.";

/// One entry of the numbered menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAccount,
    Deposit,
    Withdraw,
    CheckBalance,
    ViewAll,
    CloseAccount,
    DeleteAll,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::CreateAccount),
            "2" => Ok(MenuChoice::Deposit),
            "3" => Ok(MenuChoice::Withdraw),
            "4" => Ok(MenuChoice::CheckBalance),
            "5" => Ok(MenuChoice::ViewAll),
            "6" => Ok(MenuChoice::CloseAccount),
            "7" => Ok(MenuChoice::DeleteAll),
            "8" => Ok(MenuChoice::Exit),
            other => Err(format!("unknown menu choice '{}'", other)),
        }
    }
}

/// Whether the session goes on after a menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Line-based prompting over any reader/writer pair
struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Print `label` without a newline and read the reply, trimmed
    ///
    /// Returns `None` at end of input.
    fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }
}

/// Interactive session over a ledger
pub struct Shell<'a, S: AccountStorage, R, W> {
    ledger: &'a mut Ledger<S>,
    prompter: Prompter<R, W>,
}

// Bail out of a menu action when input ends mid-prompt
macro_rules! ask_or_quit {
    ($self:ident, $label:expr) => {
        match $self.prompter.ask($label)? {
            Some(answer) => answer,
            None => return Ok(Flow::Quit),
        }
    };
}

impl<'a, S: AccountStorage, R: BufRead, W: Write> Shell<'a, S, R, W> {
    pub fn new(ledger: &'a mut Ledger<S>, input: R, output: W) -> Self {
        Shell {
            ledger,
            prompter: Prompter { input, output },
        }
    }

    /// Run menu rounds until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.prompter.output, "{}", MENU)?;
            self.prompter.output.flush()?;

            let Some(line) = self.prompter.read_line()? else {
                return Ok(());
            };

            let flow = match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Exit) => Flow::Quit,
                Ok(choice) => self.dispatch(choice)?,
                Err(_) => {
                    self.prompter.say("Invalid choice! Try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        match choice {
            MenuChoice::CreateAccount => self.create_account(),
            MenuChoice::Deposit => self.deposit(),
            MenuChoice::Withdraw => self.withdraw(),
            MenuChoice::CheckBalance => self.check_balance(),
            MenuChoice::ViewAll => self.view_all(),
            MenuChoice::CloseAccount => self.close_account(),
            MenuChoice::DeleteAll => self.delete_all(),
            MenuChoice::Exit => Ok(Flow::Quit),
        }
    }

    fn create_account(&mut self) -> io::Result<Flow> {
        let name = ask_or_quit!(self, "Enter account name: ");
        if let Err(e) = validate_name(&name) {
            self.prompter.say(e)?;
            return Ok(Flow::Continue);
        }
        if self.ledger.contains(&name) {
            self.prompter.say(LedgerError::duplicate_account(&name))?;
            return Ok(Flow::Continue);
        }

        let answer = ask_or_quit!(self, "Enter initial deposit (minimum $15): ");
        let Some(deposit) = self.read_amount(&answer)? else {
            return Ok(Flow::Continue);
        };
        if let Err(e) = validate_opening_deposit(deposit) {
            self.prompter.say(e)?;
            return Ok(Flow::Continue);
        }

        let pin = loop {
            let pin = ask_or_quit!(self, "Set a PIN for your account (5 digits): ");
            if is_valid_pin(&pin) {
                break pin;
            }
            self.prompter.say(LedgerError::InvalidPin)?;
        };

        match self.ledger.create_account(&name, deposit, &pin) {
            Ok(receipt) => self.prompter.say(receipt)?,
            Err(e) => self.prompter.say(e)?,
        }
        Ok(Flow::Continue)
    }

    fn deposit(&mut self) -> io::Result<Flow> {
        let name = ask_or_quit!(self, "Enter account name: ");
        let pin = ask_or_quit!(self, "Enter PIN: ");
        let answer = ask_or_quit!(self, "Enter deposit amount: ");
        let Some(amount) = self.read_amount(&answer)? else {
            return Ok(Flow::Continue);
        };

        match self.ledger.deposit(&name, &pin, amount) {
            Ok(receipt) => self.prompter.say(receipt)?,
            Err(e) => self.prompter.say(e)?,
        }
        Ok(Flow::Continue)
    }

    fn withdraw(&mut self) -> io::Result<Flow> {
        let name = ask_or_quit!(self, "Enter account name: ");
        let pin = ask_or_quit!(self, "Enter PIN: ");
        let answer = ask_or_quit!(self, "Enter withdrawal amount: ");
        let Some(amount) = self.read_amount(&answer)? else {
            return Ok(Flow::Continue);
        };

        match self.ledger.withdraw(&name, &pin, amount) {
            Ok(receipt) => self.prompter.say(receipt)?,
            Err(e) => self.prompter.say(e)?,
        }
        Ok(Flow::Continue)
    }

    fn check_balance(&mut self) -> io::Result<Flow> {
        let name = ask_or_quit!(self, "Enter account name: ");
        let pin = ask_or_quit!(self, "Enter PIN: ");

        match self.ledger.inquire(&name, &pin) {
            Ok(receipt) => self.prompter.say(receipt)?,
            Err(e) => self.prompter.say(e)?,
        }
        Ok(Flow::Continue)
    }

    fn view_all(&mut self) -> io::Result<Flow> {
        let entries = self.ledger.list_accounts();
        if entries.is_empty() {
            self.prompter.say("No accounts on file.")?;
        }
        for entry in entries {
            match entry {
                Ok(receipt) => self.prompter.say(receipt)?,
                Err(e) => self.prompter.say(e)?,
            }
        }
        Ok(Flow::Continue)
    }

    fn close_account(&mut self) -> io::Result<Flow> {
        let name = ask_or_quit!(self, "Enter account name to close: ");
        if !self.ledger.contains(&name) {
            self.prompter.say(LedgerError::account_not_found(&name))?;
            return Ok(Flow::Continue);
        }

        let answer = ask_or_quit!(
            self,
            "Do you want to withdraw all funds and close the account? (y/n): "
        );
        if !is_confirmed(&answer) {
            self.prompter.say("Account closure canceled.")?;
            return Ok(Flow::Continue);
        }

        let prompter = &mut self.prompter;
        let mut terminal_error = None;
        let mut next_pin = |attempt: u32| -> Option<String> {
            if attempt > 1 {
                if let Err(e) = prompter.say(WRONG_PIN) {
                    terminal_error = Some(e);
                    return None;
                }
            }
            match prompter.ask("Enter PIN: ") {
                Ok(answer) => answer,
                Err(e) => {
                    terminal_error = Some(e);
                    None
                }
            }
        };

        let result = self.ledger.close_account(&name, &mut next_pin);
        if let Some(e) = terminal_error {
            return Err(e);
        }

        match result {
            Ok(outcome) => self.prompter.say(outcome)?,
            Err(e @ LedgerError::AuthLockout { .. }) => {
                self.prompter.say(WRONG_PIN)?;
                self.prompter.say(e)?;
                self.prompter
                    .say("Account closure canceled due to account lock.")?;
            }
            Err(e) => self.prompter.say(e)?,
        }
        Ok(Flow::Continue)
    }

    fn delete_all(&mut self) -> io::Result<Flow> {
        let answer = ask_or_quit!(self, "Are you sure you want to delete all accounts? (y/n): ");
        if !is_confirmed(&answer) {
            self.prompter.say("Deletion canceled.")?;
            return Ok(Flow::Continue);
        }

        match self.ledger.purge_all() {
            Ok(_) => self.prompter.say("All accounts have been deleted.")?,
            Err(e) => self.prompter.say(e)?,
        }
        Ok(Flow::Continue)
    }

    /// Parse an amount, telling the user when it is not a number
    fn read_amount(&mut self, answer: &str) -> io::Result<Option<Decimal>> {
        let amount = parse_amount(answer);
        if amount.is_none() {
            self.prompter.say(format!("Invalid amount '{}'.", answer))?;
        }
        Ok(amount)
    }
}

/// Parse a typed amount; plain and scientific notation are both accepted
pub fn parse_amount(answer: &str) -> Option<Decimal> {
    let answer = answer.trim();
    Decimal::from_str(answer)
        .or_else(|_| Decimal::from_scientific(answer))
        .ok()
}

/// `y` or `Y` as the first character confirms
fn is_confirmed(answer: &str) -> bool {
    matches!(answer.trim().chars().next(), Some('y' | 'Y'))
}
