use crate::application::ledger::Ledger;
use crate::application::service::AccountService;
use crate::domain::id::IdGenerator;
use crate::error::Result;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::warn;

/// Interactive menu driving a [`Ledger`].
///
/// Reads one answer per line from `input` and writes prompts and results to `output`. Operation
/// failures are reported to the user and the loop goes on; only I/O errors on `input`/`output`
/// end [`Shell::run`] with an error. End of input behaves like choosing "Exit".
pub struct Shell<G: IdGenerator, R: BufRead, W: Write> {
    ledger: Ledger<G>,
    current: Option<AccountService>,
    input: R,
    output: W,
}

enum Flow {
    Continue,
    Deselect,
    Exit,
}

impl<G: IdGenerator, R: BufRead, W: Write> Shell<G, R, W> {
    pub fn new(ledger: Ledger<G>, input: R, output: W) -> Self {
        Self {
            ledger,
            current: None,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub async fn run(&mut self) -> Result<()> {
        writeln!(self.output, "=== Bank ===")?;
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Choose an action: ")? else {
                break;
            };
            let flow = match self.current.take() {
                Some(mut service) => {
                    let flow = self.account_action(&mut service, &choice).await?;
                    if !matches!(flow, Flow::Deselect) {
                        self.current = Some(service);
                    }
                    flow
                }
                None => self.main_action(&choice).await?,
            };
            if let Flow::Exit = flow {
                break;
            }
        }
        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        match &self.current {
            None => {
                writeln!(self.output, "\n1. Create account")?;
                writeln!(self.output, "2. Select account")?;
                writeln!(self.output, "3. List accounts")?;
                writeln!(self.output, "4. Exit")?;
            }
            Some(service) => {
                let account = service.account();
                writeln!(
                    self.output,
                    "\nCurrent account: {} ({})",
                    account.id, account.owner_name
                )?;
                writeln!(self.output, "1. Deposit")?;
                writeln!(self.output, "2. Withdraw")?;
                writeln!(self.output, "3. Transfer to another account")?;
                writeln!(self.output, "4. Show balance")?;
                writeln!(self.output, "5. Show statement")?;
                writeln!(self.output, "6. Switch account")?;
                writeln!(self.output, "7. Exit")?;
            }
        }
        Ok(())
    }

    async fn main_action(&mut self, choice: &str) -> Result<Flow> {
        match choice {
            "1" => {
                let Some(owner) = self.prompt("Owner name: ")? else {
                    return Ok(Flow::Exit);
                };
                match self.ledger.open_account(&owner).await {
                    Ok(account) => writeln!(self.output, "Account created! ID: {}", account.id)?,
                    Err(e) => writeln!(self.output, "Error creating account: {e}")?,
                }
            }
            "2" => {
                self.print_accounts().await?;
                let Some(id) = self.prompt("Account ID: ")? else {
                    return Ok(Flow::Exit);
                };
                match self.ledger.bind(&id).await {
                    Ok(service) => {
                        writeln!(self.output, "Account {id} selected")?;
                        self.current = Some(service);
                    }
                    Err(e) => writeln!(self.output, "Error: {e}")?,
                }
            }
            "3" => self.print_accounts().await?,
            "4" => return Ok(Flow::Exit),
            _ => writeln!(self.output, "Invalid choice. Try again.")?,
        }
        Ok(Flow::Continue)
    }

    async fn account_action(&mut self, service: &mut AccountService, choice: &str) -> Result<Flow> {
        match choice {
            "1" => {
                let Some(amount) = self.prompt_amount("Amount to deposit: ")? else {
                    return Ok(Flow::Continue);
                };
                let result = service.deposit(amount).await;
                self.report(result, "Deposit complete", "Deposit failed")?;
            }
            "2" => {
                let Some(amount) = self.prompt_amount("Amount to withdraw: ")? else {
                    return Ok(Flow::Continue);
                };
                let result = service.withdraw(amount).await;
                self.report(result, "Withdrawal complete", "Withdrawal failed")?;
            }
            "3" => self.transfer(service).await?,
            "4" => writeln!(self.output, "Current balance: {}", service.balance())?,
            "5" => writeln!(self.output, "{}", service.statement())?,
            "6" => {
                writeln!(self.output, "Account deselected")?;
                return Ok(Flow::Deselect);
            }
            "7" => return Ok(Flow::Exit),
            _ => writeln!(self.output, "Invalid choice. Try again.")?,
        }
        Ok(Flow::Continue)
    }

    async fn transfer(&mut self, service: &mut AccountService) -> Result<()> {
        self.print_accounts().await?;
        let Some(to_id) = self.prompt("Recipient account ID: ")? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_amount("Amount to transfer: ")? else {
            return Ok(());
        };
        let mut recipient = match self.ledger.load_account(&to_id).await {
            Ok(account) => account,
            Err(e) => {
                writeln!(self.output, "Error: {e}")?;
                return Ok(());
            }
        };
        let result = service.transfer(&mut recipient, amount).await;
        self.report(result, "Transfer complete", "Transfer failed")
    }

    async fn print_accounts(&mut self) -> Result<()> {
        let accounts = match self.ledger.accounts().await {
            Ok(accounts) => accounts,
            Err(e) => {
                writeln!(self.output, "Error listing accounts: {e}")?;
                return Ok(());
            }
        };
        if accounts.is_empty() {
            writeln!(self.output, "No accounts found")?;
            return Ok(());
        }
        writeln!(self.output, "\nAccounts:")?;
        for account in accounts {
            writeln!(
                self.output,
                "ID: {}, Owner: {}, Balance: {}",
                account.id, account.owner_name, account.balance
            )?;
        }
        Ok(())
    }

    fn report(&mut self, result: Result<()>, ok: &str, failed: &str) -> Result<()> {
        match result {
            Ok(()) => writeln!(self.output, "{ok}")?,
            Err(e) => {
                warn!(error = %e, "{failed}");
                writeln!(self.output, "{failed}: {e}")?
            }
        }
        Ok(())
    }

    /// Prints `message` and reads a trimmed line, `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like [`Shell::prompt`] but parses a decimal; `None` when input ended or did not parse.
    fn prompt_amount(&mut self, message: &str) -> Result<Option<Decimal>> {
        let Some(raw) = self.prompt(message)? else {
            return Ok(None);
        };
        match Decimal::from_str(&raw) {
            Ok(amount) => Ok(Some(amount)),
            Err(_) => {
                writeln!(self.output, "Error: invalid amount")?;
                Ok(None)
            }
        }
    }
}
