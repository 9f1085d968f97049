//! The interactive menu loop and its prompts.

use std::io::{self, BufRead, Write};

use crate::{
    Error,
    amount::Amount,
    models::{Transaction, TransactionKind},
    report,
    stores::TransactionStore,
    timezone,
};

const MENU: &str = "\
=-=-=-=-=-=-=-=-=-= Gold Ledger =-=-=-=-=-=-=-=-=-=
1) Record a gain (+)
2) Record a spend (-)
3) List today's entries
4) Summary: today / last 7 days / current month
5) Undo the last entry
Q) Quit
=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=";

/// One action chosen from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    RecordGain,
    RecordSpend,
    ListToday,
    Summary,
    UndoLast,
    Quit,
}

impl MenuChoice {
    fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" => Some(Self::RecordGain),
            "2" => Some(Self::RecordSpend),
            "3" => Some(Self::ListToday),
            "4" => Some(Self::Summary),
            "5" => Some(Self::UndoLast),
            "q" | "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Run the interactive menu loop over `store` until the user quits or stdin
/// reaches end of file.
///
/// # Errors
/// Returns [Error::Io] if the ledger file becomes unreadable or unwritable.
/// Invalid user input is reported and recovered locally, with the user
/// re-prompted on the next menu cycle.
pub fn run_menu<S: TransactionStore>(store: &mut S) -> Result<(), Error> {
    loop {
        println!("{MENU}");

        let Some(input) = prompt("Choose an option: ")? else {
            break;
        };

        match MenuChoice::from_input(&input) {
            Some(MenuChoice::RecordGain) => record_transaction(store, TransactionKind::Gain)?,
            Some(MenuChoice::RecordSpend) => record_transaction(store, TransactionKind::Spend)?,
            Some(MenuChoice::ListToday) => list_today(store)?,
            Some(MenuChoice::Summary) => summary(store)?,
            Some(MenuChoice::UndoLast) => undo_last(store)?,
            Some(MenuChoice::Quit) => break,
            None => println!("Invalid option.\n"),
        }
    }

    println!("Goodbye!");

    Ok(())
}

/// Print `message` and read one line from stdin.
///
/// Returns `None` when stdin reaches end of file.
fn prompt(message: &str) -> Result<Option<String>, Error> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes_read = io::stdin().lock().read_line(&mut line)?;

    if bytes_read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_owned()))
}

fn record_transaction<S: TransactionStore>(
    store: &mut S,
    kind: TransactionKind,
) -> Result<(), Error> {
    println!("\n-- Record a {} --", kind.as_str());

    let Some(raw_amount) = prompt("Amount (in gold, e.g. 12.5 or 12,5): ")? else {
        return Ok(());
    };

    let amount = match Amount::parse(&raw_amount) {
        Ok(amount) => amount,
        Err(error) => {
            print_error(error);
            println!();
            return Ok(());
        }
    };

    let Some(category) = prompt("Category (e.g. Fractals, TP, Dailies; default Other): ")? else {
        return Ok(());
    };
    let Some(notes) = prompt("Notes (optional): ")? else {
        return Ok(());
    };

    let transaction = Transaction::build(kind, amount)
        .category(&category)
        .notes(&notes)
        .finish();

    store.append(transaction.clone())?;
    tracing::info!(
        "recorded a {} of {} in '{}'",
        kind.as_str(),
        amount,
        transaction.category()
    );

    println!(
        "Recorded {}{} in '{}'.\n",
        kind.sign(),
        amount,
        transaction.category()
    );

    Ok(())
}

fn list_today<S: TransactionStore>(store: &S) -> Result<(), Error> {
    let transactions = store.read_all()?;
    let today = timezone::today();

    println!("\n-- {today} --");
    print!("{}", report::render_day_listing(&transactions, today));
    println!();

    Ok(())
}

fn summary<S: TransactionStore>(store: &S) -> Result<(), Error> {
    let transactions = store.read_all()?;

    if transactions.is_empty() {
        println!("\nNo data yet. Record something first.\n");
        return Ok(());
    }

    println!("\n-- Summary --");
    print!("{}", report::render_summary(&transactions, timezone::today()));
    println!();

    Ok(())
}

fn undo_last<S: TransactionStore>(store: &mut S) -> Result<(), Error> {
    let transactions = store.read_all()?;

    let Some(last) = transactions.last() else {
        print_error(Error::EmptyStore);
        println!();
        return Ok(());
    };

    println!("\nLast entry:");
    println!(
        "{} {} {}{}  [{}]  {}",
        last.date(),
        report::format_clock(last.time()),
        last.kind().sign(),
        last.amount(),
        last.category(),
        last.notes()
    );

    let Some(confirmation) = prompt("Are you sure you want to remove it? (y/N): ")? else {
        return Ok(());
    };

    if !confirmation.eq_ignore_ascii_case("y") {
        println!("Cancelled.\n");
        return Ok(());
    }

    match store.remove_last() {
        Ok(removed) => {
            tracing::info!(
                "removed the last entry, a {} of {}",
                removed.kind().as_str(),
                removed.amount()
            );
            println!("Last entry removed.\n");
        }
        Err(Error::EmptyStore) => {
            print_error(Error::EmptyStore);
            println!();
        }
        Err(error) => return Err(error),
    }

    Ok(())
}

fn print_error(error: impl ToString) {
    eprintln!("\x1b[31;1mError: {}\x1b[0m", error.to_string());
}
