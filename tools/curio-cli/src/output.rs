//! Output formatting for the CLI.

use console::style;
use curio_commerce::money::Money;

/// Output handler for CLI messages.
#[derive(Clone, Copy)]
pub struct Output;

impl Output {
    /// Print an info message.
    pub fn info(&self, msg: &str) {
        println!("{} {}", style("i").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        println!("{} {}", style("+").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        eprintln!("{} {}", style("!").yellow(), msg);
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a labeled money row, right-aligned.
    pub fn money_row(&self, label: &str, amount: Money) {
        println!("  {:<12} {:>10}", label, amount.display());
    }

    /// Print a dim detail line.
    pub fn detail(&self, msg: &str) {
        println!("  {}", style(msg).dim());
    }
}
