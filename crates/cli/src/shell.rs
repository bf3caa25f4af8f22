//! Interactive shell presenting the four screens.
//!
//! Each input line is parsed with clap, so `help` and `<command> --help` work
//! the same way they do on the outer CLI. The `add` command walks through the
//! dish form one prompt at a time.

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use chef_kiss_core::{AppState, Category, CoreError, MenuItemForm, MenuItemId};

use crate::error::Result;
use crate::render;

const PROMPT: &str = "chef-kiss> ";

#[derive(Debug, Parser)]
#[command(
    name = "chef-kiss",
    no_binary_name = true,
    disable_version_flag = true
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
enum ShellCommand {
    /// Show the menu grouped by category with average prices
    Home,
    /// Show every dish with its description (chef view)
    Manage,
    /// Add a dish to the menu (prompts for each field)
    Add,
    /// Remove a dish from the menu
    Remove {
        /// Dish number, as shown by `manage`
        id: MenuItemId,
    },
    /// Browse one category and order from it (guest view)
    Guest {
        /// Starters, Mains or Desserts (defaults to the last one viewed)
        category: Option<Category>,
    },
    /// Add a dish to your order
    Order {
        /// Dish number, as shown by `guest`
        id: MenuItemId,
    },
    /// Show your order and its total
    Checkout,
    /// Place your order and clear the cart
    Place,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Whether the shell should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// A shell session over arbitrary input and output streams.
pub struct Shell<R, W> {
    state: AppState,
    selected: Category,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(state: AppState, input: R, output: W) -> Self {
        Self {
            state,
            selected: Category::default(),
            input,
            output,
        }
    }

    /// Read and execute commands until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        render::home(&mut self.output, &self.state.home_screen())?;
        writeln!(self.output, "\nType `help` for commands.")?;

        while let Some(line) = self.prompt(PROMPT)? {
            let words: Vec<&str> = line.split_whitespace().collect();
            if words.is_empty() {
                continue;
            }
            match ShellLine::try_parse_from(words) {
                Ok(parsed) => {
                    if self.execute(parsed.command)? == Flow::Quit {
                        break;
                    }
                }
                Err(err) => write!(self.output, "{}", err.render())?,
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// The state as it stands, for inspection after a session.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    fn execute(&mut self, command: ShellCommand) -> Result<Flow> {
        match command {
            ShellCommand::Home => render::home(&mut self.output, &self.state.home_screen())?,
            ShellCommand::Manage => {
                render::manage(&mut self.output, &self.state.manage_screen())?;
            }
            ShellCommand::Add => self.add_dish()?,
            ShellCommand::Remove { id } => match self.state.remove_menu_item(id) {
                Some(item) => writeln!(self.output, "Removed {} from the menu.", item.name)?,
                None => writeln!(self.output, "{}", CoreError::NotFound(id))?,
            },
            ShellCommand::Guest { category } => {
                if let Some(category) = category {
                    self.selected = category;
                }
                render::guest(&mut self.output, &self.state.guest_screen(self.selected))?;
            }
            ShellCommand::Order { id } => match self.state.add_to_order(id) {
                Ok(_) => {
                    let name = self
                        .state
                        .cart()
                        .lines()
                        .last()
                        .map_or_else(String::new, |line| line.item.name.to_string());
                    writeln!(self.output, "Added to Order: {name} added to your cart")?;
                }
                Err(err) => writeln!(self.output, "{err}")?,
            },
            ShellCommand::Checkout => {
                render::checkout(&mut self.output, &self.state.checkout_screen())?;
            }
            ShellCommand::Place => match self.state.place_order() {
                Ok(receipt) => render::receipt(&mut self.output, &receipt)?,
                Err(err) => writeln!(self.output, "{err}")?,
            },
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Walk the chef through the add-dish form.
    fn add_dish(&mut self) -> Result<()> {
        let mut form = MenuItemForm::default();
        let Some(name) = self.prompt("Dish Name: ")? else {
            return Ok(());
        };
        form.name = name;
        let Some(description) = self.prompt("Description: ")? else {
            return Ok(());
        };
        form.description = description;
        let Some(price) = self.prompt("Price (e.g. 120): ")? else {
            return Ok(());
        };
        form.price = price;
        let Some(category) = self.prompt("Category [Starters/Mains/Desserts, default Starters]: ")?
        else {
            return Ok(());
        };
        let category = category.trim();
        if !category.is_empty() {
            match category.parse() {
                Ok(category) => form.category = category,
                Err(err) => {
                    writeln!(self.output, "Error: {err}")?;
                    return Ok(());
                }
            }
        }

        match self.state.add_menu_item(&form) {
            Ok(id) => {
                info!(%id, "dish added from shell");
                writeln!(self.output, "Success: Meal added successfully! (#{id})")?;
            }
            Err(err) => {
                warn!(error = %err, "dish rejected");
                writeln!(self.output, "Error: {err}")?;
            }
        }
        Ok(())
    }

    /// Write a prompt and read one line, without its line ending.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn session(input: &str) -> (AppState, String) {
        let mut out = Vec::new();
        let mut shell = Shell::new(AppState::seeded(), Cursor::new(input.as_bytes()), &mut out);
        shell.run().unwrap();
        let state = shell.state().clone();
        drop(shell);
        (state, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        let parse = |words: &[&str]| ShellLine::try_parse_from(words).unwrap().command;
        assert_eq!(parse(&["home"]), ShellCommand::Home);
        assert_eq!(
            parse(&["remove", "#3"]),
            ShellCommand::Remove {
                id: MenuItemId::new(3)
            }
        );
        assert_eq!(
            parse(&["guest", "Desserts"]),
            ShellCommand::Guest {
                category: Some(Category::Desserts)
            }
        );
        assert_eq!(parse(&["exit"]), ShellCommand::Quit);
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        assert!(ShellLine::try_parse_from(["guest", "Drinks"]).is_err());
        assert!(ShellLine::try_parse_from(["order"]).is_err());
    }

    #[test]
    fn test_session_starts_on_home_screen() {
        let (_, out) = session("quit\n");
        assert!(out.starts_with("Chef Kiss Menu\n"));
    }

    #[test]
    fn test_order_and_place() {
        let (state, out) = session("order 1\norder 6\ncheckout\nplace\ncheckout\n");

        assert!(out.contains("Added to Order: Garlic Bread added to your cart"));
        assert!(out.contains("Added to Order: Rib Burger added to your cart"));
        assert!(out.contains("Total: R170.00"));
        assert!(out.contains("Thank You!"));
        assert!(out.ends_with("No items in your order.\nchef-kiss> "));
        assert!(state.cart().is_empty());
    }

    #[test]
    fn test_add_dish_through_prompts() {
        let (state, out) = session("add\nBobotie\nSpiced mince bake.\n140\nMains\n");

        assert!(out.contains("Success: Meal added successfully! (#10)"));
        let added = state.menu().find_by_name("Bobotie").unwrap();
        assert_eq!(added.category, Category::Mains);
        assert_eq!(state.menu().len(), 10);
    }

    #[test]
    fn test_add_dish_default_category() {
        let (state, _) = session("add\nSamoosas\nCrisp pastry triangles.\n35\n\n");
        assert_eq!(
            state.menu().find_by_name("Samoosas").unwrap().category,
            Category::Starters
        );
    }

    #[test]
    fn test_add_dish_missing_name_is_rejected() {
        let (state, out) = session("add\n\nNo name.\n10\n\n");
        assert!(out.contains("Error: Please fill in all fields"));
        assert_eq!(state.menu().len(), 9);
    }

    #[test]
    fn test_remove_twice() {
        let (state, out) = session("remove 2\nremove 2\n");
        assert!(out.contains("Removed Bruschetta from the menu."));
        assert!(out.contains("Menu item #2 not found"));
        assert_eq!(state.menu().len(), 8);
    }

    #[test]
    fn test_guest_remembers_category() {
        let (_, out) = session("guest Desserts\nguest\n");
        assert_eq!(out.matches("Starters Mains [Desserts]").count(), 2);
    }

    #[test]
    fn test_place_with_empty_cart() {
        let (_, out) = session("place\n");
        assert!(out.contains("No items in your order."));
        assert!(!out.contains("Thank You!"));
    }

    #[test]
    fn test_unknown_command_reports_error_and_continues() {
        let (_, out) = session("dance\nhome\n");
        assert!(out.contains("error:"));
        assert_eq!(out.matches("Chef Kiss Menu").count(), 2);
    }
}
