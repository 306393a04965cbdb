//! Interactive menu session driving the inventory.
//!
//! The loop is generic over its input and output handles so tests can run
//! it against in-memory buffers instead of a terminal.

use crate::codec;
use crate::store::Inventory;
use crate::types::{Category, Item};
use colored::Colorize;
use eyre::{Context, Result};
use log::info;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// One interactive menu session over an inventory.
pub struct Session<R, W> {
    input: R,
    output: W,
    save_path: PathBuf,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session. `save_path` is the default destination offered by
    /// the save-on-exit prompt, normally the file the inventory was loaded
    /// from.
    pub fn new(input: R, output: W, save_path: &Path) -> Self {
        Self {
            input,
            output,
            save_path: save_path.to_path_buf(),
        }
    }

    /// Run the menu loop until the user quits or input ends.
    pub fn run(&mut self, inventory: &mut Inventory) -> Result<()> {
        loop {
            self.show_menu()?;
            let Some(choice) = self.read_line()? else {
                // EOF: end the session without the save prompt
                break;
            };

            match choice.trim() {
                "1" => self.add_item(inventory)?,
                "2" => self.delete_item(inventory)?,
                "3" => self.change_cost(inventory)?,
                "4" => self.search_item(inventory)?,
                "5" => self.display_inventory(inventory)?,
                "6" => {
                    self.quit(inventory)?;
                    break;
                }
                other => {
                    writeln!(
                        self.output,
                        "{} Invalid choice '{}'. Please try again.",
                        "✗".red(),
                        other.trim()
                    )?;
                }
            }
        }
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Main Menu:")?;
        writeln!(self.output, "1. Add new item")?;
        writeln!(self.output, "2. Delete item")?;
        writeln!(self.output, "3. Change the cost of an item")?;
        writeln!(self.output, "4. Search for item")?;
        writeln!(self.output, "5. Display inventory details")?;
        writeln!(self.output, "6. Quit")?;
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn add_item(&mut self, inventory: &mut Inventory) -> Result<()> {
        let Some(id) = self.prompt_parsed::<u32>("Enter the ID number of the new item: ")? else {
            return Ok(());
        };

        // Reject a taken id before asking for the remaining fields
        if inventory.find_by_id(id).is_ok() {
            writeln!(
                self.output,
                "{} Item with ID {} already exists.",
                "✗".red(),
                id
            )?;
            return Ok(());
        }

        let Some(name) = self.prompt("Enter the name of the new item: ")? else {
            return Ok(());
        };
        let Some(cost) = self.prompt_parsed::<f64>("Enter the cost of the new item: ")? else {
            return Ok(());
        };
        let Some(category) = self.prompt_parsed::<Category>(
            "Enter the category of the new item \
             (M for meat, P for produce, D for dairy, C for canned goods, N for nonfoods): ",
        )?
        else {
            return Ok(());
        };

        let item = Item {
            id,
            name,
            cost,
            category,
        };

        match inventory.add(item) {
            Ok(()) => {
                info!("Added item {}", id);
                writeln!(self.output, "{} Item added successfully.", "✓".green())?;
            }
            Err(e) => writeln!(self.output, "{} {}", "✗".red(), e)?,
        }
        Ok(())
    }

    fn delete_item(&mut self, inventory: &mut Inventory) -> Result<()> {
        let Some(id) = self.prompt_parsed::<u32>("Enter the ID number of the item to delete: ")?
        else {
            return Ok(());
        };

        match inventory.remove(id) {
            Ok(_) => {
                info!("Deleted item {}", id);
                writeln!(
                    self.output,
                    "{} Item with ID {} deleted successfully.",
                    "✓".green(),
                    id
                )?;
            }
            Err(e) => writeln!(self.output, "{} {}", "✗".red(), e)?,
        }
        Ok(())
    }

    fn change_cost(&mut self, inventory: &mut Inventory) -> Result<()> {
        let Some(id) =
            self.prompt_parsed::<u32>("Enter the ID number of the item to change the cost: ")?
        else {
            return Ok(());
        };

        if inventory.find_by_id(id).is_err() {
            writeln!(self.output, "{} Item with ID {} not found.", "✗".red(), id)?;
            return Ok(());
        }

        let Some(new_cost) =
            self.prompt_parsed::<f64>(&format!("Enter the new cost for the item with ID {}: ", id))?
        else {
            return Ok(());
        };

        match inventory.set_cost(id, new_cost) {
            Ok(()) => {
                info!("Changed cost of item {} to {:.2}", id, new_cost);
                writeln!(
                    self.output,
                    "{} Cost for item with ID {} changed successfully.",
                    "✓".green(),
                    id
                )?;
            }
            Err(e) => writeln!(self.output, "{} {}", "✗".red(), e)?,
        }
        Ok(())
    }

    fn search_item(&mut self, inventory: &Inventory) -> Result<()> {
        let Some(name) = self.prompt("Enter the name of the item to search for: ")? else {
            return Ok(());
        };

        match inventory.find_by_name(&name) {
            Ok(item) => {
                writeln!(self.output, "Item found:")?;
                writeln!(self.output, "{}: {}", "ID".bold(), item.id)?;
                writeln!(self.output, "{}: {}", "Name".bold(), item.name)?;
                writeln!(self.output, "{}: {:.2}", "Cost".bold(), item.cost)?;
                writeln!(
                    self.output,
                    "{}: {} ({})",
                    "Category".bold(),
                    item.category.code(),
                    item.category.label()
                )?;
            }
            Err(e) => writeln!(self.output, "{} {}", "✗".red(), e)?,
        }
        Ok(())
    }

    fn display_inventory(&mut self, inventory: &Inventory) -> Result<()> {
        if inventory.is_empty() {
            writeln!(self.output, "{}", "Inventory is empty.".dimmed())?;
            return Ok(());
        }

        writeln!(
            self.output,
            "{:<8}{:<21}{:>10}  {}",
            "ID".bold(),
            "Name".bold(),
            "Cost".bold(),
            "Category".bold()
        )?;
        for item in inventory.items() {
            writeln!(
                self.output,
                "{:<8}{:<21}{:>10.2}  {}",
                item.id,
                item.name,
                item.cost,
                item.category.code()
            )?;
        }
        Ok(())
    }

    fn quit(&mut self, inventory: &mut Inventory) -> Result<()> {
        if inventory.is_dirty() {
            let Some(answer) =
                self.prompt("You have unsaved changes. Save before quitting? (y/n): ")?
            else {
                return Ok(());
            };

            if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
                let default = self.save_path.clone();
                let Some(entered) = self.prompt(&format!(
                    "Enter the filename to save to [{}]: ",
                    default.display()
                ))?
                else {
                    return Ok(());
                };

                let destination = if entered.is_empty() {
                    default
                } else {
                    PathBuf::from(entered)
                };

                match codec::save(inventory, &destination) {
                    Ok(()) => {
                        writeln!(
                            self.output,
                            "{} Saved {} item(s) to {}.",
                            "✓".green(),
                            inventory.len(),
                            destination.display()
                        )?;
                    }
                    Err(e) => writeln!(self.output, "{} {:#}", "✗".red(), e)?,
                }
            }
        }

        writeln!(self.output, "Exiting program.")?;
        Ok(())
    }

    /// Prompt for a line and parse it, reporting a message on parse failure.
    /// Returns None when the operation should be abandoned (EOF or bad input).
    fn prompt_parsed<T: std::str::FromStr>(&mut self, message: &str) -> Result<Option<T>> {
        let Some(line) = self.prompt(message)? else {
            return Ok(None);
        };
        match line.parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                writeln!(self.output, "{} Invalid input '{}'.", "✗".red(), line)?;
                Ok(None)
            }
        }
    }

    /// Prompt for one trimmed line of input. Returns None on EOF.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        Ok(self.read_line()?.map(|line| line.trim().to_string()))
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 { Ok(None) } else { Ok(Some(line)) }
    }
}
