//! The numbered main menu and its read sub-menu.

use crate::error::ConsoleError;
use crate::prompt::Prompter;
use crate::render::render_records;
use core_types::{CustomerFilter, NewCustomer, ValidationError, WriteOutcome};
use database::CustomerStore;
use std::io::{BufRead, Write};

const MAIN_MENU: &str = "\nMenu:
1. Create a new customer
2. Read customer records
3. Update a customer record
4. Delete a customer record
5. Exit";

const READ_MENU: &str = "\nChoose a field to filter by:
1. Customer ID
2. Name
3. Email
4. View all records";

const NOT_FOUND: &str = "No record found with that ID.";

/// Rejection shown by update and delete; read-by-ID uses the longer
/// `ValidationError::InvalidId` text.
const INVALID_TARGET_ID: &str = "Invalid ID.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Exited,
}

/// Field prompts for collecting a full customer record.
struct RecordPrompts {
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    address: &'static str,
}

const CREATE_PROMPTS: RecordPrompts = RecordPrompts {
    name: "Enter customer name: ",
    email: "Enter email: ",
    phone: "Enter phone number (10 digits): ",
    address: "Enter address: ",
};

const UPDATE_PROMPTS: RecordPrompts = RecordPrompts {
    name: "Enter new name: ",
    email: "Enter new email: ",
    phone: "Enter new phone number (10 digits): ",
    address: "Enter new address: ",
};

/// Dispatches menu choices to a [`CustomerStore`].
///
/// Store failures are printed and logged, then the menu carries on. Only a
/// broken console (I/O error) stops [`Menu::run`] with an error.
pub struct Menu<'a, S: ?Sized, R, W> {
    store: &'a S,
    prompter: Prompter<R, W>,
}

impl<'a, S, R, W> Menu<'a, S, R, W>
where
    S: CustomerStore + ?Sized,
    R: BufRead,
    W: Write,
{
    pub fn new(store: &'a S, prompter: Prompter<R, W>) -> Self {
        Self { store, prompter }
    }

    pub fn prompter(&self) -> &Prompter<R, W> {
        &self.prompter
    }

    /// Runs until the user picks Exit or input ends.
    pub async fn run(&mut self) -> Result<(), ConsoleError> {
        loop {
            match self.step().await {
                Ok(MenuState::Running) => {}
                Ok(MenuState::Exited) => return Ok(()),
                Err(ConsoleError::InputClosed) => {
                    tracing::info!("Console input closed; leaving the menu.");
                    self.prompter.say("\nInput closed. Exiting...")?;
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Shows the menu once and handles one choice.
    pub async fn step(&mut self) -> Result<MenuState, ConsoleError> {
        self.prompter.say(MAIN_MENU)?;
        let choice = self.prompter.ask("Enter choice (1-5): ")?;

        match choice.trim() {
            "1" => self.create().await?,
            "2" => self.read().await?,
            "3" => self.update().await?,
            "4" => self.delete().await?,
            "5" => {
                self.prompter.say("Exiting...")?;
                return Ok(MenuState::Exited);
            }
            _ => self.prompter.say("Invalid choice. Try again.")?,
        }
        Ok(MenuState::Running)
    }

    async fn create(&mut self) -> Result<(), ConsoleError> {
        let Some(customer) = self.collect_customer(&CREATE_PROMPTS)? else {
            return Ok(());
        };

        match self.store.create(&customer).await {
            Ok(id) => self
                .prompter
                .say(&format!("Customer record created successfully (ID {id}).")),
            Err(e) => {
                tracing::error!(error = ?e, "Create failed.");
                self.prompter.say(&format!("Error creating customer: {e}"))
            }
        }
    }

    async fn read(&mut self) -> Result<(), ConsoleError> {
        let Some(filter) = self.choose_filter()? else {
            return Ok(());
        };

        match self.store.read(&filter).await {
            Ok(records) => self.prompter.say(&render_records(&records)),
            Err(e) => {
                tracing::error!(error = ?e, ?filter, "Read failed.");
                self.prompter.say(&format!("Error reading customers: {e}"))
            }
        }
    }

    async fn update(&mut self) -> Result<(), ConsoleError> {
        let Some(id) = self.ask_id("Enter the ID of the customer you want to update: ", INVALID_TARGET_ID)? else {
            return Ok(());
        };
        let Some(customer) = self.collect_customer(&UPDATE_PROMPTS)? else {
            return Ok(());
        };

        match self.store.update(id, &customer).await {
            Ok(WriteOutcome::Applied) => self.prompter.say("Update was successful."),
            Ok(WriteOutcome::NotFound) => self.prompter.say(NOT_FOUND),
            Err(e) => {
                tracing::error!(error = ?e, customer_id = id, "Update failed.");
                self.prompter.say(&format!("Error updating customer: {e}"))
            }
        }
    }

    async fn delete(&mut self) -> Result<(), ConsoleError> {
        let Some(id) = self.ask_id("Enter the ID of the customer you want to delete: ", INVALID_TARGET_ID)? else {
            return Ok(());
        };

        match self.store.delete(id).await {
            Ok(WriteOutcome::Applied) => self.prompter.say("Delete successful."),
            Ok(WriteOutcome::NotFound) => self.prompter.say(NOT_FOUND),
            Err(e) => {
                tracing::error!(error = ?e, customer_id = id, "Delete failed.");
                self.prompter.say(&format!("Error deleting customer: {e}"))
            }
        }
    }

    /// The read sub-menu. `None` aborts the read.
    fn choose_filter(&mut self) -> Result<Option<CustomerFilter>, ConsoleError> {
        self.prompter.say(READ_MENU)?;
        let choice = self.prompter.ask("Enter choice (1-4): ")?;

        let filter = match choice.trim() {
            "1" => {
                let rejection = ValidationError::InvalidId.to_string();
                match self.ask_id("Enter the Customer ID to search: ", &rejection)? {
                    Some(id) => CustomerFilter::ById(id),
                    None => return Ok(None),
                }
            }
            "2" => CustomerFilter::ByNameContains(self.prompter.non_empty("Enter the Name to search: ")?),
            "3" => CustomerFilter::ByEmailContains(self.prompter.email("Enter the Email to search: ")?),
            "4" => CustomerFilter::All,
            _ => {
                self.prompter.say("Invalid input, returning to menu...")?;
                return Ok(None);
            }
        };
        Ok(Some(filter))
    }

    /// One-shot id prompt; prints `rejection` and yields `None` on bad input.
    fn ask_id(&mut self, prompt: &str, rejection: &str) -> Result<Option<u64>, ConsoleError> {
        let id = self.prompter.numeric_id(prompt)?;
        if id.is_none() {
            self.prompter.say(rejection)?;
        }
        Ok(id)
    }

    fn collect_customer(&mut self, prompts: &RecordPrompts) -> Result<Option<NewCustomer>, ConsoleError> {
        let name = self.prompter.non_empty(prompts.name)?;
        let email = self.prompter.email(prompts.email)?;
        let phone = self.prompter.phone(prompts.phone)?;
        let address = self.prompter.non_empty(prompts.address)?;

        // The prompts already enforced every rule, so this only fails if the
        // rules and the prompts ever drift apart.
        match NewCustomer::new(&name, &email, &phone, &address) {
            Ok(customer) => Ok(Some(customer)),
            Err(rejection) => {
                self.prompter.say(&rejection.to_string())?;
                Ok(None)
            }
        }
    }
}
