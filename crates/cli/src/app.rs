//! The interactive order session.

use std::io::{BufRead, Write};

use orderdesk_core::{Entity, OrderId, OrderIdGenerator};
use orderdesk_fulfillment::OrderOrchestrator;
use orderdesk_sales::{Order, OrderStore, Price, ProductName};

use crate::config::AppConfig;
use crate::console::Console;
use crate::error::CliError;
use crate::menu::{self, MenuChoice};
use crate::services;

pub const PRODUCT_NAME_PROMPT: &str = "Enter product name: ";
pub const PRICE_PROMPT: &str = "Enter product price: ";
pub const DELETE_PROMPT: &str = "Enter Order ID to delete: ";

pub const EMPTY_NAME_NOTICE: &str = "Product name cannot be empty!";
pub const INVALID_PRICE_NOTICE: &str = "Invalid price! Please enter a valid numeric value.";
pub const INVALID_ID_NOTICE: &str = "Invalid Order ID!";
pub const INVALID_OPTION_NOTICE: &str = "Invalid option. Please try again.";
pub const EMPTY_HISTORY_NOTICE: &str = "No transactions available.";
pub const HISTORY_HEADER: &str = "History of Transactions:";
pub const FAREWELL: &str = "Exiting program. Press Enter to exit...";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Session state: the order store, the id counter and the orchestrator.
///
/// Everything the command loop touches lives here; nothing is global.
#[derive(Debug)]
pub struct App {
    store: OrderStore,
    ids: OrderIdGenerator,
    orchestrator: OrderOrchestrator,
    pause_on_exit: bool,
}

impl App {
    pub fn new(orchestrator: OrderOrchestrator) -> Self {
        Self {
            store: OrderStore::new(),
            ids: OrderIdGenerator::new(),
            orchestrator,
            pause_on_exit: false,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(services::build_orchestrator(config.payment_method))
            .with_pause_on_exit(config.pause_on_exit)
    }

    pub fn with_pause_on_exit(mut self, pause_on_exit: bool) -> Self {
        self.pause_on_exit = pause_on_exit;
        self
    }

    pub fn store(&self) -> &OrderStore {
        &self.store
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// Bad input is reported and the loop continues. Only terminal failures and
    /// broken invariants (a duplicate order id) end the session with an error.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<(), CliError> {
        loop {
            menu::write_menu(console.writer())?;
            let Some(answer) = console.prompt(menu::CHOICE_PROMPT)? else {
                tracing::debug!("input closed at menu");
                console.blank_line()?;
                break;
            };
            console.blank_line()?;

            let choice = MenuChoice::parse(&answer);
            tracing::debug!(?choice, "menu choice");

            let flow = match choice {
                Some(MenuChoice::CreateOrder) => self.create_order(console)?,
                Some(MenuChoice::DeleteOrder) => self.delete_order(console)?,
                Some(MenuChoice::ListOrders) => self.list_orders(console)?,
                Some(MenuChoice::Exit) => Flow::Exit,
                None => {
                    console.write_line(INVALID_OPTION_NOTICE)?;
                    Flow::Continue
                }
            };
            console.blank_line()?;

            if flow == Flow::Exit {
                break;
            }
        }

        console.write_line(FAREWELL)?;
        if self.pause_on_exit {
            console.read_line()?;
        }
        Ok(())
    }

    fn create_order<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Flow, CliError> {
        let Some(product_name) = read_product_name(console)? else {
            return Ok(Flow::Exit);
        };
        let Some(price) = read_price(console)? else {
            return Ok(Flow::Exit);
        };

        let order = Order::new(self.ids.next_id(), product_name, price);
        let id = order.id();
        if let Err(err) = self.store.append(order.clone()) {
            if err.is_fatal() {
                tracing::error!(order_id = %id, error = %err, "order store invariant violated");
                return Err(err.into());
            }
            tracing::warn!(order_id = %id, error = %err, "order rejected by store");
            console.write_line(format_args!("Order {id} could not be stored: {err}"))?;
            return Ok(Flow::Continue);
        }
        tracing::debug!(order_id = %id, "order stored");

        console.blank_line()?;
        console.write_line("Processing order...")?;
        console.blank_line()?;

        if let Err(err) = self.orchestrator.place_order(&order, console.writer()) {
            // Failed placements do not stay in the history; the id stays spent.
            let withdrawn = self.store.remove_by_id(id);
            debug_assert!(withdrawn, "order {id} vanished before rollback");
            if !withdrawn {
                tracing::error!(order_id = %id, "rollback found no stored order");
            }
            let step = err.step().map_or("completion", |step| step.as_str());
            tracing::warn!(order_id = %id, step, error = %err, "order placement failed, order withdrawn");
            console.write_line(format_args!("Order {id} could not be completed: {err}"))?;
        }

        Ok(Flow::Continue)
    }

    fn delete_order<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Flow, CliError> {
        let Some(answer) = console.prompt(DELETE_PROMPT)? else {
            return Ok(Flow::Exit);
        };

        let id = match answer.parse::<OrderId>() {
            Ok(id) => id,
            Err(err) => {
                tracing::debug!(error = %err, "rejected order id");
                console.write_line(INVALID_ID_NOTICE)?;
                return Ok(Flow::Continue);
            }
        };

        if self.store.remove_by_id(id) {
            tracing::debug!(order_id = %id, "order deleted");
            console.write_line(format_args!("Order {id} deleted successfully."))?;
        } else {
            console.write_line(format_args!("Order with ID {id} not found."))?;
        }
        Ok(Flow::Continue)
    }

    fn list_orders<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<Flow, CliError> {
        let orders = self.store.list_all();
        if orders.is_empty() {
            console.write_line(EMPTY_HISTORY_NOTICE)?;
            return Ok(Flow::Continue);
        }

        console.write_line(HISTORY_HEADER)?;
        for order in orders {
            console.write_line(order)?;
        }
        Ok(Flow::Continue)
    }
}

/// Prompt until a non-blank name is given. `None` when input ends.
fn read_product_name<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Option<ProductName>, CliError> {
    loop {
        let Some(answer) = console.prompt(PRODUCT_NAME_PROMPT)? else {
            return Ok(None);
        };
        match ProductName::new(answer) {
            Ok(name) => return Ok(Some(name)),
            Err(err) => {
                tracing::debug!(error = %err, "rejected product name");
                console.write_line(EMPTY_NAME_NOTICE)?;
            }
        }
    }
}

/// Prompt until a positive price is given. `None` when input ends.
fn read_price<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Option<Price>, CliError> {
    loop {
        let Some(answer) = console.prompt(PRICE_PROMPT)? else {
            return Ok(None);
        };
        match Price::parse(&answer) {
            Ok(price) => return Ok(Some(price)),
            Err(err) => {
                tracing::debug!(error = %err, input = %answer, "rejected price");
                console.write_line(INVALID_PRICE_NOTICE)?;
            }
        }
    }
}
