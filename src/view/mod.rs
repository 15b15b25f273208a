pub mod checkout;

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::store::{CartStore, Catalog, ALL_CATEGORY};

/// One user action, the terminal equivalent of a button press. Every
/// command is applied fully before the next line is read.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Menu,
    Filter(String),
    Add(i32),
    Remove(i32),
    Quantity(i32, u32),
    Cart,
    Checkout,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Err("Empty command, try `help`".to_string());
    };
    let command = match word {
        "menu" => Command::Menu,
        "filter" => {
            let label: Vec<&str> = parts.by_ref().collect();
            if label.is_empty() {
                return Err("Usage: filter <category>".to_string());
            }
            Command::Filter(label.join(" "))
        }
        "add" => Command::Add(parse_id(parts.next())?),
        "remove" => Command::Remove(parse_id(parts.next())?),
        "qty" => {
            let id = parse_id(parts.next())?;
            let quantity: u32 = parts
                .next()
                .ok_or_else(|| "Usage: qty <id> <quantity>".to_string())?
                .parse()
                .map_err(|_| "Quantity must be a non-negative number".to_string())?;
            Command::Quantity(id, quantity)
        }
        "cart" => Command::Cart,
        "checkout" => Command::Checkout,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("Unknown command `{}`, try `help`", other)),
    };
    if parts.next().is_some() {
        return Err(format!("Too many arguments for `{}`", word));
    }
    Ok(command)
}

fn parse_id(arg: Option<&str>) -> Result<i32, String> {
    arg.ok_or("Expected a menu item id".to_string())?
        .parse()
        .map_err(|_| "Id must be a number".to_string())
}

/// A single storefront session: the catalog, the cart it owns and the
/// currently selected filter. Lives until the user quits, nothing is
/// persisted afterwards.
pub struct Session<'a> {
    catalog: &'a Catalog,
    cart: CartStore,
    selected_category: String,
}

impl<'a> Session<'a> {
    pub fn new(catalog: &'a Catalog) -> Session<'a> {
        Session {
            catalog,
            cart: CartStore::new(),
            selected_category: ALL_CATEGORY.to_string(),
        }
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    /// Applies one command and re-renders whatever it touched. Returns
    /// false when the session should end.
    pub fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Menu => self.render_menu(),
            Command::Filter(label) => {
                if !self.catalog.categories().contains(&label.as_str()) {
                    println!("Нет такой категории: {}", label);
                    warn!(category = %label, "Filter for unknown category");
                    return true;
                }
                self.selected_category = label;
                self.render_menu();
            }
            Command::Add(id) => match self.catalog.get(id) {
                Some(item) => {
                    self.cart.add_to_cart(item);
                    info!(id, name = %item.name, "Added to cart");
                    println!("{} — в корзине", item.name);
                    self.render_summary();
                }
                None => println!("Нет блюда с номером {}", id),
            },
            Command::Remove(id) => {
                self.cart.remove_from_cart(id);
                self.render_summary();
            }
            Command::Quantity(id, quantity) => {
                self.cart.update_quantity(id, quantity);
                self.render_cart();
            }
            Command::Cart => self.render_cart(),
            Command::Checkout => {
                // checkout is interactive, run() intercepts it first
                self.render_cart();
            }
            Command::Help => render_help(),
            Command::Quit => {
                println!("До встречи!");
                return false;
            }
        }
        true
    }

    /// Read-eval-print loop over stdin. Single-threaded by construction:
    /// each action completes before the next one is read.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut reader = stdin.lock();

        self.render_menu();
        render_help();

        loop {
            print!("> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if reader.read_line(&mut line)? == 0 {
                break; //EOF
            }
            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(message) => {
                    println!("{}", message);
                    continue;
                }
            };

            if command == Command::Checkout {
                self.run_checkout(&mut reader)?;
                continue;
            }
            if !self.handle(command) {
                break;
            }
        }
        Ok(())
    }

    /// The checkout dialog: refuses an empty cart, collects the delivery
    /// and payment fields, then "pays" and returns to the menu with the
    /// cart untouched.
    fn run_checkout(&mut self, reader: &mut impl BufRead) -> io::Result<()> {
        if self.cart.is_empty() {
            println!("Корзина пуста");
            return Ok(());
        }
        println!("Оформление заказа — заполните данные для доставки и оплаты");
        let details = checkout::collect_details(reader)?;
        println!("{}", checkout::submit(&details, &self.cart));
        Ok(())
    }

    fn render_menu(&self) {
        println!("\n=== Наше меню ({}) ===", self.selected_category);
        for item in self.catalog.filter_by_category(&self.selected_category) {
            println!(
                "[{}] {} — {} ₽ ({})\n    {}",
                item.id, item.name, item.price, item.category, item.description
            );
        }
        println!("Категории: {}", self.catalog.categories().join(", "));
    }

    fn render_cart(&self) {
        println!("\n=== Корзина ===");
        if self.cart.is_empty() {
            println!("Корзина пуста");
            return;
        }
        for entry in self.cart.items() {
            println!(
                "[{}] {} x{} — {} ₽",
                entry.item.id,
                entry.item.name,
                entry.quantity,
                entry.line_price()
            );
        }
        println!("Итого: {} ₽", self.cart.total_price());
    }

    fn render_summary(&self) {
        if self.cart.is_empty() {
            println!("Корзина пуста");
        } else {
            println!(
                "{} товаров на сумму {} ₽",
                self.cart.total_items(),
                self.cart.total_price()
            );
        }
    }
}

fn render_help() {
    println!(
        "\nКоманды:\n  \
         menu — показать меню\n  \
         filter <категория> — фильтр по категории\n  \
         add <id> — добавить в корзину\n  \
         remove <id> — убрать из корзины\n  \
         qty <id> <n> — изменить количество (0 удаляет)\n  \
         cart — показать корзину\n  \
         checkout — оформить заказ\n  \
         quit — выход"
    );
}
