use std::io::BufRead;

use tracing::info;

use crate::store::CartStore;

/// Delivery and payment details collected by the checkout dialog. The
/// fields are free-form: there is no backend to validate against or
/// submit to, so they are collected and then dropped.
#[derive(Clone, Debug, Default)]
pub struct CheckoutDetails {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub card: String,
}

/// Prompts for the four checkout fields, one line each.
pub fn collect_details(reader: &mut impl BufRead) -> std::io::Result<CheckoutDetails> {
    Ok(CheckoutDetails {
        name: prompt_field(reader, "Имя")?,
        phone: prompt_field(reader, "Телефон")?,
        address: prompt_field(reader, "Адрес")?,
        card: prompt_field(reader, "Карта")?,
    })
}

fn prompt_field(reader: &mut impl BufRead, label: &str) -> std::io::Result<String> {
    println!("{}: ", label);
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// The "Оплатить" button. Terminal no-op: nothing is charged, submitted
/// or cleared, the dialog just closes with a confirmation line.
pub fn submit(details: &CheckoutDetails, cart: &CartStore) -> String {
    info!(
        name = %details.name,
        items = cart.total_items(),
        total = cart.total_price(),
        "Checkout confirmed"
    );
    format!(
        "Оплачено {} ₽. Спасибо за заказ, {}!",
        cart.total_price(),
        details.name
    )
}
