use food_delivery::store::{Catalog, ALL_CATEGORY};
use food_delivery::view::{parse_command, Command, Session};

#[test]
fn test_parse_commands() {
    assert_eq!(parse_command("menu"), Ok(Command::Menu));
    assert_eq!(parse_command("add 3"), Ok(Command::Add(3)));
    assert_eq!(parse_command("remove 2"), Ok(Command::Remove(2)));
    assert_eq!(parse_command("qty 1 4"), Ok(Command::Quantity(1, 4)));
    assert_eq!(
        parse_command("filter Пицца"),
        Ok(Command::Filter("Пицца".to_string()))
    );
    assert_eq!(parse_command("  cart  "), Ok(Command::Cart));
    assert_eq!(parse_command("quit"), Ok(Command::Quit));
    assert_eq!(parse_command("exit"), Ok(Command::Quit));
}

#[test]
fn test_parse_rejects_garbage() {
    assert!(parse_command("").is_err());
    assert!(parse_command("dance").is_err());
    assert!(parse_command("add").is_err());
    assert!(parse_command("add burger").is_err());
    assert!(parse_command("qty 1").is_err());
    assert!(parse_command("qty 1 -2").is_err());
    assert!(parse_command("menu now").is_err());
}

#[test]
fn test_session_add_and_remove() {
    let catalog = Catalog::builtin();
    let mut session = Session::new(catalog);

    assert!(session.handle(Command::Add(1)));
    assert!(session.handle(Command::Add(1)));
    assert!(session.handle(Command::Add(2)));
    assert_eq!(session.cart().total_items(), 3);
    assert_eq!(session.cart().total_price(), 2 * 450 + 320);

    assert!(session.handle(Command::Quantity(1, 0)));
    assert_eq!(session.cart().total_price(), 320);
}

#[test]
fn test_session_add_unknown_id_is_noop() {
    let catalog = Catalog::builtin();
    let mut session = Session::new(catalog);

    assert!(session.handle(Command::Add(99)));

    assert!(session.cart().is_empty());
}

#[test]
fn test_session_filter_selection() {
    let catalog = Catalog::builtin();
    let mut session = Session::new(catalog);

    assert_eq!(session.selected_category(), ALL_CATEGORY);

    session.handle(Command::Filter("Пицца".to_string()));
    assert_eq!(session.selected_category(), "Пицца");

    // unknown category keeps the previous selection
    session.handle(Command::Filter("Десерты".to_string()));
    assert_eq!(session.selected_category(), "Пицца");
}

#[test]
fn test_session_quit() {
    let catalog = Catalog::builtin();
    let mut session = Session::new(catalog);

    assert!(!session.handle(Command::Quit));
}
