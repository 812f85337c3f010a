use std::io::Cursor;

use orderdesk_cli::{App, AppConfig, Console, PaymentMethod};
use orderdesk_core::Entity;
use proptest::prelude::*;

struct Session {
    app: App,
    transcript: String,
    unread_bytes: u64,
}

fn config(payment_method: PaymentMethod, pause_on_exit: bool) -> AppConfig {
    AppConfig {
        payment_method,
        pause_on_exit,
        ..AppConfig::default()
    }
}

fn run_with(config: &AppConfig, input: &str) -> Session {
    run_bytes(config, input.as_bytes())
}

fn run_bytes(config: &AppConfig, input: &[u8]) -> Session {
    let mut app = App::from_config(config);
    let mut console = Console::new(Cursor::new(input), Vec::<u8>::new());

    app.run(&mut console).expect("session should end cleanly");

    let (reader, out) = console.into_parts();
    Session {
        app,
        transcript: String::from_utf8(out).expect("transcript is utf-8"),
        unread_bytes: input.len() as u64 - reader.position(),
    }
}

fn run(input: &str) -> Session {
    run_with(&config(PaymentMethod::CreditCard, false), input)
}

fn stored_ids(app: &App) -> Vec<u64> {
    app.store().list_all().iter().map(|o| o.id().value()).collect()
}

#[test]
fn create_create_delete_list_scenario() {
    let session = run("1\nWidget\n9.99\n1\nGadget\n19.99\n2\n1\n3\n4\n");

    assert_eq!(stored_ids(&session.app), vec![2]);
    let remaining = &session.app.store().list_all()[0];
    assert_eq!(remaining.product_name().as_str(), "Gadget");
    assert_eq!(remaining.price().value(), 19.99);

    assert!(session.transcript.contains("Order 1 deleted successfully.\n"));
    assert!(
        session
            .transcript
            .contains("History of Transactions:\nOrder 2: Gadget - $19.99\n")
    );
    assert!(!session.transcript.contains("Order 1: Widget"));
}

#[test]
fn create_prints_every_step_then_completion() {
    let session = run("1\nWidget\n9.99\n4\n");

    assert!(session.transcript.contains(
        "Enter product name: Enter product price: \n\
         Processing order...\n\
         \n\
         Invoice generated for Widget\n\
         Payment of $9.99 processed for Widget\n\
         Widget has been shipped.\n\
         Order placed successfully!\n"
    ));
}

#[test]
fn delete_on_empty_store_reports_not_found() {
    let session = run("2\n99\n4\n");

    assert!(session.transcript.contains("Order with ID 99 not found.\n"));
    assert!(session.app.store().is_empty());
}

#[test]
fn delete_rejects_non_numeric_id() {
    let session = run("1\nWidget\n9.99\n2\nabc\n4\n");

    assert!(session.transcript.contains("Invalid Order ID!\n"));
    assert_eq!(stored_ids(&session.app), vec![1]);
}

#[test]
fn invalid_prices_are_re_prompted_until_valid() {
    let session = run("1\nBolt\n-5\nabc\n3.50\n4\n");

    assert_eq!(session.transcript.matches("Enter product price: ").count(), 3);
    assert_eq!(
        session
            .transcript
            .matches("Invalid price! Please enter a valid numeric value.")
            .count(),
        2
    );
    assert_eq!(session.app.store().list_all()[0].price().value(), 3.5);
    assert!(session.transcript.contains("Payment of $3.5 processed for Bolt\n"));
}

#[test]
fn non_utf8_product_name_does_not_end_the_session() {
    let session = run_bytes(
        &config(PaymentMethod::CreditCard, false),
        b"1\nWidget\n9.99\n1\nCaf\xe9\n3.50\n3\n4\n",
    );

    assert_eq!(stored_ids(&session.app), vec![1, 2]);
    assert_eq!(
        session.app.store().list_all()[1].product_name().as_str(),
        "Caf\u{FFFD}"
    );
    assert!(session.transcript.contains("Order 2: Caf\u{FFFD} - $3.5\n"));
    assert!(session.transcript.ends_with("Exiting program. Press Enter to exit...\n"));
}

#[test]
fn list_on_empty_store() {
    let session = run("3\n4\n");

    assert!(session.transcript.contains("No transactions available.\n"));
    assert!(!session.transcript.contains("History of Transactions:"));
}

#[test]
fn unknown_option_redisplays_menu() {
    let session = run("9\n4\n");

    assert!(session.transcript.contains("Invalid option. Please try again.\n"));
    assert_eq!(session.transcript.matches("Select an option:").count(), 2);
}

#[test]
fn ids_are_not_reused_after_delete() {
    let session = run("1\nA\n1\n2\n1\n1\nB\n2\n3\n4\n");

    assert_eq!(stored_ids(&session.app), vec![2]);
    assert!(session.transcript.contains("Order 2: B - $2\n"));
}

#[test]
fn exit_says_goodbye() {
    let session = run("4\n");

    assert!(
        session
            .transcript
            .ends_with("Your choice: \n\nExiting program. Press Enter to exit...\n")
    );
}

#[test]
fn end_of_input_at_menu_ends_session() {
    let session = run("1\nWidget\n9.99\n");

    assert_eq!(stored_ids(&session.app), vec![1]);
    assert!(session.transcript.ends_with("Exiting program. Press Enter to exit...\n"));
}

#[test]
fn pause_on_exit_consumes_one_more_line() {
    let input = "4\n\nleftover\n";

    let paused = run_with(&config(PaymentMethod::CreditCard, true), input);
    let unpaused = run_with(&config(PaymentMethod::CreditCard, false), input);

    assert_eq!(paused.unread_bytes, "leftover\n".len() as u64);
    assert_eq!(unpaused.unread_bytes, "\nleftover\n".len() as u64);
}

#[test]
fn bank_transfer_replaces_card_payment() {
    let session = run_with(&config(PaymentMethod::BankTransfer, false), "1\nLamp\n5\n4\n");

    assert!(session.transcript.contains("Bank transfer of $5 requested for Lamp\n"));
    assert!(!session.transcript.contains("Payment of"));
    assert!(session.transcript.contains("Lamp has been shipped.\n"));
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        ..ProptestConfig::default()
    })]

    /// Property: successive creates get ids 1..=N in creation order, and the
    /// history lists them in that order.
    #[test]
    fn successive_creates_get_increasing_ids(
        names in prop::collection::vec("[A-Za-z][A-Za-z0-9]{0,12}", 1..15)
    ) {
        let mut input = String::new();
        for name in &names {
            input.push_str(&format!("1\n{name}\n1.25\n"));
        }
        input.push_str("4\n");

        let session = run(&input);

        let expected: Vec<u64> = (1..=names.len() as u64).collect();
        prop_assert_eq!(stored_ids(&session.app), expected);
        let stored_names: Vec<&str> = session
            .app
            .store()
            .list_all()
            .iter()
            .map(|o| o.product_name().as_str())
            .collect();
        let names_ref: Vec<&str> = names.iter().map(String::as_str).collect();
        prop_assert_eq!(stored_names, names_ref);
    }
}
