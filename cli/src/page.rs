//! The registration page: rendering and the interactive session loop.

use std::fmt::Write as _;
use std::io::{self, Write};

use customer_core::{Customer, CustomerForm, CustomerStore, Transport};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const HELP: &str = "\
commands:
  name <text>    set the name field
  email <text>   set the email field
  submit         register the customer in the form
  delete <id>    delete a customer
  reload         fetch the list again
  list           show the page
  help           show this text
  quit, exit     leave
";

/// One line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Name(String),
    Email(String),
    Submit,
    Delete(String),
    Reload,
    List,
    Help,
    Quit,
}

impl Command {
    /// Parse a session line. Blank lines yield `None`; anything unrecognised
    /// is `Help`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        Some(match (word, rest) {
            ("name", value) => Command::Name(value.to_string()),
            ("email", value) => Command::Email(value.to_string()),
            ("submit", "") => Command::Submit,
            ("delete", id) if !id.is_empty() => Command::Delete(id.to_string()),
            ("reload", "") => Command::Reload,
            ("list", "") => Command::List,
            ("help", "") => Command::Help,
            ("quit" | "exit", "") => Command::Quit,
            _ => Command::Help,
        })
    }
}

pub fn render_page(form: &CustomerForm, customers: &[Customer]) -> String {
    let mut page = String::from("Customer Registration\n\n");
    let _ = writeln!(page, "Name:  {}", form.name);
    let _ = writeln!(page, "Email: {}", form.email);
    page.push('\n');

    if customers.is_empty() {
        page.push_str("No customers registered.\n");
        return page;
    }
    for customer in customers {
        let _ = writeln!(page, "[{}]", customer.id);
        let _ = writeln!(page, "  Name:   {}", customer.name);
        let _ = writeln!(page, "  Email:  {}", customer.email);
        let _ = writeln!(page, "  Status: {}", customer.status_label());
    }
    page
}

fn show<T: Transport, W: Write>(store: &CustomerStore<T>, out: &mut W) -> io::Result<()> {
    out.write_all(render_page(&store.form(), &store.customers()).as_bytes())?;
    out.flush()
}

/// Mount the page, then apply commands from `input` until `quit` or end of
/// input. The page is re-rendered to `out` after every command.
pub async fn run_session<T, R, W>(
    store: &CustomerStore<T>,
    input: R,
    out: &mut W,
) -> io::Result<()>
where
    T: Transport,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    store.mount().await;
    show(store, out)?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = Command::parse(&line) else {
            continue;
        };
        match command {
            Command::Name(name) => store.set_name(name),
            Command::Email(email) => store.set_email(email),
            Command::Submit => {
                store.submit().await;
            }
            Command::Delete(id) => store.remove(&id).await,
            Command::Reload => store.load().await,
            Command::List => {}
            Command::Help => {
                out.write_all(HELP.as_bytes())?;
                continue;
            }
            Command::Quit => break,
        }
        show(store, out)?;
    }

    store.unmount();
    Ok(())
}
