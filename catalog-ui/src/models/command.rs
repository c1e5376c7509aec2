use crate::models::book::BookId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    Refresh,
    Add,
    Edit(BookId),
    Delete(BookId),
    Help,
    Quit,
}

pub const HELP: &str = "Commands: list | refresh | add | edit <id> | delete <id> | help | quit";

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default().to_lowercase();
        let arg = parts.next();

        match (name.as_str(), arg) {
            ("list" | "ls", None) => Ok(Command::List),
            ("refresh", None) => Ok(Command::Refresh),
            ("add", None) => Ok(Command::Add),
            ("edit", Some(id)) => parse_id(id).map(Command::Edit),
            ("delete" | "rm", Some(id)) => parse_id(id).map(Command::Delete),
            ("help" | "?", None) => Ok(Command::Help),
            ("quit" | "exit" | "q", None) => Ok(Command::Quit),
            _ => Err(format!("Unknown command: {:?}. {}", line.trim(), HELP)),
        }
    }
}

fn parse_id(raw: &str) -> Result<BookId, String> {
    raw.parse()
        .map_err(|_| format!("Invalid book id: {:?}", raw))
}
