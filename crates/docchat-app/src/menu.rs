//! Interactive terminal menus.
//!
//! Generic over the input and output streams so the whole flow can be
//! driven from tests.

use std::io::{self, BufRead, Write};
use std::path::Path;

use docchat_chat::FileChat;
use docchat_session::{DocumentSession, Outcome, SessionError};
use docchat_sql::{SqlExecutor, SqlTranslator};
use tracing::{debug, warn};

/// Whether the user asked to leave the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Text-to-SQL collaborators. The executor is absent when the database
/// could not be opened; the error is kept to show the user.
pub struct SqlMode {
    pub translator: SqlTranslator,
    pub executor: Result<SqlExecutor, String>,
}

/// The interactive application.
pub struct App<R, W> {
    input: R,
    output: W,
    session: DocumentSession,
    chat: FileChat,
    sql: SqlMode,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(input: R, output: W, chat: FileChat, sql: SqlMode) -> Self {
        Self {
            input,
            output,
            session: DocumentSession::new(),
            chat,
            sql,
        }
    }

    pub fn session(&self) -> &DocumentSession {
        &self.session
    }

    /// Run the main menu until the user exits or input ends.
    pub async fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to DocChat!")?;
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "=== Main Menu ===")?;
            writeln!(self.output, "1. Text-to-SQL")?;
            writeln!(self.output, "2. Chat with files")?;
            writeln!(self.output, "3. Exit")?;

            let Some(choice) = self.prompt("Select an option (1-3): ")? else {
                break;
            };
            let flow = match choice.as_str() {
                "1" => self.sql_loop().await?,
                "2" => self.file_menu().await?,
                "3" => Flow::Exit,
                _ => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }
        writeln!(self.output, "Goodbye!")?;
        self.output.flush()
    }

    async fn file_menu(&mut self) -> io::Result<Flow> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "=== Chat with Files ===")?;
            writeln!(self.output, "1. Upload file")?;
            writeln!(self.output, "2. Chat with uploaded files")?;
            writeln!(self.output, "3. List uploaded files")?;
            writeln!(self.output, "4. Remove a file")?;
            writeln!(self.output, "5. Clear all files")?;
            writeln!(self.output, "6. Session summary")?;
            writeln!(self.output, "7. Back to main menu")?;

            let Some(choice) = self.prompt("Select an option (1-7): ")? else {
                return Ok(Flow::Exit);
            };
            let flow = match choice.as_str() {
                "1" => self.upload_loop()?,
                "2" => self.chat_loop().await?,
                "3" => {
                    self.print_files()?;
                    Flow::Continue
                }
                "4" => self.remove_file()?,
                "5" => {
                    let removed = self.session.clear();
                    debug!(removed, "Files cleared from menu");
                    self.report(&Outcome::cleared())?;
                    Flow::Continue
                }
                "6" => {
                    self.print_summary()?;
                    Flow::Continue
                }
                "7" => return Ok(Flow::Continue),
                _ => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                return Ok(Flow::Exit);
            }
        }
    }

    fn upload_loop(&mut self) -> io::Result<Flow> {
        loop {
            let Some(line) = self.prompt("Enter file path (or 'back' to return): ")? else {
                return Ok(Flow::Exit);
            };
            if line.eq_ignore_ascii_case("back") {
                return Ok(Flow::Continue);
            }
            if line.is_empty() {
                continue;
            }

            let path = Path::new(unquote(&line));
            if !path.is_file() {
                writeln!(self.output, "File not found: {}", path.display())?;
                continue;
            }
            let outcome = match self.session.add_path(path) {
                Ok(info) => Outcome::added(&info),
                Err(e) => Outcome::from(e),
            };
            self.report(&outcome)?;
        }
    }

    async fn chat_loop(&mut self) -> io::Result<Flow> {
        if !self.session.has_documents() {
            self.report(&Outcome::from(SessionError::EmptySession))?;
            return Ok(Flow::Continue);
        }
        self.print_files()?;

        loop {
            let Some(question) =
                self.prompt("Ask a question about your files ('back' to return, 'exit' to quit): ")?
            else {
                return Ok(Flow::Exit);
            };
            match question.to_ascii_lowercase().as_str() {
                "back" => return Ok(Flow::Continue),
                "exit" | "quit" => return Ok(Flow::Exit),
                "" => continue,
                _ => {}
            }

            match self.chat.ask(&self.session, &question).await {
                Ok(answer) => writeln!(self.output, "\nAnswer: {}", answer)?,
                Err(e) => {
                    warn!(error = %e, "Chat request failed");
                    writeln!(self.output, "❌ {}", e)?;
                }
            }
        }
    }

    async fn sql_loop(&mut self) -> io::Result<Flow> {
        if let Err(ref message) = self.sql.executor {
            writeln!(self.output, "❌ {}", message)?;
            return Ok(Flow::Continue);
        }

        loop {
            let Some(question) =
                self.prompt("Ask a question about your database ('back' to return, 'exit' to quit): ")?
            else {
                return Ok(Flow::Exit);
            };
            match question.to_ascii_lowercase().as_str() {
                "back" => return Ok(Flow::Continue),
                "exit" | "quit" => return Ok(Flow::Exit),
                "" => continue,
                _ => {}
            }

            let sql = match self.sql.translator.to_sql(&question).await {
                Ok(sql) => sql,
                Err(e) => {
                    writeln!(self.output, "❌ {}", e)?;
                    continue;
                }
            };
            writeln!(self.output, "\nGenerated SQL:\n{}\n", sql)?;

            let result = match self.sql.executor {
                Ok(ref executor) => executor.execute(&sql),
                Err(_) => continue,
            };
            match result {
                Ok(output) => writeln!(self.output, "{}", output)?,
                Err(e) => writeln!(self.output, "❌ {}", e)?,
            }
        }
    }

    fn remove_file(&mut self) -> io::Result<Flow> {
        if !self.session.has_documents() {
            writeln!(self.output, "No files uploaded yet.")?;
            return Ok(Flow::Continue);
        }
        self.print_files()?;
        let Some(name) = self.prompt("Enter the file name to remove: ")? else {
            return Ok(Flow::Exit);
        };
        let outcome = match self.session.remove(&name) {
            Ok(record) => Outcome::removed(&record.name),
            Err(e) => Outcome::from(e),
        };
        self.report(&outcome)?;
        Ok(Flow::Continue)
    }

    fn print_files(&mut self) -> io::Result<()> {
        let files = self.session.list();
        if files.is_empty() {
            return writeln!(self.output, "No files uploaded yet.");
        }
        writeln!(self.output, "\nUploaded files:")?;
        for (i, info) in files.iter().enumerate() {
            writeln!(
                self.output,
                "{}. {} ({}, {} characters)",
                i + 1,
                info.name,
                info.doc_type,
                info.size
            )?;
            writeln!(self.output, "   Preview: {}", info.preview)?;
        }
        Ok(())
    }

    fn print_summary(&mut self) -> io::Result<()> {
        let summary = self.session.summary();
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        writeln!(self.output, "{}", json)
    }

    fn report(&mut self, outcome: &Outcome) -> io::Result<()> {
        writeln!(self.output, "{}", outcome)
    }

    /// Print `label` and read one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Strip one pair of matching surrounding quotes, as left by drag-and-drop.
fn unquote(s: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(quote).and_then(|r| r.strip_suffix(quote)) {
            return inner;
        }
    }
    s
}
