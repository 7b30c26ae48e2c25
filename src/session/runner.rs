//! The session loop.

use super::menu::{write_menu, MenuOption};
use crate::display::{write_record, write_table, EMPTY_MESSAGE};
use crate::entry::{read_record, EntryError};
use crate::heap::PriorityHeap;
use crate::loader::load_from_path;
use crate::record::LoadRecord;
use log::{debug, info};
use std::io::{self, BufRead, Write};

/// Whether the loop keeps going after handling an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Interactive console session over a heap of records.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use u_loadheap::session::Session;
///
/// let script = "2\n1\n2\n3\n10\nMedical supplies\n3\n6\n";
/// let mut session = Session::new(Cursor::new(script), Vec::new());
/// session.run().unwrap();
///
/// assert_eq!(session.heap().len(), 1);
/// let (_, output) = session.into_parts();
/// assert!(String::from_utf8(output).unwrap().contains("Medical supplies"));
/// ```
pub struct Session<R, W> {
    heap: PriorityHeap<LoadRecord>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with an empty default heap.
    pub fn new(input: R, output: W) -> Self {
        Self::with_heap(PriorityHeap::new(), input, output)
    }

    /// Creates a session around an existing heap.
    pub fn with_heap(heap: PriorityHeap<LoadRecord>, input: R, output: W) -> Self {
        Self {
            heap,
            input,
            output,
        }
    }

    pub fn heap(&self) -> &PriorityHeap<LoadRecord> {
        &self.heap
    }

    /// Consumes the session, returning the heap and the output handle.
    pub fn into_parts(self) -> (PriorityHeap<LoadRecord>, W) {
        (self.heap, self.output)
    }

    /// Shows the menu and handles choices until the user exits or input ends.
    ///
    /// # Errors
    /// Only failures of the console handles themselves are returned.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write_menu(&mut self.output)?;

            let Some(answer) = self.read_answer()? else {
                debug!("event=session_eof module=session");
                return Ok(());
            };

            let flow = match MenuOption::parse(&answer) {
                Some(option) => self.handle(option)?,
                None => {
                    writeln!(self.output, "\nInvalid option!")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Stop {
                return Ok(());
            }
        }
    }

    /// Loads a CSV file into the heap and reports the outcome on the output.
    pub fn load_file(&mut self, path: &str) -> io::Result<()> {
        match load_from_path(path, &mut self.heap) {
            Ok(report) => {
                for rejected in &report.rejected {
                    writeln!(
                        self.output,
                        "Invalid line {} ({}): {}",
                        rejected.line_number, rejected.error, rejected.content
                    )?;
                }
                writeln!(
                    self.output,
                    "{} loads loaded successfully from {}",
                    report.loaded, path
                )
            }
            Err(err) => writeln!(self.output, "Error reading file: {err}"),
        }
    }

    fn handle(&mut self, option: MenuOption) -> io::Result<Flow> {
        debug!("event=menu_choice module=session option={option:?}");
        match option {
            MenuOption::LoadFile => {
                write!(self.output, "CSV file name: ")?;
                self.output.flush()?;
                let Some(path) = self.read_answer()? else {
                    return Ok(Flow::Stop);
                };
                self.load_file(path.trim())?;
            }
            MenuOption::InsertRecord => return self.insert_record(),
            MenuOption::ShowTop => match self.heap.peek() {
                Some(top) => {
                    write_record(&mut self.output, "Highest Priority Load", top)?;
                    writeln!(self.output)?;
                }
                None => writeln!(self.output, "\n{EMPTY_MESSAGE}")?,
            },
            MenuOption::RemoveTop => match self.heap.extract_max() {
                Some(removed) => {
                    info!(
                        "event=load_removed module=session id={} priority={}",
                        removed.id(),
                        removed.priority()
                    );
                    write_record(&mut self.output, "Removed Load", &removed)?;
                    writeln!(self.output, "\nLoad removed successfully!")?;
                }
                None => writeln!(self.output, "\nNo loads to remove.")?,
            },
            MenuOption::ListAll => {
                write_table(&mut self.output, self.heap.iter_descending())?;
            }
            MenuOption::Exit => {
                writeln!(self.output, "\nShutting down...")?;
                return Ok(Flow::Stop);
            }
        }
        Ok(Flow::Continue)
    }

    fn insert_record(&mut self) -> io::Result<Flow> {
        match read_record(&mut self.input, &mut self.output) {
            Ok(record) => {
                let priority = record.priority();
                self.heap.insert(record);
                writeln!(
                    self.output,
                    "Load inserted successfully! Computed priority: {priority}"
                )?;
                Ok(Flow::Continue)
            }
            Err(EntryError::Io(err)) => Err(err),
            Err(EntryError::EndOfInput) => Ok(Flow::Stop),
            Err(err) => {
                writeln!(self.output, "\nInvalid input: {err}")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
