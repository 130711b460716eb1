//! Interactive terminal host for the dispatcher.
//!
//! Generic over reader and writer so tests can script a whole session.

use std::io::{self, BufRead, Write};

use faraway_packing::ItemId;

use crate::action::Action;
use crate::confirm::{Confirm, request_clear};
use crate::dispatcher::Dispatcher;
use crate::form::NewItemForm;
use crate::input::{HELP, Input};
use crate::render;

pub const PROMPT: &str = "> ";

pub struct Session<R, W> {
    dispatcher: Dispatcher,
    form: NewItemForm,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(dispatcher: Dispatcher, input: R, output: W) -> Self {
        Self {
            dispatcher,
            form: NewItemForm::new(),
            input,
            output,
        }
    }

    pub fn into_parts(self) -> (Dispatcher, W) {
        (self.dispatcher, self.output)
    }

    /// Read and execute commands until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", render::TITLE)?;
        writeln!(self.output, "{}", render::FORM_HEADING)?;
        write!(self.output, "{}", render::screen(self.dispatcher.state()))?;

        let mut line = String::new();
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }

            match line.parse::<Input>() {
                Ok(Input::Quit) => break,
                Ok(input) => self.execute(input)?,
                Err(err) => {
                    tracing::debug!(error = %err, "rejected input");
                    writeln!(self.output, "error: {err}")?;
                }
            }
        }

        tracing::info!(
            items = self.dispatcher.state().list().len(),
            events = self.dispatcher.journal().len(),
            "session ended"
        );
        Ok(())
    }

    fn execute(&mut self, input: Input) -> io::Result<()> {
        match input {
            Input::Add {
                quantity,
                description,
            } => {
                self.form.set_quantity(quantity);
                self.form.set_description(description);
                match self.form.submit() {
                    Ok(new_item) => self.dispatch(Action::AddItem(new_item))?,
                    Err(err) => {
                        // Leave nothing behind for the next `add`.
                        self.form = NewItemForm::new();
                        writeln!(self.output, "error: {err}")?;
                    }
                }
            }
            Input::Toggle(id) => self.dispatch_existing(id, Action::ToggleItem(id))?,
            Input::Delete(id) => self.dispatch_existing(id, Action::DeleteItem(id))?,
            Input::Clear => {
                let mut prompt = LinePrompt {
                    input: &mut self.input,
                    output: &mut self.output,
                };
                if request_clear(&mut self.dispatcher, &mut prompt) {
                    self.show()?;
                } else {
                    writeln!(self.output, "kept the list")?;
                }
            }
            Input::Sort(sort_by) => self.dispatch(Action::SetSortCriterion(sort_by))?,
            Input::List => self.show()?,
            Input::Stats => writeln!(
                self.output,
                "{}",
                render::stats_line(self.dispatcher.state().stats())
            )?,
            Input::Json => {
                let json = serde_json::to_string_pretty(self.dispatcher.state())?;
                writeln!(self.output, "{json}")?;
            }
            Input::History => self.history()?,
            Input::Help => {
                writeln!(self.output, "{HELP}")?;
                writeln!(
                    self.output,
                    "sort options:\n{}",
                    render::sort_options(self.dispatcher.state().sort_by())
                )?;
            }
            Input::Quit | Input::Nothing => {}
        }
        Ok(())
    }

    fn dispatch(&mut self, action: Action) -> io::Result<()> {
        self.dispatcher.dispatch(action);
        self.show()
    }

    /// Unknown ids would leave the list untouched; report them instead of dispatching.
    fn dispatch_existing(&mut self, id: ItemId, action: Action) -> io::Result<()> {
        if !self.dispatcher.state().list().contains(id) {
            return writeln!(self.output, "no item #{id}");
        }
        self.dispatch(action)
    }

    fn show(&mut self) -> io::Result<()> {
        write!(self.output, "{}", render::screen(self.dispatcher.state()))
    }

    fn history(&mut self) -> io::Result<()> {
        if self.dispatcher.journal().is_empty() {
            return writeln!(self.output, "nothing has happened yet");
        }
        for envelope in self.dispatcher.journal() {
            let payload = serde_json::to_string(envelope.payload())?;
            writeln!(
                self.output,
                "{:>3} {} {} {payload}",
                envelope.sequence_number(),
                envelope.recorded_at().format("%H:%M:%S"),
                envelope.event_type()
            )?;
        }
        Ok(())
    }
}

/// Yes/no question asked on the session's own streams.
struct LinePrompt<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<'_, R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        let mut answer = String::new();
        let asked = write!(self.output, "{prompt} [y/N] ")
            .and_then(|()| self.output.flush())
            .and_then(|()| self.input.read_line(&mut answer));
        if let Err(err) = asked {
            tracing::warn!(error = %err, "could not read confirmation; treating as no");
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}
