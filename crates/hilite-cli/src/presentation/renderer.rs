use anyhow::Result;
use is_terminal::IsTerminal;
use serde::Serialize;

use super::view_models::{CommandResultViewModel, CreateView};
use crate::args::OutputFormat;

pub struct ConsoleRenderer {
    format: OutputFormat,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            OutputFormat::Plain => {
                let colors = std::io::stdout().is_terminal();
                print!("{}", result.content.create_view(colors));
            }
        }
        Ok(())
    }
}
