mod csv_presenter;
mod json_presenter;
mod text_presenter;

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;

use crate::models::AggregatedPurchase;

pub use csv_presenter::CsvPresenter;
pub use json_presenter::JsonPresenter;
pub use text_presenter::TextPresenter;

/// Renders a finished ranking. Presenters are only handed complete results.
pub trait Presenter {
    fn render(&mut self, purchases: &[AggregatedPurchase]) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// `$<total> <description>` per line
    #[default]
    Text,
    Json,
    Csv
}

impl OutputFormat {
    pub fn presenter<'a, W: Write + 'a>(self, output: W) -> Box<dyn Presenter + 'a> {
        match self {
            OutputFormat::Text => Box::new(TextPresenter::new(output)),
            OutputFormat::Json => Box::new(JsonPresenter::new(output)),
            OutputFormat::Csv => Box::new(CsvPresenter::new(output))
        }
    }
}
