use std::io::Write;

use anyhow::Result;

use crate::models::AggregatedPurchase;
use crate::presenter::Presenter;

pub struct JsonPresenter<W: Write> {
    output: W
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn render(&mut self, purchases: &[AggregatedPurchase]) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.output, purchases)?;
        writeln!(self.output)?;
        self.output.flush()?;

        Ok(())
    }
}
