use std::io::Write;

use anyhow::Result;

use crate::models::AggregatedPurchase;
use crate::presenter::Presenter;

pub struct TextPresenter<W: Write> {
    output: W,
    with_purchases: bool
}

impl<W: Write> TextPresenter<W> {
    pub fn new(output: W) -> Self {
        Self {
            output,
            with_purchases: false
        }
    }

    /// Set once the first ranking has been rendered.
    pub fn with_purchases(&self) -> bool {
        self.with_purchases
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn render(&mut self, purchases: &[AggregatedPurchase]) -> Result<()> {
        self.with_purchases = true;

        for purchase in purchases {
            writeln!(self.output, "{purchase}")?;
        }

        self.output.flush()?;

        Ok(())
    }
}
