use std::io::Write;

use anyhow::Result;
use csv::WriterBuilder;
use serde::Serialize;

use crate::models::AggregatedPurchase;
use crate::presenter::Presenter;

pub struct CsvPresenter<W: Write> {
    output: W
}

#[derive(Serialize)]
struct PurchaseRow<'a> {
    total: i64,
    description: &'a str
}

impl<W: Write> CsvPresenter<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> Presenter for CsvPresenter<W> {
    fn render(&mut self, purchases: &[AggregatedPurchase]) -> Result<()> {
        //NOTE: The header is written by hand so an empty ranking still gets one
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut self.output);

        writer.write_record(["total", "description"])?;

        for purchase in purchases {
            writer.serialize(PurchaseRow {
                total: purchase.total,
                description: &purchase.description
            })?;
        }

        writer.flush()?;

        Ok(())
    }
}
