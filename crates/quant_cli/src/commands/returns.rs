//! Log-return statistics command.

use quant_core::PriceSeries;
use tracing::info;

use crate::Result;

/// Run the returns command.
pub fn run(file: &str, symbol: &str) -> Result<()> {
    info!(file, symbol, "loading close-price series");
    let series = PriceSeries::from_csv_path(symbol, file)?;
    let stats = series.return_statistics()?;

    println!(
        "{}: {} observations, {} log returns",
        series.symbol(),
        series.len(),
        series.len() - 1
    );
    println!("Mean daily log return: {:.6}", stats.mean);
    println!("Daily volatility: {:.6}", stats.std_dev);

    Ok(())
}
