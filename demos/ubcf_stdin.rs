//! Reference UBCF pipeline over standard streams.
//!
//! Reads a two-section rating stream from stdin and writes one
//! fixed-point prediction per query line to stdout:
//!
//! ```text
//! cargo run --example ubcf_stdin < ratings.txt
//! ```

use std::io::{self, BufWriter};

use recomendar::dataset::{read_split, write_predictions};
use recomendar::recommend::UserBasedRecommender;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let split = read_split(stdin.lock())?;

    let mut model = UserBasedRecommender::new();
    model.fit(&split.training)?;

    let predictions = model.predict_batch(&split.queries);

    let stdout = io::stdout();
    write_predictions(BufWriter::new(stdout.lock()), &predictions)?;
    Ok(())
}
