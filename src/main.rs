//! Classifies hand landmark frames piped in by an external tracking process.
//!
//! Expects one JSON frame per stdin line: an array of detected hands, each an array of 21
//! landmark objects in MediaPipe index order. Prints the classified gesture label per frame.

use std::io::{self, BufRead};

use anyhow::Context;
use serde::Deserialize;

use handsign::hand::{gesture, HandLandmarks};
use handsign::landmark::Landmarks;

/// A single landmark as reported by the tracking process.
///
/// Extra fields such as the estimated depth `z` are accepted and ignored.
#[derive(Debug, Deserialize)]
struct RawLandmark {
    x: f32,
    y: f32,
}

fn parse_frame(line: &str) -> anyhow::Result<Vec<HandLandmarks>> {
    let hands: Vec<Vec<RawLandmark>> = serde_json::from_str(line)?;
    hands
        .into_iter()
        .map(|hand| {
            let landmarks = hand.iter().map(|lm| [lm.x, lm.y]).collect::<Landmarks>();
            HandLandmarks::new(landmarks)
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    handsign::init_logger!();

    let stdin = io::stdin();
    for (number, line) in stdin.lock().lines().enumerate() {
        let line = line.context("failed to read frame from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let hands = parse_frame(&line)
            .with_context(|| format!("malformed frame on line {}", number + 1))?;
        println!("{}", gesture::classify_frame(&hands));
    }

    Ok(())
}
