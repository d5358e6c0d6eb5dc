//! Pose classifier output and how it steers the snake
//!
//! The classifier is an external process. It writes one JSON array per
//! animation frame, each entry a `{"className": .., "probability": ..}` pair:
//!
//! ```text
//! [{"className":"Cima","probability":0.91},{"className":"Baixo","probability":0.04}]
//! ```
//!
//! Only the most probable class is considered, and only when its probability
//! exceeds the configured threshold. Anything else is ignored.

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::game::Direction;

/// Frames buffered between the feed task and the game loop
const FEED_CAPACITY: usize = 32;

/// One entry of the classifier's output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(rename = "className")]
    pub class_name: String,
    pub probability: f32,
}

impl Prediction {
    pub fn new(class_name: impl Into<String>, probability: f32) -> Self {
        Self {
            class_name: class_name.into(),
            probability,
        }
    }
}

/// Map a trained pose label to a direction
pub fn label_direction(label: &str) -> Option<Direction> {
    match label {
        "Cima" => Some(Direction::Up),
        "Baixo" => Some(Direction::Down),
        "Esquerda" => Some(Direction::Left),
        "Direita" => Some(Direction::Right),
        _ => None,
    }
}

/// Highest-probability entry; the first one wins a tie
pub fn arg_max(predictions: &[Prediction]) -> Option<&Prediction> {
    predictions.iter().fold(None::<&Prediction>, |best, p| match best {
        Some(b) if b.probability >= p.probability => Some(b),
        _ if p.probability.is_nan() => best,
        _ => Some(p),
    })
}

/// Turns classifier frames into direction requests
#[derive(Debug, Clone, Copy)]
pub struct PoseInterpreter {
    threshold: f32,
}

impl PoseInterpreter {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    /// Direction to request for this frame, if any
    pub fn interpret(&self, predictions: &[Prediction]) -> Option<Direction> {
        let best = arg_max(predictions)?;
        if best.probability <= self.threshold {
            return None;
        }
        let direction = label_direction(&best.class_name)?;
        debug!(
            "pose {} ({:.2}) -> {}",
            best.class_name,
            best.probability,
            direction.as_str()
        );
        Some(direction)
    }
}

/// Parse one line of classifier output
pub fn parse_frame(line: &str) -> Result<Vec<Prediction>, serde_json::Error> {
    serde_json::from_str(line)
}

/// Read classifier frames from `reader` on a background task.
///
/// Blank and malformed lines are skipped. The channel closes when the reader
/// hits end of stream or fails, or when the receiver is dropped.
pub fn spawn_pose_feed<R>(reader: R) -> mpsc::Receiver<Vec<Prediction>>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::channel(FEED_CAPACITY);

    tokio::spawn(async move {
        let mut lines = reader.lines();
        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => {
                    debug!("pose feed reached end of stream");
                    break;
                }
                Err(err) => {
                    warn!("pose feed read failed: {}", err);
                    break;
                }
            };

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match parse_frame(line) {
                Ok(frame) => {
                    if tx.send(frame).await.is_err() {
                        break;
                    }
                }
                Err(err) => warn!("skipping malformed pose frame: {}", err),
            }
        }
    });

    rx
}

/// Open a file or FIFO carrying classifier output and start reading it
pub async fn open_pose_feed(path: &Path) -> Result<mpsc::Receiver<Vec<Prediction>>> {
    let file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("Failed to open pose feed {:?}", path))?;
    Ok(spawn_pose_feed(BufReader::new(file)))
}
