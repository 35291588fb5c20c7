use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("a radar chart needs at least 3 axes, got {axes}")]
    TooFewAxes { axes: usize },
}
