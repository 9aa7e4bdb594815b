/// Errors that can occur while building or stepping a swarm.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("objective error: {0}")]
    Objective(Box<dyn std::error::Error + Send + Sync>),

    #[error("objective expects {expected} dimensions but the swarm has {found}")]
    Dimension { expected: usize, found: usize },
}
