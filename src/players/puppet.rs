use super::*;

/// Player that replays a fixed sequence of calls, cycling when it runs out.
#[derive(Debug, Clone)]
pub struct Puppet {
    calls: Vec<Move>,
    cursor: usize,
}

impl Puppet {
    /// Fails on an empty sequence.
    pub fn new(calls: impl IntoIterator<Item = Move>) -> anyhow::Result<Self> {
        let calls = calls.into_iter().collect::<Vec<_>>();
        match calls.is_empty() {
            true => Err(anyhow::anyhow!("puppet needs at least one call")),
            false => Ok(Self { calls, cursor: 0 }),
        }
    }
    /// Always calls the same move.
    pub fn always(call: Move) -> Self {
        Self {
            calls: vec![call],
            cursor: 0,
        }
    }
}

impl Player for Puppet {
    fn decide(&mut self) -> anyhow::Result<Move> {
        let call = self.calls[self.cursor % self.calls.len()];
        self.cursor += 1;
        Ok(call)
    }
}
