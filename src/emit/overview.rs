use super::{Artifact, EmitError, Emitter, EmitterInput};
use crate::overview::Overview;

/// Writes `overview.csv`: one line per datapoint with its absolute address.
#[derive(Clone, Copy, Debug, Default)]
pub struct OverviewEmitter;

impl OverviewEmitter {
    pub const FILE_NAME: &'static str = "overview.csv";
}

impl Emitter for OverviewEmitter {
    fn name(&self) -> &'static str {
        "overview"
    }

    fn emit(&self, input: &EmitterInput<'_>) -> Result<Vec<Artifact>, EmitError> {
        let overview = Overview::build(input.model)?;
        Ok(vec![Artifact::new(Self::FILE_NAME, overview.to_string())])
    }
}
