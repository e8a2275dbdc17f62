use crate::config::CutConfig;
use panelcut::io::ext_repr::{ExtJob, ExtSolution};
use serde::{Deserialize, Serialize};

/// Job, solution and configuration written as one JSON document
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct JobOutput {
    #[serde(flatten)]
    pub job: ExtJob,
    pub solution: ExtSolution,
    pub config: CutConfig,
}
