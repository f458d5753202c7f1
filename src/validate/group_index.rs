use tracing::debug;

use crate::model::{Datapoint, GroupIndex};

/// Group validated datapoints by group, keeping first-seen order.
///
/// Performs no validation; `datapoints` must come from the datapoint stage.
pub fn build_group_index(datapoints: &[Datapoint]) -> GroupIndex {
    let mut index = GroupIndex::default();
    for dp in datapoints {
        index.push(&dp.group, &dp.qualified_name);
    }
    debug!(groups = index.len(), "group index built");
    index
}
