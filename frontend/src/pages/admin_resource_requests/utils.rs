use crate::api::{ResourceRequestView, STATUS_PENDING};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceRequestGroups {
    pub pending: Vec<ResourceRequestView>,
    pub other: Vec<ResourceRequestView>,
}

/// Splits requests into those awaiting a decision and the rest, newest id first.
pub fn split_requests(requests: Vec<ResourceRequestView>) -> ResourceRequestGroups {
    let (mut pending, mut other): (Vec<_>, Vec<_>) = requests
        .into_iter()
        .partition(|r| r.status == STATUS_PENDING);
    pending.sort_by(|a, b| b.request_id.cmp(&a.request_id));
    other.sort_by(|a, b| b.request_id.cmp(&a.request_id));
    ResourceRequestGroups { pending, other }
}
