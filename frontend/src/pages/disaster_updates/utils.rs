use crate::api::Disaster;

/// Disasters bucketed for display. INACTIVE records appear in none of the groups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisasterGroups {
    pub high_priority_active: Vec<Disaster>,
    pub other_active: Vec<Disaster>,
    pub resolved: Vec<Disaster>,
}

impl DisasterGroups {
    pub fn is_empty(&self) -> bool {
        self.high_priority_active.is_empty() && self.other_active.is_empty() && self.resolved.is_empty()
    }
}

pub fn sort_newest_first(disasters: &mut [Disaster]) {
    disasters.sort_by(|a, b| b.disaster_id.cmp(&a.disaster_id));
}

pub fn group_disasters(mut disasters: Vec<Disaster>) -> DisasterGroups {
    sort_newest_first(&mut disasters);
    let mut groups = DisasterGroups::default();
    for disaster in disasters {
        if disaster.is_active() {
            if disaster.is_high_severity() {
                groups.high_priority_active.push(disaster);
            } else {
                groups.other_active.push(disaster);
            }
        } else if disaster.is_resolved() {
            groups.resolved.push(disaster);
        }
    }
    groups
}

#[cfg(test)]
pub(crate) fn disaster(id: i64, severity: &str, status: &str) -> Disaster {
    Disaster {
        disaster_id: id,
        name: format!("Disaster {}", id),
        description: String::new(),
        location: "Wayanad".into(),
        disaster_type: "FLOOD".into(),
        severity: severity.into(),
        status: status.into(),
        reported_at: chrono::Utc::now(),
    }
}
