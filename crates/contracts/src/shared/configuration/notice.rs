/// User-facing message produced by the selection engine (shown as a toast)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigNotice {
    pub title: String,
    pub description: String,
}

impl ConfigNotice {
    /// Selecting `label` cleared conflicting selections elsewhere
    pub fn selections_cleared(label: &str) -> Self {
        Self {
            title: "Incompatible selections cleared".to_string(),
            description: format!(
                "Some options were automatically deselected because they're incompatible with \"{}\".",
                label
            ),
        }
    }

    /// The post-mutation validation pass cleared selections
    pub fn selections_adjusted() -> Self {
        Self {
            title: "Incompatible selections adjusted".to_string(),
            description: "Some selections were cleared due to conflict rules.".to_string(),
        }
    }
}
