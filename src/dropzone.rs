//! Accept/complete rules for one drop zone.
//!
//! A zone is declared on the page with `data-accepts` and `data-required`
//! (comma-separated ingredient ids) and optionally `data-dish`.

/// Result of dropping one ingredient on a zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Not in the zone's accepted set. Nothing changes.
    Rejected,
    /// Accepted and already on the zone. No new marker.
    AlreadyPlaced,
    /// Accepted and newly placed; the zone is not complete yet.
    Accepted,
    /// Accepted and newly placed, and this drop satisfied every required id.
    Completed,
}

impl DropOutcome {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, DropOutcome::Rejected)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DropZone {
    accepts: Vec<String>,
    required: Vec<String>,
    dish: Option<String>,
    dropped: Vec<String>,
    completed: bool,
}

/// Split a comma-separated attribute value into trimmed, non-empty ids.
pub fn parse_id_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl DropZone {
    fn new(accepts: Vec<String>, required: Vec<String>) -> Self {
        Self {
            accepts,
            required,
            ..Self::default()
        }
    }

    /// Build from raw attribute values; a missing attribute is an empty list.
    pub fn from_attributes(
        accepts: Option<&str>,
        required: Option<&str>,
        dish: Option<&str>,
    ) -> Self {
        let mut zone = Self::new(
            accepts.map(parse_id_list).unwrap_or_default(),
            required.map(parse_id_list).unwrap_or_default(),
        );
        zone.dish = dish.map(str::trim).filter(|d| !d.is_empty()).map(str::to_string);
        zone
    }

    pub fn accepts(&self, id: &str) -> bool {
        self.accepts.iter().any(|a| a == id)
    }

    /// Dish this zone finishes, if the page declared one.
    pub fn dish(&self) -> Option<&str> {
        self.dish.as_deref()
    }

    pub fn dropped(&self) -> &[String] {
        &self.dropped
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn drop_ingredient(&mut self, id: &str) -> DropOutcome {
        if !self.accepts(id) {
            return DropOutcome::Rejected;
        }
        if self.dropped.iter().any(|d| d == id) {
            return DropOutcome::AlreadyPlaced;
        }
        self.dropped.push(id.to_string());

        if !self.completed && self.requirements_met() {
            self.completed = true;
            DropOutcome::Completed
        } else {
            DropOutcome::Accepted
        }
    }

    fn requirements_met(&self) -> bool {
        self.required
            .iter()
            .all(|r| self.dropped.iter().any(|d| d == r))
    }
}
