use crate::core::{Status, Ticket};
use crate::error::{Result, TicketDeskError};

/// Common ticket filtering logic shared by list views
pub struct TicketFilter {
    pub status: Option<Status>,
    pub department: Option<String>,
    pub sort_by: SortBy,
    pub reverse: bool,
    pub limit: Option<usize>,
}

/// Sort options for tickets
#[derive(Debug, Clone, Copy)]
pub enum SortBy {
    Created,
    Activity,
    Subject,
    Status,
}

impl SortBy {
    /// Parse a sort key from CLI input
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "created" => Ok(Self::Created),
            "activity" => Ok(Self::Activity),
            "subject" => Ok(Self::Subject),
            "status" => Ok(Self::Status),
            _ => Err(TicketDeskError::InvalidInput(format!(
                "Unknown sort key: '{s}'. Use created, activity, subject, or status"
            ))),
        }
    }
}

impl Default for TicketFilter {
    fn default() -> Self {
        Self {
            status: None,
            department: None,
            sort_by: SortBy::Created,
            reverse: false,
            limit: None,
        }
    }
}

impl TicketFilter {
    /// Apply all filters to a list of tickets
    pub fn apply(self, tickets: Vec<Ticket>) -> Vec<Ticket> {
        let filtered: Vec<Ticket> = tickets
            .into_iter()
            .filter(|ticket| self.matches(ticket))
            .collect();

        let mut sorted = self.sort(filtered);

        if let Some(limit) = self.limit {
            sorted.truncate(limit);
        }

        sorted
    }

    /// Check if a ticket matches all filter criteria
    fn matches(&self, ticket: &Ticket) -> bool {
        if let Some(status) = self.status {
            if ticket.status != status {
                return false;
            }
        }

        if let Some(ref department) = self.department {
            if !ticket.department.eq_ignore_ascii_case(department) {
                return false;
            }
        }

        true
    }

    /// Sort tickets according to sort criteria
    ///
    /// The default order shows the newest tickets first; `reverse` flips
    /// whatever the chosen key produces.
    fn sort(&self, mut tickets: Vec<Ticket>) -> Vec<Ticket> {
        tickets.sort_by(|a, b| {
            let ordering = match self.sort_by {
                SortBy::Created => b.created_at.cmp(&a.created_at),
                SortBy::Activity => {
                    let a_activity = a.thread.last_activity().unwrap_or(a.created_at);
                    let b_activity = b.thread.last_activity().unwrap_or(b.created_at);
                    b_activity.cmp(&a_activity)
                },
                SortBy::Subject => a.subject.cmp(&b.subject),
                SortBy::Status => a.status.is_open().cmp(&b.status.is_open()).reverse(),
            };

            if self.reverse {
                ordering.reverse()
            } else {
                ordering
            }
        });

        tickets
    }
}
