/*
[INPUT]:  Persisted task schema labels and serde requirements
[OUTPUT]: Typed Rust enums with label-based serialization and parsing
[POS]:    Data layer - enumerated task metadata
[UPDATE]: When a task enumeration gains or loses a variant
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseLabelError;

/// Declares a fieldless enum whose variants are persisted, displayed and parsed by label.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in display order
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Next variant in display order, wrapping around
            pub fn next(self) -> Self {
                let index = self.position();
                Self::ALL[(index + 1) % Self::ALL.len()]
            }

            /// Previous variant in display order, wrapping around
            pub fn prev(self) -> Self {
                let index = self.position();
                Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
            }

            fn position(self) -> usize {
                Self::ALL
                    .iter()
                    .position(|variant| *variant == self)
                    .unwrap_or(0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = ParseLabelError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let wanted = normalize_label(value);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| normalize_label(variant.label()) == wanted)
                    .ok_or_else(|| ParseLabelError {
                        kind: stringify!($name),
                        value: value.to_string(),
                    })
            }
        }
    };
}

/// Lowercases and drops separators so "Due Soon", "due-soon" and "duesoon" compare equal.
fn normalize_label(value: &str) -> String {
    value
        .chars()
        .filter(|ch| ch.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

labeled_enum! {
    /// Life area a task belongs to
    Area {
        Work => "Work",
        Personal => "Personal",
        Health => "Health",
        Finance => "Finance",
        Home => "Home",
        Learning => "Learning",
    }
}

labeled_enum! {
    /// Kind of work
    TaskType {
        Task => "Task",
        Bug => "Bug",
        Feature => "Feature",
        Chore => "Chore",
        Meeting => "Meeting",
        Research => "Research",
    }
}

labeled_enum! {
    /// Where the task came from
    Origin {
        /// Self-assigned
        Myself => "Self",
        Email => "Email",
        Chat => "Chat",
        Meeting => "Meeting",
        Manager => "Manager",
        Client => "Client",
    }
}

labeled_enum! {
    /// Effort bucket
    Effort {
        FiveMinutes => "5m",
        FifteenMinutes => "15m",
        ThirtyMinutes => "30m",
        OneHour => "1h",
        TwoHours => "2h",
        HalfDay => "4h",
        Day => "1d",
    }
}

labeled_enum! {
    Status {
        Inbox => "Inbox",
        Doing => "Doing",
        Waiting => "Waiting",
        Done => "Done",
    }
}

labeled_enum! {
    /// Qualitative bucket derived from a score
    Level {
        Critical => "Critical",
        High => "High",
        Medium => "Medium",
        Low => "Low",
    }
}

labeled_enum! {
    /// Preset view reducing the task list by a fixed predicate
    QuickFilter {
        All => "All",
        QuickWins => "Quick Wins",
        Critical => "Critical",
        DueSoon => "Due Soon",
        Waiting => "Waiting",
        Done => "Done",
    }
}

labeled_enum! {
    /// Column a view can be sorted by
    SortKey {
        Title => "Title",
        Area => "Area",
        Type => "Type",
        Origin => "Origin",
        Impact => "Impact",
        Urgency => "Urgency",
        Effort => "Effort",
        DaysLeft => "Days Left",
        Status => "Status",
        Score => "Score",
        Created => "Created",
    }
}

impl Effort {
    /// Buckets small enough to count as a quick win
    pub fn is_quick(self) -> bool {
        matches!(self, Effort::FiveMinutes | Effort::FifteenMinutes)
    }
}

impl Default for QuickFilter {
    fn default() -> Self {
        QuickFilter::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_serde() {
        let json = serde_json::to_string(&Effort::FifteenMinutes).unwrap();
        assert_eq!(json, "\"15m\"");
        let origin: Origin = serde_json::from_str("\"Self\"").unwrap();
        assert_eq!(origin, Origin::Myself);
    }

    #[test]
    fn parse_ignores_case_and_separators() {
        assert_eq!("due-soon".parse::<QuickFilter>(), Ok(QuickFilter::DueSoon));
        assert_eq!("QUICK WINS".parse::<QuickFilter>(), Ok(QuickFilter::QuickWins));
        assert_eq!("days_left".parse::<SortKey>(), Ok(SortKey::DaysLeft));
        assert_eq!("1h".parse::<Effort>(), Ok(Effort::OneHour));
    }

    #[test]
    fn parse_rejects_unknown_label() {
        let err = "someday".parse::<Status>().unwrap_err();
        assert_eq!(err.kind, "Status");
        assert_eq!(err.value, "someday");
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(Status::Done.next(), Status::Inbox);
        assert_eq!(Status::Inbox.prev(), Status::Done);
        assert_eq!(Status::Doing.next(), Status::Waiting);
    }
}
