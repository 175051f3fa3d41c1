use crate::error::AveragerError;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DELIMITER: char = ';';

/// Identifies one series of samples, e.g. `girls;kg`.
///
/// Ordering is lexicographic on `(group, unit)`, which is the order the
/// report is printed in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey {
    group: String,
    unit: String,
}

impl GroupKey {
    pub fn new(group: impl Into<String>, unit: impl Into<String>) -> Self {
        GroupKey {
            group: group.into(),
            unit: unit.into(),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }
}

impl FromStr for GroupKey {
    type Err = AveragerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = raw.split(DELIMITER);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(group), Some(unit), None) => Ok(GroupKey::new(group, unit)),
            _ => Err(AveragerError::MalformedKey(raw.to_string())),
        }
    }
}

impl Display for GroupKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.group, DELIMITER, self.unit)
    }
}
