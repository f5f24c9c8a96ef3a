use std::fmt::{Display, Formatter};
use std::str::FromStr;

use imgfilter_parser::ast;
use serde::{Deserialize, Serialize};

use crate::errors::{msg, Error, ErrorKind};

/// The boolean operator placed between two adjacent clauses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Conjunction {
    #[default]
    And,
    Or,
}

impl Conjunction {
    pub fn as_str(&self) -> &'static str {
        ast::Conjunction::from(*self).as_str()
    }
}

impl Display for Conjunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Conjunction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ast::Conjunction::from_keyword(s.trim())
            .map(Conjunction::from)
            .ok_or_else(|| ErrorKind::Parse(msg::unknown_conjunction(s)).into())
    }
}

impl From<ast::Conjunction> for Conjunction {
    fn from(conjunction: ast::Conjunction) -> Self {
        match conjunction {
            ast::Conjunction::And => Conjunction::And,
            ast::Conjunction::Or => Conjunction::Or,
        }
    }
}

impl From<Conjunction> for ast::Conjunction {
    fn from(conjunction: Conjunction) -> Self {
        match conjunction {
            Conjunction::And => ast::Conjunction::And,
            Conjunction::Or => ast::Conjunction::Or,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("AND".parse::<Conjunction>(), Ok(Conjunction::And));
        assert_eq!("or".parse::<Conjunction>(), Ok(Conjunction::Or));
        assert_eq!(" Or ".parse::<Conjunction>(), Ok(Conjunction::Or));
        let err = "XOR".parse::<Conjunction>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "`XOR` is not a conjunction. Expected `AND` or `OR`."
        );
    }

    #[test]
    fn test_display_and_default() {
        assert_eq!(Conjunction::default(), Conjunction::And);
        assert_eq!(Conjunction::And.to_string(), "AND");
        assert_eq!(Conjunction::Or.to_string(), "OR");
    }

    #[test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&Conjunction::Or).unwrap(), r#""OR""#);
        assert_eq!(
            serde_json::from_str::<Conjunction>(r#""AND""#).unwrap(),
            Conjunction::And
        );
    }
}
