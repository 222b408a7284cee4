use crate::*;

/// Layout of a trial's results.
///
/// - Wide   : one row per roll, one column per die
/// - Narrow : one row per (roll, die), one face column
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Form {
    #[default]
    Wide,
    Narrow,
}

impl std::str::FromStr for Form {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "wide" => Ok(Self::Wide),
            "narrow" => Ok(Self::Narrow),
            other => Err(Error::InvalidArgument(format!(
                "form must be wide or narrow, not {:?}",
                other
            ))),
        }
    }
}

impl TryFrom<&str> for Form {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl std::fmt::Display for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Wide => write!(f, "wide"),
            Self::Narrow => write!(f, "narrow"),
        }
    }
}
