//! The two addresses printed on a label.

/// The sender's address, printed in the top-left corner of every label. It never changes
/// once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnAddress {
    lines: Vec<String>,
}

impl ReturnAddress {
    /// Build a return address from its lines, first line first. Lines are kept exactly as
    /// given so that intentional spacing survives.
    pub fn new<I, S>(lines: I) -> ReturnAddress
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ReturnAddress {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Default for ReturnAddress {
    fn default() -> Self {
        ReturnAddress::new([
            "Bruce Eckel",
            "107 WhiteRock Suite 969",
            "Crested Butte, CO 81224",
        ])
    }
}

/// The recipient's address, derived from whatever the user typed.
///
/// Every line is trimmed and blank lines are dropped, so the address is a (possibly empty)
/// list of non-empty lines.
///
/// ```
/// use address_label::DestinationAddress;
///
/// let to = DestinationAddress::parse("  123 Main St \n\n Springfield, IL 62701\r\n");
/// assert_eq!(to.lines(), ["123 Main St", "Springfield, IL 62701"]);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DestinationAddress {
    lines: Vec<String>,
}

impl DestinationAddress {
    /// Parse raw, multi-line user input
    pub fn parse(raw: &str) -> DestinationAddress {
        DestinationAddress::from_lines(raw.lines())
    }

    /// Build an address from already-split lines, applying the same trim and filter rules
    /// as [`DestinationAddress::parse`]
    pub fn from_lines<I, S>(lines: I) -> DestinationAddress
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        DestinationAddress {
            lines: non_blank_lines(lines).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

/// Trim every line and drop the ones left empty. `str::lines` leaves a trailing `\r` on
/// old Mac line endings, which is handled by splitting on it here too.
pub(crate) fn non_blank_lines<I, S>(lines: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .flat_map(|line| {
            line.as_ref()
                .split('\r')
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(ToString::to_string)
                .collect::<Vec<_>>()
        })
}
