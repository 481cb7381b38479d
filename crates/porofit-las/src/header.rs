//! Header lines of the `~Version`, `~Well`, `~Curve` and `~Parameter` sections

/// One `MNEM.UNIT VALUE : DESCRIPTION` header line.
///
/// In the `~Curve` section the value column holds the API log code and the
/// description names the curve.
///
/// # Examples
///
/// ```
/// use porofit_las::header::HeaderItem;
///
/// let item = HeaderItem::parse("STRT.M        1670.0000 : START DEPTH").unwrap();
/// assert_eq!(item.mnemonic, "STRT");
/// assert_eq!(item.unit, "M");
/// assert_eq!(item.value, "1670.0000");
/// assert_eq!(item.description, "START DEPTH");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderItem {
    pub mnemonic: String,
    pub unit: String,
    pub value: String,
    pub description: String,
}

impl HeaderItem {
    /// Parses a header line, or returns `None` when it has no mnemonic delimiter.
    ///
    /// The unit runs from the first dot to the first whitespace; the
    /// description follows the last colon, so values containing colons (times,
    /// dates) survive as long as a description is present.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let (mnemonic, rest) = line.split_once('.')?;
        let mnemonic = mnemonic.trim();
        if mnemonic.is_empty() {
            return None;
        }

        let unit_end = rest
            .find(|c: char| c.is_whitespace() || c == ':')
            .unwrap_or(rest.len());
        let (unit, rest) = rest.split_at(unit_end);

        let (value, description) = match rest.rsplit_once(':') {
            Some((value, description)) => (value.trim(), description.trim()),
            None => (rest.trim(), ""),
        };

        Some(Self {
            mnemonic: mnemonic.to_owned(),
            unit: unit.to_owned(),
            value: value.to_owned(),
            description: description.to_owned(),
        })
    }

    /// Case-insensitive mnemonic comparison.
    #[must_use]
    pub fn is(&self, mnemonic: &str) -> bool {
        self.mnemonic.eq_ignore_ascii_case(mnemonic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_unit() {
        let item = HeaderItem::parse("WELL.   ANY ET AL 12-34-12-34 : WELL").unwrap();
        assert_eq!(item.unit, "");
        assert_eq!(item.value, "ANY ET AL 12-34-12-34");
        assert_eq!(item.description, "WELL");
    }

    #[test]
    fn test_unit_directly_followed_by_colon() {
        let item = HeaderItem::parse("DEPT.M: 1  DEPTH").unwrap();
        assert_eq!(item.mnemonic, "DEPT");
        assert_eq!(item.unit, "M");
        assert_eq!(item.value, "");
        assert_eq!(item.description, "1  DEPTH");
    }

    #[test]
    fn test_value_with_colon() {
        let item = HeaderItem::parse("TIME.   13:45:10 : LOG TIME").unwrap();
        assert_eq!(item.value, "13:45:10");
        assert_eq!(item.description, "LOG TIME");
    }

    #[test]
    fn test_no_description() {
        let item = HeaderItem::parse(" NULL.  -999.25").unwrap();
        assert_eq!(item.mnemonic, "NULL");
        assert_eq!(item.value, "-999.25");
        assert_eq!(item.description, "");
    }

    #[test]
    fn test_rejects_lines_without_dot() {
        assert!(HeaderItem::parse("no delimiter here").is_none());
        assert!(HeaderItem::parse(".M 1 : nameless").is_none());
    }

    #[test]
    fn test_case_insensitive_mnemonic() {
        let item = HeaderItem::parse("Neut.V/V  : NEUTRON POROSITY").unwrap();
        assert!(item.is("NEUT"));
        assert!(!item.is("DPHI"));
    }
}
