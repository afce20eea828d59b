use crate::error::InvalidDurationError;

/// Parses an ISO 8601 duration of the form `P[nD]T[nH][nM][nS]` into a number of seconds.
///
/// This is the subset the YouTube Data API uses for video lengths. Week, month, year and
/// fractional components are not accepted, and the `T` designator is required even when only
/// days are given.
///
/// ```
/// # use ytdata_codec::parse_duration;
/// assert_eq!(parse_duration("PT1H30M15S").unwrap(), 5415);
/// assert_eq!(parse_duration("P1DT2H3M4S").unwrap(), 93784);
/// assert_eq!(parse_duration("PT").unwrap(), 0);
/// assert!(parse_duration("Invalid").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<u64, InvalidDurationError> {
    let invalid = || InvalidDurationError {
        input: input.to_string(),
    };

    let rest = input.strip_prefix('P').ok_or_else(invalid)?;
    let mut cursor = Cursor { rest };

    let mut total: u64 = 0;
    let mut add = |count: Option<u64>, unit: u64| -> Result<(), InvalidDurationError> {
        if let Some(count) = count {
            total = count
                .checked_mul(unit)
                .and_then(|secs| total.checked_add(secs))
                .ok_or_else(invalid)?;
        }
        Ok(())
    };

    add(cursor.component('D').ok_or_else(invalid)?, 24 * 60 * 60)?;
    cursor.rest = cursor.rest.strip_prefix('T').ok_or_else(invalid)?;
    add(cursor.component('H').ok_or_else(invalid)?, 60 * 60)?;
    add(cursor.component('M').ok_or_else(invalid)?, 60)?;
    add(cursor.component('S').ok_or_else(invalid)?, 1)?;

    if !cursor.rest.is_empty() {
        return Err(invalid());
    }
    Ok(total)
}

struct Cursor<'a> {
    rest: &'a str,
}

impl Cursor<'_> {
    /// Consumes `<digits><designator>` if the input continues with it.
    ///
    /// Returns `None` if the digits overflow, `Some(None)` if the component is not there.
    fn component(&mut self, designator: char) -> Option<Option<u64>> {
        let digits = self
            .rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.rest.len());
        if digits == 0 {
            return Some(None);
        }
        let Some(after) = self.rest[digits..].strip_prefix(designator) else {
            return Some(None);
        };
        let count = self.rest[..digits].parse().ok()?;
        self.rest = after;
        Some(Some(count))
    }
}
