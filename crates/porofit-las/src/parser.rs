use log::{debug, warn};

use crate::{DEFAULT_NULL_VALUE, LasError, LasFile, header::HeaderItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Version,
    Well,
    Curve,
    Parameter,
    Other,
    Ascii,
    Unknown,
}

impl Section {
    fn from_marker(line: &str) -> Self {
        match line[1..].chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('V') => Self::Version,
            Some('W') => Self::Well,
            Some('C') => Self::Curve,
            Some('P') => Self::Parameter,
            Some('O') => Self::Other,
            Some('A') => Self::Ascii,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Default)]
struct Builder {
    version: Option<Vec<HeaderItem>>,
    well: Vec<HeaderItem>,
    curves: Option<Vec<HeaderItem>>,
    parameters: Vec<HeaderItem>,
    other: Vec<String>,
    null_value: Option<f64>,
    // (line number, tokens of that line)
    tokens: Option<Vec<(usize, Vec<String>)>>,
}

pub(crate) fn parse(text: &str) -> Result<LasFile, LasError> {
    let mut builder = Builder::default();
    let mut section = Section::Unknown;

    for (index, raw_line) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim();
        if line.starts_with('~') {
            section = Section::from_marker(line);
            match section {
                Section::Version => {
                    builder.version.get_or_insert_with(Vec::new);
                }
                Section::Curve => {
                    builder.curves.get_or_insert_with(Vec::new);
                }
                Section::Ascii => {
                    builder.tokens.get_or_insert_with(Vec::new);
                }
                Section::Unknown => debug!("line {line_no}: skipping unknown section {line:?}"),
                _ => {}
            }
            continue;
        }

        if section == Section::Other {
            builder.other.push(raw_line.trim_end().to_owned());
            continue;
        }
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match section {
            Section::Ascii => {
                let row = line.split_whitespace().map(str::to_owned).collect();
                builder.tokens.get_or_insert_with(Vec::new).push((line_no, row));
            }
            Section::Version | Section::Well | Section::Curve | Section::Parameter => {
                let item = HeaderItem::parse(line).ok_or_else(|| LasError::MalformedHeader {
                    line: line_no,
                    text: line.to_owned(),
                })?;
                match section {
                    Section::Version => builder.version.get_or_insert_with(Vec::new).push(item),
                    Section::Curve => builder.curves.get_or_insert_with(Vec::new).push(item),
                    Section::Parameter => builder.parameters.push(item),
                    _ => {
                        if item.is("NULL") {
                            let null = parse_number(&item.value, line_no)?;
                            builder.null_value = Some(null);
                        }
                        builder.well.push(item);
                    }
                }
            }
            Section::Other | Section::Unknown => {}
        }
    }

    builder.finish()
}

impl Builder {
    fn finish(self) -> Result<LasFile, LasError> {
        let version = self
            .version
            .ok_or(LasError::MissingSection { section: "Version" })?;
        let curves = self
            .curves
            .ok_or(LasError::MissingSection { section: "Curve" })?;
        let rows = self
            .tokens
            .ok_or(LasError::MissingSection { section: "ASCII" })?;
        if curves.is_empty() {
            return Err(LasError::NoCurves);
        }

        if let Some(vers) = version
            .iter()
            .find(|item| item.is("VERS") && !item.value.starts_with('2'))
        {
            warn!("LAS version {:?} is not 2.0; parsing as 2.0", vers.value);
        }
        let wrapped = version
            .iter()
            .find(|item| item.is("WRAP"))
            .is_some_and(|item| item.value.eq_ignore_ascii_case("YES"));

        let null_value = self.null_value.unwrap_or(DEFAULT_NULL_VALUE);
        let num_curves = curves.len();
        let mut data = vec![Vec::new(); num_curves];

        let mut total = 0;
        for (line, tokens) in &rows {
            if !wrapped && tokens.len() != num_curves {
                return Err(LasError::ColumnCount {
                    line: *line,
                    expected: num_curves,
                    found: tokens.len(),
                });
            }
            for token in tokens {
                let value = parse_number(token, *line)?;
                let value = if is_null(value, null_value) {
                    f64::NAN
                } else {
                    value
                };
                data[total % num_curves].push(value);
                total += 1;
            }
        }
        if total % num_curves != 0 {
            return Err(LasError::TruncatedData {
                values: total,
                curves: num_curves,
            });
        }

        debug!(
            "parsed LAS file: {num_curves} curves, {} rows, wrap={wrapped}",
            total / num_curves
        );

        Ok(LasFile {
            version,
            well: self.well,
            curves,
            parameters: self.parameters,
            other: self.other.join("\n"),
            null_value,
            data,
        })
    }
}

fn parse_number(token: &str, line: usize) -> Result<f64, LasError> {
    token.parse().map_err(|_| LasError::InvalidNumber {
        line,
        token: token.to_owned(),
    })
}

fn is_null(value: f64, null_value: f64) -> bool {
    (value - null_value).abs() <= 1e-9 * null_value.abs().max(1.0)
}
