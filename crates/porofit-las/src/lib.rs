//! Reader for LAS 2.0 (Log ASCII Standard) well-log files.
//!
//! A LAS file is a set of `~`-prefixed sections: version information
//! (`~V`), well metadata (`~W`), curve descriptors (`~C`), parameters
//! (`~P`), free text (`~O`) and the data table (`~A`). [`LasFile`] keeps
//! the header sections as [`HeaderItem`]s and stores the table column by
//! column, with the file's `NULL` sentinel replaced by NaN.
//!
//! # Examples
//!
//! ```
//! use porofit_las::LasFile;
//!
//! let text = "\
//! ~Version
//!  VERS.   2.0 : CWLS LOG ASCII STANDARD - VERSION 2.0
//!  WRAP.   NO  : ONE LINE PER DEPTH STEP
//! ~Well
//!  NULL.   -999.25 : NULL VALUE
//! ~Curve
//!  DEPT.M        : DEPTH
//!  NEUT.V/V      : NEUTRON POROSITY
//! ~ASCII
//!  1670.0  0.25
//!  1670.5  -999.25
//! ";
//! let las: LasFile = text.parse().unwrap();
//! let neut = las.curve("neut").unwrap();
//! assert_eq!(neut.values()[0], 0.25);
//! assert!(neut.values()[1].is_nan());
//! ```

use std::{fs, path::Path, str::FromStr};

pub use self::error::LasError;
use self::header::HeaderItem;

mod error;
pub mod header;
mod parser;

/// `NULL` value assumed when the `~Well` section does not define one.
pub const DEFAULT_NULL_VALUE: f64 = -999.25;

/// A parsed LAS file.
#[derive(Debug, Clone)]
pub struct LasFile {
    version: Vec<HeaderItem>,
    well: Vec<HeaderItem>,
    curves: Vec<HeaderItem>,
    parameters: Vec<HeaderItem>,
    other: String,
    null_value: f64,
    data: Vec<Vec<f64>>,
}

/// One data column together with its `~Curve` descriptor.
#[derive(Debug, Clone, Copy)]
pub struct Curve<'a> {
    descriptor: &'a HeaderItem,
    values: &'a [f64],
}

impl<'a> Curve<'a> {
    #[must_use]
    pub fn mnemonic(&self) -> &'a str {
        &self.descriptor.mnemonic
    }

    #[must_use]
    pub fn unit(&self) -> &'a str {
        &self.descriptor.unit
    }

    #[must_use]
    pub fn description(&self) -> &'a str {
        &self.descriptor.description
    }

    #[must_use]
    pub fn descriptor(&self) -> &'a HeaderItem {
        self.descriptor
    }

    /// Values in depth order; missing readings are NaN.
    #[must_use]
    pub fn values(&self) -> &'a [f64] {
        self.values
    }

    /// Number of readings that are not missing.
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.values.iter().filter(|v| !v.is_nan()).count()
    }
}

impl LasFile {
    /// Reads and parses the file at `path`.
    ///
    /// Invalid UTF-8 is replaced rather than rejected, since header
    /// descriptions written by logging software are often Latin-1.
    pub fn from_path<P>(path: P) -> Result<Self, LasError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| LasError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(&String::from_utf8_lossy(&bytes))
    }

    pub fn parse(text: &str) -> Result<Self, LasError> {
        parser::parse(text)
    }

    /// Looks up a curve by mnemonic, ignoring ASCII case.
    #[must_use]
    pub fn curve(&self, mnemonic: &str) -> Option<Curve<'_>> {
        self.curves().find(|curve| curve.descriptor.is(mnemonic))
    }

    pub fn curves(&self) -> impl Iterator<Item = Curve<'_>> + '_ {
        self.curves
            .iter()
            .zip(&self.data)
            .map(|(descriptor, values)| Curve { descriptor, values })
    }

    /// The index curve, which is the first curve of the file (normally depth).
    #[must_use]
    pub fn index(&self) -> Option<Curve<'_>> {
        self.curves().next()
    }

    #[must_use]
    pub fn null_value(&self) -> f64 {
        self.null_value
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.data.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn version_item(&self, mnemonic: &str) -> Option<&HeaderItem> {
        self.version.iter().find(|item| item.is(mnemonic))
    }

    #[must_use]
    pub fn well_item(&self, mnemonic: &str) -> Option<&HeaderItem> {
        self.well.iter().find(|item| item.is(mnemonic))
    }

    #[must_use]
    pub fn parameter(&self, mnemonic: &str) -> Option<&HeaderItem> {
        self.parameters.iter().find(|item| item.is(mnemonic))
    }

    /// Free text of the `~Other` section.
    #[must_use]
    pub fn other(&self) -> &str {
        &self.other
    }
}

impl FromStr for LasFile {
    type Err = LasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
