use core::fmt;
use core::str::FromStr;
use std::path::Path;

use crate::error::{Error, Result};
use crate::options::Options;
use crate::value::{FromValue, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    key: String,
    value: Value,
}

impl Entry {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    name: String,
    entries: Vec<Entry>,
}

impl Section {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.value)
    }

    /// Overwrite an existing key in place or append a new one.
    /// Returns `true` when the key was already present.
    pub(crate) fn upsert(&mut self, key: String, value: Value) -> bool {
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => {
                entry.value = value;
                true
            }
            None => {
                self.entries.push(Entry { key, value });
                false
            }
        }
    }
}

/// A parsed configuration: sections in first-seen order, each with its
/// entries in first-seen order.
///
/// Sections and keys are looked up by exact, case-sensitive name. Nothing on
/// the public API mutates a `Document` once it has been built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    /// Read and parse a file with default [`Options`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        crate::from_path(path, &Options::default())
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Look up `section.key`, splitting at the first `.`.
    pub fn value(&self, path: &str) -> Result<&Value> {
        let (section, key) = path.split_once('.').ok_or_else(|| Error::MalformedPath {
            path: path.to_owned(),
        })?;
        let section = self.section(section).ok_or_else(|| Error::SectionNotFound {
            section: section.to_owned(),
        })?;
        section.get(key).ok_or_else(|| Error::KeyNotFound {
            section: section.name.clone(),
            key: key.to_owned(),
        })
    }

    /// Read `section.key` as `T`. Fails with [`Error::TypeMismatch`] when the
    /// stored variant is not exactly `T`; nothing is widened or truncated.
    ///
    /// ```
    /// let doc: typed_ini::Document = "[net]\nport=8080\nratio=0.5\n".parse()?;
    /// assert_eq!(doc.get::<i64>("net.port")?, 8080);
    /// assert!(doc.get::<i64>("net.ratio").is_err());
    /// # Ok::<(), typed_ini::Error>(())
    /// ```
    pub fn get<T: FromValue>(&self, path: &str) -> Result<T> {
        let value = self.value(path)?;
        T::from_value(value).map_err(|expected| Error::TypeMismatch {
            path: path.to_owned(),
            expected,
            found: value.kind(),
        })
    }

    /// Every section with its `(key, rendered value)` pairs, in insertion order.
    pub fn dump(&self) -> Vec<(&str, Vec<(&str, String)>)> {
        self.sections
            .iter()
            .map(|s| {
                let entries = s
                    .entries
                    .iter()
                    .map(|e| (e.key.as_str(), e.value.to_string()))
                    .collect();
                (s.name.as_str(), entries)
            })
            .collect()
    }

    /// Index of section `name`, appending it first if it does not exist yet.
    /// The flag is `true` when the section was created.
    pub(crate) fn open_section(&mut self, name: &str) -> (usize, bool) {
        match self.sections.iter().position(|s| s.name == name) {
            Some(idx) => (idx, false),
            None => {
                self.sections.push(Section::new(name.to_owned()));
                (self.sections.len() - 1, true)
            }
        }
    }

    pub(crate) fn section_mut(&mut self, idx: usize) -> &mut Section {
        &mut self.sections[idx]
    }

    #[cfg(feature = "json")]
    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Renders text that parses back into an equal document: a `[name]` line per
/// section followed by its `key=value` lines.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(f, "[{}]", section.name)?;
            for entry in &section.entries {
                writeln!(f, "{}={}", entry.key, entry.value)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::from_str(s, &Options::default())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Section {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.key, &entry.value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Document {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(&section.name, section)?;
        }
        map.end()
    }
}
