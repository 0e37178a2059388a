//! Line-oriented text database dump

use super::Database;
use crate::csg::Combination;
use crate::error::{ComGeomError, Result};
use crate::primitives::{ParamValue, PrimitiveDefinition};
use crate::types::{Units, Vector3};
use ahash::AHashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Text database writer.
///
/// ```text
/// title {Sample vehicle}
/// units in
/// put {s1} arb8 V1 {0 0 0} V2 {1 0 0} ...
/// put {r1} comb region yes id 1000 air 0 material 1 los 100 members {{u s1} {- s2}}
/// ```
pub struct AsciiDatabase<W: Write> {
    writer: W,
    names: AHashSet<String>,
}

impl AsciiDatabase<BufWriter<File>> {
    /// Create a text database file, replacing any existing file
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> AsciiDatabase<W> {
    /// Create a text database on any writer
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            names: AHashSet::new(),
        }
    }

    /// Get the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn claim_name(&mut self, name: &str) -> Result<()> {
        if !self.names.insert(name.to_string()) {
            return Err(ComGeomError::DuplicateName(name.to_string()));
        }
        Ok(())
    }
}

/// Format a double in its shortest round-trip form, keeping at least one
/// decimal place for integral values
fn format_double(value: f64) -> String {
    if value == value.trunc() {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Escape text placed inside a `{...}` group
fn braced(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('{');
    for c in text.chars() {
        if matches!(c, '{' | '}' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('}');
    out
}

fn format_vector(v: &Vector3) -> String {
    format!(
        "{{{} {} {}}}",
        format_double(v.x),
        format_double(v.y),
        format_double(v.z)
    )
}

fn format_param(value: &ParamValue) -> String {
    match value {
        ParamValue::Scalar(s) => format_double(*s),
        ParamValue::Vector(v) => format_vector(v),
        ParamValue::Count(n) => n.to_string(),
    }
}

impl<W: Write> Database for AsciiDatabase<W> {
    fn write_header(&mut self, title: &str, units: Units) -> Result<()> {
        writeln!(self.writer, "title {}", braced(title))?;
        writeln!(self.writer, "units {}", units)?;
        Ok(())
    }

    fn create_primitive(&mut self, name: &str, primitive: &PrimitiveDefinition) -> Result<()> {
        self.claim_name(name)?;
        let shape = primitive.as_primitive();
        write!(self.writer, "put {} {}", braced(name), shape.type_name())?;
        for (key, value) in shape.params() {
            write!(self.writer, " {} {}", key, format_param(&value))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn create_combination(&mut self, combination: &Combination) -> Result<()> {
        self.claim_name(&combination.name)?;
        write!(
            self.writer,
            "put {} comb region {}",
            braced(&combination.name),
            if combination.is_region { "yes" } else { "no" }
        )?;
        if let Some(attrs) = &combination.attributes {
            write!(
                self.writer,
                " id {} air {} material {} los {}",
                attrs.id, attrs.air, attrs.material, attrs.los
            )?;
        }
        let members: Vec<String> = combination
            .members
            .iter()
            .map(|m| braced(&format!("{} {}", m.op, m.name)))
            .collect();
        writeln!(self.writer, " members {{{}}}", members.join(" "))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
