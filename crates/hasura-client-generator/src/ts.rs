//! Just enough of a TypeScript AST for the emitters: interfaces with
//! optionally-optional properties, rendered through `Display`. Keeps
//! target-language syntax out of the metadata-shaping code.

use std::{borrow::Cow, fmt};

#[derive(Debug)]
pub(crate) struct StaticType {
    name: Cow<'static, str>,
    array: bool,
}

impl StaticType {
    pub fn ident(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            array: false,
        }
    }

    pub fn array(mut self) -> Self {
        self.array = true;
        self
    }
}

impl fmt::Display for StaticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)?;

        if self.array {
            f.write_str("[]")?;
        }

        Ok(())
    }
}

#[derive(Debug)]
pub(crate) struct Property {
    name: String,
    r#type: StaticType,
    optional: bool,
}

impl Property {
    pub fn new(name: impl Into<String>, r#type: StaticType) -> Self {
        Self {
            name: name.into(),
            r#type,
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let optional = if self.optional { "?" } else { "" };

        write!(f, "{}{optional}: {}", self.name, self.r#type)
    }
}

#[derive(Debug)]
pub(crate) struct Interface {
    name: String,
    properties: Vec<Property>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    pub fn push_property(&mut self, property: Property) {
        self.properties.push(property);
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "export interface {} {{", self.name)?;

        for property in &self.properties {
            writeln!(f, "  {property};")?;
        }

        f.write_str("}\n")
    }
}
